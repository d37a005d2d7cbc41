use tokio::sync::mpsc;

use crate::errors::CortexResult;
use crate::events::FileOperationEvent;

/// External file-watch collaborator.
///
/// Implementations own debouncing, ignore-pattern filtering, and size
/// limits (configured via `MonitoringConfig`); the orchestrator only
/// consumes the resulting discrete operations.
pub trait FileInterceptor: Send + Sync {
    /// Begin watching `paths`; events arrive on the returned channel until
    /// `stop()` is called (implementations drop the sender to close it).
    fn start(&self, paths: &[String]) -> CortexResult<mpsc::Receiver<FileOperationEvent>>;

    /// Detach from the filesystem. Idempotent.
    fn stop(&self) -> CortexResult<()>;
}

impl<T: FileInterceptor> FileInterceptor for std::sync::Arc<T> {
    fn start(&self, paths: &[String]) -> CortexResult<mpsc::Receiver<FileOperationEvent>> {
        (**self).start(paths)
    }

    fn stop(&self) -> CortexResult<()> {
        (**self).stop()
    }
}
