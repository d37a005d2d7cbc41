//! Shared test builders and stub collaborators for the Cortex workspace.
//!
//! Builders produce valid model values with one obvious knob per test
//! concern; the stubs stand in for the external watcher and similarity
//! collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;

use cortex_core::errors::{AnalysisError, CortexResult};
use cortex_core::events::{CortexEventHandler, ErrorEvent, FileOperationEvent};
use cortex_core::models::{
    layers, CortexAnalysisResult, FileInfo, Recommendation, SimilarityLayerScore,
    SimilarityMetadata, SimilarityResult,
};
use cortex_core::traits::{AnalysisOptions, FileInterceptor, SimilarityAnalyzer};

/// File snapshot with no content (the watcher-driven shape).
pub fn file_info(path: &str) -> FileInfo {
    FileInfo::from_path(path)
}

/// File snapshot with inline content.
pub fn file_info_with_content(path: &str, content: &str) -> FileInfo {
    let mut file = FileInfo::from_path(path);
    file.metadata.size = content.len() as u64;
    file.content = Some(content.to_string());
    file
}

/// Valid similarity result with a single filename layer mirroring the
/// overall score.
pub fn similarity(target: &str, score: f64, confidence: f64) -> SimilarityResult {
    let mut layer_map = HashMap::new();
    layer_map.insert(
        layers::FILENAME.to_string(),
        SimilarityLayerScore {
            score,
            confidence,
            explanation: "filename comparison".to_string(),
        },
    );
    SimilarityResult {
        overall_score: score,
        overall_confidence: confidence,
        layers: layer_map,
        metadata: SimilarityMetadata {
            source_file: "candidate".to_string(),
            target_file: target.to_string(),
            processing_time_ms: 1,
            algorithms_used: vec!["filename".to_string()],
        },
    }
}

/// Valid similarity result with explicit filename/structure/semantic layers.
pub fn similarity_with_layers(
    target: &str,
    overall_score: f64,
    overall_confidence: f64,
    filename: f64,
    structure: f64,
    semantic: f64,
) -> SimilarityResult {
    let mut result = similarity(target, overall_score, overall_confidence);
    result.layers.insert(
        layers::FILENAME.to_string(),
        SimilarityLayerScore {
            score: filename,
            confidence: overall_confidence,
            explanation: "filename comparison".to_string(),
        },
    );
    result.layers.insert(
        layers::STRUCTURE.to_string(),
        SimilarityLayerScore {
            score: structure,
            confidence: overall_confidence,
            explanation: "structural comparison".to_string(),
        },
    );
    result.layers.insert(
        layers::SEMANTIC.to_string(),
        SimilarityLayerScore {
            score: semantic,
            confidence: overall_confidence,
            explanation: "semantic comparison".to_string(),
        },
    );
    result
}

/// Scripted similarity collaborator: fixed results, optional artificial
/// latency, optional failure, and a log of the options it was called with.
pub struct StubAnalyzer {
    results: Mutex<Vec<SimilarityResult>>,
    delay: Duration,
    fail: bool,
    calls: Mutex<Vec<AnalysisOptions>>,
}

impl StubAnalyzer {
    pub fn returning(results: Vec<SimilarityResult>) -> Self {
        Self {
            results: Mutex::new(results),
            delay: Duration::ZERO,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    /// Sleep this long inside every `analyze` call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Options recorded across all calls, in order.
    pub fn calls(&self) -> Vec<AnalysisOptions> {
        self.calls.lock().expect("stub calls poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("stub calls poisoned").len()
    }
}

impl SimilarityAnalyzer for StubAnalyzer {
    async fn analyze(
        &self,
        _file: &FileInfo,
        options: &AnalysisOptions,
    ) -> CortexResult<Vec<SimilarityResult>> {
        self.calls.lock().expect("stub calls poisoned").push(*options);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(AnalysisError::AnalyzerFailed {
                reason: "stub failure".to_string(),
            }
            .into());
        }
        Ok(self.results.lock().expect("stub results poisoned").clone())
    }
}

/// Hand-driven watcher: tests push events through `sender()`.
#[derive(Default)]
pub struct ManualInterceptor {
    sender: Mutex<Option<mpsc::Sender<FileOperationEvent>>>,
    start_paths: Mutex<Vec<Vec<String>>>,
    stop_calls: AtomicUsize,
}

impl ManualInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender for the currently watched channel, if started.
    pub fn sender(&self) -> Option<mpsc::Sender<FileOperationEvent>> {
        self.sender.lock().expect("interceptor state poisoned").clone()
    }

    /// Paths passed to each `start` call, in order.
    pub fn start_paths(&self) -> Vec<Vec<String>> {
        self.start_paths
            .lock()
            .expect("interceptor state poisoned")
            .clone()
    }

    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }
}

impl FileInterceptor for ManualInterceptor {
    fn start(&self, paths: &[String]) -> CortexResult<mpsc::Receiver<FileOperationEvent>> {
        let (tx, rx) = mpsc::channel(64);
        *self.sender.lock().expect("interceptor state poisoned") = Some(tx);
        self.start_paths
            .lock()
            .expect("interceptor state poisoned")
            .push(paths.to_vec());
        Ok(rx)
    }

    fn stop(&self) -> CortexResult<()> {
        self.sender.lock().expect("interceptor state poisoned").take();
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Records every event it observes.
#[derive(Default)]
pub struct RecordingHandler {
    operations: Mutex<Vec<FileOperationEvent>>,
    completions: Mutex<Vec<CortexAnalysisResult>>,
    recommendations: Mutex<Vec<Recommendation>>,
    errors: Mutex<Vec<ErrorEvent>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> Vec<FileOperationEvent> {
        self.operations.lock().expect("recorder poisoned").clone()
    }

    pub fn completions(&self) -> Vec<CortexAnalysisResult> {
        self.completions.lock().expect("recorder poisoned").clone()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.recommendations.lock().expect("recorder poisoned").clone()
    }

    pub fn errors(&self) -> Vec<ErrorEvent> {
        self.errors.lock().expect("recorder poisoned").clone()
    }

    pub fn error_codes(&self) -> Vec<String> {
        self.errors().into_iter().map(|e| e.code).collect()
    }
}

impl CortexEventHandler for RecordingHandler {
    fn on_file_operation(&self, event: &FileOperationEvent) {
        self.operations
            .lock()
            .expect("recorder poisoned")
            .push(event.clone());
    }

    fn on_analysis_complete(&self, result: &CortexAnalysisResult) {
        self.completions
            .lock()
            .expect("recorder poisoned")
            .push(result.clone());
    }

    fn on_recommendation(&self, recommendation: &Recommendation) {
        self.recommendations
            .lock()
            .expect("recorder poisoned")
            .push(recommendation.clone());
    }

    fn on_error(&self, event: &ErrorEvent) {
        self.errors
            .lock()
            .expect("recorder poisoned")
            .push(event.clone());
    }
}

/// Panics on every event; exercises dispatch isolation.
pub struct PanickingHandler;

impl CortexEventHandler for PanickingHandler {
    fn on_file_operation(&self, _event: &FileOperationEvent) {
        panic!("handler bug: on_file_operation");
    }

    fn on_analysis_complete(&self, _result: &CortexAnalysisResult) {
        panic!("handler bug: on_analysis_complete");
    }

    fn on_recommendation(&self, _recommendation: &Recommendation) {
        panic!("handler bug: on_recommendation");
    }

    fn on_error(&self, _event: &ErrorEvent) {
        panic!("handler bug: on_error");
    }
}
