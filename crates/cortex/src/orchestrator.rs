//! The Cortex orchestrator: wires file-change notifications to the decision
//! engine through an admission-controlled, cached, observable pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use cortex_core::config::{
    CortexConfig, CortexConfigUpdate, DecisionPerformanceConfig, DecisionPerformanceUpdate,
    DecisionRules, DecisionThresholds, RulesUpdate, ThresholdsUpdate,
};
use cortex_core::config::defaults::DEFAULT_CACHE_CAPACITY;
use cortex_core::errors::{AnalysisError, CortexError, CortexErrorCode, CortexResult};
use cortex_core::events::{
    CortexEventHandler, ErrorEvent, EventDispatcher, FileOperation, FileOperationEvent, HandlerId,
};
use cortex_core::models::{
    AnalysisResultMetadata, ComponentStates, CortexAnalysisResult, CortexStatus, FileInfo,
    MetricsSnapshot, RunState,
};
use cortex_core::traits::{AnalysisOptions, FileInterceptor, SimilarityAnalyzer};
use cortex_decision::{DecisionEngine, EngineConfig, EngineConfigUpdate};

use crate::admission::AdmissionControl;
use crate::cache::AnalysisCache;
use crate::metrics::PipelineMetrics;

struct MonitoringState {
    task: Option<JoinHandle<()>>,
}

struct Inner<I, A> {
    config: RwLock<CortexConfig>,
    engine: DecisionEngine,
    cache: AnalysisCache,
    metrics: PipelineMetrics,
    admission: AdmissionControl,
    dispatcher: EventDispatcher,
    interceptor: I,
    analyzer: A,
    running: AtomicBool,
    started_at: Mutex<Option<Instant>>,
    monitoring: Mutex<MonitoringState>,
}

/// Cheaply cloneable handle to one orchestrator instance. Owns its config,
/// cache, and metrics; constructed with an initial config, never a
/// process-wide singleton.
pub struct Cortex<I, A> {
    inner: Arc<Inner<I, A>>,
}

impl<I, A> Clone for Cortex<I, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, A> Cortex<I, A>
where
    I: FileInterceptor + 'static,
    A: SimilarityAnalyzer + 'static,
{
    /// Build an orchestrator from a validated config and its two external
    /// collaborators. The decision engine is seeded from the `decisions`
    /// section.
    pub fn new(config: CortexConfig, interceptor: I, analyzer: A) -> CortexResult<Self> {
        config.validate()?;
        let engine = DecisionEngine::with_config(EngineConfig {
            rules: DecisionRules {
                default_rules: DecisionThresholds {
                    auto_apply_threshold: config.decisions.auto_apply_threshold,
                    ..Default::default()
                },
                ..Default::default()
            },
            performance: DecisionPerformanceConfig {
                max_alternatives: config.decisions.max_alternatives,
                enable_explanations: config.decisions.enable_explanations,
                ..Default::default()
            },
        })?;
        Ok(Self {
            inner: Arc::new(Inner {
                config: RwLock::new(config),
                engine,
                cache: AnalysisCache::new(DEFAULT_CACHE_CAPACITY),
                metrics: PipelineMetrics::new(),
                admission: AdmissionControl::new(),
                dispatcher: EventDispatcher::new(),
                interceptor,
                analyzer,
                running: AtomicBool::new(false),
                started_at: Mutex::new(None),
                monitoring: Mutex::new(MonitoringState { task: None }),
            }),
        })
    }

    // ---- Lifecycle ----

    /// Subscribe to the watcher and mark the orchestrator running.
    /// Idempotent: repeated calls while running are no-ops. Must be called
    /// from within a Tokio runtime (the watch loop is a spawned task).
    pub fn start(&self) -> CortexResult<()> {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        *self.inner.started_at.lock().expect("lifecycle state poisoned") = Some(Instant::now());
        let paths = self.config().monitoring.watch_paths;
        if let Err(error) = self.spawn_watcher(&paths) {
            self.inner.running.store(false, Ordering::SeqCst);
            return Err(error);
        }
        info!(paths = paths.len(), "cortex started");
        Ok(())
    }

    /// Detach the watcher and mark the orchestrator stopped. Idempotent.
    /// Cached results and metrics survive a stop/start cycle.
    pub fn stop(&self) -> CortexResult<()> {
        if !self.inner.running.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        self.detach_watcher()?;
        *self.inner.started_at.lock().expect("lifecycle state poisoned") = None;
        info!("cortex stopped");
        Ok(())
    }

    /// Clear the cache and zero all metrics without changing configuration
    /// or running state.
    pub fn reset(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.reset_counters();
        self.inner.metrics.reset();
        info!("cortex reset");
    }

    /// Toggle only the watcher subscription, leaving the analyzer and
    /// decision components untouched. `paths`, when given, replaces
    /// `monitoring.watch_paths` first.
    pub fn set_monitoring_enabled(
        &self,
        enabled: bool,
        paths: Option<Vec<String>>,
    ) -> CortexResult<()> {
        if let Some(paths) = paths {
            self.inner
                .config
                .write()
                .expect("config poisoned")
                .monitoring
                .watch_paths = paths;
        }
        if enabled {
            let paths = self.config().monitoring.watch_paths;
            self.spawn_watcher(&paths)
        } else {
            self.detach_watcher()
        }
    }

    fn spawn_watcher(&self, paths: &[String]) -> CortexResult<()> {
        let mut monitoring = self.inner.monitoring.lock().expect("monitoring state poisoned");
        if monitoring.task.is_some() {
            return Ok(());
        }
        let mut events = self.inner.interceptor.start(paths)?;
        let cortex = self.clone();
        monitoring.task = Some(tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                cortex.handle_watch_event(event).await;
            }
        }));
        Ok(())
    }

    fn detach_watcher(&self) -> CortexResult<()> {
        let mut monitoring = self.inner.monitoring.lock().expect("monitoring state poisoned");
        if let Some(task) = monitoring.task.take() {
            self.inner.interceptor.stop()?;
            task.abort();
        }
        Ok(())
    }

    // ---- Analysis pipeline ----

    /// Analyze one observed file operation: admission check, cache lookup,
    /// similarity comparison, decision, cache write, metrics, dispatch.
    ///
    /// Every failure is surfaced both as the returned error and as an
    /// `on_error` event, so watch-triggered analyses stay observable.
    pub async fn analyze_file_operation(
        &self,
        file: FileInfo,
    ) -> CortexResult<CortexAnalysisResult> {
        // One snapshot per analysis; concurrent config updates only affect
        // analyses started after them.
        let snapshot = self.config();
        if !snapshot.analysis.enabled {
            return Err(self.emit_failure(AnalysisError::Disabled.into(), &file.path));
        }

        let limit = snapshot.performance.max_concurrent_analyses;
        let Some(_permit) = self.inner.admission.try_acquire(limit) else {
            let error = AnalysisError::ConcurrencyRejected {
                active: self.inner.admission.active(),
                limit,
            };
            return Err(self.emit_failure(error.into(), &file.path));
        };

        let started = Instant::now();
        let key = AnalysisCache::key(&file);
        if snapshot.performance.enable_cache {
            if let Some(mut cached) = self.inner.cache.get(&key) {
                cached.from_cache = true;
                debug!(path = %file.path, "analysis served from cache");
                self.finish_analysis(&cached, snapshot.performance.enable_metrics);
                return Ok(cached);
            }
        }

        let options = AnalysisOptions::from(&snapshot.analysis);
        let deadline = Duration::from_millis(snapshot.analysis.analysis_timeout_ms);
        let analyzed = timeout(deadline, self.inner.analyzer.analyze(&file, &options)).await;
        let mut similarities = match analyzed {
            // The overdue comparison is abandoned (its future dropped), not
            // guaranteed cancelled if the collaborator spawned work.
            Err(_) => {
                let error = AnalysisError::Timeout {
                    path: file.path.clone(),
                    timeout_ms: snapshot.analysis.analysis_timeout_ms,
                };
                return Err(self.emit_failure(error.into(), &file.path));
            }
            Ok(Err(error)) => return Err(self.emit_failure(error, &file.path)),
            Ok(Ok(results)) => results,
        };
        // Stable sort keeps input order among equal scores, which the
        // engine's documented tie-break relies on.
        similarities.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));

        let recommendation = if snapshot.decisions.enabled {
            match self.inner.engine.generate_recommendation(&file, &similarities) {
                Ok(recommendation) => Some(recommendation),
                Err(error) => return Err(self.emit_failure(error.into(), &file.path)),
            }
        } else {
            None
        };

        let result = CortexAnalysisResult {
            target_file: file.path.clone(),
            similarities,
            recommendation,
            from_cache: false,
            metadata: AnalysisResultMetadata {
                timestamp: Utc::now(),
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        };
        if snapshot.performance.enable_cache {
            self.inner.cache.insert(
                key,
                result.clone(),
                Duration::from_millis(snapshot.performance.cache_ttl_ms),
            );
        }
        self.finish_analysis(&result, snapshot.performance.enable_metrics);
        Ok(result)
    }

    async fn handle_watch_event(&self, event: FileOperationEvent) {
        if self.config().performance.enable_metrics {
            self.inner.metrics.record_event();
        }
        self.inner.dispatcher.dispatch_file_operation(&event);
        if event.operation == FileOperation::Delete {
            return;
        }
        let file = FileInfo::from_path(&event.path);
        // Failures were already dispatched to listeners; the loop goes on.
        if let Err(error) = self.analyze_file_operation(file).await {
            debug!(path = %event.path, error = %error, "watch-triggered analysis failed");
        }
    }

    fn finish_analysis(&self, result: &CortexAnalysisResult, enable_metrics: bool) {
        if enable_metrics {
            self.inner.metrics.record_analysis();
            if result.recommendation.is_some() {
                self.inner.metrics.record_recommendation();
            }
        }
        self.inner.dispatcher.dispatch_analysis_complete(result);
        if let Some(recommendation) = &result.recommendation {
            self.inner.dispatcher.dispatch_recommendation(recommendation);
        }
    }

    fn emit_failure(&self, error: CortexError, path: &str) -> CortexError {
        warn!(path, code = error.error_code(), error = %error, "analysis failed");
        self.inner.dispatcher.dispatch_error(&ErrorEvent::new(
            error.error_code(),
            error.to_string(),
            Some(path.to_string()),
        ));
        error
    }

    // ---- Config ----

    /// Snapshot of the current configuration.
    pub fn config(&self) -> CortexConfig {
        self.inner.config.read().expect("config poisoned").clone()
    }

    /// Validate and merge a partial config update atomically: the first
    /// invalid field rejects the whole update. Changes take effect for
    /// analyses started afterwards. `decisions` knobs propagate into the
    /// engine.
    pub fn update_config(&self, update: CortexConfigUpdate) -> CortexResult<()> {
        let merged = self
            .inner
            .config
            .read()
            .expect("config poisoned")
            .merged(&update)?;

        if let Some(decisions) = &update.decisions {
            let mut engine_update = EngineConfigUpdate::default();
            if decisions.auto_apply_threshold.is_some() {
                engine_update.thresholds = Some(ThresholdsUpdate {
                    auto_apply_threshold: decisions.auto_apply_threshold,
                    ..Default::default()
                });
            }
            if decisions.max_alternatives.is_some() || decisions.enable_explanations.is_some() {
                engine_update.performance = Some(DecisionPerformanceUpdate {
                    max_alternatives: decisions.max_alternatives,
                    enable_explanations: decisions.enable_explanations,
                    ..Default::default()
                });
            }
            self.inner.engine.update_config(engine_update)?;
        }

        *self.inner.config.write().expect("config poisoned") = merged;
        Ok(())
    }

    /// Merge valid threshold values into the engine's default rule set.
    pub fn update_thresholds(&self, update: ThresholdsUpdate) -> CortexResult<()> {
        self.inner.engine.update_thresholds(update).map_err(Into::into)
    }

    /// Merge a partial rules update (per-extension thresholds, weights).
    pub fn update_rules(&self, update: RulesUpdate) -> CortexResult<()> {
        self.inner.engine.update_rules(update).map_err(Into::into)
    }

    // ---- Observability ----

    pub fn add_event_handler(&self, handler: Arc<dyn CortexEventHandler>) -> HandlerId {
        self.inner.dispatcher.add_handler(handler)
    }

    pub fn remove_event_handler(&self, id: HandlerId) -> bool {
        self.inner.dispatcher.remove_handler(id)
    }

    pub fn status(&self) -> CortexStatus {
        let running = self.inner.running.load(Ordering::SeqCst);
        let watching = self
            .inner
            .monitoring
            .lock()
            .expect("monitoring state poisoned")
            .task
            .is_some();
        let config = self.config();
        let component = |enabled: bool| -> RunState {
            if running && enabled {
                RunState::Running
            } else {
                RunState::Stopped
            }
        };
        CortexStatus {
            status: if running {
                RunState::Running
            } else {
                RunState::Stopped
            },
            components: ComponentStates {
                interceptor: if watching {
                    RunState::Running
                } else {
                    RunState::Stopped
                },
                analyzer: component(config.analysis.enabled),
                decision_engine: component(config.decisions.enabled),
            },
            monitored_paths: config.monitoring.watch_paths,
            uptime_ms: self
                .inner
                .started_at
                .lock()
                .expect("lifecycle state poisoned")
                .map(|at| at.elapsed().as_millis() as u64)
                .unwrap_or(0),
            active_analyses: self.inner.admission.active(),
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.metrics.snapshot(&self.inner.cache)
    }
}
