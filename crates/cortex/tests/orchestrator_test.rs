//! Lifecycle, watch-loop wiring, status, and config update behavior.

use std::sync::Arc;
use std::time::Duration;

use cortex::Cortex;
use cortex_core::config::{
    AnalysisUpdate, CortexConfig, CortexConfigUpdate, DecisionsUpdate,
};
use cortex_core::errors::{AnalysisError, CortexError};
use cortex_core::events::{FileOperation, FileOperationEvent};
use cortex_core::models::{DecisionAction, RunState, SimilarityResult};
use test_fixtures::{file_info, similarity, ManualInterceptor, RecordingHandler, StubAnalyzer};

type TestCortex = Cortex<Arc<ManualInterceptor>, Arc<StubAnalyzer>>;

fn build(
    config: CortexConfig,
    results: Vec<SimilarityResult>,
) -> (
    TestCortex,
    Arc<ManualInterceptor>,
    Arc<StubAnalyzer>,
    Arc<RecordingHandler>,
) {
    let interceptor = Arc::new(ManualInterceptor::new());
    let analyzer = Arc::new(StubAnalyzer::returning(results));
    let cortex = Cortex::new(config, interceptor.clone(), analyzer.clone()).unwrap();
    let recorder = Arc::new(RecordingHandler::new());
    cortex.add_event_handler(recorder.clone());
    (cortex, interceptor, analyzer, recorder)
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..300 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached within 3s");
}

#[tokio::test]
async fn start_is_idempotent() {
    let (cortex, interceptor, _, _) = build(CortexConfig::default(), Vec::new());

    cortex.start().unwrap();
    cortex.start().unwrap();

    assert_eq!(cortex.status().status, RunState::Running);
    assert_eq!(interceptor.start_paths().len(), 1);
    cortex.stop().unwrap();
}

#[tokio::test]
async fn stop_is_idempotent_and_detaches_the_watcher() {
    let (cortex, interceptor, _, _) = build(CortexConfig::default(), Vec::new());

    cortex.start().unwrap();
    cortex.stop().unwrap();
    cortex.stop().unwrap();

    assert_eq!(cortex.status().status, RunState::Stopped);
    assert_eq!(cortex.status().uptime_ms, 0);
    assert_eq!(interceptor.stop_count(), 1);
}

#[tokio::test]
async fn watch_event_flows_through_the_pipeline() {
    let results = vec![similarity("existing.rs", 0.92, 0.95)];
    let (cortex, interceptor, _, recorder) = build(CortexConfig::default(), results);
    cortex.start().unwrap();

    let sender = interceptor.sender().unwrap();
    sender
        .send(FileOperationEvent::new(FileOperation::Create, "candidate.rs"))
        .await
        .unwrap();

    let r = recorder.clone();
    wait_until(move || r.recommendations().len() == 1).await;

    let metrics = cortex.metrics();
    assert_eq!(metrics.interception.events_processed, 1);
    assert_eq!(metrics.analysis.analyses_performed, 1);
    assert_eq!(metrics.decisions.recommendations_generated, 1);
    assert_eq!(recorder.operations().len(), 1);
    assert_eq!(recorder.completions().len(), 1);
    assert_eq!(
        recorder.recommendations()[0].action,
        DecisionAction::Merge
    );
    cortex.stop().unwrap();
}

#[tokio::test]
async fn delete_events_are_dispatched_but_not_analyzed() {
    let (cortex, interceptor, _, recorder) = build(CortexConfig::default(), Vec::new());
    cortex.start().unwrap();

    let sender = interceptor.sender().unwrap();
    sender
        .send(FileOperationEvent::new(FileOperation::Delete, "gone.rs"))
        .await
        .unwrap();

    let r = recorder.clone();
    wait_until(move || r.operations().len() == 1).await;

    assert!(recorder.completions().is_empty());
    assert_eq!(cortex.metrics().analysis.analyses_performed, 0);
    cortex.stop().unwrap();
}

#[tokio::test]
async fn set_monitoring_enabled_toggles_only_the_interceptor() {
    let (cortex, interceptor, _, _) = build(CortexConfig::default(), Vec::new());
    cortex.start().unwrap();
    assert_eq!(cortex.status().components.interceptor, RunState::Running);

    cortex.set_monitoring_enabled(false, None).unwrap();
    let status = cortex.status();
    assert_eq!(status.components.interceptor, RunState::Stopped);
    // The orchestrator and its other components keep running.
    assert_eq!(status.status, RunState::Running);
    assert_eq!(status.components.analyzer, RunState::Running);
    assert_eq!(status.components.decision_engine, RunState::Running);
    assert_eq!(interceptor.stop_count(), 1);

    cortex
        .set_monitoring_enabled(true, Some(vec!["src".to_string()]))
        .unwrap();
    let status = cortex.status();
    assert_eq!(status.components.interceptor, RunState::Running);
    assert_eq!(status.monitored_paths, vec!["src".to_string()]);
    assert_eq!(
        interceptor.start_paths().last().unwrap(),
        &vec!["src".to_string()]
    );
    cortex.stop().unwrap();
}

#[tokio::test]
async fn update_config_rejects_invalid_fields_atomically() {
    let (cortex, _, _, _) = build(CortexConfig::default(), Vec::new());

    let err = cortex
        .update_config(CortexConfigUpdate {
            analysis: Some(AnalysisUpdate {
                similarity_threshold: Some(2.0),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, CortexError::Config(_)));
    assert_eq!(cortex.config().analysis.similarity_threshold, 0.7);
}

#[tokio::test]
async fn update_config_applies_to_subsequent_analyses() {
    let results = vec![similarity("existing.rs", 0.75, 0.8)];
    let (cortex, _, analyzer, _) = build(CortexConfig::default(), results);

    cortex
        .update_config(CortexConfigUpdate {
            analysis: Some(AnalysisUpdate {
                max_comparison_files: Some(5),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();

    cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap();
    assert_eq!(analyzer.calls()[0].max_comparison_files, 5);
}

#[tokio::test]
async fn decisions_update_propagates_to_the_engine() {
    let results = vec![similarity("existing.rs", 0.75, 0.8)];
    let (cortex, _, _, _) = build(CortexConfig::default(), results);

    // 0.8 confidence does not clear the default 0.9 bar.
    let result = cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap();
    assert!(!result.recommendation.unwrap().auto_apply);

    cortex
        .update_config(CortexConfigUpdate {
            decisions: Some(DecisionsUpdate {
                auto_apply_threshold: Some(0.5),
                ..Default::default()
            }),
            performance: Some(cortex_core::config::PerformanceUpdate {
                enable_cache: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();

    let result = cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap();
    assert!(result.recommendation.unwrap().auto_apply);
}

#[tokio::test]
async fn disabled_analysis_rejects_and_emits_an_error_event() {
    let mut config = CortexConfig::default();
    config.analysis.enabled = false;
    let (cortex, _, _, recorder) = build(config, Vec::new());

    let err = cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CortexError::Analysis(AnalysisError::Disabled)
    ));
    assert_eq!(recorder.error_codes(), vec!["ANALYSIS_DISABLED".to_string()]);
}

#[tokio::test]
async fn disabled_decisions_complete_without_a_recommendation() {
    let mut config = CortexConfig::default();
    config.decisions.enabled = false;
    let results = vec![similarity("existing.rs", 0.92, 0.95)];
    let (cortex, _, _, recorder) = build(config, results);

    let result = cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap();

    assert!(result.recommendation.is_none());
    assert_eq!(result.similarities.len(), 1);
    let metrics = cortex.metrics();
    assert_eq!(metrics.analysis.analyses_performed, 1);
    assert_eq!(metrics.decisions.recommendations_generated, 0);
    assert_eq!(recorder.completions().len(), 1);
    assert!(recorder.recommendations().is_empty());
}

#[tokio::test]
async fn analyzer_failure_is_dual_surfaced() {
    let interceptor = Arc::new(ManualInterceptor::new());
    let analyzer = Arc::new(StubAnalyzer::failing());
    let cortex = Cortex::new(CortexConfig::default(), interceptor, analyzer).unwrap();
    let recorder = Arc::new(RecordingHandler::new());
    cortex.add_event_handler(recorder.clone());

    let err = cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CortexError::Analysis(AnalysisError::AnalyzerFailed { .. })
    ));
    assert_eq!(recorder.error_codes(), vec!["ANALYSIS_ERROR".to_string()]);
    assert_eq!(cortex.status().active_analyses, 0);
}

#[tokio::test]
async fn metrics_survive_a_stop_start_cycle() {
    let results = vec![similarity("existing.rs", 0.92, 0.95)];
    let (cortex, _, _, _) = build(CortexConfig::default(), results);

    cortex.start().unwrap();
    cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap();
    cortex.stop().unwrap();
    cortex.start().unwrap();

    assert_eq!(cortex.metrics().analysis.analyses_performed, 1);
    cortex.stop().unwrap();
}

#[tokio::test]
async fn results_are_sorted_by_score_descending() {
    let results = vec![
        similarity("low.rs", 0.4, 0.9),
        similarity("high.rs", 0.9, 0.9),
        similarity("mid.rs", 0.6, 0.9),
    ];
    let (cortex, _, _, _) = build(CortexConfig::default(), results);

    let result = cortex
        .analyze_file_operation(file_info("candidate.rs"))
        .await
        .unwrap();

    let order: Vec<_> = result
        .similarities
        .iter()
        .map(|s| s.metadata.target_file.as_str())
        .collect();
    assert_eq!(order, vec!["high.rs", "mid.rs", "low.rs"]);
}
