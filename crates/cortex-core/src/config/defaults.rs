// Single source of truth for all default values.

// --- Monitoring ---
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760; // 10 MB
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["*.log", "*.tmp", ".git/**", "node_modules/**"];

// --- Analysis ---
pub const DEFAULT_ANALYSIS_ENABLED: bool = true;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_COMPARISON_FILES: usize = 20;
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 5_000;

// --- Decisions ---
pub const DEFAULT_DECISIONS_ENABLED: bool = true;
pub const DEFAULT_AUTO_APPLY_THRESHOLD: f64 = 0.9;
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;
pub const DEFAULT_ENABLE_EXPLANATIONS: bool = true;

// --- Decision thresholds ---
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.85;
pub const DEFAULT_UPDATE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CREATE_THRESHOLD: f64 = 0.3;

// --- Decision weights ---
pub const DEFAULT_FILENAME_WEIGHT: f64 = 0.2;
pub const DEFAULT_STRUCTURE_WEIGHT: f64 = 0.3;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.4;
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.1;

// --- Decision engine ---
pub const DEFAULT_MAX_DECISION_TIME_MS: u64 = 1_000;
/// Confidence assigned when no similar files exist (clear create).
pub const EMPTY_SET_CREATE_CONFIDENCE: f64 = 0.9;
/// Confidence multiplier applied to merge recommendations.
pub const MERGE_CONFIDENCE_BOOST: f64 = 1.1;
/// Filename/semantic layer score gap that flags conflicting signals.
pub const CONFLICTING_SIGNAL_DELTA: f64 = 0.4;
/// Tolerance for the weights-sum-to-one invariant.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

// --- Performance ---
pub const DEFAULT_ENABLE_CACHE: bool = true;
pub const DEFAULT_CACHE_TTL_MS: u64 = 300_000; // 5 minutes
pub const DEFAULT_MAX_CONCURRENT_ANALYSES: usize = 4;
pub const DEFAULT_ENABLE_METRICS: bool = true;
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;
