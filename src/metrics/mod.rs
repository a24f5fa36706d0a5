// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics,
    CACHE_ENTRIES,
    CACHE_OPERATIONS,
    FALLBACKS_TOTAL,
    FEEDBACK_TOTAL,
    PROVIDER_CALLS,
    PROVIDER_DURATION,
};

/// Helper to record an upstream provider call
pub fn record_provider_call(operation: &str, success: bool, duration_secs: f64) {
    let outcome = if success { "success" } else { "error" };
    PROVIDER_CALLS.with_label_values(&[operation, outcome]).inc();
    PROVIDER_DURATION
        .with_label_values(&[operation])
        .observe(duration_secs);
}

/// Helper to record a result served from the fallback path
pub fn record_fallback(stage: &str) {
    FALLBACKS_TOTAL.with_label_values(&[stage]).inc();
}

/// Helpers to record cache operations
pub fn record_cache_hit(cache: &str) {
    CACHE_OPERATIONS.with_label_values(&[cache, "hit"]).inc();
}

pub fn record_cache_miss(cache: &str) {
    CACHE_OPERATIONS.with_label_values(&[cache, "miss"]).inc();
}

pub fn record_cache_store(cache: &str) {
    CACHE_OPERATIONS.with_label_values(&[cache, "store"]).inc();
}

pub fn record_cache_evictions(cache: &str, count: usize) {
    if count > 0 {
        CACHE_OPERATIONS
            .with_label_values(&[cache, "eviction"])
            .inc_by(count as f64);
    }
}

pub fn update_cache_entries(cache: &str, count: usize) {
    CACHE_ENTRIES.with_label_values(&[cache]).set(count as f64);
}

/// Helper to record a feedback submission
pub fn record_feedback(kind: &str) {
    FEEDBACK_TOTAL.with_label_values(&[kind]).inc();
}
