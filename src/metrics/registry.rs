// Prometheus metrics registry and collectors

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_gauge_vec_with_registry,
    register_histogram_vec_with_registry, CounterVec, Encoder, GaugeVec, HistogramVec, Opts,
    Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // PROVIDER METRICS
    // ============================================================================

    /// Upstream provider calls
    pub static ref PROVIDER_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("provider_calls_total", "Total upstream provider calls"),
        &["operation", "outcome"], // operation: completion, image; outcome: success, error
        REGISTRY
    ).unwrap();

    /// Upstream provider call duration
    pub static ref PROVIDER_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new(
            "provider_duration_seconds",
            "Upstream provider call duration"
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["operation"],
        REGISTRY
    ).unwrap();

    /// Results served from the local fallback path
    pub static ref FALLBACKS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("fallbacks_total", "Results produced by the fallback path"),
        &["stage"], // stage: translate, generate
        REGISTRY
    ).unwrap();

    // ============================================================================
    // CACHE METRICS
    // ============================================================================

    /// Cache operations
    pub static ref CACHE_OPERATIONS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("cache_operations_total", "Total cache operations"),
        &["cache", "operation"], // operation: hit, miss, store, eviction
        REGISTRY
    ).unwrap();

    /// Current cache entries
    pub static ref CACHE_ENTRIES: GaugeVec = register_gauge_vec_with_registry!(
        Opts::new("cache_entries_current", "Current number of cache entries"),
        &["cache"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // FEEDBACK METRICS
    // ============================================================================

    /// Feedback submissions
    pub static ref FEEDBACK_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("feedback_total", "Feedback submissions"),
        &["kind"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics in Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
