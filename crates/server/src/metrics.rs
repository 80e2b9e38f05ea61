//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Gita server:
//! - HTTP request metrics (latency, counts)
//! - Size of the loaded corpus
//! - Question-set builds (registered from the core crate)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use tracing::error;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "gita_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("gita_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "gita_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Corpus Metrics
// =============================================================================

/// Chapters in the loaded corpus.
pub static CORPUS_CHAPTERS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("gita_corpus_chapters", "Number of chapters in the corpus").unwrap()
});

/// Verses in the loaded corpus.
pub static CORPUS_VERSES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("gita_corpus_verses", "Number of verses in the corpus").unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Corpus
    registry
        .register(Box::new(CORPUS_CHAPTERS.clone()))
        .unwrap();
    registry.register(Box::new(CORPUS_VERSES.clone())).unwrap();

    // Core metrics (question-set builds, corpus loads)
    for metric in gita_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Record the size of the corpus the server is serving.
pub fn set_corpus_size(chapters: usize, verses: usize) {
    CORPUS_CHAPTERS.set(chapters as i64);
    CORPUS_VERSES.set(verses as i64);
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
