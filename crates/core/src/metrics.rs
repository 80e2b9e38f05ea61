//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Question-set builds (built, rejected, size)
//! - Corpus loading

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Question-set builds
// =============================================================================

/// Question sets built successfully, by game mode.
pub static QUESTION_SETS_BUILT: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gita_question_sets_built_total",
            "Total question sets built",
        ),
        &["mode"],
    )
    .unwrap()
});

/// Question-set builds rejected, by game mode and reason.
pub static QUESTION_SETS_REJECTED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gita_question_sets_rejected_total",
            "Total question-set builds rejected",
        ),
        &["mode", "reason"], // "invalid_config", "insufficient_pool", "empty"
    )
    .unwrap()
});

/// Items per built question set.
pub static QUESTIONS_PER_SET: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "gita_questions_per_set",
            "Number of items (questions, rounds or cards) per built set",
        )
        .buckets(vec![1.0, 3.0, 5.0, 8.0, 10.0, 12.0, 16.0, 24.0]),
        &["mode"],
    )
    .unwrap()
});

// =============================================================================
// Corpus
// =============================================================================

/// Corpus loads completed.
pub static CORPUS_LOADS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("gita_corpus_loads_total", "Total corpus loads").unwrap()
});

/// Returns all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(QUESTION_SETS_BUILT.clone()),
        Box::new(QUESTION_SETS_REJECTED.clone()),
        Box::new(QUESTIONS_PER_SET.clone()),
        Box::new(CORPUS_LOADS.clone()),
    ]
}
