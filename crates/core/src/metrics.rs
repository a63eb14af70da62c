//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Filename parsing (outcomes, release groups missing from the registry)
//! - Subtitle selection (which tier decided)

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

// =============================================================================
// Filename Parsing
// =============================================================================

/// Filename parses by result.
pub static FILENAME_PARSES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("subtis_filename_parses_total", "Total filename parse attempts"),
        &["result"], // "ok", "no_year_found", "unsupported_extension", "unknown_rip_type"
    )
    .unwrap()
});

/// Release groups synthesized from a filename because the registry lacked them.
pub static UNKNOWN_RELEASE_GROUPS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "subtis_unknown_release_groups_total",
        "Filenames whose release group is not in the registry",
    )
    .unwrap()
});

// =============================================================================
// Subtitle Selection
// =============================================================================

/// Subtitle selections by deciding tier.
pub static SUBTITLE_SELECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "subtis_subtitle_selections_total",
            "Total subtitle selections by matcher tier",
        ),
        &["tier"], // "resolution", "release_group_or_resolution", "fallback", "none"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(FILENAME_PARSES.clone()),
        Box::new(UNKNOWN_RELEASE_GROUPS.clone()),
        Box::new(SUBTITLE_SELECTIONS.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        UNKNOWN_RELEASE_GROUPS.inc();
        FILENAME_PARSES.with_label_values(&["ok"]).inc();
        SUBTITLE_SELECTIONS.with_label_values(&["fallback"]).inc();

        let names: Vec<_> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"subtis_unknown_release_groups_total".to_string()));
        assert!(names.contains(&"subtis_filename_parses_total".to_string()));
        assert!(names.contains(&"subtis_subtitle_selections_total".to_string()));
    }
}
