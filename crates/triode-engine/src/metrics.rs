//! Per-simulation settlement diagnostics.

/// Counters from the most recent Phase 2 settlement of a netlist.
///
/// Purely advisory: a non-empty [`unsettled`](Self::unsettled) list means
/// the defer budget ran out with constraints still pending. The affected
/// nodes stay `Undefined` and meters on them emit warnings, but the
/// simulation itself succeeds; some circuits legitimately carry components
/// that never become ready (for example, a transistor whose gate is never
/// driven).
#[derive(Clone, Debug, Default)]
pub struct SettleMetrics {
    /// Outer settlement rounds actually used (at most `max_defers`).
    pub rounds: usize,
    /// Top-level component activations across all rounds. Activations
    /// inside composite subcircuits are not counted.
    pub acted: usize,
    /// Rendered descriptions of the components still pending when the
    /// budget ran out, in scheduling order.
    pub unsettled: Vec<String>,
}

impl SettleMetrics {
    /// Whether every active component retired within the budget.
    pub fn is_settled(&self) -> bool {
        self.unsettled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero_and_settled() {
        let metrics = SettleMetrics::default();
        assert_eq!(metrics.rounds, 0);
        assert_eq!(metrics.acted, 0);
        assert!(metrics.unsettled.is_empty());
        assert!(metrics.is_settled());
    }

    #[test]
    fn pending_components_mean_not_settled() {
        let metrics = SettleMetrics {
            rounds: 4,
            acted: 2,
            unsettled: vec!["Transistor<...>".to_string()],
        };
        assert!(!metrics.is_settled());
    }
}
