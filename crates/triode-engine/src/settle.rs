//! Phase 2 settlement: the multi-pass fixed-point scheduler.
//!
//! Resistors are bidirectional equality constraints; run eagerly, a pull
//! resistor would drive a transistor's channel end before the transistor
//! has decided whether to short it to the opposite rail. The scheduler
//! therefore runs transistors to a local fixed point first, then the
//! remaining components (composites), then resistors, and repeats the whole
//! partition-and-pass cycle up to the defer budget so that one gate layer's
//! output can become the next layer's gate.

use triode_core::{EngineError, NodeGraph, ObservationSink};

use crate::component::Component;
use crate::metrics::SettleMetrics;

/// Settle `components` against `graph` under the given defer budget.
///
/// Ready components act and retire; unready ones stay pending for the next
/// pass. Exhausting the budget with components still pending is not an
/// error; the leftovers are reported through [`SettleMetrics::unsettled`].
pub(crate) fn settle(
    graph: &mut NodeGraph,
    components: &[Component],
    max_defers: usize,
    debug: bool,
    sink: &mut dyn ObservationSink,
) -> Result<SettleMetrics, EngineError> {
    let mut metrics = SettleMetrics::default();
    let mut pending: Vec<&Component> = components.iter().collect();

    for _ in 0..max_defers {
        if pending.is_empty() {
            break;
        }
        metrics.rounds += 1;

        let (mut transistors, mut resistors, mut others) = split(pending);

        // Transistor sub-fixpoint: keep passing until a full pass retires
        // nothing. Directional propagation must finish before any resistor
        // back-fills through the channel.
        loop {
            let before = transistors.len();
            transistors = pass(graph, transistors, debug, sink, &mut metrics.acted)?;
            if transistors.len() == before {
                break;
            }
        }

        others = pass(graph, others, debug, sink, &mut metrics.acted)?;
        resistors = pass(graph, resistors, debug, sink, &mut metrics.acted)?;

        pending = transistors;
        pending.append(&mut others);
        pending.append(&mut resistors);
    }

    metrics.unsettled = pending
        .iter()
        .map(|component| component.describe(graph))
        .collect();
    Ok(metrics)
}

/// Partition pending components by scheduling class, preserving order
/// within each class.
fn split(
    components: Vec<&Component>,
) -> (Vec<&Component>, Vec<&Component>, Vec<&Component>) {
    let mut transistors = Vec::new();
    let mut resistors = Vec::new();
    let mut others = Vec::new();
    for component in components {
        match component {
            Component::Transistor { .. } => transistors.push(component),
            Component::Resistor { .. } => resistors.push(component),
            _ => others.push(component),
        }
    }
    (transistors, resistors, others)
}

/// One pass: act every ready component, keep the rest pending.
fn pass<'a>(
    graph: &mut NodeGraph,
    components: Vec<&'a Component>,
    debug: bool,
    sink: &mut dyn ObservationSink,
    acted: &mut usize,
) -> Result<Vec<&'a Component>, EngineError> {
    let mut deferred = Vec::new();
    for component in components {
        if component.ready(graph) {
            if debug {
                eprintln!("act   {}", component.describe(graph));
            }
            component.act(graph, sink, debug)?;
            *acted += 1;
            if debug {
                eprintln!("  --> {}", component.describe(graph));
            }
        } else {
            if debug {
                eprintln!("defer {}", component.describe(graph));
            }
            deferred.push(component);
        }
    }
    Ok(deferred)
}
