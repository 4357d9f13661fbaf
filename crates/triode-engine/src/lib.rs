//! Netlist assembly and the settlement engine.
//!
//! A [`Netlist`] owns a node graph and a set of [`Component`]s classified
//! into three scheduling tiers at add time: terminals (sources, grounds,
//! inputs), active components (resistors, transistors, composites), and
//! meters. [`Netlist::simulate`] drives the network to a stable equilibrium
//! in four phases:
//!
//! 1. reset every node to `Undefined`;
//! 2. act every terminal in insertion order;
//! 3. settle the active components to a fixed point under the defer budget;
//! 4. act every meter in insertion order.
//!
//! Phase 3's scheduling (transistors to a local fixed point before
//! resistors are consulted) is the heart of the engine; see the
//! settlement module documentation for the rationale.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod component;
pub mod composite;
pub mod config;
pub mod metrics;
pub mod netlist;
mod settle;

pub use component::{Component, Tier};
pub use composite::Composite;
pub use config::{ConfigError, EngineConfig, DEFAULT_MAX_DEFERS};
pub use metrics::SettleMetrics;
pub use netlist::Netlist;
