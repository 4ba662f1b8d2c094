//! Gate wheel, bodygraph tables, and classification rules.
//!
//! This crate is pure math and configuration data:
//! - longitude → (gate, line) mapping over the fixed 64-gate wheel
//! - the 9 centers and 36 channels of the bodygraph
//! - defined-center derivation and the type/authority rule table
//!
//! Nothing here touches the ephemeris; everything is a total function of
//! its inputs.

pub mod center;
pub mod channel;
pub mod classify;
pub mod wheel;

pub use center::{ALL_CENTERS, Center, CenterSet};
pub use channel::{ALL_CHANNELS, Channel, ChannelState, complete_channels, defined_centers};
pub use classify::{Authority, Classification, EnergyType, classify};
pub use wheel::{GATE_SPAN_DEG, GATE_WHEEL, GateLine, GateSet, LINE_SPAN_DEG, gate_from_longitude};
