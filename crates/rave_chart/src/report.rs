//! Serializable chart report.
//!
//! The report is the external surface consumed by presentation layers:
//! a mapping of body → {gate, line, longitude} for each chart side, the
//! derived graph state, and the {type, authority} pair.

use std::collections::BTreeMap;

use serde::Serialize;

use rave_mandala::ChannelState;

use crate::Chart;

/// One body's activation in report form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivationReport {
    pub gate: u8,
    pub line: u8,
    pub longitude_deg: f64,
}

/// Serializable view of a computed chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    /// Birth instant, UTC ISO-8601.
    pub birth_utc: String,
    /// Solved design instant, UTC ISO-8601.
    pub design_utc: String,
    /// Body name → activation, birth side.
    pub personality: BTreeMap<&'static str, ActivationReport>,
    /// Body name → activation, design side.
    pub design: BTreeMap<&'static str, ActivationReport>,
    /// Active gates in ascending order.
    pub active_gates: Vec<u8>,
    /// Complete channels as gate pairs.
    pub complete_channels: Vec<(u8, u8)>,
    /// Channels with exactly one active gate, as gate pairs.
    pub partial_channels: Vec<(u8, u8)>,
    /// Names of the defined centers.
    pub defined_centers: Vec<&'static str>,
    #[serde(rename = "type")]
    pub energy_type: &'static str,
    pub authority: &'static str,
}

impl ChartReport {
    /// Build the report view of a chart.
    pub fn from_chart(chart: &Chart) -> Self {
        let side = |activations: &[crate::GateActivation; 13]| {
            activations
                .iter()
                .map(|a| {
                    (
                        a.body.name(),
                        ActivationReport {
                            gate: a.gate,
                            line: a.line,
                            longitude_deg: a.longitude_deg,
                        },
                    )
                })
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            birth_utc: chart.birth.to_utc().to_rfc3339(),
            design_utc: chart.design.moment.to_utc().to_rfc3339(),
            personality: side(&chart.personality),
            design: side(&chart.design_activations),
            active_gates: chart.active_gates.iter().collect(),
            complete_channels: chart
                .channel_states()
                .filter(|(_, s)| *s == ChannelState::Complete)
                .map(|(c, _)| c.gates)
                .collect(),
            partial_channels: chart
                .channel_states()
                .filter(|(_, s)| *s == ChannelState::Partial)
                .map(|(c, _)| c.gates)
                .collect(),
            defined_centers: chart.defined_centers.iter().map(|c| c.name()).collect(),
            energy_type: chart.classification.energy_type.name(),
            authority: chart.classification.authority.name(),
        }
    }
}
