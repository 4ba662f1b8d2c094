//! The 36 fixed channels of the bodygraph.
//!
//! A channel is an unordered pair of gates bridging two centers. The
//! table is configuration data, never derived: 36 channels span all 64
//! gates, with a few gates (10, 20, 34, 57) terminating more than one
//! channel. A channel is complete when both of its gates are active; a
//! center is defined when any channel terminating in it is complete.

use serde::Serialize;

use crate::center::{Center, CenterSet};
use crate::wheel::GateSet;

/// A fixed gate pairing and the centers it bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// The two gate numbers (unordered pair, stored low-high).
    pub gates: (u8, u8),
    /// The centers the two gates terminate in, in `gates` order.
    pub centers: (Center, Center),
}

/// Activation state of one channel against an active-gate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelState {
    /// Both gates active.
    Complete,
    /// Exactly one gate active.
    Partial,
    /// Neither gate active.
    Absent,
}

const fn ch(a: u8, b: u8, ca: Center, cb: Center) -> Channel {
    Channel {
        gates: (a, b),
        centers: (ca, cb),
    }
}

/// All 36 channels.
#[rustfmt::skip]
pub static ALL_CHANNELS: [Channel; 36] = [
    ch( 1,  8, Center::G,           Center::Throat),
    ch( 2, 14, Center::G,           Center::Sacral),
    ch( 3, 60, Center::Sacral,      Center::Root),
    ch( 4, 63, Center::Ajna,        Center::Head),
    ch( 5, 15, Center::Sacral,      Center::G),
    ch( 6, 59, Center::SolarPlexus, Center::Sacral),
    ch( 7, 31, Center::G,           Center::Throat),
    ch( 9, 52, Center::Sacral,      Center::Root),
    ch(10, 20, Center::G,           Center::Throat),
    ch(10, 34, Center::G,           Center::Sacral),
    ch(10, 57, Center::G,           Center::Spleen),
    ch(11, 56, Center::Ajna,        Center::Throat),
    ch(12, 22, Center::Throat,      Center::SolarPlexus),
    ch(13, 33, Center::G,           Center::Throat),
    ch(16, 48, Center::Throat,      Center::Spleen),
    ch(17, 62, Center::Ajna,        Center::Throat),
    ch(18, 58, Center::Spleen,      Center::Root),
    ch(19, 49, Center::Root,        Center::SolarPlexus),
    ch(20, 34, Center::Throat,      Center::Sacral),
    ch(20, 57, Center::Throat,      Center::Spleen),
    ch(21, 45, Center::Heart,       Center::Throat),
    ch(23, 43, Center::Throat,      Center::Ajna),
    ch(24, 61, Center::Ajna,        Center::Head),
    ch(25, 51, Center::G,           Center::Heart),
    ch(26, 44, Center::Heart,       Center::Spleen),
    ch(27, 50, Center::Sacral,      Center::Spleen),
    ch(28, 38, Center::Spleen,      Center::Root),
    ch(29, 46, Center::Sacral,      Center::G),
    ch(30, 41, Center::SolarPlexus, Center::Root),
    ch(32, 54, Center::Spleen,      Center::Root),
    ch(34, 57, Center::Sacral,      Center::Spleen),
    ch(35, 36, Center::Throat,      Center::SolarPlexus),
    ch(37, 40, Center::SolarPlexus, Center::Heart),
    ch(39, 55, Center::Root,        Center::SolarPlexus),
    ch(42, 53, Center::Sacral,      Center::Root),
    ch(47, 64, Center::Ajna,        Center::Head),
];

impl Channel {
    /// State of this channel against an active-gate set.
    pub fn state(&self, active: GateSet) -> ChannelState {
        match (active.contains(self.gates.0), active.contains(self.gates.1)) {
            (true, true) => ChannelState::Complete,
            (false, false) => ChannelState::Absent,
            _ => ChannelState::Partial,
        }
    }

    /// Whether both gates of this channel are active.
    pub fn is_complete(&self, active: GateSet) -> bool {
        self.state(active) == ChannelState::Complete
    }
}

/// All channels complete against the active-gate set.
pub fn complete_channels(active: GateSet) -> Vec<&'static Channel> {
    ALL_CHANNELS
        .iter()
        .filter(|c| c.is_complete(active))
        .collect()
}

/// Centers defined by the active-gate set: a center is defined iff at
/// least one channel terminating in it is complete.
pub fn defined_centers(active: GateSet) -> CenterSet {
    let mut defined = CenterSet::new();
    for channel in &ALL_CHANNELS {
        if channel.is_complete(active) {
            defined.insert(channel.centers.0);
            defined.insert(channel.centers.1);
        }
    }
    defined
}
