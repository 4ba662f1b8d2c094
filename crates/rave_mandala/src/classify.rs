//! Type and authority classification from defined centers.
//!
//! The rule table is a strict priority order: the first matching branch
//! wins. It is exhaustive, so classification is total; an empty set of
//! defined centers is a valid input and classifies as Reflector.

use serde::Serialize;

use crate::center::{Center, CenterSet};

/// The energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnergyType {
    ManifestingGenerator,
    Generator,
    Manifestor,
    Projector,
    Reflector,
}

impl EnergyType {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Generator => "Generator",
            Self::Manifestor => "Manifestor",
            Self::Projector => "Projector",
            Self::Reflector => "Reflector",
        }
    }
}

/// The decision authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Authority {
    Sacral,
    Emotional,
    Spleen,
    Heart,
    /// Fixed default for Reflectors; not derived from any center.
    LunarCycle,
}

impl Authority {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sacral => "Sacral",
            Self::Emotional => "Emotional",
            Self::Spleen => "Spleen",
            Self::Heart => "Heart",
            Self::LunarCycle => "Lunar Cycle",
        }
    }
}

/// Final discrete classification of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub energy_type: EnergyType,
    pub authority: Authority,
}

/// Classify a set of defined centers.
///
/// Priority order (first match wins):
/// 1. Sacral + Throat → Manifesting Generator / Sacral
/// 2. Sacral alone → Generator / Sacral
/// 3. Throat without Sacral → Manifestor; Heart authority if Heart is
///    defined, else Spleen if defined, else Heart as the fixed default
/// 4. Solar Plexus (no Sacral/Throat) → Projector / Emotional
/// 5. Spleen (none of the above) → Projector / Spleen
/// 6. Heart (none of the above) → Projector / Heart
/// 7. otherwise → Reflector / Lunar Cycle
pub fn classify(defined: CenterSet) -> Classification {
    let sacral = defined.contains(Center::Sacral);
    let throat = defined.contains(Center::Throat);
    let solar_plexus = defined.contains(Center::SolarPlexus);
    let spleen = defined.contains(Center::Spleen);
    let heart = defined.contains(Center::Heart);

    let (energy_type, authority) = match (sacral, throat) {
        (true, true) => (EnergyType::ManifestingGenerator, Authority::Sacral),
        (true, false) => (EnergyType::Generator, Authority::Sacral),
        (false, true) => {
            // Heart wins when defined; Spleen is next; Heart is also the
            // fixed default when neither is defined.
            let authority = if spleen && !heart {
                Authority::Spleen
            } else {
                Authority::Heart
            };
            (EnergyType::Manifestor, authority)
        }
        (false, false) => {
            if solar_plexus {
                (EnergyType::Projector, Authority::Emotional)
            } else if spleen {
                (EnergyType::Projector, Authority::Spleen)
            } else if heart {
                (EnergyType::Projector, Authority::Heart)
            } else {
                (EnergyType::Reflector, Authority::LunarCycle)
            }
        }
    };

    Classification {
        energy_type,
        authority,
    }
}
