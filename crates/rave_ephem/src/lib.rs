//! Ecliptic position provider for the chart bodies.
//!
//! This crate provides:
//! - [`Body`], the fixed 13-entry set of chart bodies (ten physical
//!   bodies, two derived lunar-node points, one derived Earth point)
//! - [`positions`], the pure, total provider mapping a [`Moment`] to an
//!   ecliptic position per body
//! - The underlying analytic series (`solar`, `lunar`, `kepler`)
//!
//! Precision tiers: the Sun uses the equation-of-center series (~0.01 deg,
//! the correctness floor for gate boundaries and the design solver); the
//! Moon a truncated main-problem series; the planets Keplerian elements
//! with secular rates. Derived points are never independently computed:
//! nodes come from the Moon entry, Earth from the Sun entry.

pub mod kepler;
pub mod lunar;
pub mod solar;

use serde::Serialize;

use rave_time::Moment;

pub use kepler::OrbitTarget;
pub use solar::sun_longitude_at_jd;

/// Chart bodies, in fixed index order.
///
/// The derived points (nodes, Earth) are part of this set because every
/// chart carries exactly one activation per body per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Earth,
}

/// All chart bodies in index order.
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
    Body::Earth,
];

impl Body {
    /// 0-based index (Sun=0 .. Earth=12).
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::NorthNode => 10,
            Self::SouthNode => 11,
            Self::Earth => 12,
        }
    }

    /// Display name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Earth => "Earth",
        }
    }

    /// All chart bodies in index order.
    pub const fn all() -> &'static [Body; 13] {
        &ALL_BODIES
    }
}

/// Ecliptic position of one body at one instant.
///
/// Longitude drives the gate mapping; latitude and distance are carried
/// through for reporting and never influence classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Distance from the observer in AU (0 for derived points).
    pub distance_au: f64,
}

/// Positions of all 13 chart bodies, indexed by [`Body::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPositions {
    entries: [EclipticPosition; 13],
}

impl BodyPositions {
    /// Position of a specific body.
    pub fn position(&self, body: Body) -> EclipticPosition {
        self.entries[body.index()]
    }

    /// Ecliptic longitude of a specific body in degrees [0, 360).
    pub fn longitude(&self, body: Body) -> f64 {
        self.entries[body.index()].longitude_deg
    }

    /// All positions in body index order.
    pub fn iter(&self) -> impl Iterator<Item = &EclipticPosition> {
        self.entries.iter()
    }
}

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Compute ecliptic positions for all 13 chart bodies at a moment.
///
/// Total and deterministic for any well-formed [`Moment`]: physical
/// bodies first, then the node points from the Moon entry, and the Earth
/// point last from the resolved Sun entry (Sun longitude + 180).
pub fn positions(moment: &Moment) -> BodyPositions {
    let t = moment.centuries_j2000();

    let sun = EclipticPosition {
        body: Body::Sun,
        longitude_deg: solar::sun_longitude_deg(t),
        latitude_deg: 0.0,
        distance_au: solar::sun_distance_au(t),
    };
    let moon = EclipticPosition {
        body: Body::Moon,
        longitude_deg: lunar::moon_longitude_deg(t),
        latitude_deg: lunar::moon_latitude_deg(t),
        distance_au: lunar::moon_distance_au(t),
    };

    let planet = |body: Body, target: OrbitTarget| -> EclipticPosition {
        let (lon, lat, dist) = kepler::geocentric_lon_lat_dist(target, t);
        EclipticPosition {
            body,
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
        }
    };

    let north_node = EclipticPosition {
        body: Body::NorthNode,
        longitude_deg: normalize_360(moon.longitude_deg + 180.0),
        latitude_deg: 0.0,
        distance_au: 0.0,
    };
    let south_node = EclipticPosition {
        body: Body::SouthNode,
        longitude_deg: normalize_360(moon.longitude_deg - 180.0),
        latitude_deg: 0.0,
        distance_au: 0.0,
    };

    // Earth is derived once, from the Sun entry, after everything else.
    let earth = EclipticPosition {
        body: Body::Earth,
        longitude_deg: normalize_360(sun.longitude_deg + 180.0),
        latitude_deg: 0.0,
        distance_au: 0.0,
    };

    BodyPositions {
        entries: [
            sun,
            moon,
            planet(Body::Mercury, OrbitTarget::Mercury),
            planet(Body::Venus, OrbitTarget::Venus),
            planet(Body::Mars, OrbitTarget::Mars),
            planet(Body::Jupiter, OrbitTarget::Jupiter),
            planet(Body::Saturn, OrbitTarget::Saturn),
            planet(Body::Uranus, OrbitTarget::Uranus),
            planet(Body::Neptune, OrbitTarget::Neptune),
            planet(Body::Pluto, OrbitTarget::Pluto),
            north_node,
            south_node,
            earth,
        ],
    }
}
