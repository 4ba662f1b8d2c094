//! Gate wheel: longitude → (gate, line) mapping.
//!
//! The ecliptic circle is divided into 64 equal sectors of 5.625 deg,
//! starting at 0 deg (Aries ingress). The gate number assigned to each
//! sector follows a fixed non-sequential wheel ordering; the ordering is
//! irreducible domain data and is reproduced as an explicit table, never
//! derived. Each gate subdivides into 6 equal lines of 0.9375 deg.

/// Span of one gate sector: 360/64 = 5.625 degrees.
pub const GATE_SPAN_DEG: f64 = 360.0 / 64.0;

/// Span of one line: 5.625/6 = 0.9375 degrees.
pub const LINE_SPAN_DEG: f64 = GATE_SPAN_DEG / 6.0;

/// Gate numbers in wheel order, indexed by sector (sector 0 starts at
/// 0 deg ecliptic longitude). A fixed permutation of 1..=64.
#[rustfmt::skip]
pub static GATE_WHEEL: [u8; 64] = [
    25, 17, 21, 51, 42,  3, 27, 24,
     2, 23,  8, 20, 16, 35, 45, 12,
    15, 52, 39, 53, 62, 56, 31, 33,
     7,  4, 29, 59, 40, 64, 47,  6,
    46, 18, 48, 57, 32, 50, 28, 44,
     1, 43, 14, 34,  9,  5, 26, 11,
    10, 58, 38, 54, 61, 60, 41, 19,
    13, 49, 30, 55, 37, 63, 22, 36,
];

/// Result of mapping a longitude onto the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateLine {
    /// Gate number, 1-64.
    pub gate: u8,
    /// Line within the gate, 1-6.
    pub line: u8,
    /// Decimal degrees into the gate sector [0, 5.625).
    pub degrees_in_gate: f64,
    /// Decimal degrees into the line [0, 0.9375).
    pub degrees_in_line: f64,
}

/// Normalize a longitude to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Map an ecliptic longitude in degrees to its gate and line.
///
/// Total over all real longitudes; periodic with period 360.
pub fn gate_from_longitude(longitude_deg: f64) -> GateLine {
    let lon = normalize_360(longitude_deg);
    let sector = ((lon / GATE_SPAN_DEG).floor() as usize).min(63);
    let degrees_in_gate = lon - sector as f64 * GATE_SPAN_DEG;
    let line_idx = ((degrees_in_gate / LINE_SPAN_DEG).floor() as u8).min(5);
    let degrees_in_line = degrees_in_gate - line_idx as f64 * LINE_SPAN_DEG;

    GateLine {
        gate: GATE_WHEEL[sector],
        line: line_idx + 1,
        degrees_in_gate,
        degrees_in_line,
    }
}

/// A set of active gates, backed by one bit per gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateSet(u64);

impl GateSet {
    /// The empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from gate numbers; out-of-range numbers are ignored.
    pub fn from_gates(gates: &[u8]) -> Self {
        let mut set = Self::new();
        for &g in gates {
            set.insert(g);
        }
        set
    }

    /// Add a gate (1-64) to the set.
    pub fn insert(&mut self, gate: u8) {
        if (1..=64).contains(&gate) {
            self.0 |= 1u64 << (gate - 1);
        }
    }

    /// Whether a gate is in the set.
    pub const fn contains(self, gate: u8) -> bool {
        gate >= 1 && gate <= 64 && self.0 & (1u64 << (gate - 1)) != 0
    }

    /// Number of gates in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate gates in ascending numeric order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=64u8).filter(move |&g| self.contains(g))
    }
}
