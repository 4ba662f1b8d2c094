//! The nine centers of the bodygraph.

use serde::Serialize;

/// One of the 9 fixed centers. A center is "defined" when at least one
/// channel terminating in it is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    SolarPlexus,
    Sacral,
    Spleen,
    Root,
}

/// All centers in index order.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::SolarPlexus,
    Center::Sacral,
    Center::Spleen,
    Center::Root,
];

impl Center {
    /// 0-based index (Head=0 .. Root=8).
    pub const fn index(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Ajna => 1,
            Self::Throat => 2,
            Self::G => 3,
            Self::Heart => 4,
            Self::SolarPlexus => 5,
            Self::Sacral => 6,
            Self::Spleen => 7,
            Self::Root => 8,
        }
    }

    /// Display name of the center.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::SolarPlexus => "Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Spleen => "Spleen",
            Self::Root => "Root",
        }
    }

    /// All centers in index order.
    pub const fn all() -> &'static [Center; 9] {
        &ALL_CENTERS
    }
}

/// A set of defined centers, one bit per center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenterSet(u16);

impl CenterSet {
    /// The empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from a list of centers.
    pub fn from_centers(centers: &[Center]) -> Self {
        let mut set = Self::new();
        for &c in centers {
            set.insert(c);
        }
        set
    }

    /// Mark a center as defined.
    pub fn insert(&mut self, center: Center) {
        self.0 |= 1u16 << center.index();
    }

    /// Whether a center is defined.
    pub const fn contains(self, center: Center) -> bool {
        self.0 & (1u16 << center.index()) != 0
    }

    /// Number of defined centers.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether no center is defined.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate defined centers in index order.
    pub fn iter(self) -> impl Iterator<Item = Center> {
        ALL_CENTERS.into_iter().filter(move |&c| self.contains(c))
    }
}
