//! Sorts a package onto one of three handling stacks.
//!
//! A package is **bulky** when any edge reaches [`EDGE_LIMIT_CM`] or its volume
//! exceeds [`VOLUME_LIMIT_CM3`], and **heavy** when its mass reaches
//! [`MASS_LIMIT_KG`]. Bulky and heavy together is rejected, either one alone is
//! special, neither is standard.
//!
//! The volume limit is exclusive while the edge and mass limits are inclusive.

use sortr_common::parcel::{Category, Package};

/// Edge length at which a package counts as bulky (inclusive).
pub const EDGE_LIMIT_CM: f64 = 150.0;
/// Volume above which a package counts as bulky (exclusive).
pub const VOLUME_LIMIT_CM3: f64 = 1_000_000.0;
/// Mass at which a package counts as heavy (inclusive).
pub const MASS_LIMIT_KG: f64 = 20.0;

/// Predicates derived from a valid package.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assessment {
    pub oversized_by_edge: bool,
    /// Width × height × length, in cm³.
    pub volume: f64,
    pub oversized_by_volume: bool,
    pub heavy: bool,
}

impl Assessment {
    pub fn of(package: &Package) -> Self {
        let oversized_by_edge = package.edges().iter().any(|&edge| edge >= EDGE_LIMIT_CM);
        let volume = package.width() * package.height() * package.length();

        Self {
            oversized_by_edge,
            volume,
            oversized_by_volume: volume > VOLUME_LIMIT_CM3,
            heavy: package.mass() >= MASS_LIMIT_KG,
        }
    }

    pub fn is_bulky(&self) -> bool {
        self.oversized_by_edge || self.oversized_by_volume
    }

    pub fn category(&self) -> Category {
        match (self.is_bulky(), self.heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }
}

/// Classifies a package given as raw measurements.
///
/// Never fails: any measurement that is zero, negative, infinite or `NaN`
/// makes the package [`Category::Rejected`] before anything else is computed.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Category {
    match Package::new(width, height, length, mass) {
        Ok(package) => classify_package(&package),
        Err(_) => Category::Rejected,
    }
}

pub fn classify_package(package: &Package) -> Category {
    Assessment::of(package).category()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
