//! Standard conductor cross-sections.

use crate::error::{TableError, TableResult};
use cs_core::units::{Area, mm2, read};
use cs_core::Tolerances;
use core::fmt;

/// Standard cross-sections in mm², strictly ascending.
pub const STANDARD_SIZES_MM2: [f64; 15] = [
    0.5, 0.75, 1.0, 1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0,
];

/// Wide enough for mm² -> m² -> mm² noise, far too narrow to pull a
/// non-standard size onto a neighbour.
const MEMBERSHIP_TOL: Tolerances = Tolerances::CONVERSION;

/// A cross-section that is known to be a member of a [`SizeCatalog`].
///
/// Only the catalog hands these out, so a `CrossSection` is never zero,
/// negative or off-catalog.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CrossSection(f64);

impl CrossSection {
    pub fn mm2(self) -> f64 {
        self.0
    }

    pub fn area(self) -> Area {
        mm2(self.0)
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm²", self.0)
    }
}

/// Ordered, immutable list of cross-sections.
#[derive(Debug, Clone, Copy)]
pub struct SizeCatalog {
    sizes_mm2: &'static [f64],
}

static STANDARD: SizeCatalog = SizeCatalog {
    sizes_mm2: &STANDARD_SIZES_MM2,
};

impl SizeCatalog {
    /// The standard metric size series.
    pub fn standard() -> &'static SizeCatalog {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.sizes_mm2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes_mm2.is_empty()
    }

    /// Iterate sizes in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = CrossSection> + ExactSizeIterator + '_ {
        self.sizes_mm2.iter().copied().map(CrossSection)
    }

    // Catalogs are only built from the non-empty static tables above
    pub fn smallest(&self) -> CrossSection {
        CrossSection(self.sizes_mm2[0])
    }

    pub fn largest(&self) -> CrossSection {
        CrossSection(self.sizes_mm2[self.sizes_mm2.len() - 1])
    }

    /// Resolve a size given in mm². Never rounds to a neighbour.
    pub fn lookup_mm2(&self, value: f64) -> TableResult<CrossSection> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TableError::SizeNotInCatalog { mm2: value });
        }
        self.sizes_mm2
            .iter()
            .copied()
            .find(|&size| MEMBERSHIP_TOL.close(size, value))
            .map(CrossSection)
            .ok_or(TableError::SizeNotInCatalog { mm2: value })
    }

    pub fn lookup(&self, area: Area) -> TableResult<CrossSection> {
        self.lookup_mm2(read::mm2(area))
    }

    /// Smallest catalog size that is at least `area`.
    pub fn first_at_least(&self, area: Area) -> Option<CrossSection> {
        let value = read::mm2(area);
        self.iter()
            .find(|size| size.mm2() >= value || MEMBERSHIP_TOL.close(size.mm2(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_strictly_ascending() {
        let catalog = SizeCatalog::standard();
        assert_eq!(catalog.len(), 15);
        for pair in STANDARD_SIZES_MM2.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        assert_eq!(catalog.smallest().mm2(), 0.5);
        assert_eq!(catalog.largest().mm2(), 120.0);
    }

    #[test]
    fn every_standard_size_resolves_through_area() {
        let catalog = SizeCatalog::standard();
        for value in STANDARD_SIZES_MM2 {
            let size = catalog.lookup(mm2(value)).unwrap();
            assert_eq!(size.mm2(), value);
        }
    }

    #[test]
    fn off_catalog_sizes_are_rejected() {
        let catalog = SizeCatalog::standard();
        assert_eq!(
            catalog.lookup_mm2(3.3),
            Err(TableError::SizeNotInCatalog { mm2: 3.3 })
        );
        assert!(catalog.lookup_mm2(2.5001).is_err());
        assert!(catalog.lookup_mm2(0.0).is_err());
        assert!(catalog.lookup_mm2(-2.5).is_err());
        assert!(catalog.lookup_mm2(f64::NAN).is_err());
        assert!(catalog.lookup(mm2(3.3)).is_err());
    }

    #[test]
    fn first_at_least_snaps_up() {
        let catalog = SizeCatalog::standard();
        assert_eq!(catalog.first_at_least(mm2(23.3)).map(CrossSection::mm2), Some(25.0));
        assert_eq!(catalog.first_at_least(mm2(25.0)).map(CrossSection::mm2), Some(25.0));
        assert_eq!(catalog.first_at_least(mm2(0.1)).map(CrossSection::mm2), Some(0.5));
        assert!(catalog.first_at_least(mm2(150.0)).is_none());
    }

    #[test]
    fn display_uses_square_millimetres() {
        let size = SizeCatalog::standard().lookup_mm2(0.75).unwrap();
        assert_eq!(size.to_string(), "0.75 mm²");
    }
}
