//! cs-tables: static conductor data for cablesize.
//!
//! Provides:
//! - Conductor material definitions (copper, aluminum) and their constants
//! - A searchable material catalog with display names and aliases
//! - The catalog of standard conductor cross-sections
//!
//! Everything here is immutable and `'static`; consumers only read.
//!
//! # Example
//!
//! ```
//! use cs_tables::{Material, SizeCatalog};
//! use cs_core::units::mm2;
//!
//! let copper = Material::from_key("copper").unwrap();
//! let size = SizeCatalog::standard().lookup(mm2(2.5)).unwrap();
//! assert_eq!(size.mm2(), 2.5);
//! assert!(copper.properties().resistivity_ohm_mm2_per_m > 0.0);
//! ```

pub mod catalog;
pub mod error;
pub mod material;
pub mod sizes;

// Re-exports for ergonomics
pub use catalog::{MaterialCatalogEntry, filter_material_catalog, material_catalog};
pub use error::{TableError, TableResult};
pub use material::{Material, MaterialProperties};
pub use sizes::{CrossSection, SizeCatalog, STANDARD_SIZES_MM2};
