//! Integration tests for the static conductor tables.

use cs_core::units::mm2;
use cs_tables::{Material, SizeCatalog, TableError, filter_material_catalog, material_catalog};
use proptest::prelude::*;

#[test]
fn both_required_materials_are_in_the_catalog() {
    let keys: Vec<_> = material_catalog().iter().map(|e| e.canonical_id).collect();
    assert_eq!(keys, vec!["copper", "aluminum"]);
    for material in Material::ALL {
        assert!(
            filter_material_catalog(material.key())
                .iter()
                .any(|entry| entry.material == material)
        );
    }
}

#[test]
fn unknown_material_and_size_errors_are_distinct() {
    assert!(matches!(
        Material::from_key("silver"),
        Err(TableError::UnknownMaterial { .. })
    ));
    assert!(matches!(
        SizeCatalog::standard().lookup(mm2(3.3)),
        Err(TableError::SizeNotInCatalog { .. })
    ));
}

proptest! {
    #[test]
    fn lookup_only_returns_exact_members(value in 0.01_f64..200.0_f64) {
        let catalog = SizeCatalog::standard();
        match catalog.lookup_mm2(value) {
            Ok(size) => prop_assert!((size.mm2() - value).abs() <= 1e-6 * value),
            Err(err) => prop_assert_eq!(err, TableError::SizeNotInCatalog { mm2: value }),
        }
    }

    #[test]
    fn first_at_least_is_minimal(value in 0.01_f64..120.0_f64) {
        let catalog = SizeCatalog::standard();
        let chosen = catalog.first_at_least(mm2(value)).unwrap();
        prop_assert!(chosen.mm2() >= value * (1.0 - 1e-9));
        for smaller in catalog.iter().take_while(|s| s.mm2() < chosen.mm2()) {
            prop_assert!(smaller.mm2() < value);
        }
    }
}
