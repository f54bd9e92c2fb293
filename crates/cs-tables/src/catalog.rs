use crate::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCatalogEntry {
    pub material: Material,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    /// Turkish display name, as shown by the calculator's `tr` locale.
    pub display_name_tr: &'static str,
    pub symbol: &'static str,
    pub aliases: &'static [&'static str],
}

impl MaterialCatalogEntry {
    /// Substring search over id, names, symbol and aliases.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self.display_name_tr.to_lowercase().contains(&query)
            || self.symbol.to_lowercase() == query
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(&query))
    }

    /// Exact match against id, symbol or alias. `needle` must already be lowercase.
    pub fn matches_key(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        self.canonical_id == needle
            || self.symbol.to_lowercase() == needle
            || self.aliases.iter().any(|alias| *alias == needle)
    }
}

const MATERIAL_CATALOG: [MaterialCatalogEntry; 2] = [
    MaterialCatalogEntry {
        material: Material::Copper,
        canonical_id: "copper",
        display_name: "Copper",
        display_name_tr: "Bakır",
        symbol: "Cu",
        aliases: &["bakır", "bakir"],
    },
    MaterialCatalogEntry {
        material: Material::Aluminum,
        canonical_id: "aluminum",
        display_name: "Aluminum",
        display_name_tr: "Alüminyum",
        symbol: "Al",
        aliases: &["aluminium", "alüminyum", "aluminyum"],
    },
];

pub fn material_catalog() -> &'static [MaterialCatalogEntry] {
    &MATERIAL_CATALOG
}

pub fn filter_material_catalog(query: &str) -> Vec<MaterialCatalogEntry> {
    material_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

impl Material {
    pub fn catalog_entry(self) -> &'static MaterialCatalogEntry {
        // ALL and MATERIAL_CATALOG share ordering
        &MATERIAL_CATALOG[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in material_catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn catalog_entry_matches_material() {
        for material in Material::ALL {
            let entry = material.catalog_entry();
            assert_eq!(entry.material, material);
            assert_eq!(entry.canonical_id, material.key());
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Material::from_key("Cu"), Ok(Material::Copper));
        assert_eq!(Material::from_key("al"), Ok(Material::Aluminum));
        assert_eq!(Material::from_key("aluminium"), Ok(Material::Aluminum));
        assert_eq!(Material::from_key("Bakır"), Ok(Material::Copper));
        assert!(Material::from_key("alu").is_err());
    }

    #[test]
    fn search_finds_by_turkish_name() {
        let results = filter_material_catalog("alüm");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].material, Material::Aluminum);
    }

    #[test]
    fn empty_query_lists_everything() {
        assert_eq!(filter_material_catalog("  ").len(), material_catalog().len());
    }
}
