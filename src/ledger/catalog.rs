//! Reference appliances with canonical wattages

/// A pre-vetted appliance offered for quick add
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub watts: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { name: "Refrigerator", watts: 150.0 },
    CatalogEntry { name: "LED TV", watts: 100.0 },
    CatalogEntry { name: "Air Conditioner (1.5 ton)", watts: 1500.0 },
    CatalogEntry { name: "Ceiling Fan", watts: 75.0 },
    CatalogEntry { name: "Microwave", watts: 1000.0 },
    CatalogEntry { name: "Desktop Computer", watts: 200.0 },
    CatalogEntry { name: "Washing Machine", watts: 500.0 },
    CatalogEntry { name: "Water Heater", watts: 3000.0 },
];

/// All catalog entries, in display order
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Case-insensitive lookup by name
pub fn find_catalog_entry(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}
