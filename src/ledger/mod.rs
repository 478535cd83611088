//! Appliance ledger
//!
//! Holds the working set of appliances for one calculator session.
//! Insertion order is display order and carries no other meaning.

mod catalog;

pub use catalog::{catalog, find_catalog_entry, CatalogEntry};

use crate::core::{Appliance, ValidationError};

/// Hours assigned to an appliance added from the catalog
pub const CATALOG_DEFAULT_HOURS: f64 = 1.0;

/// Ordered, session-scoped list of appliances
#[derive(Debug, Clone, Default)]
pub struct ApplianceLedger {
    appliances: Vec<Appliance>,
}

impl ApplianceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a custom appliance after validating it.
    ///
    /// On error the ledger is left unchanged.
    pub fn add(&mut self, candidate: Appliance) -> Result<(), ValidationError> {
        candidate.validate()?;
        log::debug!("Adding appliance: {}", candidate);
        self.appliances.push(candidate);
        Ok(())
    }

    /// Append a catalog appliance with one hour of daily use
    pub fn add_from_catalog(&mut self, entry: &CatalogEntry) {
        log::debug!("Quick-adding {} ({}W)", entry.name, entry.watts);
        self.appliances
            .push(Appliance::new(entry.name, entry.watts, CATALOG_DEFAULT_HOURS));
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn remove_at(&mut self, index: usize) -> Option<Appliance> {
        if index >= self.appliances.len() {
            return None;
        }
        let removed = self.appliances.remove(index);
        log::debug!("Removed appliance at {}: {}", index, removed.name);
        Some(removed)
    }

    pub fn list(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

/// Pending input of the custom appliance form
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceDraft {
    pub name: String,
    pub watts: f64,
    pub hours: f64,
}

impl ApplianceDraft {
    pub fn to_appliance(&self) -> Appliance {
        Appliance::new(self.name.clone(), self.watts, self.hours)
    }
}

impl Default for ApplianceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            watts: 0.0,
            hours: 1.0,
        }
    }
}
