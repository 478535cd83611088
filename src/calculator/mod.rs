//! Calculator session
//!
//! One session per opened calculator: it owns the appliance ledger, the
//! pending custom-appliance draft and the system parameters, and runs the
//! calculate → store → notify flow.

use crate::core::{Error, Result, StatsRecord, StatsRow, SystemParameters, ValidationError};
use crate::ledger::{ApplianceDraft, ApplianceLedger, CatalogEntry};
use crate::notify::{Notification, Notifier, SizingSummary};
use crate::sink::StatsSink;
use crate::sizing;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct CalculatorSession {
    ledger: ApplianceLedger,
    draft: ApplianceDraft,
    params: SystemParameters,
    in_flight: Arc<AtomicBool>,
    sink: Arc<dyn StatsSink>,
    notifier: Arc<dyn Notifier>,
}

impl CalculatorSession {
    /// Open a fresh session with an empty ledger
    pub fn new(
        params: SystemParameters,
        sink: Arc<dyn StatsSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        log::debug!("Opening calculator session (sink: {})", sink.name());
        Self {
            ledger: ApplianceLedger::new(),
            draft: ApplianceDraft::default(),
            params,
            in_flight: Arc::new(AtomicBool::new(false)),
            sink,
            notifier,
        }
    }

    pub fn ledger(&self) -> &ApplianceLedger {
        &self.ledger
    }

    pub fn draft(&self) -> &ApplianceDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ApplianceDraft {
        &mut self.draft
    }

    pub fn params(&self) -> &SystemParameters {
        &self.params
    }

    pub fn set_params(&mut self, params: SystemParameters) {
        self.params = params;
    }

    /// Move the draft into the ledger.
    ///
    /// On success the draft is reset; on failure it keeps the entered values
    /// and a field-specific validation notification is sent.
    pub fn add_draft(&mut self) -> std::result::Result<(), ValidationError> {
        match self.ledger.add(self.draft.to_appliance()) {
            Ok(()) => {
                self.draft = ApplianceDraft::default();
                Ok(())
            }
            Err(err) => {
                self.notifier.notify(&Notification::Validation(err.clone()));
                Err(err)
            }
        }
    }

    pub fn quick_add(&mut self, entry: &CatalogEntry) {
        self.ledger.add_from_catalog(entry);
    }

    pub fn remove_at(&mut self, index: usize) {
        self.ledger.remove_at(index);
    }

    /// A store is in flight
    pub fn is_calculating(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Shared view of the in-flight state, readable while
    /// `calculate_power_needs` holds the session
    pub fn in_flight(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.in_flight)
    }

    /// Whether the calculate trigger should be enabled
    pub fn can_calculate(&self) -> bool {
        !self.is_calculating() && !self.ledger.is_empty()
    }

    /// Size the system for the current ledger, store the result and notify.
    ///
    /// Nothing reaches the sink when the ledger is empty or the parameters
    /// are invalid. A failed store is reported once and not retried.
    pub async fn calculate_power_needs(&mut self) -> Result<StatsRecord> {
        if self.ledger.is_empty() {
            self.notifier.notify(&Notification::EmptyInput);
            return Err(Error::EmptyInput);
        }
        if let Err(err) = self.params.validate() {
            self.notifier.notify(&Notification::Validation(err.clone()));
            return Err(err.into());
        }

        let result = sizing::calculate(self.ledger.list(), &self.params)?;
        log::info!(
            "Sized {} appliances: {:.0} Wh/day, solar {:.3} kW, battery {:.3} kWh, inverter {:.3} kW",
            self.ledger.len(),
            result.daily_usage_wh,
            result.solar_size_kw,
            result.battery_size_kwh,
            result.inverter_size_kw
        );

        let stored = {
            let _guard = InFlightGuard::set(&self.in_flight);
            self.sink.insert(&StatsRow::new(&result, &self.params)).await
        };

        match stored {
            Ok(record) => {
                self.notifier
                    .notify(&Notification::Success(SizingSummary::from_result(&result)));
                Ok(record)
            }
            Err(e) => {
                log::error!("Error storing calculation via {}: {}", self.sink.name(), e);
                self.notifier.notify(&Notification::Failure);
                Err(e)
            }
        }
    }
}

/// Marks a store as in flight until dropped, including when the
/// surrounding future is dropped mid-await
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn set(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
