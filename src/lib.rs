//! Solar Sizer library
//!
//! Off-grid system sizing: appliance ledger, sizing calculator, and the
//! persistence and notification plumbing around them.

pub mod calculator;
pub mod core;
pub mod db;
pub mod i18n;
pub mod ledger;
pub mod notify;
pub mod sink;
pub mod sizing;
