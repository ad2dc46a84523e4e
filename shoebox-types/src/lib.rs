//! Core type definitions for Shoebox.
//!
//! This crate defines the canonical shape of a tax-year record as it moves
//! through the system:
//! - Owner identifiers (opaque, supplied by the session layer)
//! - The filing profile (province, marital status, capability flags)
//! - Monetary entries, income slips, self-employment sub-records
//! - The full `TaxYearRecord` aggregate and its seeded default
//!
//! Serialization uses camelCase field names so the JSON export matches the
//! external record shape exactly (`taxYear`, `incomeSlips`, ...). Validation
//! of untrusted input lives in `shoebox-schema`, not here.

mod ids;
mod profile;
mod record;

pub use ids::OwnerId;
pub use profile::{FilingProfile, MaritalStatus, ProvinceCode};
pub use record::{
    DocumentRef, ExpenseEntry, IncomeSlip, MoneyEntry, SelfEmployment, SlipType, TaxYearRecord,
};
