//! The tax-year record aggregate and its monetary sub-entries.

use crate::profile::{FilingProfile, MaritalStatus, ProvinceCode};
use serde::{Deserialize, Serialize};

/// Type of a Canadian income slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlipType {
    T4,
    T5,
    T3,
}

impl SlipType {
    /// All valid external values.
    pub const VALUES: [&'static str; 3] = ["T4", "T5", "T3"];
}

/// A single monetary entry: a non-negative amount plus an optional
/// source label. Order within a sequence is preserved for display but
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyEntry {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl MoneyEntry {
    /// A zero entry with no source, used to seed empty money buckets.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            amount: 0.0,
            source: None,
        }
    }
}

/// One income slip (T4/T5/T3) as reported by its issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSlip {
    pub slip_type: SlipType,
    pub issuer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box14: Option<f64>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A categorized self-employment expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub category: String,
    pub amount: f64,
}

/// Self-employment sub-record: business name, income, categorized expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfEmployment {
    pub business_name: String,
    pub income: f64,
    pub expenses: Vec<ExpenseEntry>,
}

/// Reference to a supporting document. Metadata only, no binary content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub label: String,
    pub document_type: String,
}

/// The canonical validated entity: everything the filer collected for
/// one tax year.
///
/// A `TaxYearRecord` is owned by the caller until it is handed to the
/// field cipher; from there the ciphertext belongs to the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxYearRecord {
    pub tax_year: i32,
    pub profile: FilingProfile,
    pub income_slips: Vec<IncomeSlip>,
    pub rrsp: Vec<MoneyEntry>,
    pub tuition: Vec<MoneyEntry>,
    pub medical_expenses: Vec<MoneyEntry>,
    pub rent_housing: Vec<MoneyEntry>,
    pub donations: Vec<MoneyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_employment: Option<SelfEmployment>,
    pub documents: Vec<DocumentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TaxYearRecord {
    /// The seeded starting record for a given tax year: Ontario, single,
    /// employment income on, one zero entry in each money bucket.
    #[must_use]
    pub fn default_for_year(tax_year: i32) -> Self {
        Self {
            tax_year,
            profile: FilingProfile {
                full_name: None,
                email: None,
                birth_year: None,
                province: ProvinceCode::ON,
                marital_status: MaritalStatus::Single,
                marital_status_date: None,
                has_dependants: false,
                dependants_count: None,
                is_student: false,
                has_employment_income: true,
                has_investment_income: false,
                has_rrsp: false,
                has_medical_expenses: false,
                has_rent_or_property_tax: false,
                has_self_employment: false,
                has_donations: false,
            },
            income_slips: Vec::new(),
            rrsp: vec![MoneyEntry::zero()],
            tuition: vec![MoneyEntry::zero()],
            medical_expenses: vec![MoneyEntry::zero()],
            rent_housing: vec![MoneyEntry::zero()],
            donations: vec![MoneyEntry::zero()],
            self_employment: None,
            documents: Vec::new(),
            notes: None,
        }
    }
}
