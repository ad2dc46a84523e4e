//! Filing profile: province, marital status, and capability flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-letter Canadian province or territory code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProvinceCode {
    ON,
    AB,
    BC,
    MB,
    NB,
    NL,
    NS,
    NT,
    NU,
    PE,
    QC,
    SK,
    YT,
}

impl ProvinceCode {
    /// All valid codes, in the order they are documented.
    pub const CODES: [&'static str; 13] = [
        "ON", "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "PE", "QC", "SK", "YT",
    ];

    /// Returns the two-letter code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ON => "ON",
            Self::AB => "AB",
            Self::BC => "BC",
            Self::MB => "MB",
            Self::NB => "NB",
            Self::NL => "NL",
            Self::NS => "NS",
            Self::NT => "NT",
            Self::NU => "NU",
            Self::PE => "PE",
            Self::QC => "QC",
            Self::SK => "SK",
            Self::YT => "YT",
        }
    }
}

impl fmt::Display for ProvinceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marital status, serialized in kebab-case (`common-law`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaritalStatus {
    Single,
    Married,
    CommonLaw,
    Separated,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// All valid external values.
    pub const VALUES: [&'static str; 6] = [
        "single",
        "married",
        "common-law",
        "separated",
        "divorced",
        "widowed",
    ];
}

/// Who the filer is and which parts of the wizard apply to them.
///
/// PII-light by design: an optional name/email/birth year, never a full
/// date of birth and never a national identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default = "default_province")]
    pub province: ProvinceCode,
    pub marital_status: MaritalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status_date: Option<String>,
    pub has_dependants: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependants_count: Option<u32>,
    pub is_student: bool,
    pub has_employment_income: bool,
    pub has_investment_income: bool,
    pub has_rrsp: bool,
    pub has_medical_expenses: bool,
    pub has_rent_or_property_tax: bool,
    pub has_self_employment: bool,
    pub has_donations: bool,
}

fn default_province() -> ProvinceCode {
    ProvinceCode::ON
}

impl FilingProfile {
    /// Looks up a capability flag by its external camelCase name.
    ///
    /// This is how the data-driven rule table addresses flags; returns
    /// `None` for names that are not boolean flags.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "hasDependants" => Some(self.has_dependants),
            "isStudent" => Some(self.is_student),
            "hasEmploymentIncome" => Some(self.has_employment_income),
            "hasInvestmentIncome" => Some(self.has_investment_income),
            "hasRrsp" => Some(self.has_rrsp),
            "hasMedicalExpenses" => Some(self.has_medical_expenses),
            "hasRentOrPropertyTax" => Some(self.has_rent_or_property_tax),
            "hasSelfEmployment" => Some(self.has_self_employment),
            "hasDonations" => Some(self.has_donations),
            _ => None,
        }
    }
}
