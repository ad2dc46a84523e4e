//! The canonical tax-record shape and the validation entry point.

use crate::error::{ValidationErrors, Violation};
use crate::rule::FieldRule;
use chrono::Datelike;
use serde_json::Value;
use shoebox_types::{MaritalStatus, ProvinceCode, SlipType, TaxYearRecord};

/// Builds the rule tree for a tax-year record.
///
/// `current_year` bounds the time-relative checks (`taxYear`,
/// `birthYear`); everything else is fixed.
pub fn record_shape(current_year: i64) -> FieldRule {
    let money_entry = || {
        FieldRule::Object(vec![
            ("amount", FieldRule::NonNegativeNumber),
            (
                "source",
                FieldRule::optional(FieldRule::Text { non_empty: true }),
            ),
        ])
    };

    let profile = FieldRule::Object(vec![
        (
            "fullName",
            FieldRule::optional(FieldRule::Text { non_empty: true }),
        ),
        ("email", FieldRule::optional(FieldRule::Email)),
        (
            "birthYear",
            FieldRule::optional(FieldRule::BoundedInt {
                min: 1900,
                max: current_year,
            }),
        ),
        // Absent province is not an error: it defaults to ON.
        (
            "province",
            FieldRule::optional(FieldRule::EnumOf(&ProvinceCode::CODES)),
        ),
        ("maritalStatus", FieldRule::EnumOf(&MaritalStatus::VALUES)),
        (
            "maritalStatusDate",
            FieldRule::optional(FieldRule::Text { non_empty: false }),
        ),
        ("hasDependants", FieldRule::Bool),
        (
            "dependantsCount",
            FieldRule::optional(FieldRule::BoundedInt { min: 0, max: 20 }),
        ),
        ("isStudent", FieldRule::Bool),
        ("hasEmploymentIncome", FieldRule::Bool),
        ("hasInvestmentIncome", FieldRule::Bool),
        ("hasRrsp", FieldRule::Bool),
        ("hasMedicalExpenses", FieldRule::Bool),
        ("hasRentOrPropertyTax", FieldRule::Bool),
        ("hasSelfEmployment", FieldRule::Bool),
        ("hasDonations", FieldRule::Bool),
    ]);

    let income_slip = FieldRule::Object(vec![
        ("slipType", FieldRule::EnumOf(&SlipType::VALUES)),
        ("issuerName", FieldRule::Text { non_empty: true }),
        ("box14", FieldRule::optional(FieldRule::NonNegativeNumber)),
        ("amount", FieldRule::NonNegativeNumber),
        (
            "notes",
            FieldRule::optional(FieldRule::Text { non_empty: false }),
        ),
    ]);

    let self_employment = FieldRule::Object(vec![
        ("businessName", FieldRule::Text { non_empty: true }),
        ("income", FieldRule::NonNegativeNumber),
        (
            "expenses",
            FieldRule::array(FieldRule::Object(vec![
                ("category", FieldRule::Text { non_empty: true }),
                ("amount", FieldRule::NonNegativeNumber),
            ])),
        ),
    ]);

    let document = FieldRule::Object(vec![
        ("label", FieldRule::Text { non_empty: true }),
        ("documentType", FieldRule::Text { non_empty: true }),
    ]);

    FieldRule::Object(vec![
        (
            "taxYear",
            FieldRule::BoundedInt {
                min: 2000,
                max: current_year,
            },
        ),
        ("profile", profile),
        ("incomeSlips", FieldRule::array(income_slip)),
        ("rrsp", FieldRule::array(money_entry())),
        ("tuition", FieldRule::array(money_entry())),
        ("medicalExpenses", FieldRule::array(money_entry())),
        ("rentHousing", FieldRule::array(money_entry())),
        ("donations", FieldRule::array(money_entry())),
        ("selfEmployment", FieldRule::optional(self_employment)),
        ("documents", FieldRule::array(document)),
        (
            "notes",
            FieldRule::optional(FieldRule::Text { non_empty: false }),
        ),
    ])
}

/// Validates untrusted structured data against the canonical record shape.
///
/// On success returns the fully-typed record with defaults applied
/// (absent `province` becomes `ON`). On failure returns every violation
/// found, one per field path. Pure: the only ambient input is today's
/// date, for the year bounds.
pub fn validate(candidate: &Value) -> Result<TaxYearRecord, ValidationErrors> {
    let current_year = i64::from(chrono::Utc::now().year());
    let mut violations = Vec::new();
    record_shape(current_year).check(candidate, "", &mut violations);
    if !violations.is_empty() {
        return Err(ValidationErrors { violations });
    }

    // Null optionals passed the shape check as absent; drop them so the
    // typed deserialization (and the province default) sees them as
    // absent too. After that, the shape check guarantees deserialization
    // succeeds; a failure here means the rule tree and the types have
    // drifted apart.
    serde_json::from_value(without_nulls(candidate)).map_err(|e| ValidationErrors {
        violations: vec![Violation {
            field_path: String::new(),
            message: format!("record shape mismatch: {}", e),
        }],
    })
}

/// Removes null-valued object entries, recursively. A null optional field
/// means the same thing as an absent one.
fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), without_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(without_nulls).collect()),
        other => other.clone(),
    }
}
