use chrono::Datelike;
use serde_json::{json, Value};
use shoebox_schema::validate;
use shoebox_types::{ProvinceCode, TaxYearRecord};

fn current_year() -> i64 {
    i64::from(chrono::Utc::now().year())
}

/// A minimal valid candidate as it would arrive from a caller.
fn candidate(tax_year: i64) -> Value {
    json!({
        "taxYear": tax_year,
        "profile": {
            "province": "ON",
            "maritalStatus": "single",
            "hasDependants": false,
            "isStudent": false,
            "hasEmploymentIncome": true,
            "hasInvestmentIncome": false,
            "hasRrsp": false,
            "hasMedicalExpenses": false,
            "hasRentOrPropertyTax": false,
            "hasSelfEmployment": false,
            "hasDonations": false
        },
        "incomeSlips": [],
        "rrsp": [{"amount": 0}],
        "tuition": [{"amount": 0}],
        "medicalExpenses": [{"amount": 0}],
        "rentHousing": [{"amount": 0}],
        "donations": [{"amount": 0}],
        "documents": []
    })
}

// ── Year bounds ──────────────────────────────────────────────────

#[test]
fn tax_year_lower_bound() {
    assert!(validate(&candidate(2000)).is_ok());
    let err = validate(&candidate(1999)).unwrap_err();
    assert!(err.has_path("taxYear"));
}

#[test]
fn tax_year_upper_bound() {
    assert!(validate(&candidate(current_year())).is_ok());
    let err = validate(&candidate(current_year() + 1)).unwrap_err();
    assert!(err.has_path("taxYear"));
}

#[test]
fn birth_year_bounds() {
    let mut c = candidate(2023);
    c["profile"]["birthYear"] = json!(1899);
    assert!(validate(&c).unwrap_err().has_path("profile.birthYear"));

    c["profile"]["birthYear"] = json!(1900);
    assert!(validate(&c).is_ok());

    c["profile"]["birthYear"] = json!(current_year() + 1);
    assert!(validate(&c).unwrap_err().has_path("profile.birthYear"));
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn absent_province_defaults_to_ontario() {
    let mut c = candidate(2023);
    c["profile"].as_object_mut().unwrap().remove("province");
    let record = validate(&c).unwrap();
    assert_eq!(record.profile.province, ProvinceCode::ON);
}

#[test]
fn null_province_defaults_like_absent() {
    let mut c = candidate(2023);
    c["profile"]["province"] = json!(null);
    let record = validate(&c).unwrap();
    assert_eq!(record.profile.province, ProvinceCode::ON);
}

#[test]
fn null_optionals_accepted_everywhere() {
    let mut c = candidate(2023);
    c["notes"] = json!(null);
    c["selfEmployment"] = json!(null);
    c["profile"]["fullName"] = json!(null);
    c["profile"]["birthYear"] = json!(null);
    c["rrsp"] = json!([{"amount": 10.0, "source": null}]);

    let record = validate(&c).unwrap();
    assert!(record.notes.is_none());
    assert!(record.self_employment.is_none());
    assert!(record.profile.full_name.is_none());
    assert_eq!(record.rrsp[0].source, None);
}

// ── Closed enums ─────────────────────────────────────────────────

#[test]
fn unknown_province_rejected() {
    let mut c = candidate(2023);
    c["profile"]["province"] = json!("XX");
    assert!(validate(&c).unwrap_err().has_path("profile.province"));
}

#[test]
fn unknown_marital_status_rejected() {
    let mut c = candidate(2023);
    c["profile"]["maritalStatus"] = json!("engaged");
    assert!(validate(&c).unwrap_err().has_path("profile.maritalStatus"));
}

#[test]
fn unknown_slip_type_rejected() {
    let mut c = candidate(2023);
    c["incomeSlips"] = json!([{"slipType": "T4A", "issuerName": "Acme", "amount": 100}]);
    let err = validate(&c).unwrap_err();
    assert!(err.has_path("incomeSlips[0].slipType"));
}

// ── Amounts and counts ───────────────────────────────────────────

#[test]
fn negative_amount_rejected() {
    let mut c = candidate(2023);
    c["rrsp"] = json!([{"amount": -5.0}]);
    assert!(validate(&c).unwrap_err().has_path("rrsp[0].amount"));
}

#[test]
fn dependants_count_bounds() {
    let mut c = candidate(2023);
    c["profile"]["dependantsCount"] = json!(20);
    assert!(validate(&c).is_ok());
    c["profile"]["dependantsCount"] = json!(21);
    assert!(validate(&c)
        .unwrap_err()
        .has_path("profile.dependantsCount"));
}

#[test]
fn empty_issuer_name_rejected() {
    let mut c = candidate(2023);
    c["incomeSlips"] = json!([{"slipType": "T4", "issuerName": "", "amount": 100}]);
    assert!(validate(&c)
        .unwrap_err()
        .has_path("incomeSlips[0].issuerName"));
}

#[test]
fn self_employment_requires_business_name_and_categories() {
    let mut c = candidate(2023);
    c["selfEmployment"] = json!({
        "businessName": "",
        "income": 1000,
        "expenses": [{"category": "", "amount": -1}]
    });
    let err = validate(&c).unwrap_err();
    assert!(err.has_path("selfEmployment.businessName"));
    assert!(err.has_path("selfEmployment.expenses[0].category"));
    assert!(err.has_path("selfEmployment.expenses[0].amount"));
}

// ── Collect-all behavior ─────────────────────────────────────────

#[test]
fn all_violations_reported_at_once() {
    let mut c = candidate(1999);
    c["profile"]["province"] = json!("XX");
    c["donations"] = json!([{"amount": -10}]);
    let err = validate(&c).unwrap_err();
    assert!(err.violations.len() >= 3);
    assert!(err.has_path("taxYear"));
    assert!(err.has_path("profile.province"));
    assert!(err.has_path("donations[0].amount"));
}

#[test]
fn missing_required_fields_reported() {
    let err = validate(&json!({"taxYear": 2023})).unwrap_err();
    assert!(err.has_path("profile"));
    assert!(err.has_path("incomeSlips"));
    assert!(err.has_path("documents"));
}

#[test]
fn unknown_top_level_field_rejected() {
    let mut c = candidate(2023);
    c["sin"] = json!("000-000-000");
    assert!(validate(&c).unwrap_err().has_path("sin"));
}

#[test]
fn completely_wrong_input_is_one_violation() {
    let err = validate(&json!("not an object")).unwrap_err();
    assert_eq!(err.violations.len(), 1);
}

// ── Round-trip losslessness ──────────────────────────────────────

#[test]
fn validator_output_roundtrips_through_itself() {
    let mut record = TaxYearRecord::default_for_year(2023);
    record.profile.full_name = Some("Sam Filer".to_string());
    record.profile.email = Some("sam@example.com".to_string());
    record.notes = Some("".to_string());

    let exported = serde_json::to_value(&record).unwrap();
    let revalidated = validate(&exported).unwrap();
    assert_eq!(revalidated, record);
}

#[test]
fn default_record_validates() {
    let value = serde_json::to_value(TaxYearRecord::default_for_year(2023)).unwrap();
    assert!(validate(&value).is_ok());
}
