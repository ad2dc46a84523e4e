//! Data-driven checklist and wizard-section rules.
//!
//! This crate is pure lookup glue: a versioned JSON rule table maps
//! profile capability flags to wizard section names and checklist lines.
//! The core consumes it at the boundary; it holds no algorithmic state
//! and no security invariants of its own.
//!
//! The only rule layered in code rather than data is the jurisdictional
//! one: the Ontario rent/property-tax checklist line, gated on both the
//! province and the housing flag.

use serde::Deserialize;
use shoebox_types::{ProvinceCode, TaxYearRecord};
use std::sync::OnceLock;
use thiserror::Error;

/// Baseline wizard sections every record gets, before any flag applies.
const BASE_SECTIONS: [&str; 2] = ["profile", "consent"];

/// The terminal section, always last.
const REVIEW_SECTION: &str = "review";

/// Baseline checklist line present for every profile.
const IDENTITY_CHECK: &str =
    "Government-issued ID for identity checks (no SIN requested in this tool).";

/// Ontario-specific housing line, gated on province ON plus the
/// rent/property-tax flag.
const ONTARIO_HOUSING: &str =
    "Ontario: Collect annual rent or property tax totals for credit eligibility review.";

/// Errors loading a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid rule table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One rule: when `condition` (a profile flag, by its external camelCase
/// name) is true, `section` joins the wizard and `checklist` lines join
/// the document checklist.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub id: String,
    pub condition: String,
    pub section: String,
    pub checklist: Vec<String>,
}

/// A versioned table of rules.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSet {
    pub version: String,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// The rule table shipped with this build (`rules/v1.json`).
    pub fn builtin() -> &'static RuleSet {
        static BUILTIN: OnceLock<RuleSet> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            RuleSet::from_json(include_str!("../rules/v1.json"))
                .expect("embedded rule table is valid")
        })
    }

    /// Parses a rule table from JSON, e.g. a future `v2.json`.
    pub fn from_json(json: &str) -> Result<RuleSet, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wizard section names for a record: the baseline sections, then one
    /// per matching rule, then the terminal review section. Deduplicated,
    /// insertion order.
    #[must_use]
    pub fn wizard_sections(&self, record: &TaxYearRecord) -> Vec<String> {
        let mut sections: Vec<String> = Vec::new();
        for base in BASE_SECTIONS {
            push_unique(&mut sections, base.to_string());
        }
        for rule in self.matching(record) {
            push_unique(&mut sections, rule.section.clone());
        }
        push_unique(&mut sections, REVIEW_SECTION.to_string());
        sections
    }

    /// Document checklist for a record: the baseline identity-check item,
    /// every matching rule's lines, and the Ontario housing line when the
    /// record is both Ontarian and claims rent/property tax. Deduplicated.
    #[must_use]
    pub fn checklist(&self, record: &TaxYearRecord) -> Vec<String> {
        let mut items = vec![IDENTITY_CHECK.to_string()];
        for rule in self.matching(record) {
            for line in &rule.checklist {
                push_unique(&mut items, line.clone());
            }
        }
        if record.profile.province == ProvinceCode::ON && record.profile.has_rent_or_property_tax {
            push_unique(&mut items, ONTARIO_HOUSING.to_string());
        }
        items
    }

    fn matching<'a>(&'a self, record: &'a TaxYearRecord) -> impl Iterator<Item = &'a Rule> {
        self.rules
            .iter()
            .filter(|rule| record.profile.flag(&rule.condition).unwrap_or(false))
    }
}

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}
