//! Schema-as-data: the rule tree a candidate record is checked against.
//!
//! Each `FieldRule` variant checks one JSON value and reports violations
//! against its field path. Checking never stops early: every violation in
//! the tree is collected so the caller sees the full picture in one pass.

use crate::error::Violation;
use serde_json::Value;

/// A single declarative validation rule.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// A boolean flag.
    Bool,
    /// An integer within an inclusive range.
    BoundedInt { min: i64, max: i64 },
    /// A real number that must be >= 0 (monetary amounts).
    NonNegativeNumber,
    /// A string; `non_empty` additionally rejects the empty string.
    Text { non_empty: bool },
    /// An e-mail address (minimal local@domain shape check).
    Email,
    /// A string restricted to a closed set of values.
    EnumOf(&'static [&'static str]),
    /// The wrapped rule, or absent/null.
    Optional(Box<FieldRule>),
    /// An ordered sequence where every element matches the inner rule.
    Array(Box<FieldRule>),
    /// A closed object shape: required and optional named fields, no
    /// unknown keys.
    Object(Vec<(&'static str, FieldRule)>),
}

impl FieldRule {
    /// Shorthand for an optional wrapper.
    pub fn optional(inner: FieldRule) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Shorthand for an array of the inner rule.
    pub fn array(inner: FieldRule) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Checks `value` against this rule, appending violations to `out`.
    pub fn check(&self, value: &Value, path: &str, out: &mut Vec<Violation>) {
        match self {
            Self::Bool => {
                if !value.is_boolean() {
                    push(out, path, "expected a boolean");
                }
            }
            Self::BoundedInt { min, max } => match value.as_i64() {
                Some(n) if (*min..=*max).contains(&n) => {}
                Some(n) => push(
                    out,
                    path,
                    format!("must be between {} and {}, got {}", min, max, n),
                ),
                None => push(out, path, "expected an integer"),
            },
            Self::NonNegativeNumber => match value.as_f64() {
                Some(n) if n >= 0.0 => {}
                Some(n) => push(out, path, format!("must not be negative, got {}", n)),
                None => push(out, path, "expected a number"),
            },
            Self::Text { non_empty } => match value.as_str() {
                Some(s) if *non_empty && s.is_empty() => {
                    push(out, path, "must not be empty");
                }
                Some(_) => {}
                None => push(out, path, "expected a string"),
            },
            Self::Email => match value.as_str() {
                Some(s) if is_plausible_email(s) => {}
                Some(_) => push(out, path, "not a valid email address"),
                None => push(out, path, "expected a string"),
            },
            Self::EnumOf(values) => match value.as_str() {
                Some(s) if values.contains(&s) => {}
                Some(s) => push(
                    out,
                    path,
                    format!("'{}' is not one of [{}]", s, values.join(", ")),
                ),
                None => push(out, path, "expected a string"),
            },
            Self::Optional(inner) => {
                if !value.is_null() {
                    inner.check(value, path, out);
                }
            }
            Self::Array(inner) => match value.as_array() {
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        inner.check(item, &format!("{}[{}]", path, i), out);
                    }
                }
                None => push(out, path, "expected an array"),
            },
            Self::Object(fields) => {
                let Some(map) = value.as_object() else {
                    push(out, path, "expected an object");
                    return;
                };
                for (name, rule) in fields {
                    let child = join(path, name);
                    match map.get(*name) {
                        Some(v) => rule.check(v, &child, out),
                        None => {
                            if !matches!(rule, Self::Optional(_)) {
                                push(out, &child, "missing required field");
                            }
                        }
                    }
                }
                // Closed shape: anything not declared is rejected.
                for key in map.keys() {
                    if !fields.iter().any(|(name, _)| *name == key.as_str()) {
                        push(out, &join(path, key), "unknown field");
                    }
                }
            }
        }
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn push(out: &mut Vec<Violation>, path: &str, message: impl Into<String>) {
    out.push(Violation {
        field_path: path.to_string(),
        message: message.into(),
    });
}

fn is_plausible_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: &FieldRule, value: Value) -> Vec<Violation> {
        let mut out = Vec::new();
        rule.check(&value, "x", &mut out);
        out
    }

    #[test]
    fn bounded_int_edges() {
        let rule = FieldRule::BoundedInt { min: 0, max: 20 };
        assert!(check(&rule, json!(0)).is_empty());
        assert!(check(&rule, json!(20)).is_empty());
        assert!(!check(&rule, json!(-1)).is_empty());
        assert!(!check(&rule, json!(21)).is_empty());
        assert!(!check(&rule, json!(3.5)).is_empty());
        assert!(!check(&rule, json!("7")).is_empty());
    }

    #[test]
    fn non_negative_number() {
        let rule = FieldRule::NonNegativeNumber;
        assert!(check(&rule, json!(0)).is_empty());
        assert!(check(&rule, json!(1200.55)).is_empty());
        assert!(!check(&rule, json!(-0.01)).is_empty());
    }

    #[test]
    fn enum_of_closed_set() {
        let rule = FieldRule::EnumOf(&["T4", "T5", "T3"]);
        assert!(check(&rule, json!("T4")).is_empty());
        let violations = check(&rule, json!("T4A"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("T4A"));
    }

    #[test]
    fn optional_accepts_null_and_absent() {
        let rule = FieldRule::optional(FieldRule::Bool);
        assert!(check(&rule, json!(null)).is_empty());
        assert!(check(&rule, json!(true)).is_empty());
        assert!(!check(&rule, json!("yes")).is_empty());
    }

    #[test]
    fn array_reports_indexed_paths() {
        let rule = FieldRule::array(FieldRule::NonNegativeNumber);
        let violations = check(&rule, json!([1.0, -2.0, 3.0]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field_path, "x[1]");
    }

    #[test]
    fn object_rejects_unknown_fields() {
        let rule = FieldRule::Object(vec![("a", FieldRule::Bool)]);
        let violations = check(&rule, json!({"a": true, "b": 1}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field_path, "x.b");
    }

    #[test]
    fn email_shapes() {
        let rule = FieldRule::Email;
        assert!(check(&rule, json!("sam@example.com")).is_empty());
        assert!(!check(&rule, json!("not-an-email")).is_empty());
        assert!(!check(&rule, json!("@example.com")).is_empty());
    }
}
