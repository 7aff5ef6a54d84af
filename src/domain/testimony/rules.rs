//! Declarative field rules for the testimony form.
//!
//! Rules are plain records evaluated in order. Within a field, evaluation
//! stops at the first failing rule, so each field reports at most one error.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, not `null`, and not the empty string.
    NotEmpty,
    /// A JSON string.
    IsString,
    /// A string of at least this many characters.
    MinLength(usize),
}

impl Rule {
    /// Machine-readable rule name.
    pub fn code(&self) -> &'static str {
        match self {
            Rule::NotEmpty => "not_empty",
            Rule::IsString => "is_string",
            Rule::MinLength(_) => "min_length",
        }
    }

    fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Rule::NotEmpty => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Rule::IsString => matches!(value, Some(Value::String(_))),
            Rule::MinLength(min) => value
                .and_then(Value::as_str)
                .is_some_and(|s| s.chars().count() >= *min),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self {
            field,
            rule,
            message,
        }
    }
}

const INPUT_REQUIRED: &str = "Input required";
const MUST_BE_STRING: &str = "The value should be type string.";

pub const TESTIMONY_RULES: &[FieldRule] = &[
    FieldRule::new("name", Rule::NotEmpty, INPUT_REQUIRED),
    FieldRule::new("name", Rule::IsString, MUST_BE_STRING),
    FieldRule::new(
        "name",
        Rule::MinLength(5),
        "String must be more than 4 characters",
    ),
    FieldRule::new("content", Rule::NotEmpty, INPUT_REQUIRED),
    FieldRule::new("content", Rule::IsString, MUST_BE_STRING),
];

/// The first failing rule of each field, in rule order.
/// A non-object document has no fields.
pub fn failing_rules<'a>(rules: &'a [FieldRule], document: &Value) -> Vec<&'a FieldRule> {
    let mut failed: Vec<&FieldRule> = Vec::new();

    for rule in rules {
        if failed.iter().any(|f| f.field == rule.field) {
            continue;
        }
        if !rule.rule.passes(document.get(rule.field)) {
            failed.push(rule);
        }
    }

    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(document: serde_json::Value) -> Vec<(&'static str, &'static str)> {
        failing_rules(TESTIMONY_RULES, &document)
            .into_iter()
            .map(|rule| (rule.field, rule.message))
            .collect()
    }

    #[test]
    fn short_name_fails_on_length() {
        assert_eq!(
            messages(json!({"name": "Bob", "content": "hi"})),
            vec![("name", "String must be more than 4 characters")]
        );
    }

    #[test]
    fn valid_submission_passes() {
        assert!(messages(json!({"name": "Roberto", "content": "Great service"})).is_empty());
    }

    #[test]
    fn missing_fields_report_required_once_each() {
        assert_eq!(
            messages(json!({})),
            vec![("name", INPUT_REQUIRED), ("content", INPUT_REQUIRED)]
        );
    }

    #[test]
    fn null_and_empty_string_are_empty() {
        assert_eq!(
            messages(json!({"name": null, "content": ""})),
            vec![("name", INPUT_REQUIRED), ("content", INPUT_REQUIRED)]
        );
    }

    #[test]
    fn non_string_stops_before_length_check() {
        assert_eq!(
            messages(json!({"name": 12345, "content": true})),
            vec![("name", MUST_BE_STRING), ("content", MUST_BE_STRING)]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(messages(json!({"name": "Zoë", "content": "ok"})).len(), 1);
        assert!(messages(json!({"name": "Zoëli", "content": "ok"})).is_empty());
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(messages(json!({"name": "     ", "content": " "})).is_empty());
    }

    #[test]
    fn failing_rules_expose_codes() {
        let failed = failing_rules(TESTIMONY_RULES, &json!({"name": "Bob"}));
        let codes: Vec<(&str, &str)> = failed.iter().map(|r| (r.field, r.rule.code())).collect();
        assert_eq!(codes, vec![("name", "min_length"), ("content", "not_empty")]);
    }

    #[test]
    fn non_object_document_has_no_fields() {
        assert_eq!(messages(json!(["Roberto", "Great service"])).len(), 2);
    }
}
