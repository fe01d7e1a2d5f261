//! Parameter schemas declared by tools.
//!
//! A tool describes each parameter with a JSON type, a description and a
//! required flag. The same declaration drives the manifest entry and the
//! validation of incoming calls.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::DispatchError;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParamType {
    /// Name used in the manifest and in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Whether `value` is an instance of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
}

impl ParameterSpec {
    /// A required parameter.
    pub fn required(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required: true,
        }
    }

    /// An optional parameter.
    pub fn optional(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, param_type, description)
        }
    }
}

/// Manifest shape of a parameter: `{type, description, required}`.
#[derive(Debug, Serialize)]
pub struct ParameterEntry<'a> {
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: &'a str,
    pub required: bool,
}

impl<'a> From<&'a ParameterSpec> for ParameterEntry<'a> {
    fn from(spec: &'a ParameterSpec) -> Self {
        Self {
            param_type: spec.param_type,
            description: &spec.description,
            required: spec.required,
        }
    }
}

/// Name of the JSON type of `value`, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check `raw` against the declared parameters.
///
/// Required parameters must all be present and non-null before any type is
/// checked. Supplied values are then matched against their declared type in
/// declaration order, and keys that are not declared are rejected last. Null
/// optional values are dropped from the returned map.
pub fn validate_arguments(
    specs: &[ParameterSpec],
    mut raw: Map<String, Value>,
) -> Result<Map<String, Value>, DispatchError> {
    if let Some(missing) = specs
        .iter()
        .filter(|spec| spec.required)
        .find(|spec| raw.get(&spec.name).is_none_or(Value::is_null))
    {
        return Err(DispatchError::missing_parameter(&missing.name));
    }

    let mut validated = Map::new();

    for spec in specs {
        let Some(value) = raw.remove(&spec.name).filter(|v| !v.is_null()) else {
            continue;
        };
        if !spec.param_type.accepts(&value) {
            return Err(DispatchError::InvalidParameterType {
                name: spec.name.clone(),
                expected: spec.param_type,
                found: json_type_name(&value),
            });
        }
        validated.insert(spec.name.clone(), value);
    }

    if let Some(unexpected) = raw.into_iter().map(|(key, _)| key).min() {
        return Err(DispatchError::UnexpectedParameter(unexpected));
    }

    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claim_spec() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::required("claim", ParamType::String, "The claim"),
            ParameterSpec::optional("limit", ParamType::Integer, "How many"),
        ]
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_param_type_accepts() {
        assert!(ParamType::String.accepts(&json!("x")));
        assert!(!ParamType::String.accepts(&json!(1)));
        assert!(ParamType::Integer.accepts(&json!(3)));
        assert!(!ParamType::Integer.accepts(&json!(3.5)));
        assert!(ParamType::Number.accepts(&json!(3.5)));
        assert!(ParamType::Number.accepts(&json!(3)));
        assert!(ParamType::Boolean.accepts(&json!(true)));
        assert!(!ParamType::Boolean.accepts(&json!("true")));
    }

    #[test]
    fn test_param_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ParamType::String).unwrap(), json!("string"));
        assert_eq!(ParamType::Integer.to_string(), "integer");
    }

    #[test]
    fn test_validate_accepts_required_only() {
        let params =
            validate_arguments(&claim_spec(), object(json!({ "claim": "moon is cheese" })))
                .unwrap();
        assert_eq!(params.get("claim"), Some(&json!("moon is cheese")));
        assert!(params.get("limit").is_none());
    }

    #[test]
    fn test_validate_missing_required() {
        let err = validate_arguments(&claim_spec(), Map::new()).unwrap_err();
        assert_eq!(err, DispatchError::MissingParameter("claim".to_string()));
    }

    #[test]
    fn test_validate_null_required_is_missing() {
        let err = validate_arguments(&claim_spec(), object(json!({ "claim": null }))).unwrap_err();
        assert_eq!(err, DispatchError::MissingParameter("claim".to_string()));
    }

    #[test]
    fn test_validate_null_optional_is_dropped() {
        let params = validate_arguments(
            &claim_spec(),
            object(json!({ "claim": "c", "limit": null })),
        )
        .unwrap();
        assert!(!params.contains_key("limit"));
    }

    #[test]
    fn test_validate_type_mismatch() {
        let err = validate_arguments(&claim_spec(), object(json!({ "claim": 42 }))).unwrap_err();
        assert_eq!(
            err,
            DispatchError::InvalidParameterType {
                name: "claim".to_string(),
                expected: ParamType::String,
                found: "integer",
            }
        );
        assert!(err.to_string().contains("claim"));
    }

    #[test]
    fn test_validate_reports_missing_before_type_errors() {
        let specs = vec![
            ParameterSpec::optional("limit", ParamType::Integer, "How many"),
            ParameterSpec::required("claim", ParamType::String, "The claim"),
        ];
        let err = validate_arguments(&specs, object(json!({ "limit": "ten" }))).unwrap_err();
        assert_eq!(err, DispatchError::MissingParameter("claim".to_string()));
    }

    #[test]
    fn test_validate_rejects_unknown_fields() {
        let err = validate_arguments(
            &claim_spec(),
            object(json!({ "claim": "c", "zeta": 1, "alpha": 2 })),
        )
        .unwrap_err();
        assert_eq!(err, DispatchError::UnexpectedParameter("alpha".to_string()));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
