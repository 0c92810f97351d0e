use crate::domain::model::{ParamKind, ParamSpec};
use crate::utils::error::{MerakiError, Result};
use serde_json::{Map, Value};

/// Typed view over the `arguments` object of a `tools/call`.
///
/// MCP clients are loose with types: numbers arrive as strings, lists as
/// comma separated text and nested objects as JSON-encoded strings. Every
/// accessor accepts those forms. `null` and `""` count as absent.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    map: Map<String, Value>,
}

impl ToolArgs {
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self { map: map.clone() }),
            other => Err(MerakiError::invalid_argument(
                "arguments",
                format!("expected an object, got {}", type_name(other)),
            )),
        }
    }

    pub fn raw(&self, name: &str) -> Option<&Value> {
        match self.map.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(v) => Some(v),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    pub fn required_str(&self, name: &str) -> Result<String> {
        self.optional_str(name)?
            .ok_or_else(|| MerakiError::invalid_argument(name, "is required"))
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<String>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(other) => Err(MerakiError::invalid_argument(
                name,
                format!("expected a string, got {}", type_name(other)),
            )),
        }
    }

    pub fn optional_i64(&self, name: &str) -> Result<Option<i64>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(Some)
                .ok_or_else(|| MerakiError::invalid_argument(name, "expected an integer")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| MerakiError::invalid_argument(name, format!("'{}' is not an integer", s))),
            Some(other) => Err(MerakiError::invalid_argument(
                name,
                format!("expected an integer, got {}", type_name(other)),
            )),
        }
    }

    pub fn i64_or(&self, name: &str, default: i64) -> Result<i64> {
        Ok(self.optional_i64(name)?.unwrap_or(default))
    }

    pub fn optional_f64(&self, name: &str) -> Result<Option<f64>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| MerakiError::invalid_argument(name, format!("'{}' is not a number", s))),
            Some(other) => Err(MerakiError::invalid_argument(
                name,
                format!("expected a number, got {}", type_name(other)),
            )),
        }
    }

    pub fn optional_bool(&self, name: &str) -> Result<Option<bool>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Some(true)),
                "false" | "no" | "0" => Ok(Some(false)),
                _ => Err(MerakiError::invalid_argument(name, format!("'{}' is not a boolean", s))),
            },
            Some(Value::Number(n)) => Ok(Some(n.as_i64().unwrap_or(0) != 0)),
            Some(other) => Err(MerakiError::invalid_argument(
                name,
                format!("expected a boolean, got {}", type_name(other)),
            )),
        }
    }

    pub fn optional_string_list(&self, name: &str) -> Result<Option<Vec<String>>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(MerakiError::invalid_argument(
                        name,
                        format!("list items must be strings, got {}", type_name(other)),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.starts_with('[') {
                    let parsed: Value = serde_json::from_str(trimmed).map_err(|e| {
                        MerakiError::invalid_argument(name, format!("invalid JSON list: {}", e))
                    })?;
                    let nested = ToolArgs {
                        map: Map::from_iter([(name.to_string(), parsed)]),
                    };
                    return nested.optional_string_list(name);
                }
                Ok(Some(
                    trimmed
                        .split(',')
                        .map(|part| part.trim().to_string())
                        .filter(|part| !part.is_empty())
                        .collect(),
                ))
            }
            Some(other) => Err(MerakiError::invalid_argument(
                name,
                format!("expected a list, got {}", type_name(other)),
            )),
        }
    }

    pub fn optional_json(&self, name: &str) -> Result<Option<Value>> {
        match self.raw(name) {
            None => Ok(None),
            Some(Value::String(s)) => serde_json::from_str(s)
                .map(Some)
                .map_err(|e| MerakiError::invalid_argument(name, format!("invalid JSON: {}", e))),
            Some(v) => Ok(Some(v.clone())),
        }
    }

    /// Converts the argument for `spec` into the JSON value sent to the API.
    pub fn value_for(&self, spec: &ParamSpec) -> Result<Option<Value>> {
        let value = match spec.kind {
            ParamKind::String => self.optional_str(spec.name)?.map(Value::String),
            ParamKind::Integer => self.optional_i64(spec.name)?.map(Value::from),
            ParamKind::Number => self.optional_f64(spec.name)?.map(Value::from),
            ParamKind::Boolean => self.optional_bool(spec.name)?.map(Value::Bool),
            ParamKind::StringArray => self
                .optional_string_list(spec.name)?
                .map(|items| Value::Array(items.into_iter().map(Value::String).collect())),
            ParamKind::Json => self.optional_json(spec.name)?,
        };

        if value.is_none() && spec.required {
            return Err(MerakiError::invalid_argument(spec.name, "is required"));
        }
        Ok(value)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ParamLocation;
    use serde_json::json;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::from_value(&value).unwrap()
    }

    #[test]
    fn test_empty_and_null_are_absent() {
        let a = args(json!({"network_id": "", "serial": null}));
        assert!(!a.contains("network_id"));
        assert!(a.optional_str("serial").unwrap().is_none());
        assert!(a.required_str("network_id").is_err());
    }

    #[test]
    fn test_loose_numbers_and_booleans() {
        let a = args(json!({"timespan": "3600", "per_page": 100, "enabled": "true", "vlan": 10}));
        assert_eq!(a.optional_i64("timespan").unwrap(), Some(3600));
        assert_eq!(a.optional_i64("per_page").unwrap(), Some(100));
        assert_eq!(a.optional_bool("enabled").unwrap(), Some(true));
        assert_eq!(a.optional_str("vlan").unwrap().as_deref(), Some("10"));
        assert!(args(json!({"timespan": "soon"})).optional_i64("timespan").is_err());
    }

    #[test]
    fn test_string_lists() {
        let a = args(json!({
            "csv": "auth_fail, dhcp_no_lease",
            "json": "[\"a\", \"b\"]",
            "array": ["x", 1]
        }));
        assert_eq!(
            a.optional_string_list("csv").unwrap().unwrap(),
            vec!["auth_fail", "dhcp_no_lease"]
        );
        assert_eq!(a.optional_string_list("json").unwrap().unwrap(), vec!["a", "b"]);
        assert_eq!(a.optional_string_list("array").unwrap().unwrap(), vec!["x", "1"]);
    }

    #[test]
    fn test_json_string_is_parsed() {
        let a = args(json!({"rules": "[{\"policy\": \"deny\"}]"}));
        let rules = a.optional_json("rules").unwrap().unwrap();
        assert_eq!(rules[0]["policy"], "deny");
        assert!(args(json!({"rules": "{not json"})).optional_json("rules").is_err());
    }

    #[test]
    fn test_value_for_required_param() {
        let spec = ParamSpec {
            name: "serial",
            api_name: "serial",
            kind: ParamKind::String,
            location: ParamLocation::Path,
            required: true,
            description: "",
        };
        assert!(args(json!({})).value_for(&spec).is_err());
        assert_eq!(
            args(json!({"serial": "Q2XX-1"})).value_for(&spec).unwrap(),
            Some(json!("Q2XX-1"))
        );
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        assert!(ToolArgs::from_value(&json!([1, 2])).is_err());
        assert!(ToolArgs::from_value(&Value::Null).is_ok());
    }
}
