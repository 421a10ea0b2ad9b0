//! Encoding of option structs as wire query parameters.

use serde::Serialize;
use serde_json::Value;

use crate::error::SchemaViolation;
use crate::naming::to_wire_key;

/// Query parameters with wire-convention names.
pub type QueryParams = Vec<(String, String)>;

/// Encodes an options struct as query parameters.
///
/// Field names are converted with [`to_wire_key`]. `None` fields and empty
/// lists are skipped, lists are joined with commas, and booleans and
/// numbers use their JSON spelling.
///
/// ## Examples
///
/// ```rust
/// use loqate::client::encode_options;
///
/// #[derive(serde::Serialize)]
/// struct Options {
///     field_1_format: Option<String>,
///     emails: Vec<String>,
/// }
///
/// let params = encode_options(
///     "example",
///     &Options {
///         field_1_format: Some("{Latitude}".to_string()),
///         emails: vec!["a@example.com".to_string(), "b@example.com".to_string()],
///     },
/// )
/// .unwrap();
///
/// assert!(params.contains(&("Field1Format".to_string(), "{Latitude}".to_string())));
/// assert!(params.contains(&("Emails".to_string(), "a@example.com,b@example.com".to_string())));
/// ```
///
/// ## Errors
///
/// Returns [`SchemaViolation::Options`] if the options do not serialize to
/// a flat JSON object.
pub fn encode_options<O: Serialize>(
    operation: &'static str,
    options: &O,
) -> Result<QueryParams, SchemaViolation> {
    let value = serde_json::to_value(options)
        .map_err(|source| SchemaViolation::Options { operation, source })?;

    let Value::Object(fields) = value else {
        return Err(SchemaViolation::Options {
            operation,
            source: serde::ser::Error::custom("options must serialize to an object"),
        });
    };

    Ok(fields
        .into_iter()
        .filter_map(|(key, value)| encode_value(&value).map(|encoded| (to_wire_key(&key), encoded)))
        .collect())
}

fn encode_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(values) if values.is_empty() => None,
        Value::Array(values) => Some(
            values
                .iter()
                .filter_map(encode_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        countries: Option<String>,
        limit: Option<u32>,
        way_points: Vec<String>,
        is_flag: bool,
        latitude: f64,
    }

    fn sample() -> Sample {
        Sample {
            text: "Scrubs Lane".to_string(),
            countries: None,
            limit: Some(10),
            way_points: vec![],
            is_flag: true,
            latitude: 52.1321,
        }
    }

    fn lookup<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn keys_use_wire_convention() {
        let params = encode_options("sample", &sample()).unwrap();
        assert_eq!(lookup(&params, "Text"), Some("Scrubs Lane"));
        assert_eq!(lookup(&params, "Limit"), Some("10"));
        assert_eq!(lookup(&params, "IsFlag"), Some("true"));
        assert_eq!(lookup(&params, "Latitude"), Some("52.1321"));
    }

    #[test]
    fn absent_values_are_skipped() {
        let params = encode_options("sample", &sample()).unwrap();
        assert_eq!(lookup(&params, "Countries"), None);
        assert_eq!(lookup(&params, "WayPoints"), None);
    }

    #[test]
    fn lists_are_comma_joined() {
        let mut options = sample();
        options.way_points = vec!["EC1A 4JQ".to_string(), "EC1A 4ER".to_string()];
        let params = encode_options("sample", &options).unwrap();
        assert_eq!(lookup(&params, "WayPoints"), Some("EC1A 4JQ,EC1A 4ER"));
    }

    #[test]
    fn non_object_options_are_rejected() {
        let err = encode_options("sample", &vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, SchemaViolation::Options { operation: "sample", .. }));
    }
}
