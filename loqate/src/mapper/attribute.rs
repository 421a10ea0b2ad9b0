//! Generic record mapping.

use serde_json::Value;
use tracing::debug;

use super::{transcode_keys, Shape};
use crate::error::SchemaViolation;
use crate::response::RawItem;

/// Maps raw response items into records of a given [`Shape`].
///
/// The mapper is pure data transformation and knows nothing about HTTP or
/// about which gateway called it.
///
/// ## Examples
///
/// ```rust
/// use loqate::address::Address;
/// use loqate::mapper::AttributeMapper;
/// use serde_json::json;
///
/// let item = json!({
///     "Id": "A1", "Type": "Postcode", "Text": "T", "Highlight": "0-1", "Description": "D"
/// });
/// let address: Address = AttributeMapper.map_one(item.as_object().unwrap()).unwrap();
/// assert_eq!(address.id, "A1");
/// assert_eq!(address.kind, "Postcode");
/// assert_eq!(address.text, "T");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeMapper;

impl AttributeMapper {
    /// Maps a single item.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaViolation::Mismatch`] if a required field is absent,
    /// a value has the wrong type, or an enumerated field holds a value
    /// outside its literal set.
    pub fn map_one<S: Shape>(&self, item: &RawItem) -> Result<S, SchemaViolation> {
        let attributes = transcode_keys(item);

        serde_json::from_value(Value::Object(attributes)).map_err(|source| {
            let violation = SchemaViolation::mismatch(S::NAME, source);
            debug!(shape = ?violation.shape(), error = %violation, "response item does not match shape");
            violation
        })
    }

    /// Maps every item, in order. Fails on the first item that does not fit.
    pub fn map_many<S: Shape>(&self, items: &[RawItem]) -> Result<Vec<S>, SchemaViolation> {
        items.iter().map(|item| self.map_one(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use serde_with::{serde_as, DisplayFromStr, PickFirst};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Sample {
        id: String,
        is_correct: bool,
    }

    impl Shape for Sample {
        const NAME: &'static str = "Sample";
    }

    #[serde_as]
    #[derive(Debug, PartialEq, Deserialize)]
    struct Measured {
        #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
        distance: f64,
    }

    impl Shape for Measured {
        const NAME: &'static str = "Measured";
    }

    #[derive(Debug, PartialEq, Deserialize)]
    enum Verdict {
        Yes,
        No,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Judged {
        verdict: Verdict,
    }

    impl Shape for Judged {
        const NAME: &'static str = "Judged";
    }

    fn raw(value: Value) -> RawItem {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn maps_transcoded_keys_into_fields() {
        let sample: Sample = AttributeMapper
            .map_one(&raw(json!({ "Id": "A1", "IsCorrect": true })))
            .unwrap();
        assert_eq!(
            sample,
            Sample {
                id: "A1".to_string(),
                is_correct: true
            }
        );
    }

    #[test]
    fn address_maps_all_five_fields() {
        let address: crate::address::Address = AttributeMapper
            .map_one(&raw(json!({
                "Id": "GB|RM|B|8144611",
                "Type": "Address",
                "Text": "Houses of Parliament",
                "Highlight": "0-6",
                "Description": "London, SW1A 0AA"
            })))
            .unwrap();

        assert_eq!(address.id, "GB|RM|B|8144611");
        assert_eq!(address.kind, "Address");
        assert_eq!(address.text, "Houses of Parliament");
        assert_eq!(address.highlight, "0-6");
        assert_eq!(address.description, "London, SW1A 0AA");
    }

    #[tracing_test::traced_test]
    #[test]
    fn mismatch_is_logged_with_shape() {
        let err = AttributeMapper
            .map_one::<Sample>(&raw(json!({ "Id": "A1" })))
            .unwrap_err();

        assert_eq!(err.shape(), Some("Sample"));
        assert!(logs_contain("response item does not match shape"));
        assert!(logs_contain("Sample"));
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let sample: Sample = AttributeMapper
            .map_one(&raw(json!({ "Id": "A1", "IsCorrect": false, "Extra": 12 })))
            .unwrap();
        assert_eq!(sample.id, "A1");
    }

    #[test]
    fn missing_required_field_is_a_violation() {
        let err = AttributeMapper
            .map_one::<Sample>(&raw(json!({ "Id": "A1" })))
            .unwrap_err();
        assert!(matches!(err, SchemaViolation::Mismatch { shape: "Sample", .. }));
        assert!(err.to_string().contains("is_correct"));
    }

    #[test]
    fn mistyped_field_is_a_violation() {
        let err = AttributeMapper
            .map_one::<Sample>(&raw(json!({ "Id": 1, "IsCorrect": true })))
            .unwrap_err();
        assert!(matches!(err, SchemaViolation::Mismatch { .. }));
    }

    #[test]
    fn floats_accept_integers_and_numeric_strings() {
        let from_int: Measured = AttributeMapper.map_one(&raw(json!({ "Distance": 3 }))).unwrap();
        assert_eq!(from_int.distance, 3.0);

        let from_str: Measured = AttributeMapper.map_one(&raw(json!({ "Distance": "12" }))).unwrap();
        assert_eq!(from_str.distance, 12.0);

        let from_float: Measured = AttributeMapper.map_one(&raw(json!({ "Distance": 1.5 }))).unwrap();
        assert_eq!(from_float.distance, 1.5);
    }

    #[test]
    fn non_numeric_string_for_float_is_a_violation() {
        let err = AttributeMapper
            .map_one::<Measured>(&raw(json!({ "Distance": "far" })))
            .unwrap_err();
        assert!(matches!(err, SchemaViolation::Mismatch { shape: "Measured", .. }));
    }

    #[test]
    fn enum_outside_literal_set_is_a_violation() {
        let ok: Judged = AttributeMapper.map_one(&raw(json!({ "Verdict": "Yes" }))).unwrap();
        assert_eq!(ok.verdict, Verdict::Yes);

        let err = AttributeMapper
            .map_one::<Judged>(&raw(json!({ "Verdict": "Maybe" })))
            .unwrap_err();
        assert!(err.to_string().contains("Maybe"));
    }

    #[test]
    fn map_many_preserves_order() {
        let items = vec![
            raw(json!({ "Id": "first", "IsCorrect": true })),
            raw(json!({ "Id": "second", "IsCorrect": false })),
        ];
        let samples: Vec<Sample> = AttributeMapper.map_many(&items).unwrap();
        let ids: Vec<_> = samples.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn map_many_fails_on_any_bad_item() {
        let items = vec![
            raw(json!({ "Id": "first", "IsCorrect": true })),
            raw(json!({ "Id": "second" })),
        ];
        assert!(AttributeMapper.map_many::<Sample>(&items).is_err());
    }

    #[test]
    fn map_many_of_nothing_is_empty() {
        let samples: Vec<Sample> = AttributeMapper.map_many(&[]).unwrap();
        assert!(samples.is_empty());
    }
}
