//! Inbound push-message envelope.
//!
//! Every frame from the server is `{"Data": <topic-specific payload>}`. The
//! channel decodes the wrapper and hands `Data` to the page handler untouched;
//! what's inside is a per-page contract.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Data")]
    pub data: Value,
}

/// Decode a raw text frame into the topic payload.
pub fn decode(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<Envelope>(text).map(|envelope| envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_passes_through_unmodified() {
        let payload = decode(r#"{"Data":{"id":42}}"#).unwrap();
        assert_eq!(payload, json!({"id": 42}));
    }

    #[test]
    fn scalar_payloads_are_fine() {
        let payload = decode(r#"{"Data":7}"#).unwrap();
        assert_eq!(payload, json!(7));
    }

    #[test]
    fn missing_data_field_is_an_error() {
        assert!(decode(r#"{"Payload":{"id":42}}"#).is_err());
        assert!(decode("not json").is_err());
    }

    #[test]
    fn sibling_fields_are_ignored() {
        let payload = decode(r#"{"Data":[1,2],"Seq":9}"#).unwrap();
        assert_eq!(payload, json!([1, 2]));
    }
}
