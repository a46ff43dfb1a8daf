use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Outgoing ad-decision request. The field schema belongs to the remote API,
/// so this is a generic field-name to value mapping that serializes as a flat
/// JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdRequest {
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl AdRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }
}

/// Decoded ad-decision response. Immutable once constructed; fields are
/// whatever the engine returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdResponse {
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl AdResponse {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_as_flat_object() {
        let request = AdRequest::new()
            .with_field("placements", json!([{"divName": "div1", "networkId": 23}]))
            .with_field("user", json!({"key": "abc123"}))
            .with_field("keywords", json!(["sports", "news"]));

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["user"]["key"], "abc123");
        assert_eq!(body["placements"][0]["networkId"], 23);
        assert_eq!(body["keywords"][1], "news");
    }

    #[test]
    fn test_request_echoed_body_decodes_as_response() {
        let request = AdRequest::new()
            .with_field("user", json!({"key": "abc123"}))
            .with_field("keywords", json!(["sports"]));

        let body = serde_json::to_string(&request).unwrap();
        let response: AdResponse = serde_json::from_str(&body).unwrap();

        assert_eq!(response.field("user"), request.field("user"));
        assert_eq!(response.field("keywords"), request.field("keywords"));
        assert_eq!(response.fields().len(), request.fields().len());
    }

    #[test]
    fn test_response_field_lookup() {
        let response: AdResponse =
            serde_json::from_value(json!({"decisions": {"div1": null}})).unwrap();

        assert!(!response.is_empty());
        assert!(response.field("decisions").is_some());
        assert!(response.field("missing").is_none());
    }
}
