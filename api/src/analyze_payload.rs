use serde_json::{Map, Value};

/// Body of `POST /analyze`. Both keys are optional and may hold any JSON value.
pub struct AnalyzePayload {
    pub text: Option<Value>,
    pub analysis_result: Option<Value>,
}

impl AnalyzePayload {
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        Self {
            text: fields.remove("text"),
            analysis_result: fields.remove("analysis_result"),
        }
    }

    pub fn question(&self) -> String {
        render_field(self.text.as_ref())
    }

    pub fn prior_analysis(&self) -> String {
        render_field(self.analysis_result.as_ref())
    }
}

// Missing and null fields render as the literal "None".
fn render_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: Value) -> AnalyzePayload {
        match body {
            Value::Object(fields) => AnalyzePayload::from_fields(fields),
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn strings_pass_through() {
        let payload = payload(json!({"text": "Q", "analysis_result": "A"}));
        assert_eq!(payload.question(), "Q");
        assert_eq!(payload.prior_analysis(), "A");
    }

    #[test]
    fn missing_and_null_render_as_none() {
        let payload = payload(json!({"text": null}));
        assert_eq!(payload.question(), "None");
        assert_eq!(payload.prior_analysis(), "None");
    }

    #[test]
    fn other_values_render_as_text() {
        let payload = payload(json!({"text": 3, "analysis_result": false}));
        assert_eq!(payload.question(), "3");
        assert_eq!(payload.prior_analysis(), "False");
    }
}
