//! Query request and reply shapes

use serde_json::{Map, Value};

/// Reply of the `query` capability. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPayload {
    pub response: Option<String>,
    pub error: Option<String>,
}

impl QueryPayload {
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response: None,
            error: Some(text.into()),
        }
    }

    /// Decode whatever the host returned.
    ///
    /// Anything that is not an object, and any field that is not a string,
    /// counts as absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            response: field("response"),
            error: field("error"),
        }
    }
}

/// Build the parameter mapping for one query call
pub fn query_data(prompt: &str, provider: Option<&str>, debug: bool) -> Value {
    let mut data = Map::new();
    data.insert("prompt".into(), Value::String(prompt.to_string()));
    if let Some(provider) = provider {
        data.insert("provider".into(), Value::String(provider.to_string()));
    }
    if debug {
        data.insert("debug".into(), Value::Bool(true));
    }
    Value::Object(data)
}
