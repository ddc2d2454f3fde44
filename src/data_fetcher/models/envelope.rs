use serde::Deserialize;
use serde_json::Value;

/// Top-level body of every API-Football response.
///
/// The provider reports problems such as a bad key or an exhausted quota
/// with a 200 status, an empty `response` and a non-empty `errors` member.
#[derive(Debug, Deserialize)]
pub struct SportsEnvelope<T> {
    /// A missing member is `None`, whatever `T` is.
    pub response: Option<T>,
    #[serde(default)]
    pub errors: Value,
}

impl<T> SportsEnvelope<T> {
    /// Whether the provider listed any errors. It sends `[]` when there are none.
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
            Value::Null => false,
            _ => true,
        }
    }
}

impl<T: Default> SportsEnvelope<T> {
    /// The `response` payload, or an empty value when it is absent or null.
    pub fn into_response(self) -> T {
        self.response.unwrap_or_default()
    }
}

impl SportsEnvelope<Value> {
    /// The raw `response` payload, or `fallback` when it is absent or null.
    pub fn into_value_or(self, fallback: Value) -> Value {
        match self.response {
            Some(Value::Null) | None => fallback,
            Some(value) => value,
        }
    }
}

/// Top-level body of a NewsAPI search response.
#[derive(Debug, Default, Deserialize)]
pub struct NewsEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub articles: Option<Vec<Value>>,
}

impl NewsEnvelope {
    /// Articles as returned by the provider, empty when the member is missing.
    pub fn into_articles(self) -> Vec<Value> {
        self.articles.unwrap_or_default()
    }
}
