use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Body returned by every generation endpoint. A non-empty `error` on an
/// HTTP 200 is an application-tier failure: the transport succeeded, the
/// backend reported a logical one. Callers display it without the call
/// itself failing.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn app_error(&self) -> Option<&str> {
        return self
            .error
            .as_deref()
            .filter(|error| return !error.is_empty());
    }
}
