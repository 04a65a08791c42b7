//! Client for the submission intake endpoint.

use crate::pages::submit::state::SubmissionForm;
use serde::Deserialize;

/// Response envelope returned by the intake endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure modes surfaced to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The server answered and rejected the submission.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a usable response.
    #[error("network failure: {0}")]
    Network(String),
}

/// Submit a completed form. Resolves to the stored submission id.
///
/// # Errors
/// Returns [`SubmitError::Rejected`] when the server refuses the payload and
/// [`SubmitError::Network`] when the request itself fails.
#[cfg(target_arch = "wasm32")]
pub async fn submit(form: &SubmissionForm) -> Result<String, SubmitError> {
    let body = serde_json::to_string(form)
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    match crate::dom::post_json(&crate::config::submission_endpoint(), &body).await {
        Ok(value) => {
            let parsed: SubmitResponse = serde_wasm_bindgen::from_value(value)
                .map_err(|err| SubmitError::Network(err.to_string()))?;
            if parsed.success {
                Ok(parsed.id.unwrap_or_default())
            } else {
                Err(SubmitError::Rejected(
                    parsed.error.unwrap_or_else(|| "rejected".to_string()),
                ))
            }
        }
        Err(value) => {
            // A non-2xx status yields the parsed error body; anything else
            // is a transport failure.
            if let Ok(parsed) = serde_wasm_bindgen::from_value::<SubmitResponse>(value.clone()) {
                if parsed.error.is_some() || !parsed.success {
                    return Err(SubmitError::Rejected(
                        parsed.error.unwrap_or_else(|| "rejected".to_string()),
                    ));
                }
            }
            Err(SubmitError::Network(crate::dom::js_error_message(&value)))
        }
    }
}

/// Host-side stand-in; the intake endpoint is only reachable from a browser.
#[cfg(not(target_arch = "wasm32"))]
pub async fn submit(_form: &SubmissionForm) -> Result<String, SubmitError> {
    Err(SubmitError::Network("no browser runtime".to_string()))
}

#[cfg(test)]
mod tests {
    use super::SubmitResponse;

    #[test]
    fn parses_success_envelope() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"success":true,"id":"abc123"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.id.as_deref(), Some("abc123"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn parses_error_envelope() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"success":false,"error":"questionText too short"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("questionText too short"));
    }

    #[test]
    fn tolerates_missing_fields() {
        let resp: SubmitResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.id.is_none());
    }
}
