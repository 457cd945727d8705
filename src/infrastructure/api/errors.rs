#[cfg(test)]
#[path = "errors_test.rs"]
mod tests;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and that the API is running.";

const MISSING_KEY_MARKERS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];
const MISSING_KEY_MESSAGE: &str =
    "Server is missing its Gemini API key. Please configure it on the backend.";

// Response body fields probed for an error message, in priority order.
const MESSAGE_FIELDS: [&str; 3] = ["error", "message", "text"];

/// Converts an HTTP status plus whatever message the server sent back into a
/// single user-facing string. A body mentioning a missing backend API key
/// wins over everything else, regardless of status.
pub fn humanize_http_error(status: u16, raw_message: Option<&str>) -> String {
    let msg = raw_message.filter(|raw| return !raw.is_empty());

    if let Some(raw) = msg {
        if MISSING_KEY_MARKERS.iter().any(|marker| return raw.contains(marker)) {
            return MISSING_KEY_MESSAGE.to_string();
        }
    }

    match status {
        400 => {
            return msg
                .unwrap_or("We could not process your request. Please check your input and try again.")
                .to_string();
        }
        401 | 403 => {
            return msg
                .unwrap_or(
                    "You are not authorized to perform this action. Please check your credentials.",
                )
                .to_string();
        }
        413 => return "File is too large. Please upload a smaller file or compress it.".to_string(),
        415 => return "Unsupported file type. Please upload a supported format.".to_string(),
        429 => {
            return "You are sending requests too quickly. Please slow down and try again."
                .to_string();
        }
        status if status >= 500 => {
            return msg
                .unwrap_or("The server had an issue. Please try again shortly.")
                .to_string();
        }
        _ => {
            return msg
                .unwrap_or("Something went wrong. Please try again.")
                .to_string();
        }
    }
}

/// Pulls the most useful message out of a raw response body. JSON bodies are
/// probed field by field, first non-empty wins. Anything that fails to parse
/// as JSON is used as-is.
fn extract_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body);
    if parsed.is_err() {
        return body.to_string();
    }

    let value = parsed.unwrap();
    for field in MESSAGE_FIELDS {
        let found = value.get(field);
        if found.is_none() {
            continue;
        }

        let found = found.unwrap();
        if let Some(text) = found.as_str() {
            if !text.is_empty() {
                return text.to_string();
            }
            continue;
        }
        if found.is_null() {
            continue;
        }

        return found.to_string();
    }

    return String::new();
}

pub async fn parse_error(res: reqwest::Response) -> String {
    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_else(|_| return String::new());
    let raw = extract_message(&body);

    if raw.is_empty() {
        return humanize_http_error(status, None);
    }
    return humanize_http_error(status, Some(&raw));
}
