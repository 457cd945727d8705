#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use reqwest::multipart::Form;
use reqwest::multipart::Part;
use serde_derive::Serialize;

use super::parse_error;
use super::NETWORK_ERROR_MESSAGE;
use crate::domain::models::GenerateResponse;
use crate::domain::models::HistoryItem;
use crate::domain::models::Modality;

/// Optional knobs shared by every generation call. Unset fields are left off
/// the wire entirely.
#[derive(Default, Debug, Clone)]
pub struct GenerateOptions {
    pub model: Option<String>,
    pub system_instruction: Option<String>,
    pub provider: Option<String>,
}

/// A file staged for a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct GenerateTextRequest {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct ChatRequest {
    prompt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    messages: Vec<HistoryItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

/// Thin client over the generation API. Failures come back in two disjoint
/// tiers: network and non-2xx responses are returned as errors carrying a
/// user-facing message, while an `error` field on a 2xx body is passed
/// through untouched inside the response for the caller to display.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiClient {
        return ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        };
    }

    pub async fn generate_text(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        let req = GenerateTextRequest {
            prompt: prompt.to_string(),
            model: options.model.clone(),
            system_instruction: options.system_instruction.clone(),
            provider: options.provider.clone(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/generate-text", url = self.base_url))
            .json(&req)
            .send()
            .await;

        return read_response(res).await;
    }

    pub async fn generate_from_image(
        &self,
        file: FileUpload,
        prompt: Option<&str>,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        return self
            .generate_from_file(Modality::Image, file, prompt, options)
            .await;
    }

    pub async fn generate_from_document(
        &self,
        file: FileUpload,
        prompt: Option<&str>,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        return self
            .generate_from_file(Modality::Document, file, prompt, options)
            .await;
    }

    pub async fn generate_from_audio(
        &self,
        file: FileUpload,
        prompt: Option<&str>,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        return self
            .generate_from_file(Modality::Audio, file, prompt, options)
            .await;
    }

    pub async fn generate_from_file(
        &self,
        modality: Modality,
        file: FileUpload,
        prompt: Option<&str>,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let mut form = Form::new().part(modality.field_name(), part);

        if let Some(prompt) = prompt {
            form = form.text("prompt", prompt.to_string());
        }
        if let Some(model) = &options.model {
            form = form.text("model", model.clone());
        }
        if let Some(system_instruction) = &options.system_instruction {
            form = form.text("systemInstruction", system_instruction.clone());
        }
        if let Some(provider) = &options.provider {
            form = form.text("provider", provider.clone());
        }

        let res = reqwest::Client::new()
            .post(format!(
                "{url}{path}",
                url = self.base_url,
                path = modality.endpoint()
            ))
            .multipart(form)
            .send()
            .await;

        return read_response(res).await;
    }

    pub async fn chat(
        &self,
        prompt: &str,
        history: &[HistoryItem],
        options: &GenerateOptions,
    ) -> Result<GenerateResponse> {
        let req = ChatRequest {
            prompt: prompt.to_string(),
            messages: history.to_vec(),
            model: options.model.clone(),
            system_instruction: options.system_instruction.clone(),
            provider: options.provider.clone(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/chat", url = self.base_url))
            .json(&req)
            .send()
            .await;

        return read_response(res).await;
    }
}

async fn read_response(
    res: Result<reqwest::Response, reqwest::Error>,
) -> Result<GenerateResponse> {
    if res.is_err() {
        tracing::error!(error = ?res.unwrap_err(), "Request never reached the server");
        bail!(NETWORK_ERROR_MESSAGE);
    }

    let res = res.unwrap();
    if !res.status().is_success() {
        let status = res.status().as_u16();
        let message = parse_error(res).await;
        tracing::error!(status, message = message.as_str(), "Server returned an error response");
        bail!(message);
    }

    return Ok(res.json::<GenerateResponse>().await?);
}
