use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
   config::CommitConfig,
   error::{CommitGenError, Result},
   style,
   types::{GenerateRequest, GenerateResponse, GenerationOptions},
};

/// Build HTTP client; only sets a timeout when one is configured
pub fn build_client(config: &CommitConfig) -> Result<reqwest::blocking::Client> {
   // reqwest's blocking client defaults to 30s, so None must be passed explicitly
   let timeout = config.request_timeout_secs.map(Duration::from_secs);
   reqwest::blocking::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(CommitGenError::HttpError)
}

/// Assemble the request body for a diff
pub fn build_request(diff: &str, options: &GenerationOptions) -> GenerateRequest {
   GenerateRequest {
      diff_content:     diff.to_string(),
      style:            options.style,
      num_alternatives: options.num_alternatives,
      generate_pr:      options.generate_pr,
   }
}

// Wire shape of the reply; every field may be absent or null
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBody {
   #[serde(default)]
   commit_message: Option<String>,
   #[serde(default)]
   alternatives:   Option<Vec<String>>,
   #[serde(default)]
   type_labels:    Option<Vec<String>>,
   #[serde(default)]
   pr_title:       Option<String>,
   #[serde(default)]
   pr_body:        Option<String>,
}

/// Parse the body of a 200 response
pub fn parse_response(body: &str) -> Result<GenerateResponse> {
   let raw: ResponseBody = serde_json::from_str(body)?;
   let commit_message = raw
      .commit_message
      .ok_or(CommitGenError::MissingField("commitMessage"))?;

   Ok(GenerateResponse {
      commit_message,
      alternatives: raw.alternatives.unwrap_or_default(),
      type_labels: raw.type_labels.unwrap_or_default(),
      pr_title: raw.pr_title.filter(|s| !s.is_empty()),
      pr_body: raw.pr_body.filter(|s| !s.is_empty()),
   })
}

/// POST the diff to the generation service and return its reply
///
/// Single attempt. Any status other than 200 becomes `ApiError` carrying the
/// body.
pub fn request_commit_message(
   diff: &str,
   options: &GenerationOptions,
   config: &CommitConfig,
) -> Result<GenerateResponse> {
   let client = build_client(config)?;
   let request = build_request(diff, options);

   if config.verbose {
      style::print_info(&format!(
         "POST {} (style: {}, alternatives: {}, pr: {}, diff: {} bytes)",
         config.api_url,
         request.style,
         request.num_alternatives,
         request.generate_pr,
         request.diff_content.len()
      ));
   }

   let response = client
      .post(&config.api_url)
      .json(&request)
      .send()
      .map_err(CommitGenError::HttpError)?;

   let status = response.status();

   if status != StatusCode::OK {
      let error_text = response
         .text()
         .unwrap_or_else(|_| "Unknown error".to_string());
      return Err(CommitGenError::ApiError { status: status.as_u16(), body: error_text });
   }

   let body = response.text().map_err(CommitGenError::HttpError)?;

   if config.verbose {
      let pretty = serde_json::from_str::<serde_json::Value>(&body)
         .and_then(|v| serde_json::to_string_pretty(&v))
         .unwrap_or_else(|_| body.clone());
      style::print_info(&format!("Response ({status}):\n{pretty}"));
   }

   parse_response(&body)
}
