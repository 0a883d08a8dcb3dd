//! Google Sheets `values.append` client.

use std::time::Duration;

use bevy::log::{debug, info};
use budget::config::SpreadsheetConfig;
use budget::persistence::{CellValue, PersistenceError, SubmissionStore};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::credentials::ServiceAccountKey;
use crate::token::TokenSource;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "govfund-dashboard/sheets-store";

#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    range: &'a str,
    #[serde(rename = "majorDimension")]
    major_dimension: &'static str,
    values: [&'a [CellValue]; 1],
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<UpdateSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSummary {
    #[serde(default)]
    updated_range: Option<String>,
    #[serde(default)]
    updated_rows: Option<u32>,
}

/// Build `{base}/v4/spreadsheets/{id}/values/{worksheet}:append` with the
/// row-insertion query parameters.
pub fn append_url(config: &SpreadsheetConfig) -> Result<Url, PersistenceError> {
    let invalid = |reason: &str| {
        PersistenceError::InvalidEndpoint(format!(
            "spreadsheet endpoint '{}': {reason}",
            config.api_base_url
        ))
    };

    if config.spreadsheet_id.trim().is_empty() {
        return Err(invalid("spreadsheet_id is empty"));
    }
    if config.worksheet.trim().is_empty() {
        return Err(invalid("worksheet is empty"));
    }

    let append_segment = format!("{}:append", config.worksheet);
    let mut url = Url::parse(&config.api_base_url).map_err(|e| invalid(&e.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| invalid("cannot be a base URL"))?;
        segments.pop_if_empty().extend([
            "v4",
            "spreadsheets",
            config.spreadsheet_id.as_str(),
            "values",
            append_segment.as_str(),
        ]);
    }
    url.query_pairs_mut()
        .append_pair("valueInputOption", "USER_ENTERED")
        .append_pair("insertDataOption", "INSERT_ROWS");
    Ok(url)
}

fn request_body<'a>(worksheet: &'a str, row: &'a [CellValue]) -> AppendRequest<'a> {
    AppendRequest {
        range: worksheet,
        major_dimension: "ROWS",
        values: [row],
    }
}

/// Appends submission rows to one worksheet of a Google spreadsheet.
pub struct SheetsStore {
    worksheet: String,
    endpoint: Url,
    tokens: TokenSource,
    http_client: reqwest::blocking::Client,
}

impl SheetsStore {
    /// # Errors
    ///
    /// Returns an error when the endpoint cannot be built, the private key is
    /// not a usable RSA PEM, or the HTTP client cannot be initialized.
    pub fn new(config: &SpreadsheetConfig, key: ServiceAccountKey) -> Result<Self, PersistenceError> {
        let endpoint = append_url(config)?;
        let client_email = key.client_email.clone();

        let http_client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| PersistenceError::Http {
                status: None,
                message: error.to_string(),
            })?;

        let tokens = TokenSource::new(key, http_client.clone())?;

        info!(
            "Sheets store targets worksheet '{}' of spreadsheet {} as {}",
            config.worksheet, config.spreadsheet_id, client_email
        );

        Ok(Self {
            worksheet: config.worksheet.clone(),
            endpoint,
            tokens,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SubmissionStore for SheetsStore {
    fn append_row(&self, row: &[CellValue]) -> Result<(), PersistenceError> {
        let bearer = self.tokens.access_token()?;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(bearer)
            .json(&request_body(&self.worksheet, row))
            .send()
            .map_err(|error| PersistenceError::Http {
                status: None,
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unable to read append response body".to_string());
            return Err(PersistenceError::Http {
                status: Some(status.as_u16()),
                message,
            });
        }

        let body = response
            .text()
            .map_err(|error| PersistenceError::InvalidResponse(error.to_string()))?;
        let parsed: AppendResponse = if body.trim().is_empty() {
            AppendResponse::default()
        } else {
            serde_json::from_str(&body)
                .map_err(|error| PersistenceError::InvalidResponse(error.to_string()))?
        };

        if let Some(updates) = parsed.updates {
            if updates.updated_rows == Some(0) {
                return Err(PersistenceError::InvalidResponse(
                    "append reported zero updated rows".to_string(),
                ));
            }
            debug!(
                "Sheets append updated {} ({} rows)",
                updates.updated_range.as_deref().unwrap_or("?"),
                updates.updated_rows.unwrap_or(1)
            );
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "google-sheets"
    }
}
