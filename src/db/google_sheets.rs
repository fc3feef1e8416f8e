use async_trait::async_trait;
use reqwest::Response;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::store::StoreSettings;
use crate::db::store::{column_letter, Row, StoreError, TabularStore};

/// Google Sheets v4 values API client.
///
/// The bearer token is handed in from configuration; obtaining and
/// refreshing it is the deployment's business.
#[derive(Debug, Clone)]
pub struct GoogleSheetsStore {
    http_client: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    access_token: SecretString,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Row>,
}

#[derive(Serialize)]
struct WriteRange<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<&'a str>,
    values: Vec<Row>,
}

impl GoogleSheetsStore {
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        spreadsheet_id: impl Into<String>,
        access_token: SecretString,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            spreadsheet_id: spreadsheet_id.into(),
            access_token,
        })
    }

    pub fn from_settings(settings: &StoreSettings) -> Result<Self, StoreError> {
        let spreadsheet_id = settings
            .spreadsheet_id
            .clone()
            .ok_or_else(|| StoreError::NotConfigured("spreadsheet_id is missing".to_string()))?;
        let access_token = settings
            .access_token
            .clone()
            .ok_or_else(|| StoreError::NotConfigured("access_token is missing".to_string()))?;
        Self::new(reqwest::Client::new(), &settings.api_base_url, spreadsheet_id, access_token)
    }

    /// `…/spreadsheets/{id}/values/{range}` with every segment percent-encoded.
    fn values_url(&self, range: &str) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::NotConfigured(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["spreadsheets", self.spreadsheet_id.as_str(), "values", range]);
        Ok(url)
    }

    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Api { status: status.as_u16(), body })
    }
}

#[async_trait]
impl TabularStore for GoogleSheetsStore {
    #[tracing::instrument(name = "Read sheet rows", skip(self))]
    async fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        let range = format!("{sheet}!A2:Z");
        let response = self.http_client
            .get(self.values_url(&range)?)
            .bearer_auth(self.access_token.expose_secret())
            .query(&[
                ("valueRenderOption", "FORMATTED_VALUE"),
                ("majorDimension", "ROWS"),
            ])
            .send()
            .await?;
        let ValueRange { values } = Self::check(response).await?.json::<ValueRange>().await?;
        tracing::debug!("Read {} rows from sheet {}", values.len(), sheet);
        Ok(values)
    }

    #[tracing::instrument(name = "Append sheet rows", skip(self, rows), fields(row_count = rows.len()))]
    async fn append_rows(&self, sheet: &str, rows: Vec<Row>) -> Result<(), StoreError> {
        let range = format!("{sheet}!A1:append");
        let response = self.http_client
            .post(self.values_url(&range)?)
            .bearer_auth(self.access_token.expose_secret())
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&WriteRange { range: None, values: rows })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Update sheet cells", skip(self, values))]
    async fn update_cells(
        &self,
        sheet: &str,
        row: usize,
        first_column: usize,
        values: Row,
    ) -> Result<(), StoreError> {
        if values.is_empty() {
            return Ok(());
        }
        // +2: header row, then 1-based numbering
        let sheet_row = row + 2;
        let range = format!(
            "{sheet}!{}{sheet_row}:{}{sheet_row}",
            column_letter(first_column),
            column_letter(first_column + values.len() - 1),
        );
        let response = self.http_client
            .put(self.values_url(&range)?)
            .bearer_auth(self.access_token.expose_secret())
            .query(&[("valueInputOption", "RAW")])
            .json(&WriteRange { range: Some(&range), values: vec![values] })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base: &str) -> GoogleSheetsStore {
        GoogleSheetsStore::new(
            reqwest::Client::new(),
            base,
            "sheet-123",
            SecretString::new("token".to_string().into_boxed_str()),
        )
        .unwrap()
    }

    #[test]
    fn test_values_url_encodes_range() {
        let url = store("https://sheets.googleapis.com/v4/").values_url("Table_Tennis!A2:Z").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Table_Tennis!A2:Z"
        );
    }

    #[test]
    fn test_values_url_without_trailing_slash() {
        let url = store("http://127.0.0.1:9999/v4").values_url("Fixtures!A2:Z").unwrap();
        assert_eq!(url.path(), "/v4/spreadsheets/sheet-123/values/Fixtures!A2:Z");
    }

    #[test]
    fn test_missing_settings_are_reported() {
        let settings = StoreSettings {
            backend: crate::config::store::StoreBackend::GoogleSheets,
            spreadsheet_id: None,
            access_token: None,
            api_base_url: "https://sheets.googleapis.com/v4/".to_string(),
        };
        let err = GoogleSheetsStore::from_settings(&settings).unwrap_err();
        assert!(matches!(err, StoreError::NotConfigured(_)));
    }
}
