//! Minimal client for a PostgREST-style table endpoint.

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{debug, info};


#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            http: reqwest::Client::new(),
        }
    }

    pub fn table_url(&self, table: &str, select: &str) -> String {
        format!("{}/{}?select={}", self.base_url.trim_end_matches('/'), table, select)
    }

    /// Fetches every row of `table`, projected through a PostgREST `select`.
    pub async fn select_all<T: DeserializeOwned>(&self, table: &str, select: &str) -> anyhow::Result<Vec<T>> {
        let url = self.table_url(table, select);
        debug!("catalog request: GET {}", url);
        let t0 = std::time::Instant::now();

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key).bearer_auth(api_key);
        }
        let response = request
            .send()
            .await
            .with_context(|| format!("failed to reach catalog table {table}"))?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("catalog table {}: {}: {}", table, status, response_txt);
        }

        let rows: Vec<T> = serde_json::from_str(&response_txt)
            .with_context(|| format!("failed to decode rows of catalog table {table}"))?;
        info!("catalog table {}: {} rows in {}ms", table, rows.len(), t0.elapsed().as_millis());
        Ok(rows)
    }
}
