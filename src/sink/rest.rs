//! Remote table sink (PostgREST-style insert)

use crate::core::{Error, RestConfig, Result, StatsRecord, StatsRow};
use crate::sink::StatsSink;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Inserts records into a remote table over HTTP
pub struct RestSink {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl RestSink {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into();
        Ok(Self {
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create the sink from configuration, falling back to environment variables
    pub fn from_config(config: &RestConfig) -> Result<Self> {
        Self::new(
            config.resolved_base_url()?,
            config.resolved_api_key()?,
            &config.table,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatsSink for RestSink {
    async fn insert(&self, row: &StatsRow) -> Result<StatsRecord> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Remote insert failed with status {}: {}", status, body);
            return Err(Error::Persistence(format!("status {}: {}", status.as_u16(), body)));
        }

        let mut records: Vec<StatsRecord> = response.json().await?;
        if records.is_empty() {
            return Err(Error::Persistence("insert returned no rows".to_string()));
        }
        let record = records.swap_remove(0);
        log::debug!("Stored calculation #{} remotely", record.id);
        Ok(record)
    }

    fn name(&self) -> &str {
        "rest"
    }
}
