use serde::Deserialize;

use crate::models::{Chain, ContractQuery};
use crate::utils::{Result, ScanError};

/// Per-chain explorer endpoints and API keys.
///
/// Passed into the client explicitly so tests can substitute endpoints.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub bsc_endpoint: String,
    pub eth_endpoint: String,
    pub bscscan_api_key: String,
    pub etherscan_api_key: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            bsc_endpoint: "https://api.bscscan.com/api".to_string(),
            eth_endpoint: "https://api.etherscan.io/api".to_string(),
            bscscan_api_key: "3QA7THP9BWWQPHPPCZXVM81QD479SNDIC9".to_string(),
            // Add one if you want Ethereum support
            etherscan_api_key: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SourceCodeEnvelope {
    #[serde(default)]
    result: Vec<SourceCodeEntry>,
}

#[derive(Debug, Deserialize)]
struct SourceCodeEntry {
    #[serde(rename = "SourceCode", default)]
    source_code: String,
}

/// Block-explorer API client
pub struct ExplorerClient {
    http: reqwest::Client,
    config: ExplorerConfig,
}

impl ExplorerClient {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn source_url(&self, query: &ContractQuery) -> String {
        let (endpoint, api_key) = match query.chain {
            Chain::Bsc => (&self.config.bsc_endpoint, &self.config.bscscan_api_key),
            Chain::Eth => (&self.config.eth_endpoint, &self.config.etherscan_api_key),
        };

        format!(
            "{}?module=contract&action=getsourcecode&address={}&apikey={}",
            endpoint, query.address, api_key
        )
    }

    /// Fetch the verified source code for a contract.
    ///
    /// One GET, no retry; any transport failure propagates and aborts the run.
    pub async fn fetch_source(&self, query: &ContractQuery) -> Result<String> {
        let url = self.source_url(query);

        tracing::debug!("Fetching verified source for {} ({})", query.address, query.chain);

        let body = self.http.get(&url).send().await?.text().await?;
        let source = parse_source_response(&body)?;

        tracing::info!("Fetched {} bytes of verified source", source.len());

        Ok(source)
    }
}

/// Extract `result[0].SourceCode` from an explorer response body.
///
/// An empty result list or a blank source string means the contract is
/// not verified.
pub fn parse_source_response(body: &str) -> Result<String> {
    let envelope: SourceCodeEnvelope = serde_json::from_str(body)?;

    match envelope.result.into_iter().next() {
        Some(entry) if !entry.source_code.is_empty() => Ok(entry.source_code),
        _ => Err(ScanError::SourceUnavailable),
    }
}
