use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::{Result, ScanError};

/// Chains with a supported block explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Bsc,
    Eth,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Bsc => "bsc",
            Chain::Eth => "eth",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contract to scan, built from CLI input.
#[derive(Debug, Clone)]
pub struct ContractQuery {
    pub address: String,
    pub chain: Chain,
}

impl ContractQuery {
    pub fn new(address: impl Into<String>, chain: Chain) -> Result<Self> {
        let address = address.into();

        let hex_part = address
            .strip_prefix("0x")
            .ok_or_else(|| ScanError::InvalidAddress(address.clone()))?;
        if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ScanError::InvalidAddress(address));
        }

        Ok(Self { address, chain })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        let query = ContractQuery::new("0xdAC17F958D2ee523a2206206994597C13D831ec7", Chain::Eth)
            .expect("checksummed address should parse");
        assert_eq!(query.chain, Chain::Eth);
    }

    #[test]
    fn test_rejects_malformed_address() {
        assert!(ContractQuery::new("dAC17F958D2ee523a2206206994597C13D831ec7", Chain::Eth).is_err());
        assert!(ContractQuery::new("0x1234", Chain::Bsc).is_err());
        assert!(ContractQuery::new("0xZZC17F958D2ee523a2206206994597C13D831ec7", Chain::Bsc).is_err());
    }
}
