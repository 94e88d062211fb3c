use serde::{Deserialize, Serialize};

use super::{ContractQuery, Finding};

/// Scan result for one contract. Rendered twice (console, JSON file)
/// from the same value; findings keep rule declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub contract: String,
    pub chain: String,
    #[serde(rename = "honeypot_patterns")]
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(query: &ContractQuery, findings: Vec<Finding>) -> Self {
        Self {
            contract: query.address.clone(),
            chain: query.chain.to_string(),
            findings,
        }
    }

    /// File name the JSON rendering is written under.
    pub fn file_name(&self) -> String {
        format!("{}_honeypot_report.json", self.contract)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f, "              HONEYPOT SCAN REPORT")?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f)?;
        writeln!(f, "Contract: {}", self.contract)?;
        writeln!(f, "Chain:    {}", self.chain.to_uppercase())?;
        writeln!(f)?;

        if self.findings.is_empty() {
            writeln!(f, "🟢 No obvious honeypot patterns found!")?;
        } else {
            writeln!(f, "🚨 Honeypot patterns detected!")?;
            writeln!(f)?;
            writeln!(f, "═══ FINDINGS ═══")?;
            for finding in &self.findings {
                writeln!(f, "🔴 {:<22} {}", finding.pattern, finding.explanation)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;

        Ok(())
    }
}
