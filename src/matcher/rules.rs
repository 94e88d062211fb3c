use once_cell::sync::Lazy;

use crate::models::Finding;

/// One keyword heuristic over lowercased contract source.
pub struct PatternRule {
    pub name: &'static str,
    pub description: &'static str,
    pub detect: fn(&str) -> bool,
}

/// Honeypot heuristics. Declaration order fixes report ordering.
pub static PATTERNS: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule {
            name: "onlyWhitelistedSell",
            description: "Possible sell restriction: Only whitelisted addresses can sell.",
            detect: |src| {
                src.contains("whitelist") && (src.contains("sell") || src.contains("transfer"))
            },
        },
        PatternRule {
            name: "blacklist",
            description: "Blacklist detected: Certain addresses can be blocked.",
            detect: |src| src.contains("blacklist"),
        },
        PatternRule {
            name: "taxOnSell",
            description: "Token applies taxes on sells (check how high).",
            detect: |src| src.contains("tax") && src.contains("sell"),
        },
        PatternRule {
            name: "disableSell",
            description: "Possible sell blocking (revert, require, or block in sell logic).",
            detect: |src| {
                (src.contains("revert") || src.contains("require"))
                    && (src.contains("sell") || src.contains("transfer"))
            },
        },
        PatternRule {
            name: "antiBot",
            description: "Anti-bot or anti-sniper logic present.",
            detect: |src| src.contains("bot") || src.contains("anti"),
        },
    ]
});

/// Scan contract source for honeypot patterns.
///
/// The source is lowercased once; every rule whose predicate matches
/// contributes one finding, in declaration order.
pub fn scan(source: &str) -> Vec<Finding> {
    let src = source.to_lowercase();

    PATTERNS
        .iter()
        .filter(|rule| (rule.detect)(&src))
        .map(|rule| Finding::new(rule.name, rule.description))
        .collect()
}
