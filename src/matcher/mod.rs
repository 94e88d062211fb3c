pub mod rules;

pub use rules::{scan, PatternRule, PATTERNS};
