pub mod explorer;
pub mod matcher;
pub mod models;
pub mod report;
pub mod utils;

pub use explorer::{ExplorerClient, ExplorerConfig};
pub use matcher::scan;
pub use models::{Chain, ContractQuery, Finding, Report};
pub use utils::{Result, ScanError};
