pub mod finding;
pub mod query;
pub mod report;

pub use finding::Finding;
pub use query::{Chain, ContractQuery};
pub use report::Report;
