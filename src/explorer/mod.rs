pub mod client;

pub use client::{parse_source_response, ExplorerClient, ExplorerConfig};
