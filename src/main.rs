use std::path::PathBuf;

use clap::Parser;

use honeypot_scanner::explorer::{ExplorerClient, ExplorerConfig};
use honeypot_scanner::{matcher, report, Chain, ContractQuery, Report, Result};

/// Smart Contract Honeypot Detector - scan verified source for trading restrictions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Contract address to scan
    #[arg(value_name = "CONTRACT_ADDRESS")]
    address: String,

    /// Chain whose block explorer to query
    #[arg(value_name = "CHAIN", value_enum, ignore_case = true)]
    chain: Chain,

    /// Directory the JSON report is written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Usage errors exit with code 1, same as a failed scan
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let query = ContractQuery::new(args.address, args.chain)?;

    println!("🔍 Smart Contract Honeypot Detector");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    println!(
        "Scanning {} on {}...\n",
        query.address,
        query.chain.as_str().to_uppercase()
    );

    println!("Fetching contract source...");
    let client = ExplorerClient::new(ExplorerConfig::default());
    let source = client.fetch_source(&query).await?;
    println!("✓ Contract source fetched.\n");

    println!("Scanning for honeypot patterns...\n");
    let findings = matcher::scan(&source);
    let scan_report = Report::new(&query, findings);

    report::print_report(&scan_report);

    let path = report::write_json(&scan_report, &args.output_dir)?;
    println!("\nReport written to: {}", path.display());

    Ok(())
}
