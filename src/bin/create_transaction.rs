//! Demo: build an unsigned transaction through the wallet node
//!
//! Thin wrapper over [`WalletClient::create_transaction`]; prints the
//! serialized transaction or the server's error detail.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet_client::{
    ClientConfig, CreateTransactionRequest, Output, WalletClient, WalletClientError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build an unsigned transaction via the wallet node", long_about = None)]
struct Args {
    /// Wallet node base URL
    #[arg(long, env = "WALLET_API_URL", default_value = "http://localhost:8888")]
    url: String,

    /// Account to spend from (server default account when omitted)
    #[arg(long)]
    account: Option<String>,

    /// Recipient public address
    #[arg(long)]
    to: String,

    /// Amount to send, as a decimal string
    #[arg(long, default_value = "1")]
    amount: String,

    /// Memo attached to the output
    #[arg(long, default_value = "")]
    memo: String,

    /// Asset to send (native asset when omitted)
    #[arg(long)]
    asset_id: Option<String>,

    /// Explicit fee, as a decimal string
    #[arg(long)]
    fee: Option<String>,

    /// Fee rate, as a decimal string (mutually exclusive with --fee)
    #[arg(long)]
    fee_rate: Option<String>,

    /// Transaction expiration as an absolute block sequence
    #[arg(long)]
    expiration: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ClientConfig {
        base_url: args.url,
        timeout_secs: args.timeout_secs,
    };
    let client = WalletClient::new(&config)?;

    let mut output = Output::new(args.to, args.amount, args.memo);
    output.asset_id = args.asset_id;

    let request = CreateTransactionRequest {
        account: args.account,
        outputs: vec![output],
        fee: args.fee,
        fee_rate: args.fee_rate,
        expiration: args.expiration,
        ..Default::default()
    };

    match client.create_transaction(&request).await {
        Ok(response) => {
            println!("Transaction: {}", response.transaction);
        }
        Err(WalletClientError::HttpRequest { status, body }) => {
            eprintln!("An error occurred: HTTP {status}: {body}");
        }
        Err(e) => {
            eprintln!("An error occurred: {e}");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "wallet_client=debug,info"
    } else {
        "wallet_client=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
