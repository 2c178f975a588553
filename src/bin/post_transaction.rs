//! Demo: sign and post a serialized transaction through the wallet node
//!
//! Thin wrapper over [`WalletClient::post_transaction`]; prints the
//! transaction hash and status flags, or the server's error detail.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet_client::{ClientConfig, PostTransactionRequest, WalletClient, WalletClientError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sign and post a serialized transaction via the wallet node", long_about = None)]
struct Args {
    /// Wallet node base URL
    #[arg(long, env = "WALLET_API_URL", default_value = "http://localhost:8888")]
    url: String,

    /// Account that signs (server default account when omitted)
    #[arg(long)]
    account: Option<String>,

    /// Hex-encoded serialized transaction to post
    #[arg(long)]
    transaction: String,

    /// Skip relaying the transaction to the network
    #[arg(long)]
    no_broadcast: bool,

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

    let request = PostTransactionRequest {
        account: args.account,
        transaction: args.transaction,
        // only an explicit opt-out goes on the wire; otherwise the server decides
        broadcast: args.no_broadcast.then_some(false),
    };

    match client.post_transaction(&request).await {
        Ok(response) => {
            println!("Hash: {}", response.hash);
            println!("Transaction: {}", response.transaction);
            if let Some(accepted) = response.accepted {
                println!("Accepted: {accepted}");
            }
            if let Some(broadcasted) = response.broadcasted {
                println!("Broadcasted: {broadcasted}");
            }
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
