//! Client library for a wallet node's JSON-over-HTTP API
//!
//! Exposes two operations against a remote wallet node: building an
//! unsigned transaction (`/wallet/createTransaction`) and signing/posting a
//! serialized transaction for broadcast (`/wallet/postTransaction`).
//! Transaction construction, signing, and relay all live on the node; this
//! crate shapes the JSON, sends it, and types the result.
//!
//! ```no_run
//! use wallet_client::{CreateTransactionRequest, Output, WalletClient};
//!
//! # async fn example() -> Result<(), wallet_client::WalletClientError> {
//! let client = WalletClient::for_url("http://localhost:8888")?;
//!
//! let request = CreateTransactionRequest {
//!     account: Some("my-account".to_string()),
//!     outputs: vec![Output::new("1d1a1fb9...", "1", "thanks")],
//!     ..Default::default()
//! };
//!
//! let response = client.create_transaction(&request).await?;
//! println!("Transaction: {}", response.transaction);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::WalletClient;
pub use config::ClientConfig;
pub use error::WalletClientError;
pub use types::{
    Burn, CreateTransactionRequest, CreateTransactionResponse, Mint, Output,
    PostTransactionRequest, PostTransactionResponse, MEMO_MAX_BYTES,
};
