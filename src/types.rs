//! Request and response types for the wallet node API
//!
//! Every optional field is an `Option` with omit-if-unset serialization:
//! a field left unset never appears in the request body, so the server can
//! distinguish "unspecified" from "explicitly empty". Monetary values are
//! decimal strings, never JSON numbers.

use serde::{Deserialize, Serialize};

use crate::error::WalletClientError;

/// Maximum memo width accepted by the wallet, in UTF-8 bytes
pub const MEMO_MAX_BYTES: usize = 32;

/// One payment destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Recipient public address
    pub public_address: String,

    /// Amount to send, as a decimal string
    pub amount: String,

    /// Memo attached to the note (at most [`MEMO_MAX_BYTES`] bytes)
    pub memo: String,

    /// Asset to send; unset means the native asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
}

impl Output {
    /// Create a native-asset output
    pub fn new(
        public_address: impl Into<String>,
        amount: impl Into<String>,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            public_address: public_address.into(),
            amount: amount.into(),
            memo: memo.into(),
            asset_id: None,
        }
    }

    /// Create an output paying a specific asset
    pub fn with_asset(
        public_address: impl Into<String>,
        amount: impl Into<String>,
        memo: impl Into<String>,
        asset_id: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: Some(asset_id.into()),
            ..Self::new(public_address, amount, memo)
        }
    }
}

/// Asset-issuance instruction
///
/// Without an `asset_id` the mint creates a new asset, in which case `name`
/// and `metadata` must both be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mint {
    /// Existing asset to mint more of; unset means create a new asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,

    /// Name for a newly created asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Metadata for a newly created asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// Amount to mint, as a decimal string
    pub value: String,

    /// Transfer asset ownership to this address within the same transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_ownership_to: Option<String>,
}

impl Mint {
    /// Mint more of an existing asset
    pub fn for_asset(asset_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            asset_id: Some(asset_id.into()),
            name: None,
            metadata: None,
            value: value.into(),
            transfer_ownership_to: None,
        }
    }

    /// Mint a brand-new asset
    pub fn new_asset(
        name: impl Into<String>,
        metadata: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: None,
            name: Some(name.into()),
            metadata: Some(metadata.into()),
            value: value.into(),
            transfer_ownership_to: None,
        }
    }
}

/// Asset-destruction instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Burn {
    /// Asset to burn
    pub asset_id: String,

    /// Amount to burn, as a decimal string
    pub value: String,
}

impl Burn {
    pub fn new(asset_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            value: value.into(),
        }
    }
}

/// Request body for `/wallet/createTransaction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Account to spend from; unset means the server's default account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Payment destinations, in order
    pub outputs: Vec<Output>,

    /// Assets to mint within this transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mints: Option<Vec<Mint>>,

    /// Assets to burn within this transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burns: Option<Vec<Burn>>,

    /// Explicit fee, as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,

    /// Fee rate, as a decimal string; mutually exclusive with `fee`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<String>,

    /// Absolute block sequence at which the transaction expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,

    /// Expiration as a block count relative to the current head
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_delta: Option<u32>,

    /// Minimum confirmations a note needs before it may be spent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u32>,

    /// Spend exactly these notes, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl CreateTransactionRequest {
    /// Check the request before it goes on the wire
    ///
    /// Rejects the ambiguous fee/feeRate combination, over-long memos, and
    /// new-asset mints missing their name or metadata. Everything else is
    /// the server's call.
    pub fn validate(&self) -> Result<(), WalletClientError> {
        if self.fee.is_some() && self.fee_rate.is_some() {
            return Err(WalletClientError::validation(
                "fee and feeRate are mutually exclusive, set at most one",
            ));
        }

        for output in &self.outputs {
            if output.memo.len() > MEMO_MAX_BYTES {
                return Err(WalletClientError::validation(format!(
                    "memo exceeds {} bytes (got {})",
                    MEMO_MAX_BYTES,
                    output.memo.len()
                )));
            }
        }

        if let Some(mints) = &self.mints {
            for mint in mints {
                if mint.asset_id.is_none() && (mint.name.is_none() || mint.metadata.is_none()) {
                    return Err(WalletClientError::validation(
                        "minting a new asset requires both name and metadata",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Response body (`data`) from `/wallet/createTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionResponse {
    /// Hex-encoded serialized unsigned transaction
    pub transaction: String,
}

/// Request body for `/wallet/postTransaction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTransactionRequest {
    /// Account that signs; unset means the server's default account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Hex-encoded serialized transaction to sign and post
    pub transaction: String,

    /// Whether the server should also relay to the network; unset means the
    /// server default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<bool>,
}

impl PostTransactionRequest {
    pub fn new(transaction: impl Into<String>) -> Self {
        Self {
            account: None,
            transaction: transaction.into(),
            broadcast: None,
        }
    }

    /// Check the request before it goes on the wire
    ///
    /// The transaction must be a non-empty, well-formed hex string. The
    /// bytes themselves stay opaque; content validation is the server's.
    pub fn validate(&self) -> Result<(), WalletClientError> {
        if self.transaction.is_empty() {
            return Err(WalletClientError::validation("transaction must not be empty"));
        }
        if hex::decode(&self.transaction).is_err() {
            return Err(WalletClientError::validation(
                "transaction is not a well-formed hex string",
            ));
        }
        Ok(())
    }
}

/// Response body (`data`) from `/wallet/postTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTransactionResponse {
    /// Whether the mempool accepted the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,

    /// Whether the transaction was relayed to the network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcasted: Option<bool>,

    /// Hex-encoded transaction identifier
    pub hash: String,

    /// Hex-encoded final serialized transaction, now signed
    pub transaction: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value
            .as_object()
            .expect("expected JSON object")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let request = CreateTransactionRequest {
            outputs: vec![Output::new("addr1", "1", "m")],
            ..Default::default()
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(keys(&body), vec!["outputs"]);
        assert_eq!(
            keys(&body["outputs"][0]),
            vec!["amount", "memo", "publicAddress"]
        );
    }

    #[test]
    fn test_set_falsy_fields_are_serialized() {
        let request = PostTransactionRequest {
            account: Some(String::new()),
            transaction: "abcd".to_string(),
            broadcast: Some(false),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["account"], json!(""));
        assert_eq!(body["broadcast"], json!(false));
        assert_eq!(body["transaction"], json!("abcd"));
    }

    #[test]
    fn test_full_request_serializes_all_fields() {
        let request = CreateTransactionRequest {
            account: Some("primary".to_string()),
            outputs: vec![Output::with_asset("addr1", "5", "memo", "asset1")],
            mints: Some(vec![Mint::new_asset("token", "meta", "10")]),
            burns: Some(vec![Burn::new("asset2", "3")]),
            fee: Some("1".to_string()),
            fee_rate: None,
            expiration: Some(5000),
            expiration_delta: None,
            confirmations: Some(2),
            notes: Some(vec!["note1".to_string()]),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            keys(&body),
            vec![
                "account",
                "burns",
                "confirmations",
                "expiration",
                "fee",
                "mints",
                "notes",
                "outputs"
            ]
        );
        assert_eq!(body["outputs"][0]["assetId"], json!("asset1"));
        // a new-asset mint must carry no assetId key at all
        assert!(body["mints"][0].get("assetId").is_none());
        assert_eq!(body["mints"][0]["name"], json!("token"));
    }

    #[test]
    fn test_response_round_trip_preserves_absent_optionals() {
        let data = json!({
            "hash": "ff00",
            "transaction": "eeff",
            "accepted": true
        });

        let response: PostTransactionResponse = serde_json::from_value(data).unwrap();
        assert_eq!(response.hash, "ff00");
        assert_eq!(response.transaction, "eeff");
        assert_eq!(response.accepted, Some(true));
        assert_eq!(response.broadcasted, None);
    }

    #[test]
    fn test_response_missing_required_field_fails() {
        let data = json!({ "accepted": true });
        let result: Result<PostTransactionResponse, _> = serde_json::from_value(data);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_fee_and_fee_rate_together() {
        let request = CreateTransactionRequest {
            outputs: vec![Output::new("addr1", "1", "m")],
            fee: Some("1".to_string()),
            fee_rate: Some("2".to_string()),
            ..Default::default()
        };

        let err = request.validate().unwrap_err();
        assert!(matches!(err, WalletClientError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_oversized_memo() {
        let request = CreateTransactionRequest {
            outputs: vec![Output::new("addr1", "1", "x".repeat(MEMO_MAX_BYTES + 1))],
            ..Default::default()
        };

        assert!(request.validate().is_err());

        let at_limit = CreateTransactionRequest {
            outputs: vec![Output::new("addr1", "1", "x".repeat(MEMO_MAX_BYTES))],
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_new_asset_mint_without_metadata() {
        let mut mint = Mint::new_asset("token", "meta", "10");
        mint.metadata = None;

        let request = CreateTransactionRequest {
            outputs: vec![],
            mints: Some(vec![mint]),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        // minting an existing asset needs neither name nor metadata
        let request = CreateTransactionRequest {
            outputs: vec![],
            mints: Some(vec![Mint::for_asset("asset1", "10")]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_transaction_hex() {
        assert!(PostTransactionRequest::new("zzzz").validate().is_err());
        assert!(PostTransactionRequest::new("abc").validate().is_err()); // odd length
        assert!(PostTransactionRequest::new("").validate().is_err());
        assert!(PostTransactionRequest::new("0201ab").validate().is_ok());
    }
}
