use crate::core::hashing::canonical_hash;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The payload of a transfer: who sends how much to whom.
///
/// No balance or signature checks happen anywhere in this crate; the ledger
/// records whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct TransactionInfo {
    sender: String,
    recipient: String,
    amount: f64,
}

/// A pending or sealed transaction: the payload plus its derived id,
/// the canonical hash of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Transaction {
    transaction_id: String,
    transaction_info: TransactionInfo,
}

impl Transaction {
    pub fn new(sender: &str, recipient: &str, amount: f64) -> Result<Transaction> {
        let transaction_info = TransactionInfo {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            amount,
        };
        let transaction_id = canonical_hash(&transaction_info)?;

        Ok(Transaction {
            transaction_id,
            transaction_info,
        })
    }

    pub fn get_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn get_sender(&self) -> &str {
        &self.transaction_info.sender
    }

    pub fn get_recipient(&self) -> &str {
        &self.transaction_info.recipient
    }

    pub fn get_amount(&self) -> f64 {
        self.transaction_info.amount
    }
}
