use std::fmt;

use thiserror::Error;

/// The write or read step a storage failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStage {
    Connection,
    Transaction,
    Query,
    CustomerLookup,
    Address,
    Order,
    OrderLines,
    Delivery,
    BasketClear,
}

impl StorageStage {
    /// Message safe to hand to API clients.
    pub fn public_message(self) -> &'static str {
        match self {
            StorageStage::Connection | StorageStage::Query => "Database error",
            StorageStage::Transaction => "Failed to commit transaction",
            StorageStage::CustomerLookup => "Failed to look up customer",
            StorageStage::Address => "Failed to create address",
            StorageStage::Order => "Failed to create order",
            StorageStage::OrderLines => "Failed to add products to order",
            StorageStage::Delivery => "Failed to create delivery",
            StorageStage::BasketClear => "Failed to clear basket",
        }
    }
}

impl fmt::Display for StorageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageStage::Connection => "connection",
            StorageStage::Transaction => "transaction",
            StorageStage::Query => "query",
            StorageStage::CustomerLookup => "customer lookup",
            StorageStage::Address => "address insert",
            StorageStage::Order => "order insert",
            StorageStage::OrderLines => "order line insert",
            StorageStage::Delivery => "delivery insert",
            StorageStage::BasketClear => "basket clear",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid login or password")]
    InvalidCredentials,
    #[error("{stage} failed: {message}")]
    Storage { stage: StorageStage, message: String },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn storage(stage: StorageStage, err: impl fmt::Display) -> Self {
        DomainError::Storage {
            stage,
            message: err.to_string(),
        }
    }
}
