use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, Utc};

use super::errors::DomainError;

/// Days between order creation and the promised receipt date.
pub const DELIVERY_LEAD_DAYS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Assembling,
}

impl DeliveryStatus {
    /// Value persisted in `deliveries.status`; the storefront displays it as-is.
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Assembling => "Заказ собирается",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInput {
    pub country: String,
    pub city: String,
    pub street: String,
    pub house: i32,
    pub apartment: i32,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderRequest {
    pub customer_id: i32,
    pub order_price: BigDecimal,
    pub card_number: String,
    /// One entry per order line; repeated ids produce repeated lines.
    pub products: Vec<i32>,
    pub address: AddressInput,
}

impl PlaceOrderRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.customer_id <= 0 || self.products.is_empty() {
            return Err(DomainError::InvalidInput(
                "Missing required fields".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i32,
    pub order_price: BigDecimal,
    pub card_number: String,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub order_id: i32,
    pub address_id: i32,
    pub status: DeliveryStatus,
    pub expected_receive_at: DateTime<Utc>,
}

impl NewDelivery {
    pub fn assembling(order_id: i32, address_id: i32, placed_at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            address_id,
            status: DeliveryStatus::Assembling,
            expected_receive_at: placed_at + Duration::days(DELIVERY_LEAD_DAYS),
        }
    }
}
