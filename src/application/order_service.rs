use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewDelivery, NewOrder, PlaceOrderRequest};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Turn a checkout request into an order.
    ///
    /// Address, order, order lines and delivery are written and the basket is
    /// emptied inside one transaction: either all of it is committed or none
    /// of it is. Invalid requests are rejected before a transaction is opened.
    pub fn place_order(&self, request: PlaceOrderRequest) -> Result<i32, DomainError> {
        request.validate()?;

        let customer_id = request.customer_id;
        let item_count = request.products.len();
        let placed_at = Utc::now();

        let result = self.repo.in_transaction(move |uow| {
            if !uow.customer_exists(customer_id)? {
                return Err(DomainError::NotFound(format!(
                    "User with ID {} does not exist",
                    customer_id
                )));
            }

            let address_id = uow.insert_address(customer_id, &request.address)?;
            let order_id = uow.insert_order(&NewOrder {
                customer_id,
                order_price: request.order_price,
                card_number: request.card_number,
                placed_at,
            })?;
            uow.insert_order_lines(order_id, &request.products)?;
            uow.insert_delivery(&NewDelivery::assembling(order_id, address_id, placed_at))?;
            let cleared = uow.clear_basket(customer_id)?;
            log::debug!(
                "Order {} cleared {} basket lines for customer {}",
                order_id,
                cleared,
                customer_id
            );

            Ok(order_id)
        });

        match &result {
            Ok(order_id) => log::info!(
                "Order {} created for customer {} with {} items",
                order_id,
                customer_id,
                item_count
            ),
            Err(e) => log::warn!(
                "Order placement for customer {} rolled back: {}",
                customer_id,
                e
            ),
        }
        result
    }
}
