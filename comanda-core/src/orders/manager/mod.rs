//! OrderManager - the order state machine
//!
//! Owns the three stage queues and the sales report and mediates every
//! transition:
//!
//! ```text
//! create_order ──> [placed] ──advance_to_preparing──> [preparing]
//!                                                          │
//!                                 advance_to_delivered ────┤
//!                                                          ├─> [delivered]  (kept for the session)
//!                                                          └─> SalesReport::record_sale (exactly once)
//! ```
//!
//! Queues are FIFO per stage: the oldest order is always the next one to
//! advance, so an order can never jump ahead of one placed earlier. Every
//! queue and the report are mutated only inside manager methods.

mod error;
pub use error::*;

#[cfg(test)]
mod tests;

use crate::menu::Product;
use crate::money;
use crate::orders::Order;
use crate::reports::SalesReport;
use std::collections::VecDeque;

/// Order state machine: three FIFO stage queues, the id counter and the
/// sales report.
#[derive(Debug, Default)]
pub struct OrderManager {
    placed: VecDeque<Order>,
    preparing: VecDeque<Order>,
    delivered: VecDeque<Order>,
    /// Last assigned order id; the next order gets `order_counter + 1`
    order_counter: u64,
    report: SalesReport,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new order from the given items.
    ///
    /// The item list must be non-empty and every price valid; a rejected
    /// order consumes no id. Returns the assigned order id.
    pub fn create_order(&mut self, items: Vec<Product>) -> ManagerResult<u64> {
        for item in &items {
            money::validate_product(item)?;
        }
        let order = Order::new(self.order_counter + 1, items)?;
        self.order_counter = order.id();
        tracing::info!(
            order_id = order.id(),
            items = order.items().len(),
            total = order.total(),
            "order placed"
        );
        self.placed.push_back(order);
        Ok(self.order_counter)
    }

    /// Move the oldest placed order into preparation. No-op when nothing is
    /// waiting.
    pub fn advance_to_preparing(&mut self) {
        let Some(mut order) = self.placed.pop_front() else {
            tracing::debug!("no placed orders to move into preparation");
            return;
        };
        order.advance();
        tracing::info!(order_id = order.id(), "order in preparation");
        self.preparing.push_back(order);
    }

    /// Deliver the oldest order in preparation and record its sale. No-op
    /// when nothing is being prepared.
    pub fn advance_to_delivered(&mut self) {
        let Some(mut order) = self.preparing.pop_front() else {
            tracing::debug!("no orders in preparation to deliver");
            return;
        };
        order.advance();
        // The only ledger feed: one record per delivered order
        self.report.record_sale(&order);
        tracing::info!(order_id = order.id(), total = order.total(), "order delivered");
        self.delivered.push_back(order);
    }

    /// Look an order up by id across the three queues
    pub fn order(&self, id: u64) -> Option<&Order> {
        self.iter_all().find(|order| order.id() == id)
    }

    /// Rendered lines for every live order: placed, then preparing, then
    /// delivered, oldest first within each stage
    pub fn list_all(&self) -> Vec<String> {
        self.iter_all().map(Order::describe).collect()
    }

    /// Orders waiting to be prepared, oldest first
    pub fn placed(&self) -> impl Iterator<Item = &Order> {
        self.placed.iter()
    }

    /// Orders in preparation, oldest first
    pub fn preparing(&self) -> impl Iterator<Item = &Order> {
        self.preparing.iter()
    }

    /// Delivered orders, in delivery order
    pub fn delivered(&self) -> impl Iterator<Item = &Order> {
        self.delivered.iter()
    }

    /// The sales report, read-only; it is fed exclusively by
    /// [`OrderManager::advance_to_delivered`]
    pub fn report(&self) -> &SalesReport {
        &self.report
    }

    fn iter_all(&self) -> impl Iterator<Item = &Order> {
        self.placed
            .iter()
            .chain(self.preparing.iter())
            .chain(self.delivered.iter())
    }
}
