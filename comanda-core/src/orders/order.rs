//! Order and its stage lifecycle

use crate::menu::Product;
use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order construction and validation errors
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },
}

/// Order stage
///
/// Moves strictly forward, one stage at a time; `Delivered` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStage {
    #[default]
    Placed,
    Preparing,
    Delivered,
}

impl OrderStage {
    /// Display label shown to staff
    pub fn label(self) -> &'static str {
        match self {
            OrderStage::Placed => "PEDIDO",
            OrderStage::Preparing => "EM PREPARAÇÃO",
            OrderStage::Delivered => "ENTREGUE",
        }
    }

    /// The next stage, or `None` at the terminal stage
    pub fn next(self) -> Option<OrderStage> {
        match self {
            OrderStage::Placed => Some(OrderStage::Preparing),
            OrderStage::Preparing => Some(OrderStage::Delivered),
            OrderStage::Delivered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// A customer order: an id, the products copied from the menu at creation
/// time, and the current stage.
///
/// Fields are private; the stage can only move through
/// [`OrderManager`](crate::orders::OrderManager) transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    id: u64,
    items: Vec<Product>,
    stage: OrderStage,
}

impl Order {
    /// Build a freshly placed order. Rejects empty item lists.
    pub(crate) fn new(id: u64, items: Vec<Product>) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(Self {
            id,
            items,
            stage: OrderStage::Placed,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn stage(&self) -> OrderStage {
        self.stage
    }

    /// Move to the next stage; silently ignored at the terminal stage.
    pub(crate) fn advance(&mut self) {
        if let Some(next) = self.stage.next() {
            self.stage = next;
        }
    }

    /// Order total, recomputed from the current item prices on every call
    /// (never cached).
    pub fn total(&self) -> f64 {
        let total: Decimal = self
            .items
            .iter()
            .map(|item| money::to_decimal(item.price))
            .sum();
        money::to_f64(total)
    }

    /// Display line, e.g.
    /// `PEDIDO - Nro 1: Prato pronto, Preço: R$25.00 - Total: R$25.00`
    pub fn describe(&self) -> String {
        let items = self
            .items
            .iter()
            .map(Product::describe)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} - Nro {}: {} - Total: {}",
            self.stage.label(),
            self.id,
            items,
            money::format_brl(self.total())
        )
    }
}
