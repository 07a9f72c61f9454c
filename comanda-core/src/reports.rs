//! Sales reporting
//!
//! The ledger behind the reports screen: per-product quantity sold and
//! revenue, fed exclusively by delivered orders.

use crate::money;
use crate::orders::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-product running totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesEntry {
    pub quantity: u32,
    pub revenue: f64,
}

/// Running per-product sales aggregate
///
/// Keyed by product name, iterated in name order. Recording is
/// crate-private; the delivered transition in
/// [`OrderManager`](crate::orders::OrderManager) is the only feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesReport {
    sold: BTreeMap<String, SalesEntry>,
}

impl SalesReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one delivered order: each item adds one unit and its price to
    /// that product's entry. Not idempotent; the manager calls this exactly
    /// once per order, at the delivery transition.
    pub(crate) fn record_sale(&mut self, order: &Order) {
        for item in order.items() {
            let entry = self.sold.entry(item.name.clone()).or_default();
            entry.quantity += 1;
            entry.revenue =
                money::to_f64(money::to_decimal(entry.revenue) + money::to_decimal(item.price));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sold.is_empty()
    }

    /// `(product name, entry)` pairs in name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SalesEntry)> {
        self.sold.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Units sold per product
    pub fn quantity_by_product(&self) -> BTreeMap<String, u32> {
        self.sold
            .iter()
            .map(|(name, entry)| (name.clone(), entry.quantity))
            .collect()
    }

    /// Total revenue across all delivered orders
    pub fn total_revenue(&self) -> f64 {
        let total: Decimal = self
            .sold
            .values()
            .map(|entry| money::to_decimal(entry.revenue))
            .sum();
        money::to_f64(total)
    }

    /// Quantity report for the shell's label
    pub fn render_quantities(&self) -> String {
        let mut out = String::from("Quantidade vendida de cada produto:");
        for (name, entry) in &self.sold {
            out.push_str(&format!("\n{}: {} unidades", name, entry.quantity));
        }
        out
    }

    /// Revenue report for the shell's label
    pub fn render_revenue(&self) -> String {
        format!(
            "Faturamento total do estabelecimento: {}",
            money::format_brl(self.total_revenue())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Product;

    fn delivered_order(id: u64, items: Vec<Product>) -> Order {
        let mut order = Order::new(id, items).unwrap();
        order.advance();
        order.advance();
        order
    }

    #[test]
    fn test_record_sale_counts_each_item_once() {
        let mut report = SalesReport::new();
        let order = delivered_order(
            1,
            vec![
                Product::new("Prato pronto", 25.0),
                Product::new("Suco 250ml", 8.0),
            ],
        );

        report.record_sale(&order);

        let quantities = report.quantity_by_product();
        assert_eq!(quantities.get("Prato pronto"), Some(&1));
        assert_eq!(quantities.get("Suco 250ml"), Some(&1));
        assert_eq!(report.total_revenue(), 33.0);
    }

    #[test]
    fn test_record_sale_accumulates_across_orders() {
        let mut report = SalesReport::new();
        report.record_sale(&delivered_order(1, vec![Product::new("Suco 250ml", 8.0)]));
        report.record_sale(&delivered_order(2, vec![Product::new("Suco 250ml", 8.0)]));

        let entry = report.entries().next().unwrap().1;
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.revenue, 16.0);
    }

    #[test]
    fn test_revenue_accumulates_without_float_drift() {
        let mut report = SalesReport::new();
        for id in 0..10 {
            report.record_sale(&delivered_order(id, vec![Product::new("Bala", 0.1)]));
        }

        assert_eq!(report.total_revenue(), 1.0);
    }

    #[test]
    fn test_empty_report_queries() {
        let report = SalesReport::new();
        assert!(report.is_empty());
        assert_eq!(report.total_revenue(), 0.0);
        assert!(report.quantity_by_product().is_empty());
        assert_eq!(report.render_quantities(), "Quantidade vendida de cada produto:");
    }

    #[test]
    fn test_render_matches_display_format() {
        let mut report = SalesReport::new();
        report.record_sale(&delivered_order(
            1,
            vec![
                Product::new("Prato pronto", 25.0),
                Product::new("Suco 250ml", 8.0),
            ],
        ));

        assert_eq!(
            report.render_quantities(),
            "Quantidade vendida de cada produto:\nPrato pronto: 1 unidades\nSuco 250ml: 1 unidades"
        );
        assert_eq!(
            report.render_revenue(),
            "Faturamento total do estabelecimento: R$33.00"
        );
    }
}
