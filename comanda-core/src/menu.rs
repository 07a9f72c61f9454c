//! Menu catalog
//!
//! `Product` is the value object orders copy at creation time; `Menu` is the
//! insertion-ordered catalog the desktop shell renders and resolves
//! selection input against.

use crate::money;
use serde::{Deserialize, Serialize};

/// A menu product
///
/// Plain fields, no identity: orders hold clones taken at creation time, so
/// later menu edits never change what a historical order contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Display line, e.g. `Prato pronto, Preço: R$25.00`
    pub fn describe(&self) -> String {
        format!("{}, Preço: {}", self.name, money::format_brl(self.price))
    }
}

/// Insertion-ordered product catalog
///
/// Insertion order is display order. Names are not required to be unique;
/// [`Menu::remove`] drops every product with a matching name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    products: Vec<Product>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven-product house catalog the app ships with
    pub fn house_menu() -> Self {
        let mut menu = Menu::new();
        for (name, price) in [
            ("Prato pronto", 25.00),
            ("Prato kids", 20.00),
            ("Vegetariano", 22.00),
            ("Vegetariano kids", 18.00),
            ("Suco 250ml", 8.00),
            ("Refrigerante 340ml", 8.00),
            ("Água 500ml", 4.00),
        ] {
            menu.add(Product::new(name, price));
        }
        menu
    }

    /// Append a product at the end of the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove every product whose name matches exactly; no-op if absent
    pub fn remove(&mut self, name: &str) {
        self.products.retain(|product| product.name != name);
    }

    /// Products in display order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Numbered display lines for the shell's product list widget
    pub fn list(&self) -> Vec<String> {
        self.products
            .iter()
            .enumerate()
            .map(|(idx, product)| format!("{}. {}", idx + 1, product.describe()))
            .collect()
    }

    /// Resolve a selection string of whitespace-separated 1-based product
    /// indices, e.g. `"1 99 2"`.
    ///
    /// Entries that are not numbers or fall outside the catalog are dropped
    /// silently; the result may be empty.
    pub fn select(&self, input: &str) -> Vec<Product> {
        let mut selected = Vec::new();
        for entry in input.split_whitespace() {
            let Ok(index) = entry.parse::<usize>() else {
                tracing::debug!(entry, "selection entry is not a number, dropped");
                continue;
            };
            match index.checked_sub(1).and_then(|i| self.products.get(i)) {
                Some(product) => selected.push(product.clone()),
                None => tracing::debug!(entry, "selection index out of range, dropped"),
            }
        }
        selected
    }
}
