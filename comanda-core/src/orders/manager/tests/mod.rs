use super::*;
use crate::menu::Menu;
use crate::orders::{OrderError, OrderStage};

fn create_test_manager() -> OrderManager {
    OrderManager::new()
}

fn product(name: &str, price: f64) -> Product {
    Product::new(name, price)
}

/// Place an order, asserting success, and return its id
fn place_order(manager: &mut OrderManager, items: Vec<Product>) -> u64 {
    manager.create_order(items).expect("failed to place order")
}

/// Drive the oldest placed order all the way to delivered
fn deliver_next(manager: &mut OrderManager) {
    manager.advance_to_preparing();
    manager.advance_to_delivered();
}

/// The two-item order used by the lifecycle scenarios
fn prato_e_suco() -> Vec<Product> {
    vec![product("Prato pronto", 25.0), product("Suco 250ml", 8.0)]
}
