//! Comanda Core - order management core for the restaurant desktop app
//!
//! The desktop shell renders lists and buttons; everything with behavior
//! lives here:
//!
//! - **Menu** (`menu`): product catalog and selection-input parsing
//! - **Orders** (`orders`): order lifecycle and the `OrderManager` state machine
//! - **Reports** (`reports`): per-product sales aggregate fed by delivered orders
//! - **Money** (`money`): decimal price arithmetic and currency formatting
//!
//! # Module structure
//!
//! ```text
//! comanda-core/src/
//! ├── menu.rs        # catalog, selection parsing
//! ├── money.rs       # decimal helpers, validation, formatting
//! ├── orders/        # Order, OrderStage, OrderManager
//! ├── reports.rs     # SalesReport ledger
//! └── utils/         # logger setup for the shell
//! ```
//!
//! # Order flow
//!
//! ```text
//! Menu::select ──> OrderManager::create_order ──> [placed]
//!      [placed] ──advance_to_preparing──> [preparing]
//!   [preparing] ──advance_to_delivered──> [delivered] ──> SalesReport
//! ```
//!
//! All state is in-memory and single-threaded; it lives for the session and
//! is discarded on exit.

pub mod menu;
pub mod money;
pub mod orders;
pub mod reports;
pub mod utils;

// Re-export public types
pub use menu::{Menu, Product};
pub use orders::{ManagerError, ManagerResult, Order, OrderError, OrderManager, OrderStage};
pub use reports::{SalesEntry, SalesReport};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_level};
