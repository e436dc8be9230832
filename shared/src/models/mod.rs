//! Data models
//!
//! Shared between bento-server and any frontend (via API).
//! Master records (`Department`, `Employee`, `OrderWindow`) carry a numeric
//! `oid`; meal orders are keyed by the composite [`OrderKey`] instead.

pub mod department;
pub mod employee;
pub mod meal_order;
pub mod order_window;

// Re-exports
pub use department::*;
pub use employee::*;
pub use meal_order::*;
pub use order_window::*;
