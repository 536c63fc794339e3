//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only presentation state exists today; it is kept in its own module so
//! components depend on a small focused model.

pub mod ui;
