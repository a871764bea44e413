//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each utility keeps its decision logic in plain Rust (testable natively)
//! and confines browser glue to hydrate-only hooks.

pub mod device;
pub mod persistence;
pub mod sidebar;
pub mod typewriter;
pub mod visibility;
