//! Route-level page components.

pub mod admin;
pub mod home;
