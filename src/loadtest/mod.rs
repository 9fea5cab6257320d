//! Loadtest command handlers.

pub mod populate;
