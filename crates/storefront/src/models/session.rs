//! Session-related types.

/// Session keys for per-visitor state.
pub mod keys {
    /// Key for the visitor's [`Shopper`](crate::shopper::Shopper) state.
    pub const SHOPPER: &str = "shopper";
}
