//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Simulated sign-in and registration

pub mod auth;
