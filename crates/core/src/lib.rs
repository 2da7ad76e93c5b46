//! GymStore Core - Shared types library.
//!
//! This crate provides common types used across the GymStore components:
//! - `storefront` - Public-facing shop and admin back-office
//! - `integration-tests` - In-process HTTP flow tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! shared state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
