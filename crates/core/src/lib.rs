//! Harborlane Core - Shared types and pure catalog logic.
//!
//! This crate provides the types and pure functions used across all
//! Harborlane components:
//! - `server` - Catalog gateway and invocation surface (HTTP)
//! - `surface` - Host-embedded interactive surface controller
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog items, fetch/invocation results, selection state
//! - [`filter`] - Case-insensitive substring filtering over catalog items
//! - [`assets`] - Deterministic text-to-asset-URL resolution

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assets;
pub mod filter;
pub mod types;

pub use types::*;
