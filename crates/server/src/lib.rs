//! Harborlane Server - Catalog gateway and invocation surface.
//!
//! Library entry point so integration tests can build the router and inject
//! a fake catalog transport. The binary lives in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gateway;
pub mod routes;
pub mod state;
pub mod tool;
