//! Harborlane Surface - host-embedded catalog surface controller.
//!
//! The surface renders catalog data that can arrive from two producers: a
//! tool invocation injected by the hosting runtime, or a fallback fetch
//! against the local retrieval endpoint. This crate owns the reconciliation
//! between the two plus the persisted selection state; rendering itself is
//! an external collaborator.
//!
//! # Modules
//!
//! - [`host`] - Capability interface to the hosting runtime
//! - [`source`] - Local catalog fetch behind a trait seam
//! - [`controller`] - The reconciliation state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod controller;
pub mod host;
pub mod source;

pub use controller::{SourcePhase, SurfaceController, SurfaceView};
pub use host::{DisplayMode, HostBridge, HostContext, Theme};
pub use source::{CatalogSource, EndpointSource};
