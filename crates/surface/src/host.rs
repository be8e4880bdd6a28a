//! Capability interface to the hosting runtime.
//!
//! The host is a message-passing boundary outside this crate's control:
//! tool output injection, a persisted key-value widget state, environment
//! signals, and intrinsic-height notifications. The controller depends on
//! this trait rather than ambient globals so it stays testable with a fake.

use serde_json::Value;

use harborlane_core::InvocationResult;

/// How the host is currently presenting the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Inline,
    Fullscreen,
    PictureInPicture,
}

/// Host color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Environment signals read from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    pub display_mode: DisplayMode,
    pub theme: Theme,
    /// BCP 47 locale tag.
    pub locale: String,
    /// Whether the surface runs inside a host. Standalone surfaces skip the
    /// grace window and fetch immediately.
    pub embedded: bool,
}

impl HostContext {
    /// Context for a surface embedded in a host.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            embedded: true,
            ..Self::default()
        }
    }

    /// Context for a surface running on its own.
    #[must_use]
    pub fn standalone() -> Self {
        Self {
            embedded: false,
            ..Self::default()
        }
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            theme: Theme::default(),
            locale: "en-US".to_string(),
            embedded: false,
        }
    }
}

/// The host capability interface.
///
/// Reads return snapshots the host has already delivered; writes are
/// fire-and-forget messages to the host.
pub trait HostBridge: Send + Sync {
    /// Tool output injected by the host, if an invocation has happened.
    fn tool_output(&self) -> Option<InvocationResult>;

    /// The persisted widget state, if any was stored this render lifetime.
    fn widget_state(&self) -> Option<Value>;

    /// Persist the widget state with the host.
    fn set_widget_state(&self, state: Value);

    /// Current environment signals.
    fn context(&self) -> HostContext;

    /// Tell the host the surface's intrinsic content height changed.
    fn notify_height(&self, height_px: u32);
}
