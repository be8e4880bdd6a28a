//! Persisted selection state for the interactive surface.

use serde::{Deserialize, Serialize};

/// The single selected item id, if any.
///
/// Persisted through the host's widget-state capability so it survives
/// minimize/restore of the hosting surface, but not process restarts. Owned
/// exclusively by the surface controller; selection only ever resolves
/// against the currently displayed item set, so a stale id simply resolves
/// to no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Identifier of the selected catalog item.
    pub selected_id: Option<i64>,
}

impl SelectionState {
    /// Selection pointing at `id`.
    #[must_use]
    pub const fn selected(id: i64) -> Self {
        Self {
            selected_id: Some(id),
        }
    }

    /// No selection.
    #[must_use]
    pub const fn cleared() -> Self {
        Self { selected_id: None }
    }
}
