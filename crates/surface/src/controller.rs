//! Reconciliation state machine for the catalog surface.
//!
//! Two asynchronous producers can populate the surface: tool output injected
//! by the host, and a fallback fetch against the local retrieval endpoint.
//! The rules, in precedence order:
//!
//! - Injected invocation data (non-empty catalog) always wins. Once present
//!   it is never overwritten by a local result, even one that landed first.
//! - Standalone surfaces fetch immediately on mount.
//! - Embedded surfaces wait a grace window for invocation data before
//!   falling back; the scheduled fetch is cancelled outright on early
//!   arrival or teardown, so it can never fire afterwards.
//! - At most one local fetch is in flight; repeated triggers are idempotent.
//!
//! Selection is persisted through the host's widget state and only ever
//! resolves against the currently displayed set.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use harborlane_core::{CatalogItem, InvocationResult, SelectionState};

use crate::host::HostBridge;
use crate::source::CatalogSource;

/// How long an embedded surface waits for invocation data before falling
/// back to a local fetch.
pub const DEFAULT_GRACE_WINDOW: Duration = Duration::from_secs(2);

// Height estimate constants, reported to the host after layout-affecting
// mutations. The host treats these as intrinsic content height hints.
const HEIGHT_HEADER: u32 = 120;
const HEIGHT_ROW: u32 = 96;
const HEIGHT_DETAIL: u32 = 280;

/// Where the displayed data currently comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourcePhase {
    /// No data observed yet.
    #[default]
    AwaitingSource,
    /// Invocation data present; terminal for that data's lifetime.
    HasInvocationData,
    /// A local fetch is running.
    LocalFetchInFlight,
    /// Local data is displayed.
    HasLocalData,
    /// The local fetch failed; a manual retry is offered.
    LocalFetchFailed,
}

/// Reconciled data handed to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceView {
    /// Effective item list: invocation data if present, else local data.
    pub items: Vec<CatalogItem>,
    /// Effective error: invocation error if present, else local error.
    pub error: Option<String>,
    /// Whether the surface is still waiting for any data source.
    pub loading: bool,
    /// The selected item, resolved against `items`. A stale selection id
    /// simply resolves to `None`.
    pub selected: Option<CatalogItem>,
}

#[derive(Debug, Default)]
struct ControllerState {
    phase: SourcePhase,
    invocation: Option<InvocationResult>,
    local_items: Option<Vec<CatalogItem>>,
    local_error: Option<String>,
    fetch_in_flight: bool,
    selection: SelectionState,
}

impl ControllerState {
    fn invocation_data_present(&self) -> bool {
        self.invocation.as_ref().is_some_and(InvocationResult::has_data)
    }
}

/// The stateful consumer reconciling invocation data, the local fallback
/// fetch, and the persisted selection.
///
/// Cheaply cloneable; clones share state, so the grace-window task operates
/// on the same controller the consumer holds.
#[derive(Clone)]
pub struct SurfaceController {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<ControllerState>,
    host: Arc<dyn HostBridge>,
    source: Arc<dyn CatalogSource>,
    grace_window: Duration,
    cancel: CancellationToken,
}

impl SurfaceController {
    /// Create a controller with the default grace window.
    #[must_use]
    pub fn new(host: Arc<dyn HostBridge>, source: Arc<dyn CatalogSource>) -> Self {
        Self::with_grace_window(host, source, DEFAULT_GRACE_WINDOW)
    }

    /// Create a controller with an explicit grace window (tests shorten it).
    #[must_use]
    pub fn with_grace_window(
        host: Arc<dyn HostBridge>,
        source: Arc<dyn CatalogSource>,
        grace_window: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(ControllerState::default()),
                host,
                source,
                grace_window,
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// Mount the surface: restore persisted selection, adopt any tool output
    /// the host already delivered, and arrange the fallback fetch.
    pub async fn mount(&self) {
        if let Some(value) = self.inner.host.widget_state()
            && let Ok(selection) = serde_json::from_value::<SelectionState>(value)
        {
            self.inner.state.lock().await.selection = selection;
        }

        if let Some(output) = self.inner.host.tool_output() {
            self.inject_invocation(output).await;
        }

        if self.inner.state.lock().await.invocation_data_present() {
            return;
        }

        if self.inner.host.context().embedded {
            self.schedule_grace_fallback();
        } else {
            // Standalone: no host will ever inject data, fetch now.
            self.run_local_fetch().await;
        }
    }

    /// Inject invocation data delivered by the host.
    ///
    /// Non-empty data takes over the display and cancels any scheduled
    /// fallback. Empty or error-only output is recorded (its error becomes
    /// the effective error) without disturbing the fallback path.
    pub async fn inject_invocation(&self, output: InvocationResult) {
        let has_data = output.has_data();
        {
            let mut state = self.inner.state.lock().await;
            state.invocation = Some(output);
            if has_data {
                state.phase = SourcePhase::HasInvocationData;
            }
        }

        if has_data {
            debug!("invocation data injected; cancelling scheduled fallback");
            self.inner.cancel.cancel();
            self.notify_height().await;
        }
    }

    /// Re-trigger the local fetch after a failure. No-op while a fetch is in
    /// flight or once invocation data is displayed.
    pub async fn retry(&self) {
        self.inner.state.lock().await.local_error = None;
        self.run_local_fetch().await;
    }

    /// Tear the controller down. Any scheduled fallback is cancelled and can
    /// never fire afterwards.
    pub fn teardown(&self) {
        self.inner.cancel.cancel();
    }

    /// Select an item by id, replacing any previous selection.
    pub async fn select(&self, id: i64) {
        self.apply_selection(SelectionState::selected(id)).await;
    }

    /// Clear the selection.
    pub async fn clear_selection(&self) {
        self.apply_selection(SelectionState::cleared()).await;
    }

    /// The current reconciled view data.
    pub async fn view(&self) -> SurfaceView {
        let state = self.inner.state.lock().await;

        let items = state
            .invocation
            .as_ref()
            .filter(|output| output.has_data())
            .map(|output| output.catalog.clone())
            .or_else(|| state.local_items.clone())
            .unwrap_or_default();

        let error = state
            .invocation
            .as_ref()
            .and_then(|output| output.error.clone())
            .or_else(|| state.local_error.clone());

        let loading = matches!(
            state.phase,
            SourcePhase::AwaitingSource | SourcePhase::LocalFetchInFlight
        );

        let selected = state
            .selection
            .selected_id
            .and_then(|id| items.iter().find(|item| item.id == id).cloned());

        SurfaceView {
            items,
            error,
            loading,
            selected,
        }
    }

    /// The current source phase.
    pub async fn phase(&self) -> SourcePhase {
        self.inner.state.lock().await.phase
    }

    /// Schedule the grace-window fallback fetch.
    ///
    /// A cancellable race: if invocation data arrives (or the controller is
    /// torn down) before the window elapses, the fetch never starts.
    fn schedule_grace_fallback(&self) {
        let token = self.inner.cancel.child_token();
        let grace = self.inner.grace_window;
        let controller = self.clone();

        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(grace) => {
                    debug!("grace window elapsed without invocation data");
                    controller.run_local_fetch().await;
                }
            }
        });
    }

    /// Run the local fetch if nothing rules it out.
    ///
    /// Idempotent under repeated triggers: bails while a fetch is in flight,
    /// once invocation data is present, or after teardown. A result arriving
    /// after invocation data landed mid-flight is discarded.
    async fn run_local_fetch(&self) {
        if self.inner.cancel.is_cancelled() {
            return;
        }

        {
            let mut state = self.inner.state.lock().await;
            if state.fetch_in_flight || state.invocation_data_present() {
                return;
            }
            state.fetch_in_flight = true;
            state.phase = SourcePhase::LocalFetchInFlight;
        }

        let result = self.inner.source.fetch().await;

        {
            let mut state = self.inner.state.lock().await;
            state.fetch_in_flight = false;

            if state.invocation_data_present() {
                // Invocation data won the race while we were in flight.
                return;
            }

            match result.error {
                Some(error) => {
                    state.local_error = Some(error);
                    state.phase = SourcePhase::LocalFetchFailed;
                }
                None => {
                    state.local_items = Some(result.catalog);
                    state.local_error = None;
                    state.phase = SourcePhase::HasLocalData;
                }
            }
        }

        if !self.inner.cancel.is_cancelled() {
            self.notify_height().await;
        }
    }

    async fn apply_selection(&self, selection: SelectionState) {
        self.inner.state.lock().await.selection = selection;

        if let Ok(value) = serde_json::to_value(selection) {
            self.inner.host.set_widget_state(value);
        }
        self.notify_height().await;
    }

    /// Report the estimated intrinsic height to the host.
    async fn notify_height(&self) {
        let view = self.view().await;
        let rows = u32::try_from(view.items.len()).unwrap_or(u32::MAX);
        let height = HEIGHT_HEADER
            .saturating_add(HEIGHT_ROW.saturating_mul(rows))
            .saturating_add(if view.selected.is_some() {
                HEIGHT_DETAIL
            } else {
                0
            });
        self.inner.host.notify_height(height);
    }
}
