//! Async runtime for the sign-in machine.
//!
//! ```text
//! SignInHandle ──mpsc──→ SignInController ──watch──→ subscribers
//!                              │   ↑
//!                        spawn │   │ outcome
//!                              ↓   │
//!                          AuthService
//! ```

mod client;
mod focus;
mod server;
mod types;


pub use client::SignInHandle;
pub use focus::{FocusTarget, FocusTargets, FocusTracker};
pub use server::SignInController;
pub use types::{FlowCommand, FlowError};

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::auth::AuthService;
use crate::lifecycle::Lifecycle;
use crate::ui::signin::SignInSnapshot;

const FLOW_BUFFER: usize = 16;

/// Entry point for creating a sign-in form instance.
pub struct SignInFlow;

impl SignInFlow {
    /// Build a handle/controller pair. The controller does nothing until
    /// [`SignInController::run`] is awaited or spawned.
    pub fn new(
        auth: Arc<dyn AuthService>,
        focus: FocusTargets,
    ) -> (SignInHandle, SignInController) {
        let (sender, receiver) = mpsc::channel(FLOW_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(SignInSnapshot::default());
        let lifecycle = Lifecycle::new();

        let controller =
            SignInController::new(receiver, snapshot_tx, auth, focus, lifecycle.clone());
        let handle = SignInHandle::new(sender, snapshot_rx, lifecycle);
        (handle, controller)
    }

    /// Mount a form: build the pair and spawn the controller on the current
    /// tokio runtime.
    pub fn mount(auth: Arc<dyn AuthService>, focus: FocusTargets) -> SignInHandle {
        let (handle, controller) = Self::new(auth, focus);
        tokio::spawn(controller.run());
        handle
    }
}
