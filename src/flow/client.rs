use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};

use crate::lifecycle::Lifecycle;
use crate::ui::signin::{SignInIntent, SignInSnapshot, SignInState};

use super::types::{FlowCommand, FlowError};

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(1);

/// Caller-side handle to a mounted sign-in form.
///
/// Cheap to clone. The controller stops once every handle is dropped or
/// [`SignInHandle::unmount`] is called.
#[derive(Clone)]
pub struct SignInHandle {
    sender: mpsc::Sender<FlowCommand>,
    snapshot: watch::Receiver<SignInSnapshot>,
    lifecycle: Lifecycle,
}

impl SignInHandle {
    pub(crate) fn new(
        sender: mpsc::Sender<FlowCommand>,
        snapshot: watch::Receiver<SignInSnapshot>,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            sender,
            snapshot,
            lifecycle,
        }
    }

    /// Send an event and wait until its transition and actions have run.
    ///
    /// Returns the snapshot right after that transition.
    pub async fn send(&self, intent: SignInIntent) -> Result<SignInSnapshot, FlowError> {
        if self.lifecycle.is_unmounted() {
            return Err(FlowError::Unmounted);
        }

        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(FlowCommand { intent, respond_to })
            .await
            .map_err(|_| FlowError::Disconnected)?;

        recv_with_timeout(receiver).await
    }

    /// Current state and context.
    pub fn snapshot(&self) -> SignInSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn state(&self) -> SignInState {
        self.snapshot.borrow().state
    }

    /// Subscribe to state and context changes.
    pub fn subscribe(&self) -> watch::Receiver<SignInSnapshot> {
        self.snapshot.clone()
    }

    /// Wait for the first snapshot (current one included) matching `predicate`.
    pub async fn wait_for<F>(&self, predicate: F) -> Result<SignInSnapshot, FlowError>
    where
        F: FnMut(&SignInSnapshot) -> bool,
    {
        let mut receiver = self.snapshot.clone();
        let matched = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| FlowError::Disconnected)?;
        Ok(SignInSnapshot::clone(&matched))
    }

    /// Wait until no authentication request is in flight.
    pub async fn settled(&self) -> Result<SignInSnapshot, FlowError> {
        self.wait_for(|snapshot| snapshot.state != SignInState::AwaitingResponse)
            .await
    }

    /// Tear the form down. A pending authentication call is cancelled and
    /// its outcome, if any, is discarded. Returns `false` if already unmounted.
    pub fn unmount(&self) -> bool {
        self.lifecycle.unmount()
    }

    pub fn is_unmounted(&self) -> bool {
        self.lifecycle.is_unmounted()
    }
}

async fn recv_with_timeout<T>(receiver: oneshot::Receiver<T>) -> Result<T, FlowError> {
    match tokio::time::timeout(DISPATCH_TIMEOUT, receiver).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(FlowError::Disconnected),
        Err(_) => Err(FlowError::Timeout),
    }
}
