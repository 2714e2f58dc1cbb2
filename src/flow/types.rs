use thiserror::Error;
use tokio::sync::oneshot;

use crate::ui::signin::{SignInIntent, SignInSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("sign-in controller disconnected")]
    Disconnected,
    #[error("sign-in form already unmounted")]
    Unmounted,
    #[error("sign-in controller did not respond in time")]
    Timeout,
}

/// One event for the controller, answered with the snapshot after its
/// transition and actions have run.
pub struct FlowCommand {
    pub intent: SignInIntent,
    pub respond_to: oneshot::Sender<SignInSnapshot>,
}
