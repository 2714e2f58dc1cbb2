//! Mount/unmount tracking for a sign-in form instance.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared flag that flips once, when the form is torn down.
///
/// Cloned into the controller loop and into every in-flight
/// authentication task so late completions can tell they are orphaned.
#[derive(Clone, Default)]
pub struct Lifecycle {
    unmounted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the form as unmounted. Returns `true` only for the first call.
    pub fn unmount(&self) -> bool {
        if self.unmounted.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::debug!("Sign-in form unmounted");
        self.notify.notify_waiters();
        true
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register interest before checking the flag: unmount() between the
        // check and the await would otherwise be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_unmounted() {
            return;
        }
        notified.await;
    }
}
