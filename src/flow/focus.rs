//! Focus capability injected into the controller.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::signin::FocusField;

/// Something that can take keyboard focus.
///
/// Calls may repeat; implementations must tolerate redundant focus requests.
pub trait FocusTarget: Send + Sync {
    fn focus(&self);
}

/// The three focusable controls of the form.
#[derive(Clone)]
pub struct FocusTargets {
    pub email: Arc<dyn FocusTarget>,
    pub password: Arc<dyn FocusTarget>,
    pub submit: Arc<dyn FocusTarget>,
}

impl FocusTargets {
    pub fn target(&self, field: FocusField) -> &dyn FocusTarget {
        match field {
            FocusField::Email => self.email.as_ref(),
            FocusField::Password => self.password.as_ref(),
            FocusField::Submit => self.submit.as_ref(),
        }
    }

    /// Targets that do nothing, for headless use.
    pub fn noop() -> Self {
        let target: Arc<dyn FocusTarget> = Arc::new(NoopFocus);
        Self {
            email: Arc::clone(&target),
            password: Arc::clone(&target),
            submit: target,
        }
    }
}

struct NoopFocus;

impl FocusTarget for NoopFocus {
    fn focus(&self) {}
}

/// Remembers which control was focused last.
#[derive(Clone, Default)]
pub struct FocusTracker {
    current: Arc<Mutex<Option<FocusField>>>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<FocusField> {
        *self.current.lock()
    }

    pub fn targets(&self) -> FocusTargets {
        let target = |field| -> Arc<dyn FocusTarget> {
            Arc::new(TrackedTarget {
                field,
                current: Arc::clone(&self.current),
            })
        };
        FocusTargets {
            email: target(FocusField::Email),
            password: target(FocusField::Password),
            submit: target(FocusField::Submit),
        }
    }
}

struct TrackedTarget {
    field: FocusField,
    current: Arc<Mutex<Option<FocusField>>>,
}

impl FocusTarget for TrackedTarget {
    fn focus(&self) {
        *self.current.lock() = Some(self.field);
        tracing::debug!(field = self.field.label(), "Focus moved");
    }
}
