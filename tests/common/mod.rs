//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use signin_flow::auth::{AuthRejection, AuthService};
use signin_flow::flow::{FocusTarget, FocusTargets, SignInFlow, SignInHandle};
use signin_flow::ui::signin::{FocusField, SignInIntent, SignInSnapshot};

/// A sign-in request waiting for the test to answer it.
pub struct PendingCall {
    pub email: String,
    pub password: String,
    respond_to: oneshot::Sender<Result<(), AuthRejection>>,
}

impl PendingCall {
    pub fn succeed(self) -> bool {
        self.respond_to.send(Ok(())).is_ok()
    }

    pub fn fail(self, code: u32) -> bool {
        self.respond_to.send(Err(AuthRejection::new(code))).is_ok()
    }

    /// Resolves once the caller stopped waiting (task aborted).
    pub async fn abandoned(&mut self) {
        self.respond_to.closed().await;
    }
}

/// Auth service whose calls are answered by hand from the test.
pub struct ManualAuthService {
    calls: mpsc::UnboundedSender<PendingCall>,
}

impl ManualAuthService {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingCall>) {
        let (calls, receiver) = mpsc::unbounded_channel();
        (Arc::new(Self { calls }), receiver)
    }
}

#[async_trait]
impl AuthService for ManualAuthService {
    fn name(&self) -> &'static str {
        "manual"
    }

    async fn request_sign_in(&self, email: &str, password: &str) -> Result<(), AuthRejection> {
        let (respond_to, receiver) = oneshot::channel();
        let call = PendingCall {
            email: email.to_string(),
            password: password.to_string(),
            respond_to,
        };
        if self.calls.send(call).is_err() {
            return Err(AuthRejection::service_error());
        }
        receiver
            .await
            .unwrap_or_else(|_| Err(AuthRejection::service_error()))
    }
}

pub type FocusLog = Arc<Mutex<Vec<FocusField>>>;

struct RecordingTarget {
    field: FocusField,
    log: FocusLog,
}

impl FocusTarget for RecordingTarget {
    fn focus(&self) {
        self.log.lock().push(self.field);
    }
}

/// Focus targets that append every focus call to a shared log.
pub fn recording_focus() -> (FocusTargets, FocusLog) {
    let log: FocusLog = Arc::new(Mutex::new(Vec::new()));
    let target = |field| -> Arc<dyn FocusTarget> {
        Arc::new(RecordingTarget {
            field,
            log: Arc::clone(&log),
        })
    };
    let targets = FocusTargets {
        email: target(FocusField::Email),
        password: target(FocusField::Password),
        submit: target(FocusField::Submit),
    };
    (targets, log)
}

pub struct Harness {
    pub handle: SignInHandle,
    pub calls: mpsc::UnboundedReceiver<PendingCall>,
    pub focus: FocusLog,
}

impl Harness {
    pub fn mount() -> Self {
        let (auth, calls) = ManualAuthService::new();
        let (targets, focus) = recording_focus();
        let handle = SignInFlow::mount(auth, targets);
        Self {
            handle,
            calls,
            focus,
        }
    }

    pub async fn send(&self, intent: SignInIntent) -> SignInSnapshot {
        self.handle.send(intent).await.expect("dispatch")
    }

    pub async fn email(&self, value: &str) -> SignInSnapshot {
        self.send(SignInIntent::EnterEmail {
            value: value.to_string(),
        })
        .await
    }

    pub async fn password(&self, value: &str) -> SignInSnapshot {
        self.send(SignInIntent::EnterPassword {
            value: value.to_string(),
        })
        .await
    }

    /// Wait for the next auth call the controller issues.
    pub async fn next_call(&mut self) -> PendingCall {
        tokio::time::timeout(Duration::from_secs(1), self.calls.recv())
            .await
            .expect("auth call within 1s")
            .expect("auth service alive")
    }

    /// No auth call is queued right now.
    pub fn no_pending_call(&mut self) -> bool {
        self.calls.try_recv().is_err()
    }

    /// Wait until the state satisfies `path`.
    pub async fn wait_for_state(&self, path: &str) -> SignInSnapshot {
        let path = path.to_string();
        tokio::time::timeout(
            Duration::from_secs(1),
            self.handle.wait_for(move |snapshot| snapshot.state.matches(&path)),
        )
        .await
        .expect("state within 1s")
        .expect("controller alive")
    }

    pub fn focus_log(&self) -> Vec<FocusField> {
        self.focus.lock().clone()
    }
}
