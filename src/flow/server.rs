use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::auth::AuthService;
use crate::lifecycle::Lifecycle;
use crate::ui::mvi::Reducer;
use crate::ui::signin::{SignInEffect, SignInIntent, SignInReducer, SignInSnapshot};

use super::focus::FocusTargets;
use super::types::FlowCommand;

/// Owns the sign-in machine and runs it one event at a time.
///
/// Events from handles and outcomes from the authentication task funnel
/// into a single loop; each is reduced, published and its effects executed
/// before the next one is taken.
pub struct SignInController {
    pub(crate) commands: mpsc::Receiver<FlowCommand>,
    outcome_tx: mpsc::UnboundedSender<SignInIntent>,
    outcomes: mpsc::UnboundedReceiver<SignInIntent>,
    snapshot: watch::Sender<SignInSnapshot>,
    auth: Arc<dyn AuthService>,
    focus: FocusTargets,
    lifecycle: Lifecycle,
    pending: Option<JoinHandle<()>>,
}

impl SignInController {
    pub(crate) fn new(
        commands: mpsc::Receiver<FlowCommand>,
        snapshot: watch::Sender<SignInSnapshot>,
        auth: Arc<dyn AuthService>,
        focus: FocusTargets,
        lifecycle: Lifecycle,
    ) -> Self {
        let (outcome_tx, outcomes) = mpsc::unbounded_channel();
        Self {
            commands,
            outcome_tx,
            outcomes,
            snapshot,
            auth,
            focus,
            lifecycle,
            pending: None,
        }
    }

    pub async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let Some(FlowCommand { intent, respond_to }) = command else {
                        tracing::debug!("All sign-in handles dropped");
                        break;
                    };
                    let snapshot = self.dispatch(intent);
                    if respond_to.send(snapshot).is_err() {
                        tracing::trace!("Sign-in: dispatch response dropped (receiver gone)");
                    }
                }
                Some(outcome) = self.outcomes.recv() => {
                    self.dispatch(outcome);
                }
                _ = self.lifecycle.wait() => break,
            }
        }

        self.teardown();
    }

    /// Reduce one intent, publish the result and execute its effects.
    fn dispatch(&mut self, intent: SignInIntent) -> SignInSnapshot {
        let current = self.snapshot.borrow().clone();
        let previous = current.state;
        let is_outcome = intent.is_auth_outcome();

        let reduction = SignInReducer::reduce(current, intent);
        let next = reduction.state;

        if next.state != previous {
            tracing::info!(from = %previous, to = %next.state, "Sign-in state changed");
        } else if reduction.effects.is_empty() && is_outcome {
            tracing::debug!(state = %previous, "Auth outcome ignored outside awaitingResponse");
        }

        self.snapshot.send_replace(next.clone());

        for effect in reduction.effects {
            self.execute(effect);
        }

        if is_outcome {
            self.pending = None;
        }

        next
    }

    fn execute(&mut self, effect: SignInEffect) {
        match effect {
            SignInEffect::Focus(field) => self.focus.target(field).focus(),
            SignInEffect::RequestSignIn { email, password } => {
                self.start_request(email, password);
            }
            SignInEffect::NotifyAuthenticated => {
                tracing::info!("user authenticated");
            }
        }
    }

    fn start_request(&mut self, email: String, password: String) {
        if let Some(previous) = self.pending.take() {
            if !previous.is_finished() {
                tracing::warn!("Aborting unfinished sign-in request before retry");
                previous.abort();
            }
        }

        let attempt = Uuid::new_v4();
        let auth = Arc::clone(&self.auth);
        let outcome_tx = self.outcome_tx.clone();
        let lifecycle = self.lifecycle.clone();
        let span = tracing::info_span!(
            "sign_in_request",
            %attempt,
            backend = auth.name(),
            email = %email,
            password_len = password.chars().count(),
        );

        let task = async move {
            tracing::debug!("Contacting auth service");
            let outcome = match auth.request_sign_in(&email, &password).await {
                Ok(()) => SignInIntent::AuthSucceeded,
                Err(rejection) => {
                    tracing::debug!(code = rejection.code, "Auth service rejected sign-in");
                    SignInIntent::AuthFailed {
                        code: rejection.code,
                    }
                }
            };

            if lifecycle.is_unmounted() {
                tracing::trace!("Form unmounted; dropping auth outcome");
                return;
            }
            if outcome_tx.send(outcome).is_err() {
                tracing::trace!("Controller gone; dropping auth outcome");
            }
        };

        self.pending = Some(tokio::spawn(task.instrument(span)));
    }

    fn teardown(&mut self) {
        self.lifecycle.unmount();
        if let Some(pending) = self.pending.take() {
            if !pending.is_finished() {
                tracing::debug!("Cancelling in-flight sign-in request");
            }
            pending.abort();
        }
        self.commands.close();
    }
}
