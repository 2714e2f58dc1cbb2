//! Reducer for the sign-in form.

use crate::ui::mvi::{Reducer, Reduction};

use super::effect::{FocusField, SignInEffect};
use super::guards::{
    is_email_valid, is_incorrect_password, is_no_account, is_password_too_short,
};
use super::intent::SignInIntent;
use super::state::{EmailErr, PasswordErr, SignInContext, SignInSnapshot, SignInState};

type SignInReduction = Reduction<SignInSnapshot, SignInEffect>;

/// Reducer for sign-in state transitions.
pub struct SignInReducer;

impl Reducer for SignInReducer {
    type State = SignInSnapshot;
    type Intent = SignInIntent;
    type Effect = SignInEffect;

    fn reduce(snapshot: Self::State, intent: Self::Intent) -> SignInReduction {
        let SignInSnapshot { state, mut context } = snapshot;

        if state.is_terminal() {
            return unchanged(state, context);
        }

        match intent {
            SignInIntent::EnterEmail { value } => {
                if !state.accepts_email_input() {
                    return unchanged(state, context);
                }
                context.email = value;
                Reduction::pure(SignInSnapshot::new(SignInState::Idle, context))
            }

            SignInIntent::EnterPassword { value } => {
                if !state.accepts_password_input() {
                    return unchanged(state, context);
                }
                context.password = value;
                Reduction::pure(SignInSnapshot::new(SignInState::Idle, context))
            }

            SignInIntent::EmailBlur => {
                if state.accepts_email_input() && !is_email_valid(&context.email) {
                    bad_email(context)
                } else {
                    unchanged(state, context)
                }
            }

            SignInIntent::PasswordBlur => {
                if state.accepts_password_input() && is_password_too_short(&context.password) {
                    short_password(context)
                } else {
                    unchanged(state, context)
                }
            }

            SignInIntent::Submit => match state {
                SignInState::Idle => {
                    if !is_email_valid(&context.email) {
                        bad_email(context)
                    } else if is_password_too_short(&context.password) {
                        short_password(context)
                    } else {
                        request_sign_in(context)
                    }
                }
                // Retry. Credentials were valid when the failed attempt started
                // and cannot have been edited since.
                SignInState::ServiceErr => request_sign_in(context),
                _ => unchanged(state, context),
            },

            SignInIntent::AuthSucceeded => match state {
                SignInState::AwaitingResponse => Reduction::with_effect(
                    SignInSnapshot::new(SignInState::SignedIn, context),
                    SignInEffect::NotifyAuthenticated,
                ),
                _ => unchanged(state, context),
            },

            SignInIntent::AuthFailed { code } => match state {
                SignInState::AwaitingResponse => {
                    let (next, focus) = if is_no_account(code) {
                        (SignInState::EmailErr(EmailErr::NoAccount), FocusField::Email)
                    } else if is_incorrect_password(code) {
                        (
                            SignInState::PasswordErr(PasswordErr::Incorrect),
                            FocusField::Password,
                        )
                    } else {
                        (SignInState::ServiceErr, FocusField::Submit)
                    };
                    Reduction::with_effect(
                        SignInSnapshot::new(next, context),
                        SignInEffect::Focus(focus),
                    )
                }
                _ => unchanged(state, context),
            },
        }
    }
}

fn unchanged(state: SignInState, context: SignInContext) -> SignInReduction {
    Reduction::pure(SignInSnapshot::new(state, context))
}

fn bad_email(context: SignInContext) -> SignInReduction {
    Reduction::with_effect(
        SignInSnapshot::new(SignInState::EmailErr(EmailErr::BadFormat), context),
        SignInEffect::Focus(FocusField::Email),
    )
}

fn short_password(context: SignInContext) -> SignInReduction {
    Reduction::with_effect(
        SignInSnapshot::new(SignInState::PasswordErr(PasswordErr::TooShort), context),
        SignInEffect::Focus(FocusField::Password),
    )
}

fn request_sign_in(context: SignInContext) -> SignInReduction {
    let effect = SignInEffect::RequestSignIn {
        email: context.email.clone(),
        password: context.password.clone(),
    };
    Reduction::with_effect(
        SignInSnapshot::new(SignInState::AwaitingResponse, context),
        effect,
    )
}
