//! Sign-in form feature module.
//!
//! A finite state machine for an email/password form: local validation on
//! blur and submit, one authentication request at a time, and recovery from
//! remote rejections and service errors.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - State value and context
//! - `intent.rs` - User/system events
//! - `effect.rs` - Side effects requested by transitions
//! - `guards.rs` - Pure predicates
//! - `reducer.rs` - State transitions
//! - `view.rs` - Flags and messages derived from the state

mod effect;
pub mod guards;
mod intent;
mod reducer;
mod state;
mod view;

pub use effect::{FocusField, SignInEffect};
pub use guards::{is_email_valid, is_password_too_short, MIN_PASSWORD_LEN};
pub use intent::SignInIntent;
pub use reducer::SignInReducer;
pub use state::{EmailErr, PasswordErr, SignInContext, SignInSnapshot, SignInState};
pub use view::FormView;
