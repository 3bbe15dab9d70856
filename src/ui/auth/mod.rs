//! Placeholder authentication forms
//!
//! The forms validate their fields and log the submission to the browser
//! console. There is no backend behind them.

mod google_button;
mod layout;
mod reset_password_form;
mod sign_in_form;
mod sign_up_form;

use google_button::GoogleButton;
pub use layout::AuthLayout;
pub use reset_password_form::ResetPasswordForm;
pub use sign_in_form::SignInForm;
pub use sign_up_form::SignUpForm;

use leptos::prelude::*;

use crate::core::FieldError;

/// Store the outcome of a field check in its error signal.
///
/// Returns `true` when the field is valid.
fn check(error: RwSignal<Option<String>>, result: Result<(), FieldError>) -> bool {
    match result {
        Ok(()) => {
            error.set(None);
            true
        }
        Err(err) => {
            error.set(Some(err.to_string()));
            false
        }
    }
}
