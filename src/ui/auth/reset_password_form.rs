use leptos::prelude::*;
use leptos_router::components::A;

use super::check;
use crate::core::validation::validate_email;
use crate::ui::common::{FormField, SuccessMessage};

/// Password reset request form
#[component]
pub fn ResetPasswordForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<String>);

    let check_email = move || check(email_error, validate_email(&email.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(None);

        if !check_email() {
            return;
        }

        let email_val = email.get();
        leptos::logging::log!("password reset requested for {}", email_val);
        submitted.set(Some(format!(
            "If an account exists for {}, a reset link is on its way.",
            email_val
        )));
    };

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate>
            <div class="text-center">
                <h1 class="text-2xl font-bold text-slate-900 dark:text-white">"Reset your password"</h1>
                <p class="mt-2 text-sm text-slate-500">
                    "Enter the email you signed up with and we'll send you a reset link."
                </p>
            </div>

            {move || submitted.get().map(|message| view! {
                <SuccessMessage message=message />
            })}

            <FormField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="you@company.com"
                value=email
                error=email_error
                on_blur=Callback::new(move |_| { check_email(); })
            />

            <button type="submit" class="lp-btn-primary w-full">"Send reset link"</button>

            <p class="text-center text-sm text-slate-500">
                <A href="/signin" attr:class="font-medium text-indigo-600 hover:text-indigo-500">
                    "Back to sign in"
                </A>
            </p>
        </form>
    }
}
