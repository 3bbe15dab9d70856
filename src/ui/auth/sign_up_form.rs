//! Sign-up form with name, email, a confirmed password and the terms checkbox

use leptos::prelude::*;
use leptos_router::components::A;

use super::{GoogleButton, check};
use crate::core::validation::{require, validate_confirmation, validate_email, validate_terms};
use crate::ui::common::{CheckboxField, FormField, SuccessMessage};

#[component]
pub fn SignUpForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agreed_to_terms = RwSignal::new(false);

    let name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let terms_error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<String>);

    let check_name = move || check(name_error, require("Name", &name.get()));
    let check_email = move || check(email_error, validate_email(&email.get()));
    let check_password = move || check(password_error, require("Password", &password.get()));
    let check_confirm = move || {
        check(
            confirm_error,
            validate_confirmation(&password.get(), &confirm_password.get()),
        )
    };
    let check_terms = move || check(terms_error, validate_terms(agreed_to_terms.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(None);

        let results = [
            check_name(),
            check_email(),
            check_password(),
            check_confirm(),
            check_terms(),
        ];
        if results.contains(&false) {
            return;
        }

        let name_val = name.get();
        let email_val = email.get();
        leptos::logging::log!("sign-up submitted: name={}, email={}", name_val, email_val);
        submitted.set(Some(format!(
            "Thanks {}! We'd send a confirmation to {} if this were a real signup.",
            name_val.trim(),
            email_val
        )));
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <div class="text-center">
                <h1 class="text-2xl font-bold text-slate-900 dark:text-white">"Create your account"</h1>
                <p class="mt-2 text-sm text-slate-500">"Start your 14-day free trial. No credit card required."</p>
            </div>

            {move || submitted.get().map(|message| view! {
                <SuccessMessage message=message />
            })}

            <GoogleButton label="Sign up with Google" />

            <FormField
                id="name"
                label="Full name"
                autocomplete="name"
                placeholder="Ada Lovelace"
                value=name
                error=name_error
                on_blur=Callback::new(move |_| { check_name(); })
            />
            <FormField
                id="email"
                label="Work email"
                input_type="email"
                autocomplete="email"
                placeholder="you@company.com"
                value=email
                error=email_error
                on_blur=Callback::new(move |_| { check_email(); })
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                placeholder="Choose a password"
                value=password
                error=password_error
                on_blur=Callback::new(move |_| { check_password(); })
            />
            <FormField
                id="confirm-password"
                label="Confirm password"
                input_type="password"
                autocomplete="new-password"
                placeholder="Repeat your password"
                value=confirm_password
                error=confirm_error
                on_blur=Callback::new(move |_| { check_confirm(); })
            />
            <CheckboxField id="terms" checked=agreed_to_terms error=terms_error>
                "I agree to the "
                <span class="font-medium text-indigo-600">"Terms of Service"</span>
                " and "
                <span class="font-medium text-indigo-600">"Privacy Policy"</span>
            </CheckboxField>

            <button type="submit" class="lp-btn-primary w-full">"Create account"</button>

            <p class="text-center text-sm text-slate-500">
                "Already have an account? "
                <A href="/signin" attr:class="font-medium text-indigo-600 hover:text-indigo-500">
                    "Sign in"
                </A>
            </p>
        </form>
    }
}
