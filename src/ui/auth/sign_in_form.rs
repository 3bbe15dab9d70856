//! Sign-in form

use leptos::prelude::*;
use leptos_router::components::A;

use super::{GoogleButton, check};
use crate::core::validation::{require, validate_email};
use crate::ui::common::{CheckboxField, FormField, SuccessMessage};

#[component]
pub fn SignInForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);

    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<String>);

    let check_email = move || check(email_error, validate_email(&email.get()));
    let check_password = move || check(password_error, require("Password", &password.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(None);

        // Run every check so all errors show at once
        let email_valid = check_email();
        let password_valid = check_password();
        if !email_valid || !password_valid {
            return;
        }

        let email_val = email.get();
        leptos::logging::log!(
            "sign-in submitted for {}, remember_me={}",
            email_val,
            remember_me.get()
        );
        submitted.set(Some(format!(
            "Signed in as {}. This is a demo, no account was checked.",
            email_val
        )));
    };

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate>
            <div class="text-center">
                <h1 class="text-2xl font-bold text-slate-900 dark:text-white">"Welcome back"</h1>
                <p class="mt-2 text-sm text-slate-500">"Sign in to your account to continue"</p>
            </div>

            {move || submitted.get().map(|message| view! {
                <SuccessMessage message=message />
            })}

            <GoogleButton label="Sign in with Google" />

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
            <FormField
                id="password"
                label="Password"
                input_type="password"
                autocomplete="current-password"
                placeholder="Enter your password"
                value=password
                error=password_error
                on_blur=Callback::new(move |_| { check_password(); })
            />

            <div class="flex items-center justify-between">
                <CheckboxField id="remember-me" checked=remember_me>
                    "Remember me"
                </CheckboxField>
                <A href="/password-reset" attr:class="text-sm text-indigo-600 hover:text-indigo-500">
                    "Forgot your password?"
                </A>
            </div>

            <button type="submit" class="lp-btn-primary w-full">"Sign in"</button>

            <p class="text-center text-sm text-slate-500">
                "Don't have an account? "
                <A href="/signup" attr:class="font-medium text-indigo-600 hover:text-indigo-500">
                    "Sign up"
                </A>
            </p>
        </form>
    }
}
