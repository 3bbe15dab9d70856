//! Sign-in page

use leptos::prelude::*;

use crate::ui::auth::{AuthLayout, SignInForm};

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <AuthLayout title="Sign in">
            <SignInForm />
        </AuthLayout>
    }
}
