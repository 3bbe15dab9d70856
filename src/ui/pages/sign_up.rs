//! Sign-up page

use leptos::prelude::*;

use crate::ui::auth::{AuthLayout, SignUpForm};

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <AuthLayout title="Sign up">
            <SignUpForm />
        </AuthLayout>
    }
}
