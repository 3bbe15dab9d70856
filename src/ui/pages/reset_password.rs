//! Password reset page

use leptos::prelude::*;

use crate::ui::auth::{AuthLayout, ResetPasswordForm};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <AuthLayout title="Reset password">
            <ResetPasswordForm />
        </AuthLayout>
    }
}
