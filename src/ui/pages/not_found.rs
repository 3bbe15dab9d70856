//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::logo::PRODUCT_NAME;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page not found - {}", PRODUCT_NAME) />

        <div class="min-h-screen bg-slate-50 dark:bg-slate-950 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-slate-200 dark:bg-slate-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12 opacity-60" />
                </div>

                <h1 class="text-6xl font-bold text-slate-900 dark:text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-slate-900 dark:text-white mb-2">
                    "Page Not Found"
                </h2>
                <p class="text-slate-500 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/" attr:class="lp-btn-primary">"Go Home"</A>
                    <A href="/signin" attr:class="lp-btn-secondary">"Sign In"</A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-500">{format!("© 2025 {}", PRODUCT_NAME)}</p>
            </div>
        </div>
    }
}
