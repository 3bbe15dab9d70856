use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::logo::{Logo, PRODUCT_NAME};

/// Page frame shared by the sign-in, sign-up and reset pages
#[component]
pub fn AuthLayout(
    /// Document title prefix
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <Title text=format!("{} - {}", title, PRODUCT_NAME) />

        <div class="min-h-screen bg-slate-50 dark:bg-slate-950 flex flex-col">
            <header class="border-b border-slate-200 dark:border-slate-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center h-16">
                    <Logo size="w-8 h-8" />
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-white dark:bg-slate-900 rounded-xl shadow-lg p-6
                            border border-slate-200 dark:border-slate-800">
                    {children()}
                </div>
            </main>

            <footer class="py-4 border-t border-slate-200 dark:border-slate-800">
                <p class="text-center text-sm text-slate-500">
                    {format!("© 2025 {}. All rights reserved.", PRODUCT_NAME)}
                </p>
            </footer>
        </div>
    }
}
