use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Google button shown above the email form, followed by a divider.
///
/// There is no OAuth client behind it; a click is only logged.
#[component]
pub fn GoogleButton(label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full flex items-center justify-center gap-3 px-4 py-2.5 rounded-lg border border-slate-300
                   dark:border-slate-700 text-slate-700 dark:text-slate-200 font-medium
                   hover:bg-slate-50 dark:hover:bg-slate-800 transition-colors"
            on:click=move |_| leptos::logging::log!("{} clicked", label)
        >
            <Icon name=icons::GOOGLE class="w-5 h-5" />
            {label}
        </button>

        <div class="relative">
            <div class="absolute inset-0 flex items-center" aria-hidden="true">
                <div class="w-full border-t border-slate-200 dark:border-slate-700"></div>
            </div>
            <div class="relative flex justify-center text-sm">
                <span class="px-4 bg-white dark:bg-slate-900 text-slate-500">"or continue with email"</span>
            </div>
        </div>
    }
}
