use leptos::prelude::*;
use leptos_router::components::A;

pub const PRODUCT_NAME: &str = "Launchpad";

/// Brand mark linking back to the landing page
#[component]
pub fn Logo(
    /// Size of the square mark
    #[prop(default = "w-9 h-9")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
            <div class=format!(
                "{} bg-gradient-to-br from-indigo-500 to-sky-500 rounded-xl flex items-center justify-center shadow-lg",
                size,
            )>
                <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                          d="M5 19l4-4m0 0l3-8 8-3-3 8-8 3zm0 0L5 11m4 4l4 4" />
                </svg>
            </div>
            <span class="text-xl font-bold text-slate-900 dark:text-white">{PRODUCT_NAME}</span>
        </A>
    }
}
