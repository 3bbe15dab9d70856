use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input with an inline error message
#[component]
pub fn FormField(
    /// Used for both `id` and `name`
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Error shown under the input, cleared on input
    error: RwSignal<Option<String>>,
    /// Run when the input loses focus
    #[prop(optional, into)]
    on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let is_password = input_type == "password";
    let show_password = RwSignal::new(false);
    let current_type = move || {
        if is_password && show_password.get() {
            "text"
        } else {
            input_type
        }
    };

    view! {
        <div class="space-y-1.5">
            <label for=id class="block text-sm font-medium text-slate-700 dark:text-slate-200">
                {label}
            </label>
            <div class="relative">
                <input
                    type=current_type
                    id=id
                    name=id
                    autocomplete=autocomplete
                    placeholder=placeholder
                    class="lp-input"
                    class:pr-10=is_password
                    class:border-red-500=move || error.get().is_some()
                    aria-invalid=move || error.get().is_some().to_string()
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        error.set(None);
                    }
                    on:blur=move |_| {
                        if let Some(callback) = on_blur.as_ref() {
                            callback.run(());
                        }
                    }
                />
                {is_password.then(|| view! {
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center opacity-60 hover:opacity-100"
                        aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_password.get() {
                                view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                            }
                        }}
                    </button>
                })}
            </div>
            {move || error.get().map(|message| view! { <ErrorText message=message /> })}
        </div>
    }
}

/// Checkbox with its label content passed as children
#[component]
pub fn CheckboxField(
    id: &'static str,
    checked: RwSignal<bool>,
    /// Error shown under the checkbox, cleared when it is toggled
    #[prop(optional)]
    error: Option<RwSignal<Option<String>>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <div class="flex items-center gap-2">
                <input
                    type="checkbox"
                    id=id
                    name=id
                    class="h-4 w-4 rounded border-slate-300 text-indigo-600 focus:ring-indigo-500"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        checked.set(event_target_checked(&ev));
                        if let Some(error) = error {
                            error.set(None);
                        }
                    }
                />
                <label for=id class="text-sm text-slate-700 dark:text-slate-200">
                    {children()}
                </label>
            </div>
            {move || {
                error
                    .and_then(|error| error.get())
                    .map(|message| view! { <ErrorText message=message /> })
            }}
        </div>
    }
}

#[component]
fn ErrorText(message: String) -> impl IntoView {
    view! {
        <p class="flex items-center gap-1.5 text-sm text-red-500" role="alert">
            <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
            <span>{message}</span>
        </p>
    }
}

/// Confirmation banner shown after a form is accepted
#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 p-3 rounded-lg border border-green-300 bg-green-50 text-green-800
                    dark:border-green-700 dark:bg-green-900/30 dark:text-green-200" role="status">
            <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 flex-shrink-0" />
            <p class="text-sm">{message}</p>
        </div>
    }
}
