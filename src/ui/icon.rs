use leptos::prelude::*;

/// SVG icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHART: &str = "chart";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CLOCK: &str = "clock";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const GOOGLE: &str = "google";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const PLUG: &str = "plug";
    pub const SEARCH: &str = "search";
    pub const SHIELD: &str = "shield";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
