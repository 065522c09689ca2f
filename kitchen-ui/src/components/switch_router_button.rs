//! Link that flips between the two router modes of the demo app

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

pub const APP_ROUTER_HREF: &str = "/";
pub const PAGES_ROUTER_HREF: &str = "/pages-example";

/// Where the button leads, and what it says, for a given mode.
pub fn router_target(pages_mode: bool) -> (&'static str, &'static str) {
    if pages_mode {
        (APP_ROUTER_HREF, "Change router: app")
    } else {
        (PAGES_ROUTER_HREF, "Change router: pages")
    }
}

#[component]
pub fn SwitchRouterButton(#[props(default)] pages_mode: bool) -> Element {
    let (href, label) = router_target(pages_mode);
    let nav = navigator();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Medium,
            title: href.to_string(),
            onclick: move |_| {
                nav.push(href);
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_mode_points_back_to_app_router() {
        assert_eq!(router_target(true), ("/", "Change router: app"));
        assert_eq!(router_target(false), ("/pages-example", "Change router: pages"));
    }
}
