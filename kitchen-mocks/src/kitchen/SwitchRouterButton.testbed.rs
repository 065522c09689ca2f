use dioxus::prelude::*;
use kitchen_ui::{PropMap, SchemaError, SwitchRouterButton, Testbed, Variant};

fn render(props: &PropMap) -> Element {
    rsx! {
        SwitchRouterButton { pages_mode: props.bool("pagesMode").unwrap_or(false) }
    }
}

pub fn testbed() -> Result<Testbed, SchemaError> {
    Testbed::builder("SwitchRouterButton", render)
        .description("A button that switches between app and pages router modes")
        .bool_control("pagesMode", false)
        .doc("Whether to show pages mode or app mode")
        .variant(Variant::new("App Router Mode").set_bool("pagesMode", false))
        .variant(Variant::new("Pages Router Mode").set_bool("pagesMode", true))
        .build()
}
