//! Button and button-group primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use hsy_contract::{
    ButtonConfig, ButtonGroupContext, ButtonSize, ButtonTag, ButtonType, ClickGate, ClickOutcome,
    NativeType, ResolvedButton, DEFAULT_THROTTLE_MS,
};

use crate::icon::render_icon;
use crate::time::monotonic_ms;

mod button;

pub use button::{Button, ButtonGroup};

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("er-button", None), "er-button");
        assert_eq!(merge_layout_class("er-button", Some("")), "er-button");
        assert_eq!(
            merge_layout_class("er-button is-plain", Some("toolbar-action")),
            "er-button is-plain toolbar-action"
        );
    }
}
