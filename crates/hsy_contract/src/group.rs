//! Shared ButtonGroup context handed explicitly to descendant buttons.

use serde::{Deserialize, Serialize};

use crate::{ButtonSize, ButtonType};

/// Class token carried by the group container.
pub const BUTTON_GROUP_CLASS: &str = "er-button-group";

/// Values a ButtonGroup shares with its buttons.
///
/// The group owns this value for the lifetime of its subtree; buttons only read it through
/// [`crate::ButtonConfig::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonGroupContext {
    /// Inherited color type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    /// Inherited size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    /// When `Some(true)`, every descendant button is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl ButtonGroupContext {
    /// Builds the context from ButtonGroup props.
    pub fn from_props(
        button_type: Option<ButtonType>,
        size: Option<ButtonSize>,
        disabled: bool,
    ) -> Self {
        Self {
            button_type,
            size,
            disabled: Some(disabled),
        }
    }

    /// Class attribute for the group container.
    pub fn class_name(&self) -> &'static str {
        BUTTON_GROUP_CLASS
    }

    /// Whether the group forces its buttons disabled.
    pub fn forces_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ButtonConfig;

    #[test]
    fn group_class_is_stable() {
        assert_eq!(ButtonGroupContext::default().class_name(), "er-button-group");
    }

    #[test]
    fn group_size_and_type_reach_buttons() {
        for size in ButtonSize::ALL {
            let group = ButtonGroupContext::from_props(None, Some(size), false);
            let presentation = ButtonConfig::default().resolve(Some(&group)).presentation();
            assert!(presentation.has_class(size.class_token()));
        }
        for button_type in ButtonType::ALL {
            let group = ButtonGroupContext::from_props(Some(button_type), None, false);
            let presentation = ButtonConfig::default().resolve(Some(&group)).presentation();
            assert!(presentation.has_class(button_type.class_token()));
        }
    }

    #[test]
    fn disabled_group_forces_every_button_disabled() {
        let group = ButtonGroupContext::from_props(None, None, true);
        assert!(group.forces_disabled());

        for own_disabled in [false, true] {
            let presentation = ButtonConfig {
                disabled: own_disabled,
                ..ButtonConfig::default()
            }
            .resolve(Some(&group))
            .presentation();
            assert!(presentation.disabled);
            assert!(presentation.has_class("is-disabled"));
        }
    }

    #[test]
    fn enabled_group_leaves_buttons_alone() {
        let group = ButtonGroupContext::from_props(None, None, false);
        let resolved = ButtonConfig::default().resolve(Some(&group));
        assert_eq!(resolved, ButtonConfig::default().resolve(None));
    }

    #[test]
    fn group_json_rejects_unknown_size() {
        let parsed = serde_json::from_str::<ButtonGroupContext>(r#"{"size":"medium"}"#);
        assert!(parsed.is_err());

        let parsed: ButtonGroupContext =
            serde_json::from_str(r#"{"type":"danger","disabled":true}"#).expect("group");
        assert_eq!(parsed.button_type, Some(ButtonType::Danger));
        assert!(parsed.forces_disabled());
    }
}
