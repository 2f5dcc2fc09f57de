//! JSON preset documents used to drive demo and fixture buttons.

use serde::{Deserialize, Serialize};

use crate::{ButtonConfig, ButtonGroupContext, ConfigError};

/// One labelled button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonPreset {
    /// Button text.
    pub label: String,
    /// Explicit props.
    #[serde(default)]
    pub props: ButtonConfig,
}

/// A titled run of buttons, optionally wrapped in a ButtonGroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PresetSection {
    /// Section heading.
    pub title: String,
    /// Group props; `None` renders the buttons side by side without a group.
    #[serde(default)]
    pub group: Option<ButtonGroupContext>,
    /// Buttons in display order.
    pub buttons: Vec<ButtonPreset>,
}

/// Top-level preset document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PresetCatalog {
    /// Sections in display order.
    pub sections: Vec<PresetSection>,
}

/// Parses and validates a preset document.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] for invalid JSON, unknown keys, unsupported prop values,
/// a section without buttons, or a button without a label.
pub fn load_presets(raw: &str) -> Result<PresetCatalog, ConfigError> {
    let catalog: PresetCatalog =
        serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))?;

    for section in &catalog.sections {
        if section.buttons.is_empty() {
            return Err(ConfigError::Malformed(format!(
                "section `{}` has no buttons",
                section.title
            )));
        }
        if let Some(button) = section.buttons.iter().find(|b| b.label.trim().is_empty()) {
            return Err(ConfigError::Malformed(format!(
                "section `{}` has a button without a label: {:?}",
                section.title, button.props
            )));
        }
    }

    Ok(catalog)
}
