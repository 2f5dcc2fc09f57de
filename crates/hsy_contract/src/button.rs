//! Button props, precedence resolution, and class-token derivation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ButtonGroupContext, ConfigError, IconSpec};

/// Base class token carried by every button.
pub const BUTTON_CLASS: &str = "er-button";
/// Throttle window applied when `use_throttle` is set without an explicit duration.
pub const DEFAULT_THROTTLE_MS: u64 = 500;
/// Icon identifier requested from the icon renderer while a button is loading.
pub const SPINNER_ICON: &str = "spinner";
/// Extra class token attached to the loading spinner.
pub const LOADING_ICON_CLASS: &str = "loading-icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
/// Semantic button color types.
pub enum ButtonType {
    /// Primary emphasized action.
    Primary,
    /// Success/confirm action.
    Success,
    /// Warning action.
    Warning,
    /// Danger/destructive action.
    Danger,
    /// Informational action.
    Info,
    /// Explicit default type.
    Default,
}

impl ButtonType {
    /// Every supported type in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
        Self::Default,
    ];

    /// Stable prop token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Default => "default",
        }
    }

    /// Modifier class token, e.g. `er-button--primary`.
    pub const fn class_token(self) -> &'static str {
        match self {
            Self::Primary => "er-button--primary",
            Self::Success => "er-button--success",
            Self::Warning => "er-button--warning",
            Self::Danger => "er-button--danger",
            Self::Info => "er-button--info",
            Self::Default => "er-button--default",
        }
    }
}

impl FromStr for ButtonType {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.token() == raw)
            .ok_or_else(|| ConfigError::InvalidButtonType(raw.to_string()))
    }
}

impl TryFrom<String> for ButtonType {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Large button.
    Large,
    /// Explicit default size.
    Default,
    /// Dense button.
    Small,
}

impl ButtonSize {
    /// Every supported size in declaration order.
    pub const ALL: [Self; 3] = [Self::Large, Self::Default, Self::Small];

    /// Stable prop token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Default => "default",
            Self::Small => "small",
        }
    }

    /// Modifier class token, e.g. `er-button--small`.
    pub const fn class_token(self) -> &'static str {
        match self {
            Self::Large => "er-button--large",
            Self::Default => "er-button--default",
            Self::Small => "er-button--small",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.token() == raw)
            .ok_or_else(|| ConfigError::InvalidButtonSize(raw.to_string()))
    }
}

impl TryFrom<String> for ButtonSize {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
/// Native `type` attribute forwarded to `<button>` elements.
pub enum NativeType {
    /// Plain button.
    #[default]
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl NativeType {
    /// Every supported native type in declaration order.
    pub const ALL: [Self; 3] = [Self::Button, Self::Submit, Self::Reset];

    /// Attribute value.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

impl FromStr for NativeType {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.token() == raw)
            .ok_or_else(|| ConfigError::InvalidNativeType(raw.to_string()))
    }
}

impl TryFrom<String> for NativeType {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Validated element name rendered as the button root, `button` unless overridden.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ButtonTag(String);

impl ButtonTag {
    /// Validates and normalizes an element name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTag`] unless the name starts with an ASCII letter and
    /// contains only ASCII letters, digits, or `-`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let mut chars = raw.chars();
        let valid = chars.next().is_some_and(|first| first.is_ascii_alphabetic())
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
        if !valid {
            return Err(ConfigError::InvalidTag(raw));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Anchor root for link-styled buttons.
    pub fn anchor() -> Self {
        Self("a".to_string())
    }

    /// Returns the element name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the root element is a native `<button>`.
    pub fn is_button(&self) -> bool {
        self.0 == "button"
    }
}

impl Default for ButtonTag {
    fn default() -> Self {
        Self("button".to_string())
    }
}

impl FromStr for ButtonTag {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for ButtonTag {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ButtonTag> for String {
    fn from(tag: ButtonTag) -> Self {
        tag.0
    }
}

/// Precedence merge for inheritable props: the explicit value wins over the inherited one.
pub fn effective<T>(explicit: Option<T>, inherited: Option<T>) -> Option<T> {
    explicit.or(inherited)
}

/// Explicit Button props as supplied by the caller.
///
/// Keys serialize in camelCase so JSON documents use the public prop names (`nativeType`,
/// `useThrottle`, `throttleDuration`). Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonConfig {
    /// Color type; unset inherits from the group.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    /// Size; unset inherits from the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    /// Outline style.
    pub plain: bool,
    /// Rounded corners.
    pub round: bool,
    /// Circular shape.
    pub circle: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Loading flag; implies disabled.
    pub loading: bool,
    /// Leading icon identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Native `type` attribute for `<button>` roots.
    pub native_type: NativeType,
    /// Root element name.
    pub tag: ButtonTag,
    /// Enables leading-edge click throttling.
    pub use_throttle: bool,
    /// Throttle window in milliseconds.
    pub throttle_duration: u64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            button_type: None,
            size: None,
            plain: false,
            round: false,
            circle: false,
            disabled: false,
            loading: false,
            icon: None,
            native_type: NativeType::Button,
            tag: ButtonTag::default(),
            use_throttle: false,
            throttle_duration: DEFAULT_THROTTLE_MS,
        }
    }
}

impl ButtonConfig {
    /// Decodes a JSON prop document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] when the document is not valid JSON, names an unknown
    /// prop, or carries an unsupported enum value.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))
    }

    /// Merges explicit props with an optional enclosing group context.
    pub fn resolve(&self, group: Option<&ButtonGroupContext>) -> ResolvedButton {
        let inherited = group.copied().unwrap_or_default();
        ResolvedButton {
            button_type: effective(self.button_type, inherited.button_type),
            size: effective(self.size, inherited.size),
            plain: self.plain,
            round: self.round,
            circle: self.circle,
            // A group can only force disabled on; it never re-enables a disabled button.
            disabled: self.disabled || inherited.disabled.unwrap_or(false),
            loading: self.loading,
            icon: self.icon.clone(),
            native_type: self.native_type,
            tag: self.tag.clone(),
            throttle_ms: self.use_throttle.then_some(self.throttle_duration),
        }
    }
}

/// Button props after the group merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedButton {
    /// Effective color type.
    pub button_type: Option<ButtonType>,
    /// Effective size.
    pub size: Option<ButtonSize>,
    /// Outline style.
    pub plain: bool,
    /// Rounded corners.
    pub round: bool,
    /// Circular shape.
    pub circle: bool,
    /// Effective disabled flag, including group-forced disabling.
    pub disabled: bool,
    /// Loading flag.
    pub loading: bool,
    /// Leading icon identifier.
    pub icon: Option<String>,
    /// Native `type` attribute.
    pub native_type: NativeType,
    /// Root element name.
    pub tag: ButtonTag,
    /// Throttle window when throttling is enabled.
    pub throttle_ms: Option<u64>,
}

impl ResolvedButton {
    /// Whether clicks are suppressed and the disabled attribute is present.
    pub fn is_inactive(&self) -> bool {
        self.disabled || self.loading
    }

    /// Leading icon: the spinner while loading, otherwise the caller icon.
    pub fn leading_icon(&self) -> Option<IconSpec> {
        if self.loading {
            Some(IconSpec::spinner())
        } else if let Some(icon) = self.icon.as_deref() {
            Some(IconSpec::inline(icon))
        } else {
            None
        }
    }

    /// Derives the rendered presentation.
    pub fn presentation(&self) -> ButtonPresentation {
        let mut classes = vec![BUTTON_CLASS];
        classes.extend(self.button_type.map(ButtonType::class_token));
        // `default` type and size share the `er-button--default` token.
        if let Some(size) = self.size.map(ButtonSize::class_token) {
            if !classes.contains(&size) {
                classes.push(size);
            }
        }
        for (enabled, token) in [
            (self.plain, "is-plain"),
            (self.round, "is-round"),
            (self.circle, "is-circle"),
            (self.disabled, "is-disabled"),
            (self.loading, "is-loading"),
        ] {
            if enabled {
                classes.push(token);
            }
        }

        ButtonPresentation {
            classes,
            disabled: self.is_inactive(),
            tag: self.tag.clone(),
            native_type: self.tag.is_button().then_some(self.native_type),
            leading_icon: self.leading_icon(),
        }
    }
}

/// Everything the renderer needs to draw a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPresentation {
    /// Class tokens in stable order.
    pub classes: Vec<&'static str>,
    /// Whether the disabled attribute is present.
    pub disabled: bool,
    /// Root element name.
    pub tag: ButtonTag,
    /// Native `type` attribute, only for `<button>` roots.
    pub native_type: Option<NativeType>,
    /// Leading icon, if any.
    pub leading_icon: Option<IconSpec>,
}

impl ButtonPresentation {
    /// Space-separated class attribute value.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Whether a class token is present.
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|class| *class == token)
    }
}
