//! Icon render specs consumed by the icon renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ButtonType, ConfigError, LOADING_ICON_CLASS, SPINNER_ICON};

/// Base class token carried by every icon.
pub const ICON_CLASS: &str = "er-icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
/// Icon size tokens.
pub enum IconSize {
    /// `2xs`.
    Xxs,
    /// `xs`.
    Xs,
    /// `sm`.
    Sm,
    /// `lg`.
    Lg,
    /// `xl`.
    Xl,
    /// `2xl`.
    Xxl,
    /// Integer multiple of the font size, `1x` through `10x`.
    Scale(IconScale),
}

/// Font-size multiple in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconScale(u8);

impl IconScale {
    /// `1x`, the scale used for icons inside buttons.
    pub const ONE: Self = Self(1);

    /// Validates a multiple.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidIconSize`] outside `1..=10`.
    pub fn new(factor: u8) -> Result<Self, ConfigError> {
        if (1..=10).contains(&factor) {
            Ok(Self(factor))
        } else {
            Err(ConfigError::InvalidIconSize(format!("{factor}x")))
        }
    }

    /// The multiple.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl IconSize {
    /// Stable prop token.
    pub fn token(self) -> String {
        match self {
            Self::Xxs => "2xs".to_string(),
            Self::Xs => "xs".to_string(),
            Self::Sm => "sm".to_string(),
            Self::Lg => "lg".to_string(),
            Self::Xl => "xl".to_string(),
            Self::Xxl => "2xl".to_string(),
            Self::Scale(scale) => format!("{}x", scale.get()),
        }
    }
}

impl FromStr for IconSize {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let size = match raw {
            "2xs" => Self::Xxs,
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            "2xl" => Self::Xxl,
            scaled => scaled
                .strip_suffix('x')
                .and_then(|factor| factor.parse::<u8>().ok())
                .and_then(|factor| IconScale::new(factor).ok())
                .map(Self::Scale)
                .ok_or_else(|| ConfigError::InvalidIconSize(raw.to_string()))?,
        };
        Ok(size)
    }
}

impl TryFrom<String> for IconSize {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<IconSize> for String {
    fn from(size: IconSize) -> Self {
        size.token()
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
/// Quarter-turn icon rotations.
pub enum IconRotation {
    /// 90 degrees.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees.
    Deg270,
}

impl IconRotation {
    /// Rotation in degrees.
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    fn class_token(self) -> &'static str {
        match self {
            Self::Deg90 => "er-icon--rotate-90",
            Self::Deg180 => "er-icon--rotate-180",
            Self::Deg270 => "er-icon--rotate-270",
        }
    }
}

impl TryFrom<u16> for IconRotation {
    type Error = ConfigError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(ConfigError::InvalidRotation(other)),
        }
    }
}

impl From<IconRotation> for u16 {
    fn from(rotation: IconRotation) -> Self {
        rotation.degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
/// Icon mirroring.
pub enum IconFlip {
    /// Mirror left-to-right.
    Horizontal,
    /// Mirror top-to-bottom.
    Vertical,
    /// Mirror on both axes.
    Both,
}

impl IconFlip {
    fn class_token(self) -> &'static str {
        match self {
            Self::Horizontal => "er-icon--flip-horizontal",
            Self::Vertical => "er-icon--flip-vertical",
            Self::Both => "er-icon--flip-both",
        }
    }
}

impl FromStr for IconFlip {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "both" => Ok(Self::Both),
            other => Err(ConfigError::InvalidFlip(other.to_string())),
        }
    }
}

impl TryFrom<String> for IconFlip {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// What the icon renderer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Glyph identifier, e.g. `arrow-up`.
    pub name: String,
    /// Semantic tone.
    pub tone: Option<ButtonType>,
    /// CSS color override.
    pub color: Option<String>,
    /// Size token.
    pub size: Option<IconSize>,
    /// Continuous rotation animation.
    pub spin: bool,
    /// Stepped rotation animation.
    pub pulse: bool,
    /// Fixed rotation.
    pub rotation: Option<IconRotation>,
    /// Mirroring.
    pub flip: Option<IconFlip>,
    /// Additional class token supplied by the owning component.
    pub extra_class: Option<&'static str>,
}

impl IconSpec {
    /// Plain icon with no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tone: None,
            color: None,
            size: None,
            spin: false,
            pulse: false,
            rotation: None,
            flip: None,
            extra_class: None,
        }
    }

    /// Icon sized to sit inline with button text.
    pub fn inline(name: impl Into<String>) -> Self {
        Self {
            size: Some(IconSize::Scale(IconScale::ONE)),
            ..Self::new(name)
        }
    }

    /// Spinning loading indicator shown by loading buttons.
    pub fn spinner() -> Self {
        Self {
            spin: true,
            extra_class: Some(LOADING_ICON_CLASS),
            ..Self::inline(SPINNER_ICON)
        }
    }

    /// Class tokens in stable order.
    pub fn class_tokens(&self) -> Vec<String> {
        let mut classes = vec![ICON_CLASS.to_string()];
        classes.extend(self.extra_class.map(str::to_string));
        classes.extend(self.tone.map(|tone| format!("er-icon--{}", tone.token())));
        classes.extend(self.size.map(|size| format!("er-icon--{}", size.token())));
        if self.spin {
            classes.push("is-spin".to_string());
        }
        if self.pulse {
            classes.push("is-pulse".to_string());
        }
        classes.extend(self.rotation.map(|rotation| rotation.class_token().to_string()));
        classes.extend(self.flip.map(|flip| flip.class_token().to_string()));
        classes
    }

    /// Space-separated class attribute value.
    pub fn class_name(&self) -> String {
        self.class_tokens().join(" ")
    }

    /// Inline style carrying the color override.
    pub fn style(&self) -> Option<String> {
        self.color.as_ref().map(|color| format!("color: {color};"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn spinner_carries_loading_class_and_spin() {
        assert_eq!(
            IconSpec::spinner().class_name(),
            "er-icon loading-icon er-icon--1x is-spin"
        );
    }

    #[test]
    fn modifiers_render_in_order() {
        let spec = IconSpec {
            tone: Some(ButtonType::Danger),
            size: Some(IconSize::Xxl),
            pulse: true,
            rotation: Some(IconRotation::Deg180),
            flip: Some(IconFlip::Both),
            color: Some("#f00".to_string()),
            ..IconSpec::new("star")
        };
        assert_eq!(
            spec.class_name(),
            "er-icon er-icon--danger er-icon--2xl is-pulse er-icon--rotate-180 er-icon--flip-both"
        );
        assert_eq!(spec.style().as_deref(), Some("color: #f00;"));
    }

    #[test]
    fn size_tokens_parse() {
        assert_eq!("2xs".parse::<IconSize>(), Ok(IconSize::Xxs));
        assert_eq!(
            "10x".parse::<IconSize>(),
            Ok(IconSize::Scale(IconScale::new(10).expect("scale")))
        );
        assert_eq!(
            "11x".parse::<IconSize>(),
            Err(ConfigError::InvalidIconSize("11x".to_string()))
        );
        assert!("0x".parse::<IconSize>().is_err());
        assert!("x".parse::<IconSize>().is_err());
    }

    #[test]
    fn scale_rejects_out_of_range_factors() {
        assert_eq!(
            IconScale::new(0),
            Err(ConfigError::InvalidIconSize("0x".to_string()))
        );
        assert!(IconScale::new(11).is_err());

        let size = IconSize::Scale(IconScale::new(3).expect("scale"));
        let json = serde_json::to_string(&size).expect("serialize");
        assert_eq!(json, r#""3x""#);
        assert_eq!(serde_json::from_str::<IconSize>(&json).expect("deserialize"), size);
    }

    #[test]
    fn rotation_and_flip_reject_unknown_values() {
        assert_eq!(IconRotation::try_from(270), Ok(IconRotation::Deg270));
        assert_eq!(IconRotation::try_from(45), Err(ConfigError::InvalidRotation(45)));
        assert_eq!(
            "diagonal".parse::<IconFlip>(),
            Err(ConfigError::InvalidFlip("diagonal".to_string()))
        );
    }
}
