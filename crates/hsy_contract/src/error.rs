//! Configuration errors raised at the component boundary.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected component configuration.
///
/// Every variant describes a caller contract violation detected while parsing or validating
/// props. Nothing in this crate renders a component from an invalid configuration.
pub enum ConfigError {
    /// The `type` prop is not one of the supported button types.
    #[error("unsupported button type `{0}`")]
    InvalidButtonType(String),
    /// The `size` prop is not one of the supported button sizes.
    #[error("unsupported button size `{0}`")]
    InvalidButtonSize(String),
    /// The `nativeType` prop is not `button`, `submit`, or `reset`.
    #[error("unsupported native button type `{0}`")]
    InvalidNativeType(String),
    /// The `tag` prop is not a usable element name.
    #[error("invalid element tag `{0}`")]
    InvalidTag(String),
    /// The icon `size` prop is not a supported size token.
    #[error("unsupported icon size `{0}`")]
    InvalidIconSize(String),
    /// The icon `rotation` prop is not 90, 180, or 270.
    #[error("unsupported icon rotation `{0}`")]
    InvalidRotation(u16),
    /// The icon `flip` prop is not `horizontal`, `vertical`, or `both`.
    #[error("unsupported icon flip `{0}`")]
    InvalidFlip(String),
    /// A configuration document could not be decoded.
    #[error("malformed configuration: {0}")]
    Malformed(String),
}
