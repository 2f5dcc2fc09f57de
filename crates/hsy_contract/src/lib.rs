//! Shared prop and presentation contracts for the hsy-element component library.
//!
//! This crate is intentionally runtime-agnostic. It owns the validated prop enums, the
//! precedence merge between explicit Button props and an enclosing ButtonGroup, class-token
//! derivation, icon specs, and click gating without depending on Leptos or browser APIs. The
//! `hsy_ui` crate renders these contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod click;
mod config;
mod error;
mod group;
mod icon;

pub use button::{
    effective, ButtonConfig, ButtonPresentation, ButtonSize, ButtonTag, ButtonType, NativeType,
    ResolvedButton, BUTTON_CLASS, DEFAULT_THROTTLE_MS, LOADING_ICON_CLASS, SPINNER_ICON,
};
pub use click::{ClickGate, ClickOutcome, Throttle};
pub use config::{load_presets, ButtonPreset, PresetCatalog, PresetSection};
pub use error::ConfigError;
pub use group::{ButtonGroupContext, BUTTON_GROUP_CLASS};
pub use icon::{IconFlip, IconRotation, IconScale, IconSize, IconSpec, ICON_CLASS};
