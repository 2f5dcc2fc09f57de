//! Leptos component library for hsy-element buttons, button groups, and icons.
//!
//! Components render the contracts defined in `hsy_contract`: every class token, disabled
//! condition, and click decision comes from that crate, so this layer only wires props,
//! reactive signals, and DOM events. Elements also carry the `data-ui-*` hooks used by the theme
//! layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod time;

pub use hsy_contract::{
    ButtonConfig, ButtonGroupContext, ButtonSize, ButtonTag, ButtonType, ConfigError, IconFlip,
    IconRotation, IconScale, IconSize, IconSpec, NativeType,
};
pub use icon::{Icon, IconGlyph};
pub use primitives::{Button, ButtonGroup};

/// Convenience imports for applications consuming the component set.
pub mod prelude {
    pub use crate::{
        Button, ButtonConfig, ButtonGroup, ButtonGroupContext, ButtonSize, ButtonTag, ButtonType,
        Icon, IconFlip, IconRotation, IconSize, IconSpec, NativeType,
    };
}
