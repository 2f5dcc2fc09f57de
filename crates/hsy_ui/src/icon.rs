//! Icon renderer with a small built-in SVG glyph catalog.
//!
//! Icons are requested by string identifier (`"spinner"`, `"arrow-up"`, ...) so callers and
//! serialized props never depend on the catalog enum. Identifiers outside the catalog still
//! render the `er-icon` wrapper with an empty glyph.

use leptos::*;

use hsy_contract::{ButtonType, IconFlip, IconRotation, IconSize, IconSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyphs drawn by the built-in catalog.
pub enum IconGlyph {
    /// Loading spinner.
    Spinner,
    /// Upward arrow.
    ArrowUp,
    /// Downward arrow.
    ArrowDown,
    /// Checkmark.
    Check,
    /// Dismiss cross.
    Xmark,
    /// Plus sign.
    Plus,
    /// Search glass.
    MagnifyingGlass,
    /// Five-point star.
    Star,
}

impl IconGlyph {
    /// Every glyph in the catalog.
    pub const ALL: [Self; 8] = [
        Self::Spinner,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::Check,
        Self::Xmark,
        Self::Plus,
        Self::MagnifyingGlass,
        Self::Star,
    ];

    /// Identifier used in the `icon` prop.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Check => "check",
            Self::Xmark => "xmark",
            Self::Plus => "plus",
            Self::MagnifyingGlass => "magnifying-glass",
            Self::Star => "star",
        }
    }

    /// Looks up a glyph by identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.token() == name)
    }

    /// Raw SVG body markup on a 24px grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Spinner => {
                r#"<path d="M12 2a10 10 0 1 0 10 10h-2.5A7.5 7.5 0 1 1 12 4.5V2Z"/>"#
            }
            Self::ArrowUp => {
                r#"<path d="M11.25 20V6.56l-5.22 5.22-1.06-1.06L12 3.69l7.03 7.03-1.06 1.06-5.22-5.22V20h-1.5Z"/>"#
            }
            Self::ArrowDown => {
                r#"<path d="M12.75 4v13.44l5.22-5.22 1.06 1.06L12 20.31l-7.03-7.03 1.06-1.06 5.22 5.22V4h1.5Z"/>"#
            }
            Self::Check => {
                r#"<path d="M9 16.17 4.83 12l-1.06 1.06L9 18.3 20.23 7.06 19.17 6 9 16.17Z"/>"#
            }
            Self::Xmark => {
                r#"<path d="M6.06 5 5 6.06 10.94 12 5 17.94 6.06 19 12 13.06 17.94 19 19 17.94 13.06 12 19 6.06 17.94 5 12 10.94 6.06 5Z"/>"#
            }
            Self::Plus => {
                r#"<path d="M11.25 4v7.25H4v1.5h7.25V20h1.5v-7.25H20v-1.5h-7.25V4h-1.5Z"/>"#
            }
            Self::MagnifyingGlass => {
                r#"<path d="M10 3a7 7 0 0 1 5.6 11.2l5.1 5.1-1.06 1.06-5.1-5.1A7 7 0 1 1 10 3Zm0 1.5a5.5 5.5 0 1 0 0 11 5.5 5.5 0 0 0 0-11Z"/>"#
            }
            Self::Star => {
                r#"<path d="M12 2.5l2.94 5.96 6.56.95-4.75 4.63 1.12 6.54L12 17.49l-5.87 3.09 1.12-6.54L2.5 9.41l6.56-.95L12 2.5Z"/>"#
            }
        }
    }
}

/// Renders an [`IconSpec`]; shared by [`Icon`] and the Button leading slot.
pub(crate) fn render_icon(spec: IconSpec) -> View {
    let glyph = IconGlyph::from_name(&spec.name);
    if glyph.is_none() {
        logging::warn!("icon `{}` is not in the built-in glyph catalog", spec.name);
    }
    let class = spec.class_name();
    let style = spec.style();

    view! {
        <i
            class=class
            style=style
            data-icon=spec.name
            data-ui-primitive="true"
            data-ui-kind="icon"
            aria-hidden="true"
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                width="1em"
                height="1em"
                fill="currentColor"
                focusable="false"
                inner_html=glyph.map(IconGlyph::svg_body).unwrap_or_default()
            />
        </i>
    }
    .into_view()
}

#[component]
/// Icon primitive drawing a catalog glyph inside an `er-icon` wrapper.
pub fn Icon(
    /// Glyph identifier such as `"arrow-up"`.
    #[prop(into)]
    icon: String,
    /// Semantic tone token.
    #[prop(optional)]
    tone: Option<ButtonType>,
    /// CSS color override.
    #[prop(optional, into)]
    color: Option<String>,
    #[prop(optional)] size: Option<IconSize>,
    #[prop(optional)] spin: bool,
    #[prop(optional)] pulse: bool,
    #[prop(optional)] rotation: Option<IconRotation>,
    #[prop(optional)] flip: Option<IconFlip>,
) -> impl IntoView {
    render_icon(IconSpec {
        tone,
        color,
        size,
        spin,
        pulse,
        rotation,
        flip,
        ..IconSpec::new(icon)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_glyph_round_trips_its_identifier() {
        for glyph in IconGlyph::ALL {
            assert_eq!(IconGlyph::from_name(glyph.token()), Some(glyph));
            assert!(glyph.svg_body().starts_with("<path"));
        }
    }

    #[test]
    fn spinner_requested_by_loading_buttons_is_in_catalog() {
        assert_eq!(
            IconGlyph::from_name(hsy_contract::SPINNER_ICON),
            Some(IconGlyph::Spinner)
        );
        assert_eq!(IconGlyph::from_name("rocket"), None);
    }
}
