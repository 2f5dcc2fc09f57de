//! Playground app rendering every hsy-element button state.
//!
//! Static demos come from the embedded `presets.json` document so the playground exercises the
//! same JSON prop boundary host applications use; the interactive section drives the reactive
//! `loading` signal and the click throttle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use hsy_contract::{load_presets, ButtonPreset, ConfigError, PresetCatalog, PresetSection};
use hsy_ui::prelude::*;
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_meta::*;

const PRESETS: &str = include_str!("../presets.json");

/// Decodes the embedded preset document.
///
/// # Errors
///
/// Returns the configuration error produced by [`load_presets`].
pub fn builtin_presets() -> Result<PresetCatalog, ConfigError> {
    load_presets(PRESETS)
}

fn preset_button(
    preset: ButtonPreset,
    group: Option<Signal<ButtonGroupContext>>,
    on_click: Callback<MouseEvent>,
) -> View {
    let ButtonPreset { label, props } = preset;
    match group {
        Some(group) => view! {
            <Button config=props group=group on_click=on_click>{label}</Button>
        }
        .into_view(),
        None => view! { <Button config=props on_click=on_click>{label}</Button> }.into_view(),
    }
}

#[component]
fn PresetSectionView(section: PresetSection, on_click: Callback<MouseEvent>) -> impl IntoView {
    let PresetSection {
        title,
        group,
        buttons,
    } = section;

    let body = match group {
        Some(context) => view! {
            <ButtonGroup context=context let:group>
                {buttons
                    .iter()
                    .cloned()
                    .map(|preset| preset_button(preset, Some(group), on_click))
                    .collect_view()}
            </ButtonGroup>
        }
        .into_view(),
        None => buttons
            .into_iter()
            .map(|preset| preset_button(preset, None, on_click))
            .collect_view(),
    };

    view! {
        <section class="play-section">
            <h2>{title}</h2>
            <div class="play-row">{body}</div>
        </section>
    }
}

#[component]
/// Playground root.
pub fn PlayApp() -> impl IntoView {
    provide_meta_context();

    let clicks = create_rw_signal(0_u32);
    let submitting = create_rw_signal(false);
    let count_click = Callback::new(move |_: MouseEvent| clicks.update(|count| *count += 1));

    let presets = match builtin_presets() {
        Ok(catalog) => catalog
            .sections
            .into_iter()
            .map(|section| view! { <PresetSectionView section=section on_click=count_click /> })
            .collect_view(),
        Err(err) => {
            logging::warn!("playground presets rejected: {err}");
            view! { <p class="play-error">{err.to_string()}</p> }.into_view()
        }
    };

    view! {
        <Title text="hsy-element playground" />
        <main class="play-root">
            <h1>"hsy-element"</h1>
            <p class="play-counter">{move || format!("Accepted clicks: {}", clicks.get())}</p>
            {presets}
            <section class="play-section">
                <h2>"Interactive"</h2>
                <div class="play-row">
                    <Button
                        button_type=ButtonType::Primary
                        loading=submitting
                        on_click=Callback::new(move |_| submitting.set(true))
                    >
                        "Start loading"
                    </Button>
                    <Button on_click=Callback::new(move |_| submitting.set(false))>
                        "Stop loading"
                    </Button>
                    <Button
                        button_type=ButtonType::Success
                        icon="check"
                        use_throttle=true
                        throttle_duration=400
                        on_click=count_click
                    >
                        "Throttled (400ms)"
                    </Button>
                    <Button tag=ButtonTag::anchor() plain=true icon="arrow-up" on_click=count_click>
                        "Link"
                    </Button>
                    <Icon icon="star" tone=ButtonType::Warning size=IconSize::Lg />
                </div>
            </section>
        </main>
    }
}

/// Mounts the playground into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <PlayApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_presets_load() {
        let catalog = builtin_presets().expect("presets");
        assert_eq!(catalog.sections.len(), 6);
        assert!(catalog.sections.iter().all(|section| !section.buttons.is_empty()));
    }

    #[test]
    fn disabled_group_preset_disables_every_button() {
        let catalog = builtin_presets().expect("presets");
        let section = catalog
            .sections
            .iter()
            .find(|section| section.title == "Disabled group")
            .expect("section");
        let group = section.group.expect("group");
        for preset in &section.buttons {
            let presentation = preset.props.resolve(Some(&group)).presentation();
            assert!(presentation.disabled, "{} should be disabled", preset.label);
        }
    }

    #[test]
    fn grouped_preset_inherits_size_but_keeps_explicit_type() {
        let catalog = builtin_presets().expect("presets");
        let section = catalog
            .sections
            .iter()
            .find(|section| section.title == "Group")
            .expect("section");
        let group = section.group.expect("group");
        let classes: Vec<String> = section
            .buttons
            .iter()
            .map(|preset| preset.props.resolve(Some(&group)).presentation().class_name())
            .collect();
        assert_eq!(
            classes,
            vec![
                "er-button er-button--primary er-button--small".to_string(),
                "er-button er-button--danger er-button--small".to_string(),
            ]
        );
    }
}
