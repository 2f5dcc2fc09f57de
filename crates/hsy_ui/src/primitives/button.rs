use super::*;

/// Tracks the button's own flags and the group context, re-resolving when either changes.
pub(crate) fn resolve_button(
    base: StoredValue<ButtonConfig>,
    disabled: MaybeSignal<bool>,
    loading: MaybeSignal<bool>,
    group: Option<MaybeSignal<ButtonGroupContext>>,
) -> Memo<ResolvedButton> {
    create_memo(move |_| {
        let config = base.with_value(|base| ButtonConfig {
            disabled: base.disabled || disabled.get(),
            loading: base.loading || loading.get(),
            ..base.clone()
        });
        let group = group.as_ref().map(|group| group.get());
        config.resolve(group.as_ref())
    })
}

/// Offers one click at `now_ms` to the gate using the button's current state.
pub(crate) fn admit_click(
    gate: StoredValue<ClickGate>,
    resolved: Memo<ResolvedButton>,
    now_ms: u64,
) -> ClickOutcome {
    let inactive = resolved.with_untracked(ResolvedButton::is_inactive);
    gate.try_update_value(|gate| gate.on_click(inactive, now_ms))
        .unwrap_or(ClickOutcome::Suppressed)
}

#[component]
/// Clickable button whose classes, disabled state, and leading icon derive from its props.
///
/// Explicit props win over the optional `group` context; a disabled group disables the button.
/// Disabled or loading buttons swallow clicks, and `use_throttle` drops clicks that land within
/// `throttle_duration` milliseconds of the last accepted one.
///
/// `config` spreads a complete [`ButtonConfig`] (for example one decoded from JSON) and replaces
/// the individual static props; the `disabled` and `loading` signals still apply on top of it.
pub fn Button(
    #[prop(optional)] button_type: Option<ButtonType>,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional)] plain: bool,
    #[prop(optional)] round: bool,
    #[prop(optional)] circle: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] native_type: NativeType,
    #[prop(optional)] tag: ButtonTag,
    #[prop(optional)] use_throttle: bool,
    #[prop(default = DEFAULT_THROTTLE_MS)] throttle_duration: u64,
    /// Context handed down by an enclosing [`ButtonGroup`].
    #[prop(optional, into)]
    group: Option<MaybeSignal<ButtonGroupContext>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] config: Option<ButtonConfig>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let base = store_value(config.unwrap_or_else(|| ButtonConfig {
        button_type,
        size,
        plain,
        round,
        circle,
        disabled: false,
        loading: false,
        icon,
        native_type,
        tag,
        use_throttle,
        throttle_duration,
    }));

    let resolved = resolve_button(base, disabled, loading, group);
    let presentation = create_memo(move |_| resolved.with(ResolvedButton::presentation));
    let leading_icon = create_memo(move |_| resolved.with(ResolvedButton::leading_icon));

    // The root element and click gate are fixed for the lifetime of the instance.
    let (tag, native_type) = presentation.with_untracked(|presentation| {
        (presentation.tag.clone(), presentation.native_type)
    });
    let is_button = tag.is_button();
    let gate = store_value(ClickGate::new(
        resolved.with_untracked(|resolved| resolved.throttle_ms),
    ));

    let handle_click = move |ev: MouseEvent| match admit_click(gate, resolved, monotonic_ms()) {
        ClickOutcome::Fire => {
            if let Some(on_click) = on_click.as_ref() {
                on_click.call(ev);
            }
        }
        // Non-button tags ignore the disabled attribute, so stop link navigation here.
        ClickOutcome::Suppressed => ev.prevent_default(),
        ClickOutcome::Throttled => {}
    };

    let content = view! {
        {move || leading_icon.get().map(render_icon)}
        {children.map(|children| view! { <span>{children()}</span> })}
    };

    html::custom(html::Custom::new(tag.as_str().to_string()))
        .attr("class", move || {
            presentation.with(|presentation| {
                merge_layout_class(&presentation.class_name(), layout_class)
            })
        })
        .attr("type", native_type.map(NativeType::token))
        .attr("disabled", move || presentation.with(|presentation| presentation.disabled))
        .attr("aria-disabled", move || {
            (!is_button).then(|| presentation.with(|presentation| bool_token(presentation.disabled)))
        })
        .attr("aria-label", move || aria_label.get())
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "button")
        .attr("data-ui-disabled", move || {
            resolved.with(|resolved| bool_token(resolved.disabled))
        })
        .attr("data-ui-loading", move || {
            resolved.with(|resolved| bool_token(resolved.loading))
        })
        .on(ev::click, handle_click)
        .child(content)
}

#[component]
/// Container sharing `size`, `button_type`, and `disabled` with the buttons it wraps.
///
/// The group derives a [`ButtonGroupContext`] signal and passes it to its children closure,
/// which hands it to each [`Button`] through the `group` prop:
///
/// ```ignore
/// view! {
///     <ButtonGroup size=ButtonSize::Small disabled=busy let:group>
///         <Button group=group>"Prev"</Button>
///         <Button group=group>"Next"</Button>
///     </ButtonGroup>
/// }
/// ```
///
/// Children that ignore the context render unchanged. `context` supplies a prebuilt
/// [`ButtonGroupContext`] in place of the individual props.
pub fn ButtonGroup<F, IV>(
    #[prop(optional)] button_type: Option<ButtonType>,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] context: Option<ButtonGroupContext>,
    children: F,
) -> impl IntoView
where
    F: Fn(Signal<ButtonGroupContext>) -> IV + 'static,
    IV: IntoView,
{
    let group = Signal::derive(move || {
        context.unwrap_or_else(|| ButtonGroupContext::from_props(button_type, size, disabled.get()))
    });

    view! {
        <div
            class=merge_layout_class(ButtonGroupContext::default().class_name(), layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="button-group"
            data-ui-disabled=move || bool_token(group.with(ButtonGroupContext::forces_disabled))
        >
            {children(group)}
        </div>
    }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use leptos::ssr::render_to_string;

    use super::*;

    fn render<N: IntoView>(view: impl FnOnce() -> N + 'static) -> String {
        render_to_string(view).to_string()
    }

    #[test]
    fn disabled_anchor_renders_custom_tag_without_native_type() {
        let html = render(|| {
            view! { <Button tag=ButtonTag::anchor() disabled=true>"Link"</Button> }
        });

        assert!(html.contains("<a "), "{html}");
        assert!(html.contains(r#"class="er-button is-disabled""#), "{html}");
        assert!(html.contains(" disabled"), "{html}");
        assert!(html.contains(r#"aria-disabled="true""#), "{html}");
        assert!(!html.contains("type="), "{html}");
    }

    #[test]
    fn submit_button_forwards_native_type() {
        let html = render(|| {
            view! { <Button native_type=NativeType::Submit>"Save"</Button> }
        });

        assert!(html.contains("<button "), "{html}");
        assert!(html.contains(r#"type="submit""#), "{html}");
        assert!(!html.contains("aria-disabled"), "{html}");
        assert!(html.contains("Save"), "{html}");
    }

    #[test]
    fn loading_button_renders_spinner_instead_of_icon() {
        let html = render(|| {
            view! { <Button icon="arrow-up" loading=true>"Wait"</Button> }
        });

        assert!(html.contains(r#"data-icon="spinner""#), "{html}");
        assert!(html.contains("loading-icon"), "{html}");
        assert!(!html.contains(r#"data-icon="arrow-up""#), "{html}");
    }

    #[test]
    fn disabled_group_disables_children() {
        let html = render(|| {
            view! {
                <ButtonGroup disabled=true let:group>
                    <Button group=group>"One"</Button>
                    <Button group=group disabled=false>"Two"</Button>
                </ButtonGroup>
            }
        });

        assert!(html.contains(r#"class="er-button-group""#), "{html}");
        assert_eq!(html.matches(r#"class="er-button is-disabled""#).count(), 2, "{html}");
    }
}
