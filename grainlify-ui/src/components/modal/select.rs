/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Single-select dropdown over the browser's native `<select>`.
//!
//! The native control owns the open/closed state, focus handling and
//! keyboard navigation; this component only styles it and reports
//! selections.

use grainlify_types::{SelectOption, Theme};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

use super::field_label;
use crate::components::icons::ChevronDownIcon;

pub const SELECT_PLACEHOLDER: &str = "Select an option";

#[derive(Properties, PartialEq)]
pub struct ModalSelectProps {
    pub value: AttrValue,
    /// Fired once per selection with the chosen option's value.
    pub on_change: Callback<String>,
    /// Rendered in the given order. Values are expected to be unique.
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub class: Classes,
}

/// `selectedIndex` for `value`: the placeholder sits at 0, so the first
/// matching option is offset by one.
fn selected_index(options: &[SelectOption], value: &str) -> i32 {
    SelectOption::position_of(options, value)
        .and_then(|index| i32::try_from(index + 1).ok())
        .unwrap_or(0)
}

/// Point the native control back at `value`, whatever the visitor last
/// picked.
fn sync_selection(node: &NodeRef, options: &[SelectOption], value: &str) {
    if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.set_selected_index(selected_index(options, value));
    }
}

#[function_component(ModalSelect)]
pub fn modal_select(props: &ModalSelectProps) -> Html {
    let theme = props.theme;
    let select_ref = use_node_ref();
    let first_match = SelectOption::position_of(&props.options, &props.value);

    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.value.clone(), props.options.clone()),
            move |(value, options)| {
                sync_selection(&select_ref, options, value);
            },
        );
    }

    let onchange = {
        let on_change = props.on_change.clone();
        let select_ref = select_ref.clone();
        let value = props.value.clone();
        let options = props.options.clone();
        Callback::from(move |e: Event| {
            let picked = e.target_dyn_into::<HtmlSelectElement>().map(|select| select.value());
            // The parent decides what is shown; an accepted pick comes back as
            // a new `value` and is applied by the effect above.
            sync_selection(&select_ref, &options, &value);
            if let Some(picked) = picked {
                on_change.emit(picked);
            }
        })
    };

    // Unkeyed on purpose: duplicate values from the caller must not break
    // reconciliation. Only the first match is marked selected.
    let options = props.options.iter().enumerate().map(|(index, option)| {
        html! {
            <option
                value={option.value.clone()}
                selected={first_match == Some(index)}
                class={theme.pick("bg-[#3a3228] text-[#f5f5f5]", "bg-[#e6dccf] text-[#2d2820]")}
            >
                { option.label.clone() }
            </option>
        }
    });

    html! {
        <div class={classes!("modal-select", props.class.clone())}>
            { field_label(props.label.as_ref(), props.required, props.id.as_ref(), theme) }
            <div class="relative group">
                <select
                    ref={select_ref}
                    id={props.id.clone()}
                    required={props.required}
                    {onchange}
                    class={classes!(
                        "w-full", "appearance-none", "px-4", "py-3", "pr-10", "rounded-[14px]",
                        "backdrop-blur-[30px]", "border", "focus:outline-none", "transition-all",
                        "text-[14px]", "cursor-pointer",
                        theme.pick(
                            "bg-white/[0.08] border-white/15 text-[#f5f5f5] hover:bg-white/[0.12] focus:border-[#c9983a]/50",
                            "bg-white/[0.15] border-white/25 text-[#2d2820] hover:bg-white/[0.2] focus:border-[#c9983a]/50",
                        ),
                    )}
                >
                    <option value="" disabled={true} hidden={true} selected={first_match.is_none()}>
                        { SELECT_PLACEHOLDER }
                    </option>
                    { for options }
                </select>
                <span class="pointer-events-none absolute inset-y-0 right-4 flex items-center">
                    <ChevronDownIcon class={classes!(
                        "w-4", "h-4", "opacity-50", "transition-transform", "duration-200",
                        "group-focus-within:rotate-180",
                        theme.pick("text-white", "text-black"),
                    )} />
                </span>
            </div>
        </div>
    }
}
