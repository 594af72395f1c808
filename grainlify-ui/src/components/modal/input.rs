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

use grainlify_types::Theme;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew::TargetCast;

use super::field_label;

#[derive(Properties, PartialEq)]
pub struct ModalInputProps {
    pub value: AttrValue,
    /// Receives the full field value after every edit.
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Marks the field as required for the surrounding form; no validation
    /// happens here.
    #[prop_or_default]
    pub required: bool,
    /// Render a `<textarea>` with this many rows instead of an `<input>`.
    /// Zero rows keeps the single-line input.
    #[prop_or_default]
    pub rows: Option<u32>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub class: Classes,
}

/// Controlled text field for dialog forms.
#[function_component(ModalInput)]
pub fn modal_input(props: &ModalInputProps) -> Html {
    let field_classes = classes!(
        "modal-field", "w-full", "px-4", "py-3", "rounded-[14px]", "backdrop-blur-[30px]",
        "border", "focus:outline-none", "transition-all", "text-[14px]",
        props.theme.pick(
            "bg-white/[0.08] border-white/15 text-[#f5f5f5] placeholder-[#d4d4d4] focus:bg-white/[0.12] focus:border-[#c9983a]/30",
            "bg-white/[0.15] border-white/25 text-[#2d2820] placeholder-[#7a6b5a] focus:bg-white/[0.2] focus:border-[#c9983a]/30",
        ),
        props.class.clone(),
    );

    let field = match props.rows {
        Some(rows) if rows > 0 => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                    on_change.emit(area.value());
                }
            });
            html! {
                <textarea
                    id={props.id.clone()}
                    rows={rows.to_string()}
                    required={props.required}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    class={classes!(field_classes, "resize-none")}
                    {oninput}
                />
            }
        }
        _ => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    on_change.emit(input.value());
                }
            });
            html! {
                <input
                    id={props.id.clone()}
                    type={props.input_type.clone()}
                    required={props.required}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    class={field_classes}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="modal-input">
            { field_label(props.label.as_ref(), props.required, props.id.as_ref(), props.theme) }
            { field }
        </div>
    }
}
