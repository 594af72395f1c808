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

use grainlify_types::{ButtonType, ButtonVariant, Theme};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalButtonProps {
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub button_type: ButtonType,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog action button. `on_click` and `button_type` are forwarded to the
/// `<button>` untouched.
#[function_component(ModalButton)]
pub fn modal_button(props: &ModalButtonProps) -> Html {
    let look = match props.variant {
        ButtonVariant::Primary => classes!(
            "modal-button-primary",
            "bg-gradient-to-br",
            "from-[#c9983a]",
            "to-[#a67c2e]",
            "text-white",
            "shadow-[0_6px_20px_rgba(162,121,44,0.35)]",
            "hover:shadow-[0_8px_24px_rgba(162,121,44,0.5)]",
            "border",
            "border-white/10",
            "flex",
            "items-center",
            "justify-center",
            "gap-2",
        ),
        ButtonVariant::Secondary => classes!(
            "modal-button-secondary",
            "backdrop-blur-[20px]",
            "border",
            props.theme.pick(
                "bg-white/[0.08] border-white/15 text-[#d4d4d4] hover:bg-white/[0.12]",
                "bg-white/[0.15] border-white/25 text-[#7a6b5a] hover:bg-white/[0.2]",
            ),
        ),
    };

    html! {
        <button
            type={props.button_type.as_str()}
            onclick={props.on_click.clone()}
            class={classes!(
                "modal-button", "px-5", "py-2.5", "rounded-[12px]", "font-medium", "text-[14px]",
                "transition-all", "hover:scale-[1.02]",
                look,
                props.class.clone(),
            )}
        >
            { for props.children.iter() }
        </button>
    }
}
