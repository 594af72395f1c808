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

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalFooterProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Right-aligned row of dialog actions.
#[function_component(ModalFooter)]
pub fn modal_footer(props: &ModalFooterProps) -> Html {
    html! {
        <div class={classes!(
            "modal-actions", "flex", "items-center", "justify-end", "gap-3", "mt-6",
            props.class.clone(),
        )}>
            { for props.children.iter() }
        </div>
    }
}
