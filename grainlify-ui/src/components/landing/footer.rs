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
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub theme: Theme,
    pub brand: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="landing-footer py-16 text-center border-t border-white/20">
            <p class={super::body_text(props.theme)}>
                { format!("\u{a9} 2024 {}. All rights reserved.", props.brand) }
            </p>
        </footer>
    }
}
