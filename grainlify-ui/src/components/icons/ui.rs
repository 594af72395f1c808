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

use super::{stroke_icon, IconProps};
use yew::prelude::*;

/// Dialog close glyph.
#[function_component(XIcon)]
pub fn x_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M18 6 6 18"></path>
                <path d="m6 6 12 12"></path>
            </>
        },
    )
}

#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon(props: &IconProps) -> Html {
    stroke_icon(&props.class, html! { <path d="m6 9 6 6 6-6"></path> })
}

#[function_component(SunIcon)]
pub fn sun_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="4"></circle>
                <path d="M12 2v2"></path>
                <path d="M12 20v2"></path>
                <path d="m4.93 4.93 1.41 1.41"></path>
                <path d="m17.66 17.66 1.41 1.41"></path>
                <path d="M2 12h2"></path>
                <path d="M20 12h2"></path>
                <path d="m6.34 17.66-1.41 1.41"></path>
                <path d="m19.07 4.93-1.41 1.41"></path>
            </>
        },
    )
}

#[function_component(MoonIcon)]
pub fn moon_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path> },
    )
}
