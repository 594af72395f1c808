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

//! Inline stroke icons (24x24 viewbox, `currentColor`).

use yew::prelude::*;

mod feature;
mod ui;

pub use feature::{
    AwardIcon, CheckCircleIcon, CodeIcon, GitBranchIcon, QuoteIcon, ShieldIcon, StarIcon,
    TrendingUpIcon, UsersIcon, ZapIcon,
};
pub use ui::{ChevronDownIcon, MoonIcon, SunIcon, XIcon};

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

fn stroke_icon(class: &Classes, paths: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={class.clone()}
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths }
        </svg>
    }
}
