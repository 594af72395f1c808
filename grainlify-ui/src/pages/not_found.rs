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
use yew_router::prelude::*;

use crate::pages::landing::{DARK_GRADIENT, LIGHT_GRADIENT};
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or_default]
    pub theme: Theme,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let theme = props.theme;
    let navigator = use_navigator();

    let go_home = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Landing),
        None => log::warn!("No router available to navigate to {}", Route::Landing),
    });

    html! {
        <div class={classes!(
            "not-found", "min-h-screen", "flex", "flex-col", "items-center", "justify-center", "gap-6",
            theme.pick(DARK_GRADIENT, LIGHT_GRADIENT),
        )}>
            <h1 class={classes!("text-6xl", "font-bold", theme.pick("text-[#e8dfd0]", "text-[#2d2820]"))}>
                {"404"}
            </h1>
            <p class={theme.pick("text-[#b8a898]", "text-[#7a6b5a]")}>
                {"We couldn't find that page."}
            </p>
            <button
                type="button"
                class="back-home px-5 py-2.5 rounded-[12px] bg-gradient-to-br from-[#c9983a] to-[#a67c2e] text-white font-medium text-[14px] transition-all hover:scale-[1.02]"
                onclick={go_home}
            >
                {"Back to home"}
            </button>
        </div>
    }
}
