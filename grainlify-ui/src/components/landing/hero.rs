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
pub struct HeroProps {
    #[prop_or_default]
    pub theme: Theme,
    pub on_get_started: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = props.theme;

    html! {
        <header id="hero" class="hero relative pt-32 pb-24 px-6 text-center">
            <div class="max-w-4xl mx-auto">
                <span class="inline-block mb-6 px-4 py-1.5 rounded-full border border-[#c9983a]/30 bg-[#c9983a]/10 text-[#c9983a] text-[13px] font-medium">
                    {"Open source, fairly funded"}
                </span>
                <h1 class={classes!("text-5xl", "md:text-6xl", "font-bold", "leading-tight", "mb-6", super::heading_text(theme))}>
                    {"Where Open-Source Contributors and Projects Grow Together"}
                </h1>
                <p class={classes!("text-xl", "max-w-2xl", "mx-auto", "mb-10", super::body_text(theme))}>
                    {"Find projects that match your skills, ship meaningful contributions, and get rewarded through transparent grants."}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        type="button"
                        class="hero-cta px-8 py-3.5 rounded-[14px] bg-gradient-to-br from-[#c9983a] to-[#a67c2e] text-white font-semibold text-[16px] shadow-[0_6px_20px_rgba(162,121,44,0.35)] hover:shadow-[0_8px_24px_rgba(162,121,44,0.5)] transition-all hover:scale-[1.02]"
                        onclick={props.on_get_started.reform(|_: MouseEvent| ())}
                    >
                        {"Get Started"}
                    </button>
                    <a
                        href="#features"
                        class={classes!(
                            "px-8", "py-3.5", "rounded-[14px]", "border", "backdrop-blur-[20px]", "font-semibold",
                            "text-[16px]", "transition-all", "hover:scale-[1.02]",
                            theme.pick("border-white/15 text-[#d4d4d4]", "border-white/25 text-[#7a6b5a]"),
                        )}
                    >
                        {"Learn More"}
                    </a>
                </div>
            </div>
        </header>
    }
}
