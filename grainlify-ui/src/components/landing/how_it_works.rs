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

use super::{body_text, glass_card, heading_text, SectionProps};

const STEPS: [(&str, &str); 3] = [
    (
        "Create your profile",
        "Link your GitHub account and tell us which languages and domains you enjoy working in.",
    ),
    (
        "Get matched",
        "Browse curated issues from projects that need exactly what you bring.",
    ),
    (
        "Contribute and earn",
        "Ship pull requests, get them reviewed, and receive your share of the project's grant.",
    ),
];

#[function_component(HowItWorks)]
pub fn how_it_works(props: &SectionProps) -> Html {
    let theme = props.theme;

    html! {
        <section id="how-it-works" class="relative py-32 px-6 text-center">
            <div class="max-w-6xl mx-auto">
                <h2 class={classes!("text-4xl", "font-bold", "mb-16", heading_text(theme))}>
                    {"How It Works"}
                </h2>
                <ol class="grid grid-cols-1 md:grid-cols-3 gap-6 text-left">
                    { for STEPS.iter().enumerate().map(|(i, (title, description))| html! {
                        <li class={classes!("how-it-works-step", glass_card(theme))}>
                            <span class="inline-flex w-10 h-10 mb-5 rounded-full items-center justify-center bg-gradient-to-br from-[#c9983a] to-[#a67c2e] text-white font-bold">
                                { (i + 1).to_string() }
                            </span>
                            <h3 class={classes!("text-xl", "font-semibold", "mb-3", heading_text(theme))}>
                                { *title }
                            </h3>
                            <p class={body_text(theme)}>{ *description }</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}
