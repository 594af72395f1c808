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

use super::{body_text, glass_card, heading_text, icon_badge};
use crate::components::icons::{CheckCircleIcon, TrendingUpIcon};
use crate::context::StatsHandle;

const REASONS: [&str; 4] = [
    "Every grant payout is traceable from sponsor to contributor.",
    "Maintainers keep full control over what gets merged.",
    "Matching improves with every contribution you make.",
    "No fees for contributors, ever.",
];

#[derive(Properties, PartialEq)]
pub struct WhyChooseUsProps {
    #[prop_or_default]
    pub theme: Theme,
    pub brand: AttrValue,
    pub stats: StatsHandle,
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us(props: &WhyChooseUsProps) -> Html {
    let theme = props.theme;
    let display = props.stats.display();

    html! {
        <section id="why-choose-us" class="relative py-32 px-6">
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class={classes!("text-4xl", "font-bold", "mb-8", heading_text(theme))}>
                        { format!("Why Choose {}?", props.brand) }
                    </h2>
                    <ul class="space-y-4">
                        { for REASONS.iter().map(|reason| html! {
                            <li class={classes!("flex", "items-start", "gap-3", body_text(theme))}>
                                <CheckCircleIcon class={classes!("w-5", "h-5", "mt-0.5", "flex-shrink-0", "text-[#c9983a]")} />
                                <span>{ *reason }</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class={classes!("landing-stats", glass_card(theme))}>
                    { icon_badge(html! { <TrendingUpIcon class={classes!("w-7", "h-7", "text-[#c9983a]")} /> }) }
                    <p class={classes!("active-projects", "text-2xl", "font-semibold", "mb-4", heading_text(theme))}>
                        { format!("Active Projects: {}", display.active_projects) }
                    </p>
                    <p class={body_text(theme)}>
                        { format!("Contributors: {}", display.contributors) }
                    </p>
                    <p class={body_text(theme)}>
                        { format!("Grants Distributed: {}", display.grants_distributed) }
                    </p>
                </div>
            </div>
        </section>
    }
}
