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
use crate::components::icons::{QuoteIcon, StarIcon};

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I found a project that needed exactly my Rust skills within a day, and my first grant landed a week later.",
        author: "Amara O.",
        role: "Contributor",
    },
    Testimonial {
        quote: "We finally have a steady stream of reviewers and contributors who stick around.",
        author: "Lukas W.",
        role: "Maintainer",
    },
    Testimonial {
        quote: "Funding open source used to be guesswork. Now we can see where every dollar goes.",
        author: "Priya S.",
        role: "Sponsor",
    },
];

const RATING: usize = 5;

#[function_component(Testimonials)]
pub fn testimonials(props: &SectionProps) -> Html {
    let theme = props.theme;

    html! {
        <section id="testimonials" class="relative py-32 px-6 text-center">
            <div class="max-w-7xl mx-auto">
                <h2 class={classes!("text-4xl", "font-bold", "mb-16", heading_text(theme))}>
                    {"What Builders Say"}
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-left">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <figure class={classes!("testimonial", glass_card(theme))}>
                            <QuoteIcon class={classes!("w-8", "h-8", "mb-4", "text-[#c9983a]/60")} />
                            <div class="flex gap-1 mb-4">
                                { for (0..RATING).map(|_| html! {
                                    <StarIcon class={classes!("w-4", "h-4", "text-[#d4af37]", "fill-current")} />
                                }) }
                            </div>
                            <blockquote class={classes!("mb-6", body_text(theme))}>{ t.quote }</blockquote>
                            <figcaption>
                                <span class={classes!("font-semibold", heading_text(theme))}>{ t.author }</span>
                                <span class={classes!("ml-2", "text-[13px]", body_text(theme))}>{ t.role }</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}
