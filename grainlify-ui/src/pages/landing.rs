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

//! The marketing landing page.

use grainlify_types::Theme;
use yew::prelude::*;

use crate::components::landing::{
    Features, Footer, Hero, HowItWorks, Navbar, Testimonials, WhyChooseUs,
};
use crate::config::DEFAULT_BRAND_NAME;
use crate::context::StatsHandle;

pub const DARK_GRADIENT: &str =
    "bg-gradient-to-br from-[#1a1512] via-[#231c17] to-[#2d241d]";
pub const LIGHT_GRADIENT: &str =
    "bg-gradient-to-br from-[#e8dfd0] via-[#d4c5b0] to-[#c9b89a]";

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    #[prop_or_default]
    pub theme: Theme,
    pub stats: StatsHandle,
    #[prop_or(AttrValue::Static(DEFAULT_BRAND_NAME))]
    pub brand: AttrValue,
    #[prop_or_default]
    pub on_toggle_theme: Callback<()>,
    #[prop_or_default]
    pub on_get_started: Callback<()>,
}

/// Navbar, hero and the five content sections inside a theme-tinted,
/// full-height container.
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let theme = props.theme;

    html! {
        <div class={classes!(
            "landing-page", "min-h-screen", "transition-colors",
            theme.pick(DARK_GRADIENT, LIGHT_GRADIENT),
        )}>
            <Navbar
                {theme}
                brand={props.brand.clone()}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_get_started={props.on_get_started.clone()}
            />
            <Hero {theme} on_get_started={props.on_get_started.clone()} />
            <Features {theme} />
            <HowItWorks {theme} />
            <WhyChooseUs {theme} brand={props.brand.clone()} stats={props.stats.clone()} />
            <Testimonials {theme} />
            <Footer {theme} brand={props.brand.clone()} />
        </div>
    }
}
