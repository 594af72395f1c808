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

//! Sections of the marketing landing page.
//!
//! Every section is a pure render of static copy plus theme-dependent
//! styling; `WhyChooseUs` additionally shows figures from the statistics
//! provider it is handed.

pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod testimonials;
pub mod why_choose_us;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use testimonials::Testimonials;
pub use why_choose_us::WhyChooseUs;

use grainlify_types::Theme;
use yew::prelude::*;

/// Props shared by the sections that only need the theme.
#[derive(Properties, PartialEq, Clone)]
pub struct SectionProps {
    #[prop_or_default]
    pub theme: Theme,
}

pub(crate) fn heading_text(theme: Theme) -> &'static str {
    theme.pick("text-[#e8dfd0]", "text-[#2d2820]")
}

pub(crate) fn body_text(theme: Theme) -> &'static str {
    theme.pick("text-[#b8a898]", "text-[#7a6b5a]")
}

pub(crate) fn glass_card(theme: Theme) -> Classes {
    classes!(
        "backdrop-blur-[40px]",
        "border",
        "rounded-[24px]",
        "p-8",
        theme.pick("bg-white/[0.08] border-white/15", "bg-white/[0.15] border-white/25"),
    )
}

/// Gold-tinted square that frames a section icon.
pub(crate) fn icon_badge(icon: Html) -> Html {
    html! {
        <div class="w-14 h-14 rounded-[14px] bg-gradient-to-br from-[#c9983a]/25 to-[#d4af37]/15 border border-[#c9983a]/30 flex items-center justify-center mb-6">
            { icon }
        </div>
    }
}
