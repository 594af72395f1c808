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

use crate::components::icons::{MoonIcon, SunIcon};

/// In-page anchors, in page order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "#features"),
    ("How It Works", "#how-it-works"),
    ("Why Us", "#why-choose-us"),
    ("Testimonials", "#testimonials"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub theme: Theme,
    pub brand: AttrValue,
    pub on_toggle_theme: Callback<()>,
    pub on_get_started: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let theme = props.theme;
    let toggle_label = theme.pick("Switch to light mode", "Switch to dark mode");

    html! {
        <nav class={classes!(
            "navbar", "sticky", "top-0", "z-50", "backdrop-blur-[30px]", "border-b",
            theme.pick("bg-[#1a1512]/70 border-white/10", "bg-[#e8dfd0]/70 border-white/30"),
        )}>
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="#" class={classes!("navbar-brand", "text-2xl", "font-bold", super::heading_text(theme))}>
                    { props.brand.clone() }
                </a>
                <div class="hidden md:flex items-center gap-8">
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a
                            href={*href}
                            class={classes!("text-[15px]", "transition-colors", "hover:text-[#c9983a]", super::body_text(theme))}
                        >
                            { *label }
                        </a>
                    }) }
                </div>
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class={classes!(
                            "theme-toggle", "p-2", "rounded-[10px]", "transition-all", "hover:scale-110",
                            theme.pick("text-[#e8c571] hover:bg-white/[0.1]", "text-[#8b6f3a] hover:bg-black/[0.05]"),
                        )}
                        aria-label={toggle_label}
                        title={toggle_label}
                        onclick={props.on_toggle_theme.reform(|_: MouseEvent| ())}
                    >
                        if theme.is_dark() {
                            <SunIcon class={classes!("w-5", "h-5")} />
                        } else {
                            <MoonIcon class={classes!("w-5", "h-5")} />
                        }
                    </button>
                    <button
                        type="button"
                        class="navbar-cta px-5 py-2.5 rounded-[12px] bg-gradient-to-br from-[#c9983a] to-[#a67c2e] text-white font-medium text-[14px] shadow-[0_6px_20px_rgba(162,121,44,0.35)] transition-all hover:scale-[1.02]"
                        onclick={props.on_get_started.reform(|_: MouseEvent| ())}
                    >
                        {"Get Started"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
