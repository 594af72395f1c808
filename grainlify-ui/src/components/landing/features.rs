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

use super::{body_text, glass_card, heading_text, icon_badge, SectionProps};
use crate::components::icons::{AwardIcon, CodeIcon, GitBranchIcon, ShieldIcon, UsersIcon, ZapIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Code,
    GitBranch,
    Award,
    Shield,
    Zap,
    Users,
}

impl FeatureIcon {
    fn render(self) -> Html {
        let class = classes!("w-7", "h-7", "text-[#c9983a]");
        match self {
            FeatureIcon::Code => html! { <CodeIcon {class} /> },
            FeatureIcon::GitBranch => html! { <GitBranchIcon {class} /> },
            FeatureIcon::Award => html! { <AwardIcon {class} /> },
            FeatureIcon::Shield => html! { <ShieldIcon {class} /> },
            FeatureIcon::Zap => html! { <ZapIcon {class} /> },
            FeatureIcon::Users => html! { <UsersIcon {class} /> },
        }
    }
}

pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::Code,
        title: "Smart Matching",
        description: "AI-powered algorithm matches contributors with projects that fit their skills and interests.",
    },
    Feature {
        icon: FeatureIcon::GitBranch,
        title: "Seamless Integration",
        description: "Connect your GitHub, track contributions, and manage everything in one place.",
    },
    Feature {
        icon: FeatureIcon::Award,
        title: "Rewards & Recognition",
        description: "Get compensated for your contributions with transparent grant distribution.",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Secure & Transparent",
        description: "Built on blockchain technology ensuring secure, transparent transactions.",
    },
    Feature {
        icon: FeatureIcon::Zap,
        title: "Real-time Updates",
        description: "Stay informed with instant notifications about project updates and opportunities.",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "Community Driven",
        description: "Join a thriving community of developers, maintainers, and open-source enthusiasts.",
    },
];

#[function_component(Features)]
pub fn features(props: &SectionProps) -> Html {
    let theme = props.theme;

    html! {
        <section id="features" class="relative py-32 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-4xl", "md:text-5xl", "font-bold", "mb-6", heading_text(theme))}>
                        {"Everything You Need to Succeed"}
                    </h2>
                    <p class={classes!("text-xl", "max-w-2xl", "mx-auto", body_text(theme))}>
                        {"Powerful features designed to streamline your open-source journey"}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class={classes!("feature-card", glass_card(theme))}>
                            { icon_badge(feature.icon.render()) }
                            <h3 class={classes!("text-xl", "font-semibold", "mb-3", heading_text(theme))}>
                                { feature.title }
                            </h3>
                            <p class={body_text(theme)}>{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
