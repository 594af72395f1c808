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

use super::{stroke_icon, IconProps};
use yew::prelude::*;

#[function_component(CodeIcon)]
pub fn code_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <polyline points="16 18 22 12 16 6"></polyline>
                <polyline points="8 6 2 12 8 18"></polyline>
            </>
        },
    )
}

#[function_component(GitBranchIcon)]
pub fn git_branch_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <line x1="6" x2="6" y1="3" y2="15"></line>
                <circle cx="18" cy="6" r="3"></circle>
                <circle cx="6" cy="18" r="3"></circle>
                <path d="M18 9a9 9 0 0 1-9 9"></path>
            </>
        },
    )
}

#[function_component(AwardIcon)]
pub fn award_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="8" r="6"></circle>
                <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"></path>
            </>
        },
    )
}

#[function_component(ShieldIcon)]
pub fn shield_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"></path>
        },
    )
}

#[function_component(ZapIcon)]
pub fn zap_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"></polygon> },
    )
}

#[function_component(UsersIcon)]
pub fn users_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"></path>
                <circle cx="9" cy="7" r="4"></circle>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"></path>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
            </>
        },
    )
}

#[function_component(TrendingUpIcon)]
pub fn trending_up_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <polyline points="22 7 13.5 15.5 8.5 10.5 2 17"></polyline>
                <polyline points="16 7 22 7 22 13"></polyline>
            </>
        },
    )
}

#[function_component(CheckCircleIcon)]
pub fn check_circle_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"></path>
                <polyline points="22 4 12 14.01 9 11.01"></polyline>
            </>
        },
    )
}

#[function_component(StarIcon)]
pub fn star_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"></polygon>
        },
    )
}

#[function_component(QuoteIcon)]
pub fn quote_icon(props: &IconProps) -> Html {
    stroke_icon(
        &props.class,
        html! {
            <>
                <path d="M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z"></path>
                <path d="M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"></path>
            </>
        },
    )
}
