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

//! Application root.
//!
//! Owns the theme state and the statistics provider and hands both down as
//! props; nothing below this component reads global state.

use grainlify_types::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::get_started_modal::{GetStartedDraft, GetStartedModal};
use crate::config::RuntimeConfig;
use crate::context::{initial_theme, save_theme_to_storage, StaticStats, StatsHandle};
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFound;
use crate::routing::Route;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: RuntimeConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = {
        let config = props.config.clone();
        use_state(move || initial_theme(&config))
    };
    let stats = {
        let seed = props.config.landing_stats;
        use_memo((), move |_| StatsHandle::new(StaticStats::new(seed)))
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        let persist = props.config.persist_theme();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            log::info!("Theme switched to {next}");
            if persist {
                save_theme_to_storage(next);
            }
            theme.set(next);
        })
    };

    let render = {
        let theme = *theme;
        let stats = (*stats).clone();
        let brand = AttrValue::from(props.config.brand_name.clone());
        move |route: Route| match route {
            Route::Landing => html! {
                <LandingRoute
                    {theme}
                    stats={stats.clone()}
                    brand={brand.clone()}
                    on_toggle_theme={on_toggle_theme.clone()}
                />
            },
            Route::NotFound => html! { <NotFound {theme} /> },
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingRouteProps {
    pub theme: Theme,
    pub stats: StatsHandle,
    pub brand: AttrValue,
    pub on_toggle_theme: Callback<()>,
}

/// Landing page plus the "Get Started" dialog it opens.
#[function_component(LandingRoute)]
pub fn landing_route(props: &LandingRouteProps) -> Html {
    let get_started_open = use_state(|| false);

    let open = {
        let get_started_open = get_started_open.clone();
        Callback::from(move |_: ()| {
            log::debug!("Opening get-started dialog");
            get_started_open.set(true);
        })
    };
    let close = {
        let get_started_open = get_started_open.clone();
        Callback::from(move |_: ()| get_started_open.set(false))
    };
    let on_submit = Callback::from(|draft: GetStartedDraft| {
        log::info!(
            "Get-started request from {} <{}> as {}",
            draft.name,
            draft.email,
            draft.role
        );
    });

    html! {
        <>
            <LandingPage
                theme={props.theme}
                stats={props.stats.clone()}
                brand={props.brand.clone()}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_get_started={open}
            />
            <GetStartedModal
                is_open={*get_started_open}
                on_close={close}
                {on_submit}
                brand={props.brand.clone()}
                theme={props.theme}
            />
        </>
    }
}
