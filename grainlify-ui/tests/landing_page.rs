// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Rendering tests for the LandingPage.
//
// The page is rendered with an explicit theme and statistics provider, so
// no router, storage or runtime config is involved.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use grainlify_types::Theme;
use support::{cleanup, click, create_mount_point, recorder, settle};
use wasm_bindgen_test::*;
use yew::prelude::*;

use grainlify_ui::context::{StaticStats, StatsHandle};
use grainlify_ui::pages::landing::LandingPage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct Props {
    theme: Theme,
    stats: StatsHandle,
    #[prop_or_default]
    on_toggle_theme: Callback<()>,
    #[prop_or_default]
    on_get_started: Callback<()>,
}

#[function_component(Wrapper)]
fn wrapper(props: &Props) -> Html {
    html! {
        <LandingPage
            theme={props.theme}
            stats={props.stats.clone()}
            on_toggle_theme={props.on_toggle_theme.clone()}
            on_get_started={props.on_get_started.clone()}
        />
    }
}

fn props(theme: Theme) -> Props {
    Props {
        theme,
        stats: StatsHandle::new(StaticStats::with_active_projects(42)),
        on_toggle_theme: Callback::noop(),
        on_get_started: Callback::noop(),
    }
}

fn root_class(mount: &web_sys::Element) -> String {
    mount
        .query_selector(".landing-page")
        .unwrap()
        .expect("landing page root should render")
        .class_name()
}

#[wasm_bindgen_test]
async fn dark_theme_uses_dark_gradient() {
    let mount = create_mount_point();
    let handle =
        yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props(Theme::Dark)).render();
    settle().await;

    let class = root_class(&mount);
    assert!(class.contains("min-h-screen"));
    assert!(class.contains("from-[#1a1512]"), "dark gradient missing: {class}");
    assert!(!class.contains("from-[#e8dfd0]"));

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn light_theme_uses_light_gradient() {
    let mount = create_mount_point();
    let handle =
        yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props(Theme::Light)).render();
    settle().await;

    let class = root_class(&mount);
    assert!(class.contains("from-[#e8dfd0]"), "light gradient missing: {class}");
    assert!(!class.contains("from-[#1a1512]"));

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn shows_active_project_count_from_provider() {
    let mount = create_mount_point();
    let handle =
        yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props(Theme::Dark)).render();
    settle().await;

    let stat = mount
        .query_selector(".landing-stats .active-projects")
        .unwrap()
        .expect("stats panel should render");
    assert_eq!(stat.text_content().unwrap_or_default(), "Active Projects: 42");

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn sections_render_in_page_order() {
    let mount = create_mount_point();
    let handle =
        yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props(Theme::Light)).render();
    settle().await;

    let root = mount.query_selector(".landing-page").unwrap().unwrap();
    let children = root.children();
    let landmarks: Vec<String> = (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|el| {
            let id = el.id();
            if id.is_empty() {
                el.tag_name().to_lowercase()
            } else {
                id
            }
        })
        .collect();

    assert_eq!(
        landmarks,
        vec![
            "nav",
            "hero",
            "features",
            "how-it-works",
            "why-choose-us",
            "testimonials",
            "footer",
        ]
    );

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn content_sections_carry_their_copy() {
    let mount = create_mount_point();
    let handle =
        yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), props(Theme::Dark)).render();
    settle().await;

    assert_eq!(mount.query_selector_all(".feature-card").unwrap().length(), 6);
    assert_eq!(
        mount.query_selector_all(".how-it-works-step").unwrap().length(),
        3
    );
    assert_eq!(mount.query_selector_all(".testimonial").unwrap().length(), 3);

    let brand = mount.query_selector(".navbar-brand").unwrap().unwrap();
    assert_eq!(brand.text_content().unwrap_or_default(), "Grainlify");

    let footer = mount.query_selector(".landing-footer").unwrap().unwrap();
    assert!(footer
        .text_content()
        .unwrap_or_default()
        .contains("2024 Grainlify. All rights reserved."));

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn theme_toggle_reports_to_parent() {
    let (on_toggle_theme, calls) = recorder::<()>();
    let mount = create_mount_point();
    let handle = yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        Props {
            on_toggle_theme,
            ..props(Theme::Dark)
        },
    )
    .render();
    settle().await;

    click(&mount, ".theme-toggle");
    settle().await;

    assert_eq!(calls.borrow().len(), 1);
    // The page does not own the theme; it stays dark until the parent
    // passes a new one.
    assert!(root_class(&mount).contains("from-[#1a1512]"));

    handle.destroy();
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn both_calls_to_action_report_get_started() {
    let (on_get_started, calls) = recorder::<()>();
    let mount = create_mount_point();
    let handle = yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        Props {
            on_get_started,
            ..props(Theme::Light)
        },
    )
    .render();
    settle().await;

    click(&mount, ".navbar-cta");
    click(&mount, ".hero-cta");
    settle().await;

    assert_eq!(calls.borrow().len(), 2);

    handle.destroy();
    cleanup(&mount);
}
