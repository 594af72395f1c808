// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for grainlify-ui component tests.
//
// Provides mount/cleanup helpers, runtime-config injection and small
// event helpers so that individual test files stay focused on assertions
// rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use yew::platform::time::sleep;
use yew::Callback;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Yew flush renders and run effects. Two turns cover a state update
/// triggered from inside an effect or a router navigation.
pub async fn settle() {
    sleep(Duration::ZERO).await;
    sleep(Duration::ZERO).await;
}

pub fn body_has_class(class: &str) -> bool {
    gloo_utils::document()
        .body()
        .unwrap()
        .class_list()
        .contains(class)
}

/// Point the browser at `path` so that `BrowserRouter` picks the route.
pub fn set_url(path: &str) {
    let _ = gloo_utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
}

// ---------------------------------------------------------------------------
// Event helpers
// ---------------------------------------------------------------------------

/// Query `selector` under `root` and click it.
pub fn click(root: &web_sys::Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

fn bubbling_event(kind: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    web_sys::Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Set an `<input>`'s value and fire `input`, as a keystroke would.
pub fn type_into_input(input: &web_sys::HtmlInputElement, value: &str) {
    input.set_value(value);
    input.dispatch_event(&bubbling_event("input")).unwrap();
}

pub fn type_into_textarea(area: &web_sys::HtmlTextAreaElement, value: &str) {
    area.set_value(value);
    area.dispatch_event(&bubbling_event("input")).unwrap();
}

/// Pick `value` in a `<select>` and fire `change`.
pub fn choose(select: &web_sys::HtmlSelectElement, value: &str) {
    select.set_value(value);
    select.dispatch_event(&bubbling_event("change")).unwrap();
}

/// Text of the currently selected `<option>`.
pub fn selected_text(select: &web_sys::HtmlSelectElement) -> String {
    let index = select.selected_index();
    assert!(index >= 0, "select has no selected option");
    select
        .options()
        .item(index as u32)
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Callback recording
// ---------------------------------------------------------------------------

/// A callback that records every value it is emitted with.
pub fn recorder<T: 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    (Callback::from(move |value: T| sink.borrow_mut().push(value)), calls)
}

// ---------------------------------------------------------------------------
// Runtime config injection (integration tests)
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with a dark default theme, theme
/// persistence disabled and fixed landing statistics.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("defaultTheme", &"dark".into());
    set("brandName", &"Grainlify".into());
    set("persistTheme", &"false".into());

    let stats = js_sys::Object::new();
    js_sys::Reflect::set(&stats, &"activeProjects".into(), &wasm_bindgen::JsValue::from(42))
        .unwrap();
    js_sys::Reflect::set(&stats, &"contributors".into(), &wasm_bindgen::JsValue::from(1200))
        .unwrap();
    set("landingStats", &stats);

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Inject a `window.__APP_CONFIG` that cannot be parsed.
pub fn inject_invalid_app_config() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"defaultTheme".into(), &"sepia".into()).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
