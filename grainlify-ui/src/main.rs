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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use grainlify_ui::app::{App, AppProps};
use grainlify_ui::components::config_error::{ConfigError as ConfigErrorScreen, ConfigErrorProps};
use grainlify_ui::config::app_config_or_default;

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    match app_config_or_default() {
        Ok(config) => {
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(e) => {
            yew::Renderer::<ConfigErrorScreen>::with_props(ConfigErrorProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}
