/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Shown instead of the application when `window.__APP_CONFIG` is present
/// but cannot be parsed.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container min-h-screen flex flex-col items-center justify-center gap-4 p-6 text-center">
            <p class="error-message text-[#c9983a] font-semibold">{ props.message.clone() }</p>
            <p class="text-[#7a6b5a] text-[14px]">
                {"Check the deployment's __APP_CONFIG object and reload the page."}
            </p>
        </div>
    }
}
