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

//! Shared value types for the Grainlify web front-end.
//!
//! This crate holds the plain data the UI components are configured with.
//! It does not depend on Yew or `web-sys`, so the class-selection and
//! option-lookup rules can be unit tested natively.

pub mod modal;
pub mod select;
pub mod stats;
pub mod theme;

pub use modal::{ButtonType, ButtonVariant, ModalWidth};
pub use select::SelectOption;
pub use stats::{LandingStats, LandingStatsDisplay};
pub use theme::{ParseThemeError, Theme};

/// Interpret an optional config flag. Only `"true"` and `"1"` (any case) are
/// truthy.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
