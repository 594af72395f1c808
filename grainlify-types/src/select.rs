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

use serde::{Deserialize, Serialize};

/// One entry of a single-select dropdown.
///
/// Options have no identity beyond the pair; callers are responsible for
/// keeping `value` unique within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Index of the first option carrying `value`, if any.
    pub fn position_of(options: &[SelectOption], value: &str) -> Option<usize> {
        options.iter().position(|option| option.value == value)
    }

    /// Label of the first option carrying `value`, if any.
    pub fn label_for<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
        Self::position_of(options, value)
            .and_then(|index| options.get(index))
            .map(|option| option.label.as_str())
    }
}
