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

//! Presets for dialogs and their buttons.

use serde::{Deserialize, Serialize};

/// Fixed dialog widths. The rendered dialog is additionally clamped to
/// `90vw` x `90vh`, so a preset never overflows the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalWidth {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalWidth {
    pub const ALL: [ModalWidth; 4] = [
        ModalWidth::Sm,
        ModalWidth::Md,
        ModalWidth::Lg,
        ModalWidth::Xl,
    ];

    pub fn pixels(self) -> u32 {
        match self {
            ModalWidth::Sm => 400,
            ModalWidth::Md => 500,
            ModalWidth::Lg => 550,
            ModalWidth::Xl => 650,
        }
    }

    /// Tailwind arbitrary-width class for this preset.
    pub fn class(self) -> &'static str {
        match self {
            ModalWidth::Sm => "w-[400px]",
            ModalWidth::Md => "w-[500px]",
            ModalWidth::Lg => "w-[550px]",
            ModalWidth::Xl => "w-[650px]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
}

/// HTML `type` attribute of a dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}
