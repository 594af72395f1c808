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

//! Overlay dialog and the form helpers used inside it.
//!
//! [`Modal`] is fully controlled by its parent: `is_open` decides whether
//! anything is rendered and `on_close` reports dismiss gestures (backdrop
//! click or close button). While open, the page body carries the
//! `modal-open` marker class.

mod button;
mod footer;
mod input;
mod select;

pub use button::{ModalButton, ModalButtonProps};
pub use footer::{ModalFooter, ModalFooterProps};
pub use input::{ModalInput, ModalInputProps};
pub use select::{ModalSelect, ModalSelectProps, SELECT_PLACEHOLDER};

use grainlify_types::{ModalWidth, Theme};
use yew::prelude::*;

use crate::body_marker::{MarkerGuard, MODAL_OPEN_CLASS};
use crate::components::icons::XIcon;

/// Which parts of the dialog header are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// No title, no icon and no close button: the header row is omitted.
    Hidden,
    Visible {
        icon: bool,
        title: bool,
        close_button: bool,
    },
}

impl HeaderLayout {
    pub fn resolve(has_title: bool, has_icon: bool, close_button: bool) -> Self {
        if !(has_title || has_icon || close_button) {
            return HeaderLayout::Hidden;
        }
        HeaderLayout::Visible {
            icon: has_icon,
            title: has_title,
            close_button,
        }
    }

    /// Every renderable combination, `Hidden` first.
    pub fn all() -> impl Iterator<Item = HeaderLayout> {
        (0u8..8).map(|bits| Self::resolve(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    pub fn is_visible(self) -> bool {
        matches!(self, HeaderLayout::Visible { .. })
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub width: ModalWidth,
    #[prop_or(true)]
    pub show_close_button: bool,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        use_effect_with(props.is_open, |is_open| {
            let guard = (*is_open).then(|| MarkerGuard::acquire(MODAL_OPEN_CLASS));
            // Runs when `is_open` flips and on unmount.
            move || drop(guard)
        });
    }

    if !props.is_open {
        return html! {};
    }

    let theme = props.theme;
    let has_title = props.title.as_ref().is_some_and(|t| !t.is_empty());
    let layout = HeaderLayout::resolve(has_title, props.icon.is_some(), props.show_close_button);

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Modal dismissed from backdrop");
            on_close.emit(());
        })
    };

    let on_content_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let header = match layout {
        HeaderLayout::Hidden => html! {},
        HeaderLayout::Visible {
            icon,
            title,
            close_button,
        } => html! {
            <div class="modal-header flex items-start justify-between p-6 pb-4 flex-shrink-0 border-b border-white/10">
                <div class="flex items-center gap-3 flex-1">
                    if icon {
                        <div class={classes!(
                            "modal-icon", "w-10", "h-10", "rounded-[12px]", "flex", "items-center",
                            "justify-center", "shadow-lg", "border-2", "flex-shrink-0",
                            theme.pick(
                                "bg-gradient-to-br from-[#e8c571]/30 via-[#d4af37]/25 to-[#c9983a]/20 border-[#e8c571]/50",
                                "bg-gradient-to-br from-[#c9983a]/30 via-[#d4af37]/25 to-[#c9983a]/20 border-[#c9983a]/50",
                            ),
                        )}>
                            { props.icon.clone().unwrap_or_default() }
                        </div>
                    }
                    if title {
                        <h3 class={classes!(
                            "modal-title", "text-[18px]", "font-bold", "transition-colors",
                            theme.pick("text-[#e8dfd0]", "text-[#2d2820]"),
                        )}>
                            { props.title.clone().unwrap_or_default() }
                        </h3>
                    }
                </div>
                if close_button {
                    <button
                        type="button"
                        aria-label="Close"
                        class={classes!(
                            "modal-close", "p-2", "rounded-[10px]", "transition-all", "hover:scale-110", "flex-shrink-0",
                            theme.pick(
                                "hover:bg-white/[0.1] text-[#e8c571] hover:text-[#f5d98a]",
                                "hover:bg-black/[0.05] text-[#8b6f3a] hover:text-[#c9983a]",
                            ),
                        )}
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >
                        <XIcon class={classes!("w-4", "h-4")} />
                    </button>
                }
            </div>
        },
    };

    html! {
        <div
            class="modal-backdrop fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-[10000] animate-in fade-in duration-200"
            onclick={on_backdrop_click}
        >
            <div
                role="dialog"
                aria-modal="true"
                class={classes!(
                    "modal-content", "rounded-[24px]", "border-2", "shadow-[0_20px_60px_rgba(0,0,0,0.3)]",
                    props.width.class(),
                    "max-w-[90vw]", "max-h-[90vh]", "flex", "flex-col", "transition-all",
                    "animate-in", "zoom-in-95", "duration-200",
                    theme.pick("bg-[#3a3228] border-white/30", "bg-[#d4c5b0] border-white/40"),
                )}
                onclick={on_content_click}
            >
                { header }
                <div class="modal-body flex-1 overflow-y-auto p-6 scrollbar-custom">
                    { for props.children.iter() }
                </div>
                if let Some(footer) = props.footer.clone() {
                    <div class="modal-footer flex-shrink-0 border-t border-white/10 p-6 pt-4">
                        { footer }
                    </div>
                }
            </div>
        </div>
    }
}

/// Class shared by the field labels of [`ModalInput`] and [`ModalSelect`].
fn label_classes(theme: Theme) -> Classes {
    classes!(
        "block",
        "text-[13px]",
        "font-medium",
        "mb-2",
        "transition-colors",
        theme.pick("text-[#d4d4d4]", "text-[#7a6b5a]"),
    )
}

/// Label row with the optional required marker.
fn field_label(
    label: Option<&AttrValue>,
    required: bool,
    for_id: Option<&AttrValue>,
    theme: Theme,
) -> Html {
    match label {
        Some(label) => html! {
            <label class={label_classes(theme)} for={for_id.cloned()}>
                { label.clone() }
                if required {
                    <span class="required-mark text-[#c9983a] ml-1">{"*"}</span>
                }
            </label>
        },
        None => html! {},
    }
}
