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

//! "Get Started" dialog opened from the landing page CTAs.

use grainlify_types::{ButtonType, ButtonVariant, ModalWidth, SelectOption, Theme};
use yew::prelude::*;

use crate::components::icons::UsersIcon;
use crate::components::modal::{Modal, ModalButton, ModalFooter, ModalInput, ModalSelect};
use crate::config::DEFAULT_BRAND_NAME;

/// What the visitor filled in. Emitted to the parent on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetStartedDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub note: String,
}

pub fn role_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("contributor", "Contributor"),
        SelectOption::new("maintainer", "Maintainer"),
        SelectOption::new("sponsor", "Sponsor"),
    ]
}

#[derive(Properties, PartialEq)]
pub struct GetStartedModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<GetStartedDraft>,
    #[prop_or(AttrValue::Static(DEFAULT_BRAND_NAME))]
    pub brand: AttrValue,
    #[prop_or_default]
    pub theme: Theme,
}

fn field_setter(
    draft: &UseStateHandle<GetStartedDraft>,
    apply: fn(&mut GetStartedDraft, String),
) -> Callback<String> {
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

#[function_component(GetStartedModal)]
pub fn get_started_modal(props: &GetStartedModalProps) -> Html {
    let draft = use_state(GetStartedDraft::default);
    let theme = props.theme;

    let on_submit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*draft).clone());
            draft.set(GetStartedDraft::default());
            on_close.emit(());
        })
    };

    html! {
        <Modal
            is_open={props.is_open}
            on_close={props.on_close.clone()}
            title={AttrValue::from(format!("Join {}", props.brand))}
            icon={html! { <UsersIcon class={classes!("w-5", "h-5", "text-[#c9983a]")} /> }}
            width={ModalWidth::Lg}
            {theme}
        >
            <form class="get-started-form space-y-4" onsubmit={on_submit}>
                <ModalInput
                    id="get-started-name"
                    label="Name"
                    value={draft.name.clone()}
                    on_change={field_setter(&draft, |d, v| d.name = v)}
                    placeholder="Ada Lovelace"
                    required={true}
                    {theme}
                />
                <ModalInput
                    id="get-started-email"
                    label="Email"
                    input_type="email"
                    value={draft.email.clone()}
                    on_change={field_setter(&draft, |d, v| d.email = v)}
                    placeholder="you@example.com"
                    required={true}
                    {theme}
                />
                <ModalSelect
                    id="get-started-role"
                    label="I am joining as a"
                    value={draft.role.clone()}
                    on_change={field_setter(&draft, |d, v| d.role = v)}
                    options={role_options()}
                    required={true}
                    {theme}
                />
                <ModalInput
                    id="get-started-note"
                    label="Anything we should know?"
                    value={draft.note.clone()}
                    on_change={field_setter(&draft, |d, v| d.note = v)}
                    rows={Some(3)}
                    {theme}
                />
                <ModalFooter>
                    <ModalButton on_click={props.on_close.reform(|_: MouseEvent| ())} {theme}>
                        {"Cancel"}
                    </ModalButton>
                    <ModalButton button_type={ButtonType::Submit} variant={ButtonVariant::Primary} {theme}>
                        {"Request Access"}
                    </ModalButton>
                </ModalFooter>
            </form>
        </Modal>
    }
}
