//! Stateless Yew view components for the bill form.
//!
//! Each component renders purely from props and reports interaction
//! through `Callback` props, keeping all state in `BillFormState`.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{BILL_PLACEHOLDER, HEADER_LABEL, SPLIT_LABEL};

/// Rounded header card showing the per-person total.
#[derive(Properties, PartialEq)]
pub struct TotalPerPersonProps {
    /// Pre-formatted currency string, e.g. "$30.00".
    pub formatted_total: String,
}

#[function_component(TotalPerPersonCard)]
pub fn total_per_person_card(props: &TotalPerPersonProps) -> Html {
    html! {
        <div class="total-card">
            <p class="total-card-label">{ HEADER_LABEL }</p>
            <p class="total-card-amount">{ &props.formatted_total }</p>
        </div>
    }
}

/// Bill amount text field. Reports every keystroke; Enter drops focus,
/// which dismisses the soft keyboard on mobile browsers.
#[derive(Properties, PartialEq)]
pub struct BillInputProps {
    pub value: String,
    pub oninput: Callback<InputEvent>,
}

#[function_component(BillInputField)]
pub fn bill_input_field(props: &BillInputProps) -> Html {
    let onkeydown = Callback::from(|e: KeyboardEvent| {
        if e.key() == "Enter" {
            let input: HtmlInputElement = e.target_unchecked_into();
            let _ = input.blur();
        }
    });

    html! {
        <div class="form-group">
            <input
                type="text"
                inputmode="decimal"
                class="bill-input"
                placeholder={BILL_PLACEHOLDER}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                {onkeydown}
            />
        </div>
    }
}

/// Small circular button used by the split stepper.
#[derive(Properties, PartialEq)]
pub struct RoundedIconButtonProps {
    pub icon: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(RoundedIconButton)]
pub fn rounded_icon_button(props: &RoundedIconButtonProps) -> Html {
    html! {
        <button class="round-icon-button" onclick={props.onclick.clone()}>
            { &props.icon }
        </button>
    }
}

/// "Split" row: label on the left, stepper with the current count on the
/// right.
#[derive(Properties, PartialEq)]
pub struct SplitStepperProps {
    pub split_count: u32,
    pub on_decrement: Callback<MouseEvent>,
    pub on_increment: Callback<MouseEvent>,
}

#[function_component(SplitStepperRow)]
pub fn split_stepper_row(props: &SplitStepperProps) -> Html {
    html! {
        <div class="form-row">
            <span class="form-row-label">{ SPLIT_LABEL }</span>
            <div class="split-stepper">
                <RoundedIconButton icon="\u{2212}" onclick={props.on_decrement.clone()} />
                <span class="split-count">{ props.split_count }</span>
                <RoundedIconButton icon="+" onclick={props.on_increment.clone()} />
            </div>
        </div>
    }
}

/// Tip percent readout above the quantized slider.
#[derive(Properties, PartialEq)]
pub struct TipSliderProps {
    pub tip_percent: u32,
    /// Which of the `steps + 1` stops the slider currently sits on.
    pub stop_idx: u32,
    pub steps: u32,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TipSliderBlock)]
pub fn tip_slider_block(props: &TipSliderProps) -> Html {
    html! {
        <div class="tip-slider-block">
            <span class="tip-percent">{ format!("{} %", props.tip_percent) }</span>
            <input
                type="range"
                class="tip-slider"
                min="0"
                max={props.steps.to_string()}
                step="1"
                value={props.stop_idx.to_string()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}
