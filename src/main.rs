//! Main module for the tip calculator application using Yew.
//! Wires DOM events to the bill form state and renders its snapshot.

use tip_split::form::{BillFormState, FormAction};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod utils;

use components::{BillInputField, SplitStepperRow, TipSliderBlock, TotalPerPersonCard};
use config::{APP_TITLE, SLIDER_STEPS, SPLIT_MAX, SPLIT_MIN, TIP_LABEL};
use utils::{position_from_stop, stop_from_position};

/// Primary application component. All form state lives in one reducer;
/// every callback dispatches a single `FormAction` and the component
/// re-renders from the resulting snapshot.
#[function_component(App)]
fn app() -> Html {
    let form = use_reducer(|| BillFormState::with_limits(SPLIT_MIN, SPLIT_MAX, SLIDER_STEPS));
    let snapshot = form.snapshot();

    let on_bill_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::BillTextChanged(input.value()));
        })
    };

    let on_split_decrement = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::SplitDecrement))
    };

    let on_split_increment = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::SplitIncrement))
    };

    // The range input reports a discrete stop index; the form works in
    // positions, so map before dispatching.
    let on_slider_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(idx) = input.value().parse::<u32>() {
                form.dispatch(FormAction::TipSliderChanged(position_from_stop(
                    idx,
                    SLIDER_STEPS,
                )));
            }
        })
    };

    let stop_idx = stop_from_position(form.slider_position(), SLIDER_STEPS);

    html! {
        <div class="container">
            <h1>{ APP_TITLE }</h1>

            <TotalPerPersonCard formatted_total={snapshot.per_person_display()} />

            <div class="bill-form">
                <BillInputField value={snapshot.bill_text.clone()} oninput={on_bill_input} />

                if snapshot.is_valid {
                    <div class="form-details">
                        <SplitStepperRow
                            split_count={snapshot.split_count}
                            on_decrement={on_split_decrement}
                            on_increment={on_split_increment}
                        />

                        <div class="form-row">
                            <span class="form-row-label">{ TIP_LABEL }</span>
                            <span class="tip-amount">{ snapshot.tip_amount_display() }</span>
                        </div>

                        <TipSliderBlock
                            tip_percent={snapshot.tip_percent}
                            {stop_idx}
                            steps={SLIDER_STEPS}
                            oninput={on_slider_input}
                        />
                    </div>
                }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
