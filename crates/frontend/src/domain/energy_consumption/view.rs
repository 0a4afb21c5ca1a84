use super::view_model::{ec_mode_options, ec_slots};
use crate::shared::components::ui::Select;
use crate::shared::state::FormState;
use contracts::validation::EcInputMode;
use leptos::prelude::*;

/// Historical energy-consumption block: the input-mode select, the value
/// inputs of the current mode, and the inline plausibility messages.
#[component]
pub fn EnergyConsumption() -> impl IntoView {
    let state = expect_context::<FormState>();

    let mode_value = Signal::derive(move || {
        state
            .ec_mode
            .get()
            .map(|mode| mode.as_str().to_string())
            .unwrap_or_default()
    });

    view! {
        <fieldset class="form-section" id="building-ec-block">
            <legend>"建物歷史能耗"</legend>

            <Select
                label="能耗輸入方式".to_string()
                name="ec_input_type"
                value=mode_value
                options=ec_mode_options()
                placeholder="選擇能耗輸入方式".to_string()
                required=true
                on_change=Callback::new(move |choice: String| {
                    if let Some(mode) = EcInputMode::from_str(&choice) {
                        state.set_ec_mode(mode);
                    }
                })
            />

            <div id="building-ec">
                {move || {
                    state
                        .ec_mode
                        .get()
                        .map(|mode| view! { <EcValueInputs mode /> })
                }}
            </div>

            <div id="building-ec-message" class="form-section__messages">
                <For
                    each=move || state.ec_messages.get()
                    key=|message| message.clone()
                    children=move |message| view! { <div class="message--error">{message}</div> }
                />
            </div>
        </fieldset>
    }
}

/// Value inputs of one EC mode. Every change re-runs the ratio checks.
#[component]
fn EcValueInputs(mode: EcInputMode) -> impl IntoView {
    let state = expect_context::<FormState>();

    view! {
        <div class="ec-values">
            <For
                each=move || ec_slots(mode)
                key=|slot| slot.slot
                children=move |slot| {
                    let slot_index = slot.slot;
                    let value = Signal::derive(move || {
                        state
                            .ec_values
                            .with(|values| values.get(slot_index).cloned().unwrap_or_default())
                    });
                    view! {
                        <input
                            class="form__input form__input--ec"
                            type="text"
                            name=slot.name
                            placeholder=slot.placeholder
                            prop:value=move || value.get()
                            required
                            on:change=move |ev| {
                                state.set_ec_value(slot_index, &event_target_value(&ev));
                            }
                        />
                    }
                }
            />
        </div>
    }
}
