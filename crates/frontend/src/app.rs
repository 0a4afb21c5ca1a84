use crate::domain::building::BuildingBasics;
use crate::domain::energy_consumption::EnergyConsumption;
use crate::domain::section::SectionTable;
use crate::shared::state::FormState;
use contracts::registry::SectionKind;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared form state to the whole app via context.
    let state = FormState::new();
    provide_context(state);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Block the native submission while any check fails; on success the
        // browser posts the flat field set to the server as-is.
        if !state.validate_for_submit() {
            ev.prevent_default();
        }
    };

    view! {
        <main class="page">
            <h1>"建築能效評估資料輸入"</h1>

            <form id="form-main" method="post" action="/app/" on:submit=on_submit>
                <BuildingBasics />

                <SectionTable kind=SectionKind::EnergySection show_area_total=true />
                <SectionTable kind=SectionKind::ExclusiveSection />

                <EnergyConsumption />

                <SectionTable kind=SectionKind::Elevator />
                <SectionTable kind=SectionKind::Escalator />
                <SectionTable kind=SectionKind::WaterTower />
                <SectionTable kind=SectionKind::Heater />
                <SectionTable kind=SectionKind::ParkingGarage />

                {move || {
                    state
                        .submit_error
                        .get()
                        .map(|message| view! { <div class="message--error">{message}</div> })
                }}

                <button class="button button--primary" type="submit">
                    "開始評估"
                </button>
            </form>
        </main>
    }
}
