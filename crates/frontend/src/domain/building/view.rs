use super::view_model::{building_type_options, BuildingBasicsViewModel};
use leptos::prelude::*;

/// Building-basics block: name, type, and the apartment-only counts.
#[component]
pub fn BuildingBasics() -> impl IntoView {
    let vm = BuildingBasicsViewModel::new();

    view! {
        <fieldset class="form-section" id="building-basics">
            <legend>"建築物基本資料"</legend>

            <div class="form__group">
                <label class="form__label" for="building_name">"建築物名稱"</label>
                <input
                    id="building_name"
                    name="building_name"
                    class="form__input"
                    type="text"
                    prop:value=move || vm.form.get().building_name
                    on:input=move |ev| {
                        vm.form.update(|f| f.building_name = event_target_value(&ev));
                    }
                    placeholder="建築物名稱"
                    required
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="building_type">"建築物類型"</label>
                <select
                    id="building_type"
                    name="building_type"
                    class="form__select"
                    aria-label="building_type"
                    on:change=move |ev| {
                        vm.set_building_type(&event_target_value(&ev));
                    }
                >
                    <option disabled selected=move || vm.form.get().building_type.is_empty() value="">
                        "選擇建築物類型"
                    </option>
                    <For
                        each=building_type_options
                        key=|(value, _)| value.clone()
                        children=move |(value, label)| {
                            let value_clone = value.clone();
                            let is_selected =
                                move || vm.form.get().building_type == value_clone;
                            view! {
                                <option value=value selected=is_selected>
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            // Apartment-only counts stay disabled (and blank) for every
            // other building type.
            <div class="form__group">
                <label class="form__label" for="n_suite">"套房戶數"</label>
                <input
                    id="n_suite"
                    name="n_suite"
                    class="form__input"
                    type="number"
                    prop:value=move || vm.form.get().n_suite
                    on:input=move |ev| {
                        vm.form.update(|f| f.n_suite = event_target_value(&ev));
                    }
                    placeholder="戶"
                    disabled=move || !vm.is_apartment()
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="n_household_big">"大戶型戶數"</label>
                <input
                    id="n_household_big"
                    name="n_household_big"
                    class="form__input"
                    type="number"
                    prop:value=move || vm.form.get().n_household_big
                    on:input=move |ev| {
                        vm.form.update(|f| f.n_household_big = event_target_value(&ev));
                    }
                    placeholder="戶"
                    disabled=move || !vm.is_apartment()
                />
            </div>
        </fieldset>
    }
}
