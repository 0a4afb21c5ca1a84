use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Multi-choice select. Reports the full current selection on every change.
#[component]
pub fn MultiSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected values
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Change event handler, called with the full selection
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Form field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Number of visible rows
    #[prop(optional)]
    size: Option<u32>,
) -> impl IntoView {
    let field_id = name.clone();
    let label_for = name.clone();
    let aria = name.clone();
    let rows = size.unwrap_or(10);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| {
                let label_for = label_for.clone();
                view! {
                    <label class="form__label" for=label_for>
                        {l}
                    </label>
                }
            })}
            <select
                id=field_id
                name=name
                class="form__select form__select--multiple"
                aria-label=aria
                multiple=true
                size=rows.to_string()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(selected_values(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected =
                            move || selected.get().iter().any(|v| v == &val_clone);
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Read every selected option value from a change event's target.
fn selected_values(ev: &leptos::ev::Event) -> Vec<String> {
    let Some(select) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };
    let chosen = select.selected_options();
    (0..chosen.length())
        .filter_map(|i| chosen.item(i))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}
