use leptos::prelude::*;

/// Select component with a disabled placeholder option
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; empty string selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder text shown as the disabled first option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Form field name; also used as the element id
    #[prop(into)]
    name: String,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let field_id = name.clone();
    let label_for = name.clone();
    let aria = name.clone();

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
                class=move || format!("form__select {}", additional_class())
                aria-label=aria
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| {
                    let placeholder_selected = move || value.get().is_empty();
                    view! {
                        <option disabled selected=placeholder_selected value="">
                            {text}
                        </option>
                    }
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
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
