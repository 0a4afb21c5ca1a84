use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "number" (default) or "text"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Form field name; also used as the element id
    #[prop(into)]
    name: String,
    /// min attribute for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// max attribute for numeric inputs
    #[prop(optional, into)]
    max: MaybeProp<String>,
    /// step attribute for numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "number".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let field_id = name.clone();
    let label_for = name.clone();

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
            <input
                id=field_id
                name=name
                class=move || format!("form__input {}", additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                min=move || min.get()
                max=move || max.get()
                step=move || step.get()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
