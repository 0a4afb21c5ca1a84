use super::ui::{Input, MultiSelect, Select};
use crate::shared::state::FormState;
use contracts::fields::{self, FieldDescriptor, FieldInput, SelectOption};
use contracts::registry::SectionKind;
use leptos::prelude::*;

/// Multi-select choices are stored as one attribute value; the native
/// submission still posts one pair per chosen option.
const MULTI_VALUE_SEPARATOR: char = ',';

/// Render one template field of a section row, bound to the registry.
#[component]
pub fn FieldControl(kind: SectionKind, index: u32, field: FieldDescriptor) -> impl IntoView {
    let state = expect_context::<FormState>();
    let attr = field.attr;
    let name = fields::field_name(kind, index, attr);

    let value = Signal::derive(move || {
        state.registry.with(|registry| {
            registry
                .get(kind, index)
                .and_then(|instance| instance.value(attr))
                .unwrap_or_default()
                .to_string()
        })
    });

    match field.input {
        FieldInput::Number { min, max, step } => view! {
            <Input
                label=field.label.to_string()
                name=name
                value=value
                placeholder=field.placeholder.to_string()
                min=min.map(|v| v.to_string())
                max=max.map(|v| v.to_string())
                step=step.map(|v| v.to_string())
                required=field.required
                on_input=Callback::new(move |text: String| {
                    state.set_value(kind, index, attr, &text);
                })
            />
        }
        .into_any(),
        FieldInput::Text => view! {
            <Input
                label=field.label.to_string()
                name=name
                value=value
                input_type="text"
                placeholder=field.placeholder.to_string()
                required=field.required
                on_input=Callback::new(move |text: String| {
                    state.set_value(kind, index, attr, &text);
                })
            />
        }
        .into_any(),
        FieldInput::Select { options } => view! {
            <Select
                label=field.label.to_string()
                name=name
                value=value
                options=to_option_pairs(&options)
                placeholder=field.placeholder.to_string()
                required=field.required
                on_change=Callback::new(move |choice: String| {
                    state.set_value(kind, index, attr, &choice);
                })
            />
        }
        .into_any(),
        FieldInput::MultiSelect { options } => {
            let selected = Signal::derive(move || {
                value.with(|joined| {
                    joined
                        .split(MULTI_VALUE_SEPARATOR)
                        .filter(|part| !part.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
            });
            view! {
                <MultiSelect
                    label=field.label.to_string()
                    name=name
                    selected=selected
                    options=to_option_pairs(&options)
                    on_change=Callback::new(move |choices: Vec<String>| {
                        let joined = choices.join(&MULTI_VALUE_SEPARATOR.to_string());
                        state.set_value(kind, index, attr, &joined);
                    })
                />
            }
            .into_any()
        }
    }
}

fn to_option_pairs(options: &[SelectOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|option| (option.value.to_string(), option.label.to_string()))
        .collect()
}
