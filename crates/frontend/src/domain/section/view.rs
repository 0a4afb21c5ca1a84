use super::view_model::{category_options, SectionBlockConfig};
use crate::shared::components::field_control::FieldControl;
use crate::shared::components::ui::{Button, Select};
use crate::shared::state::FormState;
use contracts::fields;
use contracts::registry::SectionKind;
use leptos::prelude::*;

/// One repeatable-section block: its current rows plus add/clear controls.
#[component]
pub fn SectionTable(
    kind: SectionKind,
    /// Render the live area total under the rows (energy sections only).
    #[prop(optional)]
    show_area_total: bool,
) -> impl IntoView {
    let state = expect_context::<FormState>();
    let config = SectionBlockConfig::for_kind(kind);
    let container_id = config.container_id;
    let title = config.title;

    let indices = Signal::derive(move || state.indices_of(kind));

    view! {
        <fieldset class="form-section" id=container_id>
            <legend>{title}</legend>
            <For
                each=move || indices.get()
                key=|index| *index
                children=move |index| view! { <SectionRow kind index /> }
            />
            <div class="form-section__actions">
                <Button on_click=Callback::new(move |_| {
                    state.add_section(kind);
                })>"新增"</Button>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| {
                        state.clear_sections(kind);
                    })
                >
                    "清除全部"
                </Button>
            </div>
            {show_area_total
                .then(|| {
                    view! {
                        <div id="form-total-area" class="form-section__total">
                            {move || format!("分區總面積：{} [m2]", state.total_area())}
                        </div>
                    }
                })}
        </fieldset>
    }
}

/// One row: optional category select, the fields of the current template,
/// and a delete button. Changing the category swaps the field set wholesale.
#[component]
fn SectionRow(kind: SectionKind, index: u32) -> impl IntoView {
    let state = expect_context::<FormState>();
    let config = SectionBlockConfig::for_kind(kind);
    let row_id = format!("{}-{}", config.container_id, index);

    let template = Signal::derive(move || {
        state.registry.with(|registry| {
            registry
                .get(kind, index)
                .map(|instance| instance.template())
                .unwrap_or_default()
        })
    });

    let category_select = config.category.map(|(label, placeholder)| {
        let category = Signal::derive(move || {
            state.registry.with(|registry| {
                registry
                    .get(kind, index)
                    .and_then(|instance| instance.category.clone())
                    .unwrap_or_default()
            })
        });
        view! {
            <Select
                label=label.to_string()
                name=fields::category_field_name(kind, index)
                value=category
                options=category_options(kind)
                placeholder=placeholder.to_string()
                on_change=Callback::new(move |code: String| {
                    state.set_category(kind, index, &code);
                })
            />
        }
    });

    view! {
        <div class="section-row" id=row_id>
            {category_select}
            <For
                each=move || template.get()
                key=|field| field.attr
                children=move |field| view! { <FieldControl kind index field /> }
            />
            <Button
                variant="danger"
                on_click=Callback::new(move |_| {
                    state.remove_section(kind, index);
                })
            >
                "刪除"
            </Button>
            <hr />
        </div>
    }
}
