use contracts::registry::{SectionKind, SectionRegistry};
use contracts::validation::{self, ec, EcInputMode};
use leptos::prelude::*;

/// Form-wide state, provided to the whole app via context.
///
/// The section registry is the single source of truth for the repeatable
/// rows; derived values (area total, validation messages) are recomputed
/// from it on demand.
#[derive(Clone, Copy)]
pub struct FormState {
    pub registry: RwSignal<SectionRegistry>,
    /// EC input mode; `None` until the user picks one.
    pub ec_mode: RwSignal<Option<EcInputMode>>,
    /// Raw EC inputs, one slot per rendered field.
    pub ec_values: RwSignal<Vec<String>>,
    /// Inline EC plausibility messages, refreshed on every value change.
    pub ec_messages: RwSignal<Vec<String>>,
    /// Message of the last failed submit attempt, if any.
    pub submit_error: RwSignal<Option<String>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(SectionRegistry::new()),
            ec_mode: RwSignal::new(None),
            ec_values: RwSignal::new(Vec::new()),
            ec_messages: RwSignal::new(Vec::new()),
            submit_error: RwSignal::new(None),
        }
    }

    // ------------------------------------------------------------------
    // Section rows
    // ------------------------------------------------------------------

    pub fn add_section(&self, kind: SectionKind) -> u32 {
        let mut index = 0;
        self.registry.update(|registry| index = registry.add(kind));
        index
    }

    pub fn remove_section(&self, kind: SectionKind, index: u32) {
        self.registry.update(|registry| registry.remove(kind, index));
    }

    pub fn clear_sections(&self, kind: SectionKind) {
        self.registry.update(|registry| registry.clear(kind));
    }

    pub fn set_category(&self, kind: SectionKind, index: u32, code: &str) {
        self.registry.update(|registry| {
            if !registry.set_category(kind, index, code) {
                log::warn!("category change for missing row {}-{}", kind.prefix(), index);
            }
        });
    }

    pub fn set_value(&self, kind: SectionKind, index: u32, attr: &str, value: &str) {
        self.registry.update(|registry| {
            if !registry.set_value(kind, index, attr, value) {
                log::warn!(
                    "value change for unknown field {}-{}-{}",
                    kind.prefix(),
                    index,
                    attr
                );
            }
        });
    }

    /// Indices of the current rows of one kind, for keyed row rendering.
    pub fn indices_of(&self, kind: SectionKind) -> Vec<u32> {
        self.registry
            .with(|registry| registry.of_kind(kind).map(|instance| instance.index).collect())
    }

    /// Reactive total of the energy-section areas.
    pub fn total_area(&self) -> f64 {
        self.registry.with(|registry| registry.total_area())
    }

    // ------------------------------------------------------------------
    // Energy consumption
    // ------------------------------------------------------------------

    /// Switch the EC input mode, resetting the value slots and messages.
    pub fn set_ec_mode(&self, mode: EcInputMode) {
        self.ec_mode.set(Some(mode));
        self.ec_values
            .set(vec![String::new(); mode.input_count()]);
        self.ec_messages.set(Vec::new());
    }

    pub fn set_ec_value(&self, slot: usize, value: &str) {
        self.ec_values.update(|values| {
            if let Some(entry) = values.get_mut(slot) {
                *entry = value.to_string();
            }
        });
        self.revalidate_ec();
    }

    /// Re-run the EC plausibility checks against the current inputs.
    pub fn revalidate_ec(&self) {
        let Some(mode) = self.ec_mode.get_untracked() else {
            return;
        };
        let messages = self.ec_values.with_untracked(|values| {
            ec::check_ec_values(mode, &ec::parse_ec_values(values))
        });
        self.ec_messages.set(messages);
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Full validation pass for the submit handler. On failure the EC
    /// messages and the submit error are surfaced; returns whether the
    /// native submission may proceed.
    pub fn validate_for_submit(&self) -> bool {
        let mode = self.ec_mode.get_untracked().unwrap_or_default();
        let values = self
            .ec_values
            .with_untracked(|values| ec::parse_ec_values(values));
        let outcome = self
            .registry
            .with_untracked(|registry| validation::validate(registry, mode, &values));

        match outcome {
            validation::ValidationOutcome::Pass => {
                self.submit_error.set(None);
                self.ec_messages.set(Vec::new());
                true
            }
            validation::ValidationOutcome::Fail(messages) => {
                log::info!("submission blocked: {} message(s)", messages.len());
                // The elevator ordering message goes to the submit banner;
                // ratio messages render inline next to the EC inputs.
                if messages
                    .first()
                    .is_some_and(|m| m.as_str() == validation::MSG_ELEVATOR_FLOOR_ORDER)
                {
                    self.submit_error.set(messages.first().cloned());
                } else {
                    self.submit_error.set(None);
                    self.ec_messages.set(messages);
                }
                false
            }
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
