//! Field descriptors and the category dispatcher.
//!
//! A category template is a pure description of the inputs a section
//! exposes; the frontend binds it to actual controls and the backend uses
//! the same naming scheme to parse the submitted field set back.

pub mod templates;

use crate::registry::SectionKind;

/// One `<option>` of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Input control of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Numeric input, optionally bounded.
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Text,
    /// Single-choice select with a disabled placeholder option.
    Select { options: Vec<SelectOption> },
    /// Multi-choice select (e.g. the energy sections an elevator passes).
    MultiSelect { options: Vec<SelectOption> },
}

impl FieldInput {
    /// Unbounded numeric input.
    pub const fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
            step: None,
        }
    }

    /// Numeric input bounded to `[min, max]` with the given step.
    pub const fn bounded(min: f64, max: f64, step: f64) -> Self {
        Self::Number {
            min: Some(min),
            max: Some(max),
            step: Some(step),
        }
    }
}

/// One input of a category template.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Attribute key, the last part of the generated field name.
    pub attr: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: FieldInput,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(attr: &'static str, label: &'static str) -> Self {
        Self {
            attr,
            label,
            placeholder: "",
            input: FieldInput::number(),
            required: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn input(mut self, input: FieldInput) -> Self {
        self.input = input;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

// ============================================================================
// Field naming scheme (submission contract)
// ============================================================================

/// Generated name of an attribute input: `{kind}-attr-{index}-{attr}`.
pub fn field_name(kind: SectionKind, index: u32, attr: &str) -> String {
    format!("{}-attr-{}-{}", kind.prefix(), index, attr)
}

/// Generated name of a category select: `{kind}-id-{index}`.
pub fn category_field_name(kind: SectionKind, index: u32) -> String {
    format!("{}-id-{}", kind.prefix(), index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_the_scheme() {
        assert_eq!(
            field_name(SectionKind::EnergySection, 3, "a"),
            "es-attr-3-a"
        );
        assert_eq!(
            field_name(SectionKind::Elevator, 0, "elevator_top_floor"),
            "elevator-attr-0-elevator_top_floor"
        );
        assert_eq!(
            category_field_name(SectionKind::ExclusiveSection, 7),
            "es-exclusive-id-7"
        );
    }
}
