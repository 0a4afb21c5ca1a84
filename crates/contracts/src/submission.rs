//! Submission boundary: the flat field set handed to the server.
//!
//! The frontend posts the form natively, so the wire format is the
//! generated input names themselves: `{kind}-attr-{index}-{attr}` and
//! `{kind}-id-{index}` for section rows, `ec_input_type` / `ec` /
//! `ec_monthly_*` / `ec_bimonthly_*` for the consumption block, and plain
//! names for the building basics. `Submission::from_pairs` is the server
//! side of that contract.

use crate::registry::{SectionKind, SectionRegistry};
use crate::validation::ec::{self, EcInputMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Flatten the registry into submission pairs.
///
/// Category selects are emitted only for rows that picked a category;
/// attribute inputs are emitted in template order.
pub fn collect(registry: &SectionRegistry) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for instance in registry.iter() {
        if let Some(category) = &instance.category {
            pairs.push((
                crate::fields::category_field_name(instance.kind, instance.index),
                category.clone(),
            ));
        }
        for field in instance.template() {
            let value = instance.value(field.attr).unwrap_or_default();
            pairs.push((instance.field_name(field.attr), value.to_string()));
        }
    }
    pairs
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("field name `{0}` has a malformed section index")]
    InvalidIndex(String),
    #[error("unknown EC input type `{0}`")]
    UnknownEcMode(String),
}

/// One section row reconstructed from the flat field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub kind: SectionKind,
    pub index: u32,
    pub category: Option<String>,
    /// Attribute values in submission order; an attribute may repeat
    /// (multi-selects post one pair per chosen option).
    pub attrs: Vec<(String, String)>,
}

/// Parsed form submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Building-basics fields that are not part of any section row.
    pub building: BTreeMap<String, String>,
    pub sections: Vec<SectionEntry>,
    pub ec_mode: Option<EcInputMode>,
    pub ec_values: Vec<f64>,
}

impl Submission {
    /// Parse the flat field set. Gaps in section indices are expected
    /// (removed rows never renumber the survivors) and are not an error.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> Result<Self, SubmissionError> {
        let mut submission = Submission::default();
        let mut raw_ec: Vec<String> = Vec::new();

        for (name, value) in pairs {
            let name = name.as_ref();
            let value = value.as_ref();

            if name == "ec_input_type" {
                submission.ec_mode = Some(
                    EcInputMode::from_str(value)
                        .ok_or_else(|| SubmissionError::UnknownEcMode(value.to_string()))?,
                );
                continue;
            }
            if name == "ec" || name.starts_with("ec_monthly_") || name.starts_with("ec_bimonthly_")
            {
                raw_ec.push(value.to_string());
                continue;
            }
            if let Some((kind, rest)) = match_section_field(name) {
                submission.apply_section_field(name, kind, rest, value)?;
                continue;
            }
            submission
                .building
                .insert(name.to_string(), value.to_string());
        }

        submission.ec_values = ec::parse_ec_values(&raw_ec);
        Ok(submission)
    }

    fn apply_section_field(
        &mut self,
        name: &str,
        kind: SectionKind,
        rest: SectionField<'_>,
        value: &str,
    ) -> Result<(), SubmissionError> {
        match rest {
            SectionField::Category(index_text) => {
                let index = parse_index(name, index_text)?;
                self.entry(kind, index).category = Some(value.to_string());
            }
            SectionField::Attr(index_text, attr) => {
                let index = parse_index(name, index_text)?;
                self.entry(kind, index)
                    .attrs
                    .push((attr.to_string(), value.to_string()));
            }
        }
        Ok(())
    }

    fn entry(&mut self, kind: SectionKind, index: u32) -> &mut SectionEntry {
        let position = self
            .sections
            .iter()
            .position(|entry| entry.kind == kind && entry.index == index);
        match position {
            Some(position) => &mut self.sections[position],
            None => {
                self.sections.push(SectionEntry {
                    kind,
                    index,
                    category: None,
                    attrs: Vec::new(),
                });
                self.sections.last_mut().unwrap()
            }
        }
    }

    /// Rows of one kind, in submission order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &SectionEntry> {
        self.sections.iter().filter(move |entry| entry.kind == kind)
    }
}

enum SectionField<'a> {
    /// `{kind}-id-{index}`
    Category(&'a str),
    /// `{kind}-attr-{index}-{attr}`
    Attr(&'a str, &'a str),
}

/// Match a field name against the section naming scheme. The `-attr-` /
/// `-id-` markers keep prefixes unambiguous (`es` never swallows an
/// `es-exclusive` field).
fn match_section_field(name: &str) -> Option<(SectionKind, SectionField<'_>)> {
    for &kind in SectionKind::all() {
        let prefix = kind.prefix();
        if let Some(rest) = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix("-attr-"))
        {
            let (index_text, attr) = rest.split_once('-')?;
            return Some((kind, SectionField::Attr(index_text, attr)));
        }
        if let Some(index_text) = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix("-id-"))
        {
            return Some((kind, SectionField::Category(index_text)));
        }
    }
    None
}

fn parse_index(name: &str, index_text: &str) -> Result<u32, SubmissionError> {
    index_text
        .parse()
        .map_err(|_| SubmissionError::InvalidIndex(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionRegistry;

    #[test]
    fn collect_emits_generated_names_in_template_order() {
        let mut registry = SectionRegistry::new();
        let index = registry.add(SectionKind::EnergySection);
        registry.set_category(SectionKind::EnergySection, index, "H1");
        registry.set_value(SectionKind::EnergySection, index, "a", "150");
        registry.set_value(SectionKind::EnergySection, index, "hotel-n_room", "80");

        let pairs = collect(&registry);
        assert_eq!(pairs[0], ("es-id-0".to_string(), "H1".to_string()));
        assert_eq!(pairs[1], ("es-attr-0-a".to_string(), "150".to_string()));
        assert!(pairs.contains(&("es-attr-0-hotel-n_room".to_string(), "80".to_string())));
    }

    #[test]
    fn parse_groups_fields_by_kind_and_index() {
        let pairs = [
            ("building_name", "測試大樓"),
            ("es-id-0", "H1"),
            ("es-attr-0-a", "150"),
            ("es-attr-0-hotel-n_room", "80"),
            ("es-exclusive-id-1", "N5"),
            ("es-exclusive-attr-1-a", "30"),
            ("elevator-attr-0-elevator_bottom_floor", "-2"),
            ("elevator-attr-0-elevator_top_floor", "12"),
        ];
        let submission = Submission::from_pairs(&pairs).unwrap();

        assert_eq!(submission.building["building_name"], "測試大樓");

        let es: Vec<_> = submission.sections_of(SectionKind::EnergySection).collect();
        assert_eq!(es.len(), 1);
        assert_eq!(es[0].category.as_deref(), Some("H1"));
        // Composite attr names keep their inner dashes.
        assert!(es[0]
            .attrs
            .contains(&("hotel-n_room".to_string(), "80".to_string())));

        let exclusive: Vec<_> = submission
            .sections_of(SectionKind::ExclusiveSection)
            .collect();
        assert_eq!(exclusive.len(), 1);
        assert_eq!(exclusive[0].index, 1);

        let elevators: Vec<_> = submission.sections_of(SectionKind::Elevator).collect();
        assert_eq!(elevators.len(), 1);
    }

    #[test]
    fn parse_keeps_repeated_multiselect_values() {
        let pairs = [
            ("elevator-attr-0-elevator_es", "J1"),
            ("elevator-attr-0-elevator_es", "NB13"),
        ];
        let submission = Submission::from_pairs(&pairs).unwrap();
        let elevator = submission.sections_of(SectionKind::Elevator).next().unwrap();
        assert_eq!(
            elevator.attrs,
            vec![
                ("elevator_es".to_string(), "J1".to_string()),
                ("elevator_es".to_string(), "NB13".to_string()),
            ]
        );
    }

    #[test]
    fn parse_reads_the_ec_block() {
        let mut pairs = vec![("ec_input_type".to_string(), "monthly".to_string())];
        for month in 1..=24 {
            pairs.push((format!("ec_monthly_{month}"), "100".to_string()));
        }
        let submission = Submission::from_pairs(&pairs).unwrap();
        assert_eq!(submission.ec_mode, Some(EcInputMode::Monthly));
        assert_eq!(submission.ec_values.len(), 24);
    }

    #[test]
    fn parse_rejects_garbage_ec_mode() {
        let pairs = [("ec_input_type", "weekly")];
        assert_eq!(
            Submission::from_pairs(&pairs),
            Err(SubmissionError::UnknownEcMode("weekly".to_string()))
        );
    }

    #[test]
    fn parse_rejects_malformed_index() {
        let pairs = [("es-id-abc", "H1")];
        assert_eq!(
            Submission::from_pairs(&pairs),
            Err(SubmissionError::InvalidIndex("es-id-abc".to_string()))
        );
    }

    #[test]
    fn collect_then_parse_round_trips_section_rows() {
        let mut registry = SectionRegistry::new();
        let a = registry.add(SectionKind::EnergySection);
        registry.set_category(SectionKind::EnergySection, a, "I2");
        registry.set_value(SectionKind::EnergySection, a, "a", "45");
        let b = registry.add(SectionKind::WaterTower);
        registry.set_value(SectionKind::WaterTower, b, "v", "10");

        let pairs = collect(&registry);
        let submission = Submission::from_pairs(&pairs).unwrap();
        assert_eq!(submission.sections.len(), 2);
        let tower = submission
            .sections_of(SectionKind::WaterTower)
            .next()
            .unwrap();
        assert!(tower.attrs.contains(&("v".to_string(), "10".to_string())));
    }
}
