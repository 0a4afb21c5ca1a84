//! Section registry: the repeatable sub-form rows of the estimation form.
//!
//! Rows are identified by (kind, index). Each counter group assigns indices
//! from its own monotonically increasing counter; removing a row never
//! renumbers the survivors, so generated field names stay stable for the
//! whole session.

use crate::fields::{self, templates, FieldDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Kinds and counter groups
// ============================================================================

/// Kind of a repeatable section row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    EnergySection,
    /// 免評估 (non-assessed) energy section.
    ExclusiveSection,
    Elevator,
    Escalator,
    WaterTower,
    Heater,
    ParkingGarage,
}

impl SectionKind {
    /// Field-name prefix of the kind (submission contract).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::EnergySection => "es",
            Self::ExclusiveSection => "es-exclusive",
            Self::Elevator => "elevator",
            Self::Escalator => "escalator",
            Self::WaterTower => "watertower",
            Self::Heater => "heater",
            Self::ParkingGarage => "parkinggarage",
        }
    }

    /// Counter group the kind belongs to.
    pub fn group(&self) -> SectionGroup {
        match self {
            Self::EnergySection | Self::ExclusiveSection => SectionGroup::EnergyZones,
            Self::Elevator | Self::Escalator => SectionGroup::Transport,
            Self::WaterTower | Self::Heater => SectionGroup::HotWater,
            Self::ParkingGarage => SectionGroup::Parking,
        }
    }

    /// Whether rows of this kind carry a category select. Facility kinds
    /// have a fixed template instead.
    pub fn has_category(&self) -> bool {
        matches!(self, Self::EnergySection | Self::ExclusiveSection)
    }

    pub fn all() -> &'static [SectionKind] {
        &[
            Self::EnergySection,
            Self::ExclusiveSection,
            Self::Elevator,
            Self::Escalator,
            Self::WaterTower,
            Self::Heater,
            Self::ParkingGarage,
        ]
    }
}

/// Counter group. Kinds in one group share an insertion counter, so e.g.
/// elevator and escalator rows never collide on an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionGroup {
    EnergyZones,
    Transport,
    HotWater,
    Parking,
}

impl SectionGroup {
    fn slot(&self) -> usize {
        match self {
            Self::EnergyZones => 0,
            Self::Transport => 1,
            Self::HotWater => 2,
            Self::Parking => 3,
        }
    }
}

// ============================================================================
// Instances
// ============================================================================

/// One sub-form row.
///
/// Invariant: `attrs` holds exactly the attribute keys of the current
/// template — for category kinds that is the fields of `category`, empty
/// until one is picked; for facility kinds the fixed kind template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInstance {
    pub kind: SectionKind,
    pub index: u32,
    pub category: Option<String>,
    pub attrs: BTreeMap<String, String>,
}

impl SectionInstance {
    fn new(kind: SectionKind, index: u32) -> Self {
        let mut instance = Self {
            kind,
            index,
            category: None,
            attrs: BTreeMap::new(),
        };
        instance.reset_attrs();
        instance
    }

    /// Current field template of the row.
    pub fn template(&self) -> Vec<FieldDescriptor> {
        templates::fields_for(self.kind, self.category.as_deref())
    }

    /// Raw value of an attribute, if the current template exposes it.
    pub fn value(&self, attr: &str) -> Option<&str> {
        self.attrs.get(attr).map(String::as_str)
    }

    /// Value parsed as a number; `None` when absent, blank, or unparseable.
    pub fn number(&self, attr: &str) -> Option<f64> {
        self.value(attr)?.trim().parse().ok()
    }

    /// Generated name of one of the row's inputs.
    pub fn field_name(&self, attr: &str) -> String {
        fields::field_name(self.kind, self.index, attr)
    }

    /// Rebuild `attrs` from the current template, discarding all values.
    fn reset_attrs(&mut self) {
        self.attrs = self
            .template()
            .into_iter()
            .map(|field| (field.attr.to_string(), String::new()))
            .collect();
    }
}

// ============================================================================
// Registry
// ============================================================================

/// All sub-form rows of the estimation form, with one insertion counter per
/// counter group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRegistry {
    counters: [u32; 4],
    instances: Vec<SectionInstance>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new row of `kind` and return its assigned index.
    pub fn add(&mut self, kind: SectionKind) -> u32 {
        let counter = &mut self.counters[kind.group().slot()];
        let index = *counter;
        *counter += 1;
        self.instances.push(SectionInstance::new(kind, index));
        index
    }

    /// Remove the row (kind, index). Remaining rows keep their indices.
    pub fn remove(&mut self, kind: SectionKind, index: u32) {
        self.instances
            .retain(|instance| !(instance.kind == kind && instance.index == index));
    }

    /// Remove all rows of `kind` and reset its group counter.
    pub fn clear(&mut self, kind: SectionKind) {
        self.instances.retain(|instance| instance.kind != kind);
        self.counters[kind.group().slot()] = 0;
    }

    pub fn get(&self, kind: SectionKind, index: u32) -> Option<&SectionInstance> {
        self.instances
            .iter()
            .find(|instance| instance.kind == kind && instance.index == index)
    }

    fn get_mut(&mut self, kind: SectionKind, index: u32) -> Option<&mut SectionInstance> {
        self.instances
            .iter_mut()
            .find(|instance| instance.kind == kind && instance.index == index)
    }

    /// Rows of one kind, in insertion order.
    pub fn of_kind(&self, kind: SectionKind) -> impl Iterator<Item = &SectionInstance> {
        self.instances
            .iter()
            .filter(move |instance| instance.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionInstance> {
        self.instances.iter()
    }

    /// Change the category of a row, replacing its attribute set with the
    /// new template's fields. Previous values are dropped wholesale; no
    /// field of the old category survives.
    pub fn set_category(&mut self, kind: SectionKind, index: u32, code: &str) -> bool {
        match self.get_mut(kind, index) {
            Some(instance) => {
                instance.category = Some(code.to_string());
                instance.reset_attrs();
                true
            }
            None => false,
        }
    }

    /// Set one attribute value. Returns `false` when the row does not exist
    /// or its current template has no such attribute.
    pub fn set_value(&mut self, kind: SectionKind, index: u32, attr: &str, value: &str) -> bool {
        match self.get_mut(kind, index) {
            Some(instance) => match instance.attrs.get_mut(attr) {
                Some(slot) => {
                    *slot = value.to_string();
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Total floor area over the regular energy-section rows.
    ///
    /// Rows without an area field (no category picked yet) and blank or
    /// unparseable values are skipped, not treated as errors.
    pub fn total_area(&self) -> f64 {
        self.of_kind(SectionKind::EnergySection)
            .filter_map(|instance| instance.number("a"))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_assigned_monotonically_per_group() {
        let mut registry = SectionRegistry::new();
        assert_eq!(registry.add(SectionKind::EnergySection), 0);
        assert_eq!(registry.add(SectionKind::EnergySection), 1);
        // Exclusive sections share the energy-zone counter.
        assert_eq!(registry.add(SectionKind::ExclusiveSection), 2);
        // Other groups count independently.
        assert_eq!(registry.add(SectionKind::Elevator), 0);
        assert_eq!(registry.add(SectionKind::Escalator), 1);
        assert_eq!(registry.add(SectionKind::ParkingGarage), 0);
    }

    #[test]
    fn remove_never_renumbers_remaining_rows() {
        let mut registry = SectionRegistry::new();
        registry.add(SectionKind::Elevator);
        registry.add(SectionKind::Elevator);
        registry.add(SectionKind::Elevator);
        registry.remove(SectionKind::Elevator, 1);

        let indices: Vec<u32> = registry
            .of_kind(SectionKind::Elevator)
            .map(|i| i.index)
            .collect();
        assert_eq!(indices, vec![0, 2]);

        // A later add continues from the counter, not from the gap.
        assert_eq!(registry.add(SectionKind::Elevator), 3);
    }

    #[test]
    fn clear_resets_the_group_counter() {
        let mut registry = SectionRegistry::new();
        registry.add(SectionKind::WaterTower);
        registry.add(SectionKind::Heater);
        registry.clear(SectionKind::WaterTower);

        assert_eq!(registry.of_kind(SectionKind::WaterTower).count(), 0);
        // Heaters survive a water-tower clear.
        assert_eq!(registry.of_kind(SectionKind::Heater).count(), 1);
        assert_eq!(registry.add(SectionKind::WaterTower), 0);
    }

    #[test]
    fn category_change_replaces_the_attribute_set() {
        let mut registry = SectionRegistry::new();
        let index = registry.add(SectionKind::EnergySection);
        assert!(registry.set_category(SectionKind::EnergySection, index, "H1"));
        assert!(registry.set_value(SectionKind::EnergySection, index, "hotel-n_room", "120"));

        assert!(registry.set_category(SectionKind::EnergySection, index, "I1"));
        let instance = registry.get(SectionKind::EnergySection, index).unwrap();
        // No hotel field survives the switch to a dining category.
        assert!(instance.value("hotel-n_room").is_none());
        assert!(instance.value("diningarea-a").is_some());
        let expected: Vec<String> = instance
            .template()
            .iter()
            .map(|f| f.attr.to_string())
            .collect();
        let mut actual: Vec<String> = instance.attrs.keys().cloned().collect();
        let mut expected_sorted = expected;
        expected_sorted.sort();
        actual.sort();
        assert_eq!(actual, expected_sorted);
    }

    #[test]
    fn set_value_rejects_attrs_outside_the_template() {
        let mut registry = SectionRegistry::new();
        let index = registry.add(SectionKind::EnergySection);
        registry.set_category(SectionKind::EnergySection, index, "B1");
        assert!(!registry.set_value(SectionKind::EnergySection, index, "hotel-n_room", "5"));
        assert!(!registry.set_value(SectionKind::EnergySection, 99, "a", "5"));
    }

    #[test]
    fn facility_rows_get_their_fixed_template_on_add() {
        let mut registry = SectionRegistry::new();
        let index = registry.add(SectionKind::Elevator);
        let instance = registry.get(SectionKind::Elevator, index).unwrap();
        assert!(instance.attrs.contains_key("elevator_bottom_floor"));
        assert!(instance.attrs.contains_key("coef_speed"));
    }

    #[test]
    fn total_area_skips_rows_without_an_area_field() {
        let mut registry = SectionRegistry::new();
        let a = registry.add(SectionKind::EnergySection);
        registry.set_category(SectionKind::EnergySection, a, "B1");
        registry.set_value(SectionKind::EnergySection, a, "a", "120.5");

        let b = registry.add(SectionKind::EnergySection);
        registry.set_category(SectionKind::EnergySection, b, "H1");
        registry.set_value(SectionKind::EnergySection, b, "a", "80");

        // No category picked yet: no area field, skipped.
        registry.add(SectionKind::EnergySection);
        // Blank value: skipped.
        let d = registry.add(SectionKind::EnergySection);
        registry.set_category(SectionKind::EnergySection, d, "C1");
        // Exclusive sections do not contribute to the regular total.
        let e = registry.add(SectionKind::ExclusiveSection);
        registry.set_category(SectionKind::ExclusiveSection, e, "N5");
        registry.set_value(SectionKind::ExclusiveSection, e, "a", "999");

        assert!((registry.total_area() - 200.5).abs() < 1e-9);
    }
}
