//! Pre-submission form validation.
//!
//! Stateless: every submit attempt (and every relevant field change)
//! recomputes the outcome from the current registry and EC inputs. The
//! user-facing message strings are a fixed contract.

pub mod ec;

use crate::registry::{SectionKind, SectionRegistry};
pub use ec::EcInputMode;

/// 電梯樓層順序錯誤訊息
pub const MSG_ELEVATOR_FLOOR_ORDER: &str = "電梯最低樓層必須小於電梯最高樓層。";

/// Outcome of one validation pass. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Pass,
    Fail(Vec<String>),
}

impl ValidationOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn messages(&self) -> &[String] {
        match self {
            Self::Pass => &[],
            Self::Fail(messages) => messages,
        }
    }

    fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Pass
        } else {
            Self::Fail(messages)
        }
    }
}

/// Full pre-submission validation.
///
/// The elevator ordering check short-circuits on the first violation; the
/// EC plausibility check collects every applicable message.
pub fn validate(
    registry: &SectionRegistry,
    ec_mode: EcInputMode,
    ec_values: &[f64],
) -> ValidationOutcome {
    if let Some(message) = check_elevator_floors(registry) {
        return ValidationOutcome::Fail(vec![message]);
    }
    ValidationOutcome::from_messages(ec::check_ec_values(ec_mode, ec_values))
}

/// First elevator row whose bottom floor is not strictly below its top
/// floor, if any. Rows with missing or non-numeric floors are skipped.
pub fn check_elevator_floors(registry: &SectionRegistry) -> Option<String> {
    for elevator in registry.of_kind(SectionKind::Elevator) {
        let bottom: i64 = match elevator.value("elevator_bottom_floor") {
            Some(value) => match value.trim().parse() {
                Ok(parsed) => parsed,
                Err(_) => continue,
            },
            None => continue,
        };
        let top: i64 = match elevator.value("elevator_top_floor") {
            Some(value) => match value.trim().parse() {
                Ok(parsed) => parsed,
                Err(_) => continue,
            },
            None => continue,
        };
        if bottom >= top {
            return Some(MSG_ELEVATOR_FLOOR_ORDER.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionRegistry;

    fn elevator(registry: &mut SectionRegistry, bottom: &str, top: &str) -> u32 {
        let index = registry.add(SectionKind::Elevator);
        registry.set_value(SectionKind::Elevator, index, "elevator_bottom_floor", bottom);
        registry.set_value(SectionKind::Elevator, index, "elevator_top_floor", top);
        index
    }

    #[test]
    fn ordered_floors_pass() {
        let mut registry = SectionRegistry::new();
        elevator(&mut registry, "-2", "4");
        assert!(check_elevator_floors(&registry).is_none());
        assert!(validate(&registry, EcInputMode::Direct, &[]).is_pass());
    }

    #[test]
    fn equal_floors_fail() {
        let mut registry = SectionRegistry::new();
        elevator(&mut registry, "3", "3");
        assert_eq!(
            check_elevator_floors(&registry).as_deref(),
            Some(MSG_ELEVATOR_FLOOR_ORDER)
        );
    }

    #[test]
    fn inverted_floors_fail_validation() {
        let mut registry = SectionRegistry::new();
        elevator(&mut registry, "5", "1");
        let outcome = validate(&registry, EcInputMode::Direct, &[]);
        assert_eq!(
            outcome,
            ValidationOutcome::Fail(vec![MSG_ELEVATOR_FLOOR_ORDER.to_string()])
        );
    }

    #[test]
    fn blank_floors_are_skipped() {
        let mut registry = SectionRegistry::new();
        elevator(&mut registry, "", "");
        assert!(check_elevator_floors(&registry).is_none());
    }

    #[test]
    fn removed_elevator_is_not_checked() {
        let mut registry = SectionRegistry::new();
        let bad = elevator(&mut registry, "9", "2");
        registry.remove(SectionKind::Elevator, bad);
        assert!(check_elevator_floors(&registry).is_none());
    }

    #[test]
    fn elevator_check_short_circuits_before_ec() {
        let mut registry = SectionRegistry::new();
        elevator(&mut registry, "4", "4");
        // EC values that would fail on their own.
        let values = [vec![50.0; 12], vec![100.0; 12]].concat();
        let outcome = validate(&registry, EcInputMode::Monthly, &values);
        assert_eq!(outcome.messages(), [MSG_ELEVATOR_FLOOR_ORDER.to_string()]);
    }
}
