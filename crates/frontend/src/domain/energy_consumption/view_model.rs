use contracts::validation::EcInputMode;

/// One rendered EC value input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcSlot {
    /// Position in `FormState::ec_values`.
    pub slot: usize,
    /// Posted field name (`ec`, `ec_monthly_{n}`, `ec_bimonthly_{n}`).
    pub name: String,
    pub placeholder: String,
}

/// Value inputs the given mode renders, in display order.
///
/// Monthly mode covers 24 months; bimonthly covers the same two years in
/// 12 two-month readings named after their first month.
pub fn ec_slots(mode: EcInputMode) -> Vec<EcSlot> {
    match mode {
        EcInputMode::Direct => vec![EcSlot {
            slot: 0,
            name: "ec".to_string(),
            placeholder: "建物能耗 [kWh/year]".to_string(),
        }],
        EcInputMode::Monthly => (1..=24)
            .map(|month| EcSlot {
                slot: month - 1,
                name: format!("ec_monthly_{month}"),
                placeholder: format!("第 {month} 個月建物能耗 [kWh]"),
            })
            .collect(),
        EcInputMode::Bimonthly => (1..=12)
            .map(|period| EcSlot {
                slot: period - 1,
                name: format!("ec_bimonthly_{}", period * 2 - 1),
                placeholder: format!("第 {}~{} 個月建物能耗 [kWh]", period * 2 - 1, period * 2),
            })
            .collect(),
    }
}

/// Options of the EC input-mode select.
pub fn ec_mode_options() -> Vec<(String, String)> {
    [
        (EcInputMode::Direct, "直接輸入年用電量"),
        (EcInputMode::Monthly, "逐月輸入（24 個月）"),
        (EcInputMode::Bimonthly, "雙月輸入（12 期）"),
    ]
    .into_iter()
    .map(|(mode, label)| (mode.as_str().to_string(), label.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_counts_match_the_mode() {
        assert_eq!(ec_slots(EcInputMode::Direct).len(), 1);
        assert_eq!(ec_slots(EcInputMode::Monthly).len(), 24);
        assert_eq!(ec_slots(EcInputMode::Bimonthly).len(), 12);
    }

    #[test]
    fn bimonthly_names_use_the_first_month_of_each_period() {
        let slots = ec_slots(EcInputMode::Bimonthly);
        assert_eq!(slots[0].name, "ec_bimonthly_1");
        assert_eq!(slots[11].name, "ec_bimonthly_23");
        assert!(slots[11].placeholder.contains("23~24"));
    }

    #[test]
    fn monthly_names_are_one_based() {
        let slots = ec_slots(EcInputMode::Monthly);
        assert_eq!(slots[0].name, "ec_monthly_1");
        assert_eq!(slots[23].name, "ec_monthly_24");
    }
}
