use contracts::catalog;
use contracts::registry::SectionKind;

/// Presentation config of one repeatable-section block.
pub struct SectionBlockConfig {
    pub container_id: &'static str,
    pub title: &'static str,
    /// Label and placeholder of the category select, for kinds that have one.
    pub category: Option<(&'static str, &'static str)>,
}

impl SectionBlockConfig {
    pub fn for_kind(kind: SectionKind) -> Self {
        match kind {
            SectionKind::EnergySection => Self {
                container_id: "energy-sections",
                title: "耗能分區",
                category: Some(("耗能分區", "選擇耗能分區")),
            },
            SectionKind::ExclusiveSection => Self {
                container_id: "energy-sections-exclusive",
                title: "免評估分區",
                category: Some(("免評估分區", "選擇免評估分區")),
            },
            SectionKind::Elevator => Self {
                container_id: "elevators",
                title: "電梯",
                category: None,
            },
            SectionKind::Escalator => Self {
                container_id: "escalators",
                title: "電扶梯",
                category: None,
            },
            SectionKind::WaterTower => Self {
                container_id: "watertowers",
                title: "水塔",
                category: None,
            },
            SectionKind::Heater => Self {
                container_id: "heaters",
                title: "加熱器",
                category: None,
            },
            SectionKind::ParkingGarage => Self {
                container_id: "parking-garages",
                title: "停車場",
                category: None,
            },
        }
    }
}

/// Category-select options for a kind, as (value, label) pairs.
pub fn category_options(kind: SectionKind) -> Vec<(String, String)> {
    let options = match kind {
        SectionKind::EnergySection => catalog::es_options(),
        SectionKind::ExclusiveSection => catalog::exclusive_options(),
        _ => Vec::new(),
    };
    options
        .into_iter()
        .map(|option| (option.value.to_string(), option.label.to_string()))
        .collect()
}
