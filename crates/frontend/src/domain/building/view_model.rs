use leptos::prelude::*;

/// Building-basics block of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingForm {
    pub building_name: String,
    pub building_type: String,
    /// Only collected for apartment buildings.
    pub n_suite: String,
    /// Only collected for apartment buildings.
    pub n_household_big: String,
}

/// ViewModel for the building-basics block
#[derive(Clone, Copy)]
pub struct BuildingBasicsViewModel {
    pub form: RwSignal<BuildingForm>,
}

impl BuildingBasicsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BuildingForm::default()),
        }
    }

    pub fn is_apartment(&self) -> bool {
        self.form.with(|form| form.building_type == "apartment")
    }

    /// Switch the building type. Leaving the apartment type discards the
    /// apartment-only values so disabled inputs never submit stale data.
    pub fn set_building_type(&self, building_type: &str) {
        self.form.update(|form| {
            form.building_type = building_type.to_string();
            if form.building_type != "apartment" {
                form.n_suite.clear();
                form.n_household_big.clear();
            }
        });
    }
}

impl Default for BuildingBasicsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Building types offered by the basics block.
pub fn building_type_options() -> Vec<(String, String)> {
    [
        ("apartment", "住宅（公寓大廈）"),
        ("office", "辦公建築"),
        ("hotel", "旅館建築"),
        ("hospital", "醫療建築"),
        ("school", "學校建築"),
        ("retail", "商場建築"),
        ("other", "其他建築"),
    ]
    .into_iter()
    .map(|(value, label)| (value.to_string(), label.to_string()))
    .collect()
}
