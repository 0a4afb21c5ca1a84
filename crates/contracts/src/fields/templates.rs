//! Category → field-template dispatch.
//!
//! `fields_for` is a pure function of (kind, category code); the renderer
//! owns all side effects. Regular energy sections always expose the common
//! area / air-conditioning fields plus the extras of their shape class;
//! facility kinds have a fixed template independent of any category.

use super::{FieldDescriptor, FieldInput, SelectOption};
use crate::catalog::{self, EsShape, ExclusiveShape};
use crate::registry::SectionKind;

const AC_OPERATION_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "interval",
        label: "間歇式",
    },
    SelectOption {
        value: "continue",
        label: "全年式",
    },
];

const AC_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "watercooled",
        label: "水冷式",
    },
    SelectOption {
        value: "normal",
        label: "一般",
    },
];

const HEATING_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "BHPE",
        label: "BHPE - 硬銲型板式熱交換器",
    },
    SelectOption {
        value: "Other",
        label: "其他",
    },
];

const YES_NO_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "True",
        label: "是",
    },
    SelectOption {
        value: "False",
        label: "否",
    },
];

const MEALS_PER_DAY_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "1",
        label: "每日一餐",
    },
    SelectOption {
        value: "2",
        label: "每日兩餐",
    },
    SelectOption {
        value: "3",
        label: "每日三餐",
    },
    SelectOption {
        value: "4",
        label: "24 小時供餐",
    },
];

const WASH_DISHES_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "True",
        label: "手洗",
    },
    SelectOption {
        value: "False",
        label: "洗碗機",
    },
];

const ELEVATOR_EFF_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "1.0",
        label: "1. 普通電梯（1.0）",
    },
    SelectOption {
        value: "0.7",
        label: "2. 變頻電梯（0.7）",
    },
    SelectOption {
        value: "0.5",
        label: "3. 變頻電力回收電梯（0.5）",
    },
];

const HEATER_FUEL_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "natural_gas",
        label: "天然氣",
    },
    SelectOption {
        value: "lpg",
        label: "桶裝瓦斯",
    },
];

fn select(options: &[SelectOption]) -> FieldInput {
    FieldInput::Select {
        options: options.to_vec(),
    }
}

/// Field template for a section of the given kind and category.
///
/// `code` is `None` for kinds without a category select and for rows whose
/// category has not been picked yet; facility kinds ignore it entirely.
pub fn fields_for(kind: SectionKind, code: Option<&str>) -> Vec<FieldDescriptor> {
    match kind {
        SectionKind::EnergySection => match code {
            Some(code) => energy_section_fields(code),
            None => Vec::new(),
        },
        SectionKind::ExclusiveSection => match code {
            Some(code) => exclusive_section_fields(code),
            None => Vec::new(),
        },
        SectionKind::Elevator => elevator_fields(),
        SectionKind::Escalator => escalator_fields(),
        SectionKind::WaterTower => water_tower_fields(),
        SectionKind::Heater => heater_fields(),
        SectionKind::ParkingGarage => parking_garage_fields(),
    }
}

fn energy_section_fields(code: &str) -> Vec<FieldDescriptor> {
    // Every regular section collects its area and air-conditioning mode.
    let mut fields = vec![
        FieldDescriptor::new("a", "分區面積")
            .placeholder("分區面積 [m2]")
            .required(),
        FieldDescriptor::new("ac_operation", "空調營運類型")
            .placeholder("選擇空調營運類型")
            .input(select(AC_OPERATION_OPTIONS)),
        FieldDescriptor::new("ac_type", "是否為水冷式空調系統")
            .placeholder("選擇是否為水冷式空調系統")
            .input(select(AC_TYPE_OPTIONS)),
    ];
    fields.extend(es_shape_fields(catalog::es_shape(code)));
    fields
}

fn es_shape_fields(shape: EsShape) -> Vec<FieldDescriptor> {
    match shape {
        EsShape::Basic => Vec::new(),
        EsShape::Hotel => vec![
            FieldDescriptor::new("hotel-n_room", "客房數量")
                .placeholder("客房數量")
                .required(),
            FieldDescriptor::new("hotel-coef_usage_r_room", "年住房率")
                .placeholder("客房使用比例，介於 0 至 1")
                .input(FieldInput::bounded(0.0, 1.0, 0.01))
                .required(),
        ],
        EsShape::Hospital => vec![
            FieldDescriptor::new("hospital-n_hospitalbed", "病床數量")
                .placeholder("病床數量")
                .required(),
            FieldDescriptor::new("hospital-coef_usage_r_hospitalbed", "年病床占床率")
                .placeholder("介於 0 至 1")
                .input(FieldInput::bounded(0.0, 1.0, 0.01))
                .required(),
        ],
        EsShape::SportBathroom => vec![
            FieldDescriptor::new("sportbathroom-a", "盥洗區面積")
                .placeholder("m2（無盥洗區則免填）")
                .required(),
            FieldDescriptor::new("sportbathroom-coef_usage_h", "全年營運時數")
                .placeholder("h/year（無盥洗區則免填）")
                .required(),
        ],
        EsShape::SwimmingPoolSpa => vec![
            FieldDescriptor::new("swimmingpool-ec_heating", "游泳池加熱方式")
                .placeholder("選擇氣源熱泵加熱方式")
                .input(select(HEATING_OPTIONS)),
            FieldDescriptor::new("swimmingpool-v", "游泳池體積")
                .placeholder("m3")
                .required(),
            FieldDescriptor::new("swimmingpool-coef_usage_h", "游泳池全年營運時數")
                .placeholder("h/year")
                .input(FieldInput::bounded(0.0, 8760.0, 1.0))
                .required(),
            FieldDescriptor::new("swimmingpool-height_watertower", "游泳池水塔高度")
                .placeholder("m")
                .required(),
            FieldDescriptor::new("swimmingpool-constant_temperature", "游泳池是否恆溫")
                .placeholder("選擇是否恆溫")
                .input(select(YES_NO_OPTIONS)),
            FieldDescriptor::new("spa-ec_heating", "SPA 池加熱方式")
                .placeholder("選擇氣源熱泵加熱方式")
                .input(select(HEATING_OPTIONS)),
            FieldDescriptor::new("spa-v", "SPA 池體積")
                .placeholder("m3")
                .required(),
            FieldDescriptor::new("spa-coef_usage_h", "SPA 池全年營運時數")
                .placeholder("h/year")
                .input(FieldInput::bounded(0.0, 8760.0, 1.0))
                .required(),
            FieldDescriptor::new("spa-height_watertower", "SPA 池水塔高度")
                .placeholder("m")
                .required(),
            FieldDescriptor::new("spa-constant_temperature", "SPA 池是否恆溫")
                .placeholder("選擇是否恆溫")
                .input(select(YES_NO_OPTIONS)),
            // Bathing area is optional for pool sections.
            FieldDescriptor::new("sportbathroom-a", "盥洗區面積")
                .placeholder("m2（無盥洗區則免填）"),
            FieldDescriptor::new("sportbathroom-coef_usage_h", "盥洗區全年營運時數")
                .placeholder("h/year（無盥洗區則免填）")
                .input(FieldInput::bounded(0.0, 8760.0, 1.0)),
        ],
        EsShape::DiningArea => vec![
            FieldDescriptor::new("diningarea-a", "用餐區面積").placeholder("m2"),
            FieldDescriptor::new("diningarea-n_meal_per_day", "每天提供餐數")
                .placeholder("選擇每天提供餐數")
                .input(select(MEALS_PER_DAY_OPTIONS)),
            FieldDescriptor::new("diningarea-washdishes_by_hand", "是否手洗碗")
                .placeholder("選擇是否手洗碗")
                .input(select(WASH_DISHES_OPTIONS)),
            FieldDescriptor::new("diningarea-coef_usage_d", "全年營運天數")
                .placeholder("day/year")
                .input(FieldInput::bounded(0.0, 365.0, 1.0)),
        ],
        EsShape::ExhibitionArea => vec![FieldDescriptor::new(
            "exhibitionarea-coef_usage_d",
            "全年營運天數",
        )
        .placeholder("day/year")
        .input(FieldInput::bounded(0.0, 365.0, 1.0))],
        EsShape::PerformanceArea => vec![FieldDescriptor::new(
            "performancearea-coef_usage_d",
            "全年營運天數",
        )
        .placeholder("day/year")
        .input(FieldInput::bounded(0.0, 365.0, 1.0))],
    }
}

fn exclusive_section_fields(code: &str) -> Vec<FieldDescriptor> {
    let Some(shape) = catalog::exclusive_shape(code) else {
        // Minimal fallback for codes outside the table: collect the area.
        return vec![FieldDescriptor::new("a", "分區面積")
            .placeholder("m2")
            .required()];
    };
    match shape {
        ExclusiveShape::KitchenArea => vec![FieldDescriptor::new("a", "專用廚房面積")
            .placeholder("m2")
            .required()],
        ExclusiveShape::PlainArea => vec![FieldDescriptor::new("a", "分區面積")
            .placeholder("m2")
            .required()],
        ExclusiveShape::Refrigeration => vec![FieldDescriptor::new("a", "冷藏室面積")
            .placeholder("m2")
            .required()],
        ExclusiveShape::Freezing => vec![FieldDescriptor::new("a", "冷凍室面積")
            .placeholder("m2")
            .required()],
        ExclusiveShape::LaundryHotel => vec![
            FieldDescriptor::new("n_hotelroom", "洗衣負責客房數量")
                .placeholder("客房數量")
                .required(),
            FieldDescriptor::new("coef_usage_r_hotelroom", "年住房率")
                .placeholder("介於 0 至 1")
                .input(FieldInput::bounded(0.0, 1.0, 0.01))
                .required(),
        ],
        ExclusiveShape::LaundryHospital => vec![
            FieldDescriptor::new("n_hospitalbed", "洗衣負責病床數量")
                .placeholder("病床數量")
                .required(),
            FieldDescriptor::new("coef_usage_r_hospitalbed", "年病床占床率")
                .placeholder("介於 0 至 1")
                .input(FieldInput::bounded(0.0, 1.0, 0.01))
                .required(),
        ],
        ExclusiveShape::LaundryDining => vec![
            FieldDescriptor::new("a", "洗衣（餐具廚具等）負責用餐區面積")
                .placeholder("m2")
                .required(),
            FieldDescriptor::new("n_meal_per_day", "每天提供餐數")
                .placeholder("選擇每天提供餐數")
                .input(FieldInput::Select {
                    options: MEALS_PER_DAY_OPTIONS[..3].to_vec(),
                }),
        ],
        ExclusiveShape::Leisure => vec![
            FieldDescriptor::new("a", "休閒設施面積")
                .placeholder("m2")
                .required(),
            FieldDescriptor::new("coef_usage_h", "全年營運時數")
                .placeholder("h/year")
                .input(FieldInput::bounded(0.0, 8760.0, 1.0))
                .required(),
        ],
        ExclusiveShape::DataCenter => vec![
            FieldDescriptor::new("a", "機房面積")
                .placeholder("m2")
                .required(),
            FieldDescriptor::new("datacenter-coef_power_cabinetrack", "機房機櫃功率")
                .placeholder("kW")
                .required(),
        ],
    }
}

fn elevator_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("elevator_bottom_floor", "電梯最低樓層"),
        FieldDescriptor::new("elevator_top_floor", "電梯最高樓層"),
        FieldDescriptor::new("elevator_floor_offset", "電梯樓層修正量"),
        FieldDescriptor::new("elevator_es", "電梯經過耗能分區").input(FieldInput::MultiSelect {
            options: catalog::es_options(),
        }),
        FieldDescriptor::new("coef_eff", "電梯效率")
            .placeholder("選擇電梯種類")
            .input(select(ELEVATOR_EFF_OPTIONS)),
        FieldDescriptor::new("coef_people_per_elevator", "電梯額定人數").placeholder("人/臺"),
        FieldDescriptor::new("coef_load_per_elevator", "電梯額定載重").placeholder("kg/臺"),
        FieldDescriptor::new("coef_speed", "電梯額定速度").placeholder("m/min"),
    ]
}

fn escalator_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("escalator_es", "電扶梯經過耗能分區").input(FieldInput::MultiSelect {
            options: catalog::es_options(),
        }),
        FieldDescriptor::new("escalator_elevate_height", "電扶梯提升高度").placeholder("m"),
        FieldDescriptor::new("escalator_width", "電扶梯級寬")
            .placeholder("m")
            .input(FieldInput::bounded(0.0, 3.0, 0.01)),
    ]
}

fn water_tower_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("v", "水塔容積")
            .placeholder("m3")
            .required(),
        FieldDescriptor::new("height_watertower", "水塔高度")
            .placeholder("m")
            .required(),
    ]
}

fn heater_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("fuel", "加熱器燃料")
            .placeholder("選擇加熱器燃料")
            .input(select(HEATER_FUEL_OPTIONS)),
        FieldDescriptor::new("quantity", "加熱器數量")
            .placeholder("臺")
            .required(),
    ]
}

fn parking_garage_fields() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::new("a", "停車場面積")
        .placeholder("m2")
        .required()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(fields: &[FieldDescriptor]) -> Vec<&'static str> {
        fields.iter().map(|f| f.attr).collect()
    }

    #[test]
    fn hotel_template_extends_the_base_fields() {
        let fields = fields_for(SectionKind::EnergySection, Some("H1"));
        assert_eq!(
            attrs(&fields),
            vec![
                "a",
                "ac_operation",
                "ac_type",
                "hotel-n_room",
                "hotel-coef_usage_r_room"
            ]
        );
    }

    #[test]
    fn hotel_like_codes_render_the_same_template() {
        let h1 = fields_for(SectionKind::EnergySection, Some("H1"));
        let h2 = fields_for(SectionKind::EnergySection, Some("H2"));
        assert_eq!(h1, h2);
    }

    #[test]
    fn unknown_es_code_gets_the_base_fields_only() {
        let fields = fields_for(SectionKind::EnergySection, Some("Z99"));
        assert_eq!(attrs(&fields), vec!["a", "ac_operation", "ac_type"]);
    }

    #[test]
    fn unknown_exclusive_code_gets_the_area_fallback() {
        let fields = fields_for(SectionKind::ExclusiveSection, Some("X0"));
        assert_eq!(attrs(&fields), vec!["a"]);
    }

    #[test]
    fn pool_template_covers_pool_spa_and_bathroom() {
        let fields = fields_for(SectionKind::EnergySection, Some("L6-2"));
        let attrs = attrs(&fields);
        assert!(attrs.contains(&"swimmingpool-v"));
        assert!(attrs.contains(&"spa-v"));
        assert!(attrs.contains(&"sportbathroom-a"));
    }

    #[test]
    fn facility_kinds_ignore_the_category_code() {
        assert_eq!(
            fields_for(SectionKind::Elevator, None),
            fields_for(SectionKind::Elevator, Some("H1"))
        );
        assert_eq!(fields_for(SectionKind::ParkingGarage, None).len(), 1);
    }

    #[test]
    fn category_kinds_render_nothing_before_a_code_is_picked() {
        assert!(fields_for(SectionKind::EnergySection, None).is_empty());
        assert!(fields_for(SectionKind::ExclusiveSection, None).is_empty());
    }
}
