//! Static category catalogue for the estimation form.
//!
//! The regulatory catalogue assigns every energy-section category a code
//! (`H1`, `I3`, `N2-2`, ...). Categories cluster into a small number of
//! shape-equivalence classes: every code in a class exposes the same extra
//! input fields on the form. The tables here are reference data; the label
//! text follows the published catalogue.

use crate::fields::SelectOption;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// Shape classes
// ============================================================================

/// Shape class of a regular energy-section category.
///
/// Determines which extra fields the category exposes on top of the
/// common area / air-conditioning fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EsShape {
    /// Area and air-conditioning fields only.
    #[default]
    Basic,
    Hotel,
    Hospital,
    SportBathroom,
    SwimmingPoolSpa,
    DiningArea,
    ExhibitionArea,
    PerformanceArea,
}

impl EsShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Hotel => "hotel",
            Self::Hospital => "hospital",
            Self::SportBathroom => "sportbathroom",
            Self::SwimmingPoolSpa => "swimmingpool_spa",
            Self::DiningArea => "diningarea",
            Self::ExhibitionArea => "exhibitionarea",
            Self::PerformanceArea => "performancearea",
        }
    }
}

/// Shape class of an exclusive (non-assessed) energy-section category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusiveShape {
    KitchenArea,
    PlainArea,
    Refrigeration,
    Freezing,
    LaundryHotel,
    LaundryHospital,
    LaundryDining,
    Leisure,
    DataCenter,
}

impl ExclusiveShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KitchenArea => "kitchen",
            Self::PlainArea => "plain",
            Self::Refrigeration => "refrigeration",
            Self::Freezing => "freezing",
            Self::LaundryHotel => "laundry_hotel",
            Self::LaundryHospital => "laundry_hospital",
            Self::LaundryDining => "laundry_dining",
            Self::Leisure => "leisure",
            Self::DataCenter => "datacenter",
        }
    }
}

// ============================================================================
// Catalogue tables
// ============================================================================

pub struct EsCatalogEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub shape: EsShape,
}

pub struct ExclusiveCatalogEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub shape: ExclusiveShape,
}

macro_rules! es_entry {
    ($code:literal, $label:literal, $shape:ident) => {
        EsCatalogEntry {
            code: $code,
            label: $label,
            shape: EsShape::$shape,
        }
    };
}

macro_rules! excl_entry {
    ($code:literal, $label:literal, $shape:ident) => {
        ExclusiveCatalogEntry {
            code: $code,
            label: $label,
            shape: ExclusiveShape::$shape,
        }
    };
}

/// Regular energy-section categories, ordered as in the published catalogue.
pub static ES_CATALOG: &[EsCatalogEntry] = &[
    es_entry!("A1", "醫院急性一般病房區", Hospital),
    es_entry!("A2", "醫院精神科病房區", Hospital),
    es_entry!("B1", "辦公區", Basic),
    es_entry!("B2", "金融營業區", Basic),
    es_entry!("C1", "百貨商場區", Basic),
    es_entry!("C2", "量販店區", Basic),
    es_entry!("C3", "超級市場區", Basic),
    es_entry!("C4", "便利商店區", Basic),
    es_entry!("D1", "博物館展示區", ExhibitionArea),
    es_entry!("D2", "美術館展示區", ExhibitionArea),
    es_entry!("D3", "圖書館閱覽區", ExhibitionArea),
    es_entry!("E1", "展覽館展示區", ExhibitionArea),
    es_entry!("E2", "會議中心區", Basic),
    es_entry!("F1", "電影院觀眾席區", PerformanceArea),
    es_entry!("F2", "劇院觀眾席區", PerformanceArea),
    es_entry!("G1", "音樂廳觀眾席區", PerformanceArea),
    es_entry!("G2", "集會堂觀眾席區", PerformanceArea),
    es_entry!("H1", "國際觀光旅館客房區", Hotel),
    es_entry!("H2", "一般旅館客房區", Hotel),
    es_entry!("H7", "健身房區", SportBathroom),
    es_entry!("H8", "旅館附設游泳池區", SwimmingPoolSpa),
    es_entry!("H9", "三溫暖區", SportBathroom),
    es_entry!("H10", "宴會廳區", DiningArea),
    es_entry!("I1", "中式餐廳區", DiningArea),
    es_entry!("I2", "西式餐廳區", DiningArea),
    es_entry!("I3", "日式餐廳區", DiningArea),
    es_entry!("I4", "自助餐廳區", DiningArea),
    es_entry!("I5", "速食餐廳區", DiningArea),
    es_entry!("I6", "咖啡簡餐區", DiningArea),
    es_entry!("I7", "小吃攤販區", DiningArea),
    es_entry!("J1", "教室區", Basic),
    es_entry!("J2", "實驗室區", Basic),
    es_entry!("J3", "電腦教室區", Basic),
    es_entry!("J4", "補習班教室區", Basic),
    es_entry!("K1", "護理之家病房區", Hospital),
    es_entry!("K2", "幼兒園活動區", Basic),
    es_entry!("K3", "安養機構住房區", Hospital),
    es_entry!("K8", "產後護理機構住房區", Hospital),
    es_entry!("K9", "長期照顧機構住房區", Hospital),
    es_entry!("L1", "高爾夫練習場區", Basic),
    es_entry!("L2", "運動中心區", SportBathroom),
    es_entry!("L3", "室內運動場區", SportBathroom),
    es_entry!("L4-1", "撞球館區", Basic),
    es_entry!("L4-2", "保齡球館區", SportBathroom),
    es_entry!("L5", "遊藝場區", Basic),
    es_entry!("L6-1", "室內溫水游泳池區", SwimmingPoolSpa),
    es_entry!("L6-2", "室內游泳池區", SwimmingPoolSpa),
    es_entry!("L6-3", "水療 SPA 區", SwimmingPoolSpa),
    es_entry!("M1", "美容美髮區", Basic),
    es_entry!("M2", "洗衣店區", Basic),
    es_entry!("NB13", "梯廳與公共服務區", Basic),
];

/// Exclusive (non-assessed) categories.
pub static EXCLUSIVE_CATALOG: &[ExclusiveCatalogEntry] = &[
    excl_entry!("N1-1-1", "中式餐廳專用廚房", KitchenArea),
    excl_entry!("N1-1-2", "西式餐廳專用廚房", KitchenArea),
    excl_entry!("N1-2-1", "自助餐廳專用廚房", KitchenArea),
    excl_entry!("N1-2-2", "速食餐廳專用廚房", KitchenArea),
    excl_entry!("N1-3-1", "宴會廳專用廚房", KitchenArea),
    excl_entry!("N1-3-2", "團膳專用廚房", KitchenArea),
    excl_entry!("N1-4-1", "醫院專用廚房", KitchenArea),
    excl_entry!("N1-4-2", "安養機構專用廚房", KitchenArea),
    excl_entry!("N1-5", "學校專用廚房", KitchenArea),
    excl_entry!("N1-6", "小吃攤販專用廚房", KitchenArea),
    excl_entry!("N1-7", "其他專用廚房", KitchenArea),
    excl_entry!("N2-1-1", "旅館專用洗衣房", LaundryHotel),
    excl_entry!("N2-1-2", "安養機構專用洗衣房", LaundryHotel),
    excl_entry!("N2-1-3", "餐廳專用洗衣房", LaundryDining),
    excl_entry!("N2-2", "醫院專用洗衣房", LaundryHospital),
    excl_entry!("N3-1-1", "電信機房", PlainArea),
    excl_entry!("N3-1-2", "網路機房", PlainArea),
    excl_entry!("N3-2-1", "廣播播音室", PlainArea),
    excl_entry!("N3-2-2", "電視攝影棚", PlainArea),
    excl_entry!("N3-3-1", "放映室", PlainArea),
    excl_entry!("N4-1", "倉儲區", PlainArea),
    excl_entry!("N4-2", "物流理貨區", PlainArea),
    excl_entry!("N4-3", "車道及卸貨區", PlainArea),
    excl_entry!("N5", "冷藏室", Refrigeration),
    excl_entry!("N6", "冷凍室", Freezing),
    excl_entry!("N7", "附設休閒設施區", Leisure),
    excl_entry!("N8", "資訊機房區", DataCenter),
];

// ============================================================================
// Lookup
// ============================================================================

static ES_SHAPE_INDEX: Lazy<HashMap<&'static str, EsShape>> = Lazy::new(|| {
    ES_CATALOG
        .iter()
        .map(|entry| (entry.code, entry.shape))
        .collect()
});

static EXCLUSIVE_SHAPE_INDEX: Lazy<HashMap<&'static str, ExclusiveShape>> = Lazy::new(|| {
    EXCLUSIVE_CATALOG
        .iter()
        .map(|entry| (entry.code, entry.shape))
        .collect()
});

/// Shape class for a regular energy-section code.
///
/// Unknown codes fall back to [`EsShape::Basic`] so the form still renders
/// the common area fields for catalogue additions the table does not know.
pub fn es_shape(code: &str) -> EsShape {
    ES_SHAPE_INDEX.get(code).copied().unwrap_or_default()
}

/// Shape class for an exclusive code. Unknown codes get `None`; the
/// dispatcher renders the minimal area-only fallback for those.
pub fn exclusive_shape(code: &str) -> Option<ExclusiveShape> {
    EXCLUSIVE_SHAPE_INDEX.get(code).copied()
}

/// Select options for the regular energy-section category picker.
pub fn es_options() -> Vec<SelectOption> {
    ES_CATALOG
        .iter()
        .map(|entry| SelectOption {
            value: entry.code,
            label: entry.label,
        })
        .collect()
}

/// Select options for the exclusive category picker.
pub fn exclusive_options() -> Vec<SelectOption> {
    EXCLUSIVE_CATALOG
        .iter()
        .map(|entry| SelectOption {
            value: entry.code,
            label: entry.label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_codes_share_a_shape() {
        assert_eq!(es_shape("H1"), EsShape::Hotel);
        assert_eq!(es_shape("H2"), EsShape::Hotel);
    }

    #[test]
    fn hospital_like_codes_share_a_shape() {
        for code in ["A1", "A2", "K1", "K3", "K8", "K9"] {
            assert_eq!(es_shape(code), EsShape::Hospital, "code {code}");
        }
    }

    #[test]
    fn unknown_code_falls_back_to_basic() {
        assert_eq!(es_shape("Z99"), EsShape::Basic);
    }

    #[test]
    fn exclusive_kitchen_codes_resolve() {
        assert_eq!(exclusive_shape("N1-5"), Some(ExclusiveShape::KitchenArea));
        assert_eq!(exclusive_shape("N8"), Some(ExclusiveShape::DataCenter));
        assert_eq!(exclusive_shape("X1"), None);
    }

    #[test]
    fn catalogue_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in ES_CATALOG {
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
        }
        let mut seen = std::collections::HashSet::new();
        for entry in EXCLUSIVE_CATALOG {
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
        }
    }
}
