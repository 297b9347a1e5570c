//! Preset appliance catalog backing the quick estimate.
//!
//! Ratings are typical nameplate values for common Nigerian household
//! appliances; the detailed estimate accepts arbitrary entries instead.

use serde::Serialize;

use crate::domain::ApplianceLoad;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceCategory {
    Cooling,
    Kitchen,
    Lighting,
    Entertainment,
    Office,
    Water,
    Laundry,
}

/// One preset appliance with its typical rating and daily run time.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: ApplianceCategory,
    pub watts: f64,
    pub typical_hours_per_day: f64,
}

impl CatalogEntry {
    /// Build a load entry for `count` units running the typical daily hours.
    pub fn to_load(&self, count: u32) -> ApplianceLoad {
        ApplianceLoad::new(self.name, self.watts, count, self.typical_hours_per_day)
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Refrigerator",
        category: ApplianceCategory::Kitchen,
        watts: 150.0,
        typical_hours_per_day: 24.0,
    },
    CatalogEntry {
        name: "Chest Freezer",
        category: ApplianceCategory::Kitchen,
        watts: 250.0,
        typical_hours_per_day: 24.0,
    },
    CatalogEntry {
        name: "LED Bulb",
        category: ApplianceCategory::Lighting,
        watts: 9.0,
        typical_hours_per_day: 6.0,
    },
    CatalogEntry {
        name: "Security Light",
        category: ApplianceCategory::Lighting,
        watts: 30.0,
        typical_hours_per_day: 12.0,
    },
    CatalogEntry {
        name: "Ceiling Fan",
        category: ApplianceCategory::Cooling,
        watts: 70.0,
        typical_hours_per_day: 10.0,
    },
    CatalogEntry {
        name: "Standing Fan",
        category: ApplianceCategory::Cooling,
        watts: 55.0,
        typical_hours_per_day: 8.0,
    },
    CatalogEntry {
        name: "Air Conditioner (1 HP)",
        category: ApplianceCategory::Cooling,
        watts: 750.0,
        typical_hours_per_day: 8.0,
    },
    CatalogEntry {
        name: "Air Conditioner (1.5 HP)",
        category: ApplianceCategory::Cooling,
        watts: 1_100.0,
        typical_hours_per_day: 8.0,
    },
    CatalogEntry {
        name: "Television",
        category: ApplianceCategory::Entertainment,
        watts: 80.0,
        typical_hours_per_day: 6.0,
    },
    CatalogEntry {
        name: "Satellite Decoder",
        category: ApplianceCategory::Entertainment,
        watts: 25.0,
        typical_hours_per_day: 6.0,
    },
    CatalogEntry {
        name: "Sound System",
        category: ApplianceCategory::Entertainment,
        watts: 120.0,
        typical_hours_per_day: 3.0,
    },
    CatalogEntry {
        name: "Laptop",
        category: ApplianceCategory::Office,
        watts: 65.0,
        typical_hours_per_day: 8.0,
    },
    CatalogEntry {
        name: "Desktop Computer",
        category: ApplianceCategory::Office,
        watts: 200.0,
        typical_hours_per_day: 8.0,
    },
    CatalogEntry {
        name: "Wi-Fi Router",
        category: ApplianceCategory::Office,
        watts: 15.0,
        typical_hours_per_day: 24.0,
    },
    CatalogEntry {
        name: "Phone Charger",
        category: ApplianceCategory::Office,
        watts: 10.0,
        typical_hours_per_day: 4.0,
    },
    CatalogEntry {
        name: "Microwave",
        category: ApplianceCategory::Kitchen,
        watts: 1_000.0,
        typical_hours_per_day: 0.5,
    },
    CatalogEntry {
        name: "Electric Kettle",
        category: ApplianceCategory::Kitchen,
        watts: 1_500.0,
        typical_hours_per_day: 0.5,
    },
    CatalogEntry {
        name: "Blender",
        category: ApplianceCategory::Kitchen,
        watts: 400.0,
        typical_hours_per_day: 0.25,
    },
    CatalogEntry {
        name: "Washing Machine",
        category: ApplianceCategory::Laundry,
        watts: 500.0,
        typical_hours_per_day: 1.0,
    },
    CatalogEntry {
        name: "Electric Iron",
        category: ApplianceCategory::Laundry,
        watts: 1_000.0,
        typical_hours_per_day: 0.5,
    },
    CatalogEntry {
        name: "Water Pump (1 HP)",
        category: ApplianceCategory::Water,
        watts: 750.0,
        typical_hours_per_day: 1.0,
    },
    CatalogEntry {
        name: "Water Dispenser",
        category: ApplianceCategory::Water,
        watts: 100.0,
        typical_hours_per_day: 10.0,
    },
];

/// Look a preset up by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregate_load;

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(find("refrigerator").is_some());
        assert!(find("REFRIGERATOR").is_some());
        assert!(find("Toaster").is_none());
    }

    #[test]
    fn test_to_load_uses_typical_hours() {
        let load = find("Refrigerator").unwrap().to_load(2);
        assert_eq!(load.watts_each, 150.0);
        assert_eq!(load.unit_count, 2);
        assert_eq!(load.hours_per_day, 24.0);
    }

    #[test]
    fn test_every_entry_passes_load_validation() {
        let loads: Vec<_> = CATALOG.iter().map(|entry| entry.to_load(1)).collect();
        assert!(aggregate_load(&loads).is_ok());
    }

    #[test]
    fn test_entry_names_are_unique() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert!(
                !CATALOG[i + 1..].iter().any(|other| other.name.eq_ignore_ascii_case(entry.name)),
                "duplicate catalog entry: {}",
                entry.name
            );
        }
    }
}
