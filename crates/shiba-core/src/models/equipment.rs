use serde::{Deserialize, Serialize};

use super::lenient;

/// A piece of equipment from the catalog's equipment table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Key of the entry in the equipment table
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Broad grouping such as "Free Weight", "Machine" or "Bodyweight"
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub subcategory: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mobility: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub resistance_type: String,
}

/// Equipment entry as listed within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentSummary {
    pub id: String,
    pub name: String,
    pub subcategory: String,
    pub mobility: String,
    pub resistance_type: String,
}

impl From<&Equipment> for EquipmentSummary {
    fn from(equipment: &Equipment) -> Self {
        Self {
            id: equipment.id.clone(),
            name: equipment.name.clone(),
            subcategory: equipment.subcategory.clone(),
            mobility: equipment.mobility.clone(),
            resistance_type: equipment.resistance_type.clone(),
        }
    }
}
