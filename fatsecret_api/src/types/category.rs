//! Food category listings returned by `food_categories.get` and
//! `food_sub_categories.get`.

use serde::{Deserialize, Serialize};

use super::envelope::one_or_many;

/// One row of the food category listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoodCategory {
    /// Category identifier, passed back as `food_category_id` when listing sub-categories.
    #[serde(rename = "food_category_id")]
    pub id: String,

    #[serde(rename = "food_category_name")]
    pub name: String,

    #[serde(rename = "food_category_description", default)]
    pub description: String,
}

/// Payload of a `food_categories` envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoodCategories {
    /// Categories in server order. A single category may arrive as a bare object.
    #[serde(rename = "food_category", default, deserialize_with = "one_or_many")]
    pub categories: Vec<FoodCategory>,
}

/// Payload of a `food_sub_categories` envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoodSubCategories {
    /// Sub-category names in server order.
    #[serde(rename = "food_sub_category", default, deserialize_with = "one_or_many")]
    pub sub_categories: Vec<String>,
}
