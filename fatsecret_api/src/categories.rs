//! Food category endpoints.

use crate::{
    transport::{Params, Transport},
    types::{FoodCategories, FoodCategory, FoodSubCategories},
    Client, Error,
};

const FOOD_CATEGORIES_GET: &str = "food_categories.get";
const FOOD_SUB_CATEGORIES_GET: &str = "food_sub_categories.get";

impl<T: Transport> Client<T> {
    /// Lists every food category, in the order the server returns them.
    pub async fn list_food_categories(&self) -> Result<Vec<FoodCategory>, Error> {
        let payload: FoodCategories = self
            .call(FOOD_CATEGORIES_GET, &Params::new(), "food_categories")
            .await?;
        Ok(payload.categories)
    }

    /// Lists the sub-category names of one category.
    ///
    /// `category_id` is sent as-is; the server decides whether it exists.
    pub async fn list_food_sub_categories(&self, category_id: &str) -> Result<Vec<String>, Error> {
        let mut params = Params::new();
        params.insert("food_category_id".to_string(), category_id.to_string());
        let payload: FoodSubCategories = self
            .call(FOOD_SUB_CATEGORIES_GET, &params, "food_sub_categories")
            .await?;
        Ok(payload.sub_categories)
    }
}
