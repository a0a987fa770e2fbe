mod envelope;
pub use self::envelope::{Envelope, ErrorResponse};
pub(crate) use self::envelope::decode;

mod category;
pub use self::category::{FoodCategories, FoodCategory, FoodSubCategories};
