use anyhow::{Context, Result};
use clap::Args;
use fatsecret_api::{Client, Transport};

use crate::output::{print_sub_categories, OutputFormat};

#[derive(Args)]
pub struct SubCategoriesArgs {
    /// Food category ID, as shown by `fatsecret categories`
    pub category_id: String,
}

pub async fn run<T: Transport>(
    args: &SubCategoriesArgs,
    client: &Client<T>,
    format: &OutputFormat,
) -> Result<()> {
    let names = client
        .list_food_sub_categories(&args.category_id)
        .await
        .with_context(|| format!("listing sub-categories of category {}", args.category_id))?;
    eprintln!(
        "{} sub-categories in category {}",
        names.len(),
        args.category_id
    );
    print_sub_categories(&names, format)
}
