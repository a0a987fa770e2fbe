use anyhow::Result;
use clap::Args;
use fatsecret_api::{Client, Transport};

use crate::output::{print_categories, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {}

pub async fn run<T: Transport>(
    _args: &CategoriesArgs,
    client: &Client<T>,
    format: &OutputFormat,
) -> Result<()> {
    let categories = client.list_food_categories().await?;
    eprintln!("{} food categories", categories.len());
    print_categories(&categories, format)
}
