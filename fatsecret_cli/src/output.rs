use std::io::Write;

use anyhow::Result;
use fatsecret_api::types::FoodCategory;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct SubCategoryRow {
    #[tabled(rename = "Sub-category")]
    #[serde(rename = "Sub-category")]
    name: String,
}

// -- Row builders --

fn build_category_rows(categories: &[FoodCategory]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
        })
        .collect()
}

fn build_sub_category_rows(names: &[String]) -> Vec<SubCategoryRow> {
    names
        .iter()
        .map(|n| SubCategoryRow { name: n.clone() })
        .collect()
}

// -- Rendering --

pub fn print_categories(categories: &[FoodCategory], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_category_rows(categories))),
        OutputFormat::Markdown => println!("{}", markdown(build_category_rows(categories))),
        OutputFormat::Csv => write_csv(std::io::stdout(), &build_category_rows(categories))?,
        OutputFormat::Json => print_json(&categories),
        OutputFormat::Xml => println!("{}", xml_output::categories_to_xml(categories)?),
    }
    Ok(())
}

pub fn print_sub_categories(names: &[String], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_sub_category_rows(names))),
        OutputFormat::Markdown => println!("{}", markdown(build_sub_category_rows(names))),
        OutputFormat::Csv => write_csv(std::io::stdout(), &build_sub_category_rows(names))?,
        OutputFormat::Json => print_json(&names),
        OutputFormat::Xml => println!("{}", xml_output::sub_categories_to_xml(names)?),
    }
    Ok(())
}

fn markdown<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    table.to_string()
}

fn write_csv<W: Write, T: Serialize>(out: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_categories_fixture() -> Vec<FoodCategory> {
        let json_str = include_str!("../../fatsecret_api/tests/fixtures/food_categories.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["food_categories"]["food_category"].clone()).unwrap()
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Xml);
        assert_eq!(OutputFormat::parse("bogus"), OutputFormat::Table);
    }

    #[test]
    fn test_build_category_rows_mapping() {
        let categories = load_categories_fixture();
        let rows = build_category_rows(&categories);
        assert_eq!(rows.len(), 4);

        let row = &rows[1];
        assert_eq!(row.id, "2");
        assert_eq!(row.name, "Beverages");
        assert!(row.description.contains("coffee"));
    }

    #[test]
    fn test_build_category_rows_empty() {
        assert!(build_category_rows(&[]).is_empty());
    }

    #[test]
    fn test_build_sub_category_rows_keep_order() {
        let names = vec!["Bread".to_string(), "Bagels".to_string()];
        let rows = build_sub_category_rows(&names);
        assert_eq!(rows[0].name, "Bread");
        assert_eq!(rows[1].name, "Bagels");
    }

    #[test]
    fn test_csv_categories_headers() {
        let csv = csv_from_rows(&build_category_rows(&load_categories_fixture()));
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "ID,Name,Description");
        assert!(lines.next().unwrap().starts_with("1,Baked Products,"));
    }

    #[test]
    fn test_csv_sub_categories_headers() {
        let csv = csv_from_rows(&build_sub_category_rows(&["Bagels".to_string()]));
        assert_eq!(csv, "Sub-category\nBagels\n");
    }

    #[test]
    fn test_markdown_categories_structure() {
        let md = markdown(build_category_rows(&load_categories_fixture()));
        let first = md.lines().next().unwrap();
        assert!(first.starts_with('|'));
        assert!(first.contains("ID"));
        assert!(first.contains("Description"));
        assert!(md.contains("Dairy and Egg Products"));
    }

    #[test]
    fn test_json_categories_serializable() {
        let categories = load_categories_fixture();
        let json = serde_json::to_value(&categories).unwrap();
        assert_eq!(json[0]["food_category_id"], "1");
        assert_eq!(json.as_array().unwrap().len(), 4);
    }
}
