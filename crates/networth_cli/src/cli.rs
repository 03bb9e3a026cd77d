use clap::{Args, Parser, Subcommand};
use networth_core::{CategoryType, LogLevel};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "networth", about = "Track household net worth month by month")]
pub struct Cli {
    /// Data directory (defaults to $NETWORTH_HOME or ~/.networth).
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show totals and month-over-month change for the display window.
    Summary,
    /// List categories and their items with current-month values.
    List,
    /// Add a category at the end of its type.
    AddCategory {
        name: String,
        #[arg(long = "type", value_parser = parse_category_type)]
        kind: CategoryType,
    },
    /// Change fields of a category.
    UpdateCategory(UpdateCategoryArgs),
    /// Delete a category and all of its items.
    DeleteCategory {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Add an item at the end of a category.
    AddItem { category_id: String, name: String },
    /// Change fields of an item.
    UpdateItem(UpdateItemArgs),
    /// Record one month's value for an item.
    SetValue {
        item_id: String,
        month: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Delete one item.
    DeleteItem {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Show six months starting at MONTH (YYYY-MM).
    Navigate { month: String },
    /// Move the display window one month forward.
    Next,
    /// Move the display window one month back.
    Prev,
    /// Print the document as JSON, or write it to a file.
    Export {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace all data with a previously exported JSON file.
    Import {
        path: PathBuf,
        #[arg(long)]
        yes: bool,
    },
    /// Replace all data with the example document.
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Print the core library version.
    Version,
}

#[derive(Debug, Args)]
pub struct UpdateCategoryArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type", value_parser = parse_category_type)]
    pub kind: Option<CategoryType>,
    #[arg(long)]
    pub order: Option<u32>,
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateItemArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Move the item to another category.
    #[arg(long = "category")]
    pub category_id: Option<String>,
    #[arg(long)]
    pub order: Option<u32>,
}

pub fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse::<LogLevel>().map_err(|err| err.to_string())
}

pub fn parse_category_type(value: &str) -> Result<CategoryType, String> {
    CategoryType::parse(value).ok_or_else(|| "type must be one of: asset, liability".to_string())
}
