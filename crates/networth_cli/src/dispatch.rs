use crate::cli::{Cli, Command, UpdateCategoryArgs, UpdateItemArgs};
use crate::output;
use log::info;
use networth_core::{
    core_version, init_logging, next_month, previous_month, AppPaths, CategoryUpdate,
    ConfigError, DocumentStorage, ItemUpdate, LogLevel, MonthError, NetWorthStore, RepoError,
    SqliteSlotRepository, StoreError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Repo(RepoError),
    Store(StoreError),
    Io { path: PathBuf, source: std::io::Error },
    NotFound { kind: &'static str, id: String },
    ConfirmationRequired(&'static str),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "cannot open data store: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::ConfirmationRequired(command) => {
                write!(f, "`{command}` discards data; rerun with --yes to confirm")
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. } | Self::ConfirmationRequired(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<MonthError> for CliError {
    fn from(value: MonthError) -> Self {
        Self::Store(StoreError::InvalidMonth(value))
    }
}

/// Opens the on-disk store for `cli` and runs its command.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    if matches!(cli.command, Command::Version) {
        return Ok(format!("networth_core version={}\n", core_version()));
    }

    let paths = AppPaths::resolve(cli.home.as_deref())?;
    paths.ensure_home()?;

    let level = cli.log_level.unwrap_or_else(LogLevel::default_for_build);
    if let Err(err) = init_logging(level, &paths.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        paths.db_path.display()
    );

    let repo = SqliteSlotRepository::open(&paths.db_path)?;
    let mut store = NetWorthStore::open(DocumentStorage::new(repo));
    execute(&mut store, &cli.command)
}

/// Runs one command against `store` and returns the text to print.
pub fn execute(store: &mut NetWorthStore, command: &Command) -> Result<String, CliError> {
    match command {
        Command::Summary => Ok(output::summary_text(store)),
        Command::List => Ok(output::list_text(store)),
        Command::AddCategory { name, kind } => {
            let id = store.add_category(name.as_str(), *kind);
            Ok(format!("Added {} category {id}.\n", kind.as_str()))
        }
        Command::UpdateCategory(args) => update_category(store, args),
        Command::DeleteCategory { id, yes } => {
            confirm(*yes, "delete-category")?;
            if !store.delete_category(id) {
                return Err(not_found("category", id));
            }
            Ok(format!("Deleted category {id} and its items.\n"))
        }
        Command::AddItem { category_id, name } => {
            let id = store.add_item(category_id, name.as_str())?;
            Ok(format!("Added item {id} to {category_id}.\n"))
        }
        Command::UpdateItem(args) => update_item(store, args),
        Command::SetValue {
            item_id,
            month,
            value,
        } => {
            if !store.update_item_value(item_id, month, *value)? {
                return Err(not_found("item", item_id));
            }
            Ok(format!("Set {item_id} for {month}.\n"))
        }
        Command::DeleteItem { id, yes } => {
            confirm(*yes, "delete-item")?;
            if !store.delete_item(id) {
                return Err(not_found("item", id));
            }
            Ok(format!("Deleted item {id}.\n"))
        }
        Command::Navigate { month } => {
            store.navigate_to_month(month)?;
            Ok(output::summary_text(store))
        }
        Command::Next => {
            let month = next_month(store.current_month())?;
            store.navigate_to_month(&month)?;
            Ok(output::summary_text(store))
        }
        Command::Prev => {
            let month = previous_month(store.current_month())?;
            store.navigate_to_month(&month)?;
            Ok(output::summary_text(store))
        }
        Command::Export { output } => {
            let json = store.export_data()?;
            match output {
                Some(path) => {
                    fs::write(path, json).map_err(|source| CliError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    Ok(format!("Exported to {}.\n", path.display()))
                }
                None => Ok(format!("{json}\n")),
            }
        }
        Command::Import { path, yes } => {
            confirm(*yes, "import")?;
            let text = fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            store.import_data(&text)?;
            Ok(format!(
                "Imported {} categories and {} items.\n",
                store.categories().len(),
                store.items().len()
            ))
        }
        Command::Reset { yes } => {
            confirm(*yes, "reset")?;
            store.reset_data();
            Ok("Restored example data.\n".to_string())
        }
        Command::Version => Ok(format!("networth_core version={}\n", core_version())),
    }
}

fn update_category(store: &mut NetWorthStore, args: &UpdateCategoryArgs) -> Result<String, CliError> {
    let update = CategoryUpdate {
        name: args.name.clone(),
        kind: args.kind,
        order: args.order,
        color: args.color.clone(),
    };
    if update.is_empty() {
        return Ok("Nothing to update.\n".to_string());
    }
    if !store.update_category(&args.id, &update) {
        return Err(not_found("category", &args.id));
    }
    Ok(format!("Updated category {}.\n", args.id))
}

fn update_item(store: &mut NetWorthStore, args: &UpdateItemArgs) -> Result<String, CliError> {
    let update = ItemUpdate {
        category_id: args.category_id.clone(),
        name: args.name.clone(),
        order: args.order,
        monthly_values: None,
    };
    if update.is_empty() {
        return Ok("Nothing to update.\n".to_string());
    }
    if !store.update_item(&args.id, &update)? {
        return Err(not_found("item", &args.id));
    }
    Ok(format!("Updated item {}.\n", args.id))
}

fn confirm(yes: bool, command: &'static str) -> Result<(), CliError> {
    if yes {
        Ok(())
    } else {
        Err(CliError::ConfirmationRequired(command))
    }
}

fn not_found(kind: &'static str, id: &str) -> CliError {
    CliError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, CliError};
    use crate::cli::Command;
    use networth_core::{default_document_for, NetWorthStore};

    fn store() -> NetWorthStore {
        NetWorthStore::new(default_document_for("2025-01"))
    }

    #[test]
    fn destructive_commands_need_confirmation() {
        let mut store = store();
        let err = execute(
            &mut store,
            &Command::DeleteCategory {
                id: "liabilities".to_string(),
                yes: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfirmationRequired("delete-category")));
        assert!(store.data().has_category("liabilities"));

        execute(&mut store, &Command::Reset { yes: false }).unwrap_err();
    }

    #[test]
    fn set_value_reports_unknown_item() {
        let mut store = store();
        let err = execute(
            &mut store,
            &Command::SetValue {
                item_id: "ghost".to_string(),
                month: "2025-01".to_string(),
                value: 1.0,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "item not found: ghost");
    }

    #[test]
    fn next_and_prev_move_the_window() {
        let mut store = store();
        execute(&mut store, &Command::Next).unwrap();
        assert_eq!(store.current_month(), "2025-02");
        execute(&mut store, &Command::Prev).unwrap();
        execute(&mut store, &Command::Prev).unwrap();
        assert_eq!(store.current_month(), "2024-12");
        assert_eq!(store.display_months()[5], "2025-05");
    }

    #[test]
    fn export_then_import_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");
        let mut source = store();
        execute(
            &mut source,
            &Command::Export {
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let mut target = NetWorthStore::new(default_document_for("2030-06"));
        target.delete_category("real-estate");
        let message = execute(&mut target, &Command::Import { path, yes: true }).unwrap();
        assert_eq!(message, "Imported 4 categories and 16 items.\n");
        assert_eq!(target.data(), source.data());
    }
}
