//! Category management commands for CLI.

use clap::Subcommand;
use momentum_core::Tracker;

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Create a new category
    Add {
        /// Display name
        name: String,
        /// Color token (default: blue)
        #[arg(long, default_value = "blue")]
        color: String,
        /// Icon token (default: Target)
        #[arg(long, default_value = "Target")]
        icon: String,
    },
    /// List categories
    List,
    /// Update a category
    Update {
        /// Category ID
        id: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New color token
        #[arg(long)]
        color: Option<String>,
        /// New icon token
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete a category (tasks are kept and detached)
    Delete {
        /// Category ID
        id: String,
    },
}

pub fn run(action: CategoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = Tracker::open()?;

    match action {
        CategoryAction::Add { name, color, icon } => {
            let category = tracker.add_category(&name, &color, &icon)?;
            println!("Category created: {}", category.id);
            println!("{}", serde_json::to_string_pretty(&category)?);
        }
        CategoryAction::List => {
            let categories = tracker.categories()?;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        CategoryAction::Update {
            id,
            name,
            color,
            icon,
        } => {
            let mut category = tracker
                .categories()?
                .into_iter()
                .find(|c| c.id == id)
                .ok_or(format!("Category not found: {id}"))?;

            if let Some(n) = name {
                category.name = n;
            }
            if let Some(c) = color {
                category.color = c;
            }
            if let Some(i) = icon {
                category.icon = i;
            }

            tracker.update_category(&category)?;
            println!("{}", serde_json::to_string_pretty(&category)?);
        }
        CategoryAction::Delete { id } => {
            let detached = tracker.delete_category(&id)?;
            println!("Category deleted: {id} ({detached} tasks detached)");
        }
    }
    Ok(())
}
