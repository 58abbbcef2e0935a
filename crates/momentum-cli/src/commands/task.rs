//! Task management commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use momentum_core::task::filter;
use momentum_core::{Importance, NewTask, Quadrant, TaskStatus, Tracker, Urgency};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task name
        name: String,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Category ID to file under
        #[arg(long)]
        category: Option<String>,
        /// Urgency: urgent or not-urgent (default: not-urgent)
        #[arg(long, default_value = "not-urgent")]
        urgency: String,
        /// Importance: important or not-important (default: not-important)
        #[arg(long, default_value = "not-important")]
        importance: String,
        /// Calendar day (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by calendar day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Filter by category ID
        #[arg(long)]
        category: Option<String>,
        /// Filter by quadrant: do, schedule, delegate, or eliminate
        #[arg(long)]
        quadrant: Option<String>,
    },
    /// Change a task's status
    Status {
        /// Task ID
        id: String,
        /// New status: pending, in-progress, completed, or skipped
        status: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
        /// New category ID
        #[arg(long)]
        category: Option<String>,
        /// New urgency
        #[arg(long)]
        urgency: Option<String>,
        /// New importance
        #[arg(long)]
        importance: Option<String>,
        /// New calendar day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn parse_date_or_today(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => Ok(s
            .parse()
            .map_err(|_| format!("invalid date (expected YYYY-MM-DD): {s}"))?),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_urgency(s: &str) -> Result<Urgency, Box<dyn std::error::Error>> {
    match s {
        "urgent" => Ok(Urgency::Urgent),
        "not-urgent" => Ok(Urgency::NotUrgent),
        other => Err(format!("invalid urgency: {other}").into()),
    }
}

fn parse_importance(s: &str) -> Result<Importance, Box<dyn std::error::Error>> {
    match s {
        "important" => Ok(Importance::Important),
        "not-important" => Ok(Importance::NotImportant),
        other => Err(format!("invalid importance: {other}").into()),
    }
}

fn parse_status(s: &str) -> Result<TaskStatus, Box<dyn std::error::Error>> {
    match s {
        "pending" => Ok(TaskStatus::Pending),
        "in-progress" | "partial" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        "skipped" => Ok(TaskStatus::Skipped),
        other => Err(format!("invalid status: {other}").into()),
    }
}

fn parse_quadrant(s: &str) -> Result<Quadrant, Box<dyn std::error::Error>> {
    match s {
        "do" => Ok(Quadrant::Do),
        "schedule" => Ok(Quadrant::Schedule),
        "delegate" => Ok(Quadrant::Delegate),
        "eliminate" => Ok(Quadrant::Eliminate),
        other => Err(format!("invalid quadrant: {other}").into()),
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = Tracker::open()?;

    match action {
        TaskAction::Add {
            name,
            notes,
            category,
            urgency,
            importance,
            date,
        } => {
            let task = tracker.add_task(NewTask {
                name,
                notes,
                category_id: category,
                urgency: parse_urgency(&urgency)?,
                importance: parse_importance(&importance)?,
                date: parse_date_or_today(date.as_deref())?,
            })?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List {
            date,
            category,
            quadrant,
        } => {
            let all_tasks = tracker.tasks()?;
            let mut selected: Vec<_> = all_tasks.iter().collect();
            if let Some(ref d) = date {
                let day = parse_date_or_today(Some(d))?;
                selected = filter::for_date(&all_tasks, day);
            }
            if let Some(ref cat) = category {
                selected.retain(|t| t.category_id.as_deref() == Some(cat.as_str()));
            }
            if let Some(ref q) = quadrant {
                let quadrant = parse_quadrant(q)?;
                selected.retain(|t| t.quadrant() == quadrant);
            }
            println!("{}", serde_json::to_string_pretty(&selected)?);
        }
        TaskAction::Status { id, status } => {
            let task = tracker.set_status(&id, parse_status(&status)?)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Update {
            id,
            name,
            notes,
            category,
            urgency,
            importance,
            date,
        } => {
            let mut task = tracker
                .get_task(&id)?
                .ok_or(format!("Task not found: {id}"))?;

            if let Some(n) = name {
                task.name = n;
            }
            if let Some(n) = notes {
                task.notes = Some(n);
            }
            if let Some(c) = category {
                task.category_id = Some(c);
            }
            if let Some(u) = urgency {
                task.urgency = parse_urgency(&u)?;
            }
            if let Some(i) = importance {
                task.importance = parse_importance(&i)?;
            }
            if let Some(d) = date {
                task.date = parse_date_or_today(Some(&d))?;
            }

            tracker.update_task(&mut task)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Delete { id } => {
            tracker.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
