//! Task management commands for CLI.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::Subcommand;
use dayflow_core::{Priority, Task, TaskStore};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task text
        text: String,
        /// Priority: low, medium, or high (default: medium)
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Due date as YYYY-MM-DD (local)
        #[arg(long)]
        due: Option<String>,
        /// Estimated minutes
        #[arg(long)]
        estimate: Option<u32>,
        /// Override the tasks file path
        #[arg(long)]
        tasks: Option<String>,
    },
    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Override the tasks file path
        #[arg(long)]
        tasks: Option<String>,
    },
    /// Mark a task as completed
    Done {
        /// Task ID (a unique prefix is enough)
        id: String,
        /// Minutes actually spent
        #[arg(long)]
        spent: Option<u32>,
        /// Override the tasks file path
        #[arg(long)]
        tasks: Option<String>,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Add {
            text,
            priority,
            due,
            estimate,
            tasks,
        } => {
            let store = open_store(tasks)?;
            let mut list = store.load();

            let mut task = Task::new(text);
            task.priority = Some(parse_priority(&priority));
            if let Some(date) = due {
                task.due_date = Some(local_midnight(&date)?);
            }
            if let Some(minutes) = estimate {
                task.estimated_minutes = minutes;
            }

            list.push(task.clone());
            store.save(&list)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { json, tasks } => {
            let store = open_store(tasks)?;
            let list = store.load();
            if json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if list.is_empty() {
                println!("No tasks.");
            } else {
                for task in &list {
                    println!("{}", format_line(task));
                }
            }
        }
        TaskAction::Done { id, spent, tasks } => {
            let store = open_store(tasks)?;
            let mut list = store.load();

            let matches: Vec<usize> = list
                .iter()
                .enumerate()
                .filter(|(_, t)| t.id.starts_with(&id))
                .map(|(i, _)| i)
                .collect();
            let index = match matches.as_slice() {
                [] => return Err(format!("Task not found: {id}").into()),
                [one] => *one,
                _ => return Err(format!("Task ID '{id}' is ambiguous").into()),
            };

            let task = &mut list[index];
            task.complete_at(Utc::now());
            if let Some(minutes) = spent {
                task.actual_minutes = minutes;
            }
            let task_id = task.id.clone();
            store.save(&list)?;
            println!("Task completed: {task_id}");
        }
    }
    Ok(())
}

fn open_store(path: Option<String>) -> Result<TaskStore, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(p) => TaskStore::with_path(p),
        None => TaskStore::open()?,
    })
}

fn parse_priority(value: &str) -> Priority {
    match value {
        "low" => Priority::Low,
        "high" => Priority::High,
        _ => Priority::Medium,
    }
}

/// Parses `YYYY-MM-DD` into the local midnight of that date, in UTC.
fn local_midnight(date: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{date}', expected YYYY-MM-DD"))?;
    let local = Local
        .from_local_datetime(&naive.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| format!("date '{date}' has no valid local midnight"))?;
    Ok(local.with_timezone(&Utc))
}

fn format_line(task: &Task) -> String {
    let marker = if task.completed { "x" } else { " " };
    let id = task.id.get(..8).unwrap_or(&task.id);
    let mut extras: Vec<String> = Vec::new();
    if let Some(priority) = task.priority {
        extras.push(priority.as_str().to_string());
    }
    if let Some(due) = task.due_date {
        extras.push(format!(
            "due {}",
            due.with_timezone(&Local).format("%Y-%m-%d")
        ));
    }
    if extras.is_empty() {
        format!("[{marker}] {id}  {}", task.text)
    } else {
        format!("[{marker}] {id}  {}  ({})", task.text, extras.join(", "))
    }
}
