use super::{PersistenceError, PersistenceResult};
use crate::calendar::WorkdayCalendar;
use crate::task::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Everything the dashboard stores for one project plan: the task
/// collection plus the calendar exception dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub exceptions: Vec<NaiveDate>,
    pub tasks: Vec<Task>,
}

impl PlanSnapshot {
    pub fn new(tasks: Vec<Task>, calendar: &WorkdayCalendar) -> Self {
        Self {
            exceptions: calendar.exceptions(),
            tasks,
        }
    }

    pub fn calendar(&self) -> WorkdayCalendar {
        WorkdayCalendar::from_exceptions(self.exceptions.iter().copied())
    }
}

pub fn save_plan_to_json<P: AsRef<Path>>(snapshot: &PlanSnapshot, path: P) -> PersistenceResult<()> {
    super::validate_tasks(&snapshot.tasks)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, snapshot)?;
    Ok(())
}

pub fn load_plan_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<PlanSnapshot> {
    let file = File::open(path)?;
    let snapshot: PlanSnapshot = serde_json::from_reader(file)?;
    super::validate_tasks(&snapshot.tasks)?;
    Ok(snapshot)
}

#[derive(Serialize, Deserialize)]
struct TaskCsvRecord {
    id: i32,
    name: String,
    start: String,
    end: String,
    duration_days: i64,
    dependencies: String,
    locked: bool,
    status: String,
    category: String,
    budget: String,
    notes: String,
    attachments: String,
}

impl From<&Task> for TaskCsvRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            start: format_date(task.start),
            end: format_date(task.end),
            duration_days: task.duration_days,
            dependencies: join_i32(&task.dependencies),
            locked: task.locked,
            status: task.status.as_str().to_string(),
            category: task.category.clone().unwrap_or_default(),
            budget: format_option_f64(task.budget),
            notes: task.notes.clone().unwrap_or_default(),
            attachments: join_strings(&task.attachments),
        }
    }
}

impl TaskCsvRecord {
    fn into_task(self) -> PersistenceResult<Task> {
        let start = parse_date(&self.start)?;
        let mut task = Task::new(self.id, self.name, start, self.duration_days);
        task.end = parse_date(&self.end)?;
        task.dependencies = split_i32(&self.dependencies)?;
        task.locked = self.locked;
        task.status = TaskStatus::from_str(self.status.trim()).ok_or_else(|| {
            PersistenceError::InvalidData(format!("invalid status '{}'", self.status))
        })?;
        task.category = parse_string_option(self.category);
        task.budget = parse_f64(&self.budget)?;
        task.notes = parse_string_option(self.notes);
        task.attachments = split_strings(&self.attachments);
        Ok(task)
    }
}

pub fn save_tasks_to_csv<P: AsRef<Path>>(tasks: &[Task], path: P) -> PersistenceResult<()> {
    super::validate_tasks(tasks)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for task in tasks {
        writer.serialize(TaskCsvRecord::from(task))?;
    }
    writer.flush()?;
    Ok(())
}

// CSV carries tasks only; calendar exceptions live in the JSON snapshot.
pub fn load_tasks_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Task>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut tasks = Vec::new();
    for record in reader.deserialize::<TaskCsvRecord>() {
        let record = record?;
        tasks.push(record.into_task()?);
    }

    if tasks.is_empty() {
        return Err(PersistenceError::InvalidData(
            "CSV file contained no tasks".into(),
        ));
    }

    super::validate_tasks(&tasks)?;
    Ok(tasks)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{input}': {e}")))
}

fn format_option_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_f64(input: &str) -> PersistenceResult<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    input
        .trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|e| PersistenceError::InvalidData(format!("invalid float '{input}': {e}")))
}

fn join_i32(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn split_i32(input: &str) -> PersistenceResult<Vec<i32>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|e| PersistenceError::InvalidData(format!("invalid integer '{part}': {e}")))
        })
        .collect()
}

fn join_strings(values: &[String]) -> String {
    values.join(";")
}

fn split_strings(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(';').map(|s| s.trim().to_string()).collect()
}

fn parse_string_option(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
