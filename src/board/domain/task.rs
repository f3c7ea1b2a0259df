//! Task entity, status enum and deadline rules.

use super::{BoardDomainError, Description, ParseTaskStatusError, ProjectId, TaskId, TaskTitle};
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format accepted for task deadlines.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Task workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is in progress.
    Doing,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a `YYYY-MM-DD` deadline.
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidDeadline`] when the value is not a
/// valid calendar date in that format.
pub fn parse_deadline(raw: &str) -> Result<NaiveDate, BoardDomainError> {
    NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT)
        .map_err(|_| BoardDomainError::InvalidDeadline(raw.to_owned()))
}

/// Checks a deadline against the current date. A deadline of today is
/// accepted.
///
/// # Errors
///
/// Returns [`BoardDomainError::DeadlineInPast`] when `deadline` is strictly
/// before `today`.
pub fn ensure_deadline_not_past(
    deadline: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, BoardDomainError> {
    if deadline < today {
        return Err(BoardDomainError::DeadlineInPast { deadline, today });
    }
    Ok(deadline)
}

/// Raw input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    status: Option<String>,
    deadline: Option<String>,
}

impl NewTask {
    /// Creates task input with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            deadline: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status. Defaults to `todo`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the deadline as a `YYYY-MM-DD` string.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Raw partial update for a task. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    deadline: Option<String>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the deadline (`YYYY-MM-DD`).
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Validated partial update for a task.
///
/// Built from [`TaskChanges`]; every provided field has passed the same rules
/// as task creation, so applying a patch cannot fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title, if changing.
    pub title: Option<TaskTitle>,
    /// New description, if changing.
    pub description: Option<Description>,
    /// New status, if changing.
    pub status: Option<TaskStatus>,
    /// New deadline, if changing.
    pub deadline: Option<NaiveDate>,
}

impl TaskPatch {
    /// Validates raw changes against the task rules.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] for the first field that fails
    /// validation. No partial patch is produced.
    pub fn new(changes: TaskChanges, today: NaiveDate) -> Result<Self, BoardDomainError> {
        let TaskChanges {
            title,
            description,
            status,
            deadline,
        } = changes;

        Ok(Self {
            title: title.map(TaskTitle::new).transpose()?,
            description: description.map(Description::new).transpose()?,
            status: status
                .map(|raw| TaskStatus::try_from(raw.as_str()))
                .transpose()?,
            deadline: deadline
                .map(|raw| parse_deadline(&raw).and_then(|d| ensure_deadline_not_past(d, today)))
                .transpose()?,
        })
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.deadline.is_none()
    }
}

/// Task entity owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Description,
    status: TaskStatus,
    deadline: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: Description,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted autoclose timestamp, if any.
    pub closed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a validated task for `project_id`.
    ///
    /// The deadline must not be before the clock's current UTC date.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when the title, description, status or
    /// deadline fails validation.
    pub fn create(
        project_id: ProjectId,
        input: NewTask,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let now = clock.utc().trunc_subsecs(6);
        let today = now.date_naive();
        let NewTask {
            title,
            description,
            status: raw_status,
            deadline: raw_deadline,
        } = input;

        let status = raw_status
            .map(|raw| TaskStatus::try_from(raw.as_str()))
            .transpose()?
            .unwrap_or_default();
        let deadline = raw_deadline
            .map(|raw| parse_deadline(&raw).and_then(|d| ensure_deadline_not_past(d, today)))
            .transpose()?;

        Ok(Self {
            id: TaskId::new(),
            project_id,
            title: TaskTitle::new(title)?,
            description: description
                .map(Description::new)
                .transpose()?
                .unwrap_or_default(),
            status,
            deadline,
            created_at: now,
            closed_at: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            deadline: data.deadline,
            created_at: data.created_at,
            closed_at: data.closed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the task was auto-closed, if it was.
    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Applies raw changes after validating all of them.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when any provided field is invalid; the
    /// task is left untouched in that case.
    pub fn edit(&mut self, changes: TaskChanges, today: NaiveDate) -> Result<(), BoardDomainError> {
        let patch = TaskPatch::new(changes, today)?;
        self.apply(&patch);
        Ok(())
    }

    /// Applies an already validated patch.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = Some(deadline);
        }
    }

    /// Sets the status without touching any other field.
    pub const fn change_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Returns `true` when the task has a deadline before `today` and is not
    /// done.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Done && self.deadline.is_some_and(|deadline| deadline < today)
    }

    /// Force-closes the task: status becomes `done` and `closed_at` is set.
    ///
    /// Deadline rules are not consulted.
    pub fn close_overdue(&mut self, now: DateTime<Utc>) {
        self.status = TaskStatus::Done;
        self.closed_at = Some(now);
    }
}
