use chrono::NaiveDate;
use tracing::{
  debug,
  info,
  warn
};

use crate::datetime::parse_due_input;
use crate::task::{
  Task,
  TaskId
};

/// Result of a form submission: the new
/// task, if any, and whether the text
/// and date fields should be emptied.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct SubmitOutcome {
  pub added:        Option<TaskId>,
  pub clear_inputs: bool
}

/// Session-scoped, insertion-ordered
/// task collection.
///
/// Ids come from a counter owned by the
/// store, so two tasks created in the
/// same instant still get distinct ids.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskStore {
  tasks:   Vec<Task>,
  next_id: u64
}

impl TaskStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn allocate_id(&mut self) -> TaskId {
    self.next_id += 1;
    TaskId(self.next_id)
  }

  /// Appends a pending task. Returns
  /// `None` without touching the store
  /// when `text` is blank after
  /// trimming.
  #[tracing::instrument(skip(self, text))]
  pub fn add(
    &mut self,
    text: &str,
    due: Option<NaiveDate>
  ) -> Option<TaskId> {
    let text = text.trim();
    if text.is_empty() {
      debug!(
        "ignoring task with empty text"
      );
      return None;
    }

    let id = self.allocate_id();
    self.tasks.push(Task::new_pending(
      id,
      text.to_string(),
      due
    ));
    info!(
      %id,
      total = self.tasks.len(),
      "added task"
    );
    Some(id)
  }

  /// Adds a task from the raw form
  /// fields. A date that does not parse
  /// is dropped and the task is still
  /// added. Inputs are cleared only when
  /// a task was added.
  #[tracing::instrument(skip(self, text))]
  pub fn submit(
    &mut self,
    text: &str,
    raw_due: &str
  ) -> SubmitOutcome {
    if text.trim().is_empty() {
      debug!(
        "ignored submission without \
         task text"
      );
      return SubmitOutcome {
        added:        None,
        clear_inputs: false
      };
    }

    let due = match parse_due_input(
      raw_due
    ) {
      | Ok(due) => due,
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "adding task without due date"
        );
        None
      }
    };

    let added = self.add(text, due);
    SubmitOutcome {
      added,
      clear_inputs: added.is_some()
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn remove(
    &mut self,
    id: TaskId
  ) -> bool {
    let Some(idx) = self.position(id)
    else {
      debug!(%id, "remove: no such task");
      return false;
    };

    self.tasks.remove(idx);
    info!(
      %id,
      total = self.tasks.len(),
      "removed task"
    );
    true
  }

  /// Flips the completion flag and
  /// returns the new value.
  #[tracing::instrument(skip(self))]
  pub fn toggle_complete(
    &mut self,
    id: TaskId
  ) -> Option<bool> {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      debug!(%id, "toggle: no such task");
      return None;
    };

    task.completed = !task.completed;
    info!(
      %id,
      completed = task.completed,
      "toggled task"
    );
    Some(task.completed)
  }

  fn position(
    &self,
    id: TaskId
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| task.id == id)
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Task> {
    self.tasks.iter()
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn completed_count(
    &self
  ) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| task.completed)
      .count()
  }
}
