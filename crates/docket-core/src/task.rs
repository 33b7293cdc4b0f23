use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

use crate::urgency::{
  self,
  Urgency
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Task {
  pub id:        TaskId,
  pub text:      String,
  #[serde(default)]
  pub completed: bool,
  #[serde(default)]
  pub due:       Option<NaiveDate>
}

impl Task {
  pub fn new_pending(
    id: TaskId,
    text: String,
    due: Option<NaiveDate>
  ) -> Self {
    Self {
      id,
      text,
      completed: false,
      due
    }
  }

  pub fn due_label(
    &self
  ) -> Option<String> {
    self.due.map(|date| {
      date
        .format("%Y-%m-%d")
        .to_string()
    })
  }

  /// Text as shown in the list, with
  /// the due date appended when set.
  pub fn label(&self) -> String {
    match self.due_label() {
      | Some(due) => {
        format!(
          "{} (Due: {due})",
          self.text
        )
      }
      | None => self.text.clone()
    }
  }

  pub fn urgency(
    &self,
    today: NaiveDate
  ) -> Option<Urgency> {
    self.due.map(|due| {
      urgency::classify(due, today)
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    Task,
    TaskId
  };
  use crate::urgency::Urgency;

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn label_appends_due_date() {
    let task = Task::new_pending(
      TaskId(1),
      "File taxes".to_string(),
      Some(date(2026, 4, 15))
    );
    assert_eq!(
      task.label(),
      "File taxes (Due: 2026-04-15)"
    );
  }

  #[test]
  fn label_without_due_is_plain_text() {
    let task = Task::new_pending(
      TaskId(2),
      "Water plants".to_string(),
      None
    );
    assert_eq!(
      task.label(),
      "Water plants"
    );
    assert!(
      task
        .urgency(date(2026, 1, 1))
        .is_none()
    );
  }

  #[test]
  fn urgency_uses_due_date() {
    let task = Task::new_pending(
      TaskId(3),
      "Renew passport".to_string(),
      Some(date(2026, 3, 1))
    );
    assert_eq!(
      task.urgency(date(2026, 3, 2)),
      Some(Urgency::Overdue)
    );
  }

  #[test]
  fn serializes_id_as_plain_integer() {
    let task = Task::new_pending(
      TaskId(42),
      "Ship it".to_string(),
      Some(date(2026, 10, 18))
    );
    let json =
      serde_json::to_value(&task)
        .expect("serialize task");
    assert_eq!(json["id"], 42);
    assert_eq!(
      json["due"],
      "2026-10-18"
    );
    assert_eq!(
      json["completed"],
      false
    );
  }
}
