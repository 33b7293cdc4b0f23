use chrono::NaiveDate;

use crate::config::Palette;
use crate::progress::Progress;
use crate::store::TaskStore;
use crate::task::{
  Task,
  TaskId
};
use crate::urgency::Urgency;

/// Everything a list row needs to draw
/// one task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRowView {
  pub id:         TaskId,
  pub text:       String,
  pub label:      String,
  pub due_label:  Option<String>,
  pub completed:  bool,
  pub urgency:    Option<Urgency>,
  pub row_class:  String,
  pub row_style:  String,
  pub text_style: &'static str
}

impl TaskRowView {
  pub fn from_task(
    task: &Task,
    today: NaiveDate,
    palette: &Palette
  ) -> Self {
    let urgency = task.urgency(today);

    let mut row_class =
      "todo-item".to_string();
    if let Some(urgency) = urgency {
      row_class.push(' ');
      row_class
        .push_str(urgency.css_class());
    }
    if task.completed {
      row_class.push_str(" completed");
    }

    let row_style = urgency
      .map(|urgency| {
        format!(
          "background-color:{};",
          palette.urgency.color(urgency)
        )
      })
      .unwrap_or_default();

    Self {
      id: task.id,
      text: task.text.clone(),
      label: task.label(),
      due_label: task.due_label(),
      completed: task.completed,
      urgency,
      row_class,
      row_style,
      text_style: if task.completed {
        "text-decoration:line-through;"
      } else {
        "text-decoration:none;"
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
  pub rows:           Vec<TaskRowView>,
  pub progress:       Progress,
  pub progress_color: String
}

impl ListView {
  pub fn progress_bar_style(
    &self
  ) -> String {
    format!(
      "{};background-color:{};",
      self.progress.width_style(),
      self.progress_color
    )
  }
}

pub fn build_rows(
  store: &TaskStore,
  today: NaiveDate,
  palette: &Palette
) -> Vec<TaskRowView> {
  store
    .iter()
    .map(|task| {
      TaskRowView::from_task(
        task, today, palette
      )
    })
    .collect()
}

/// Rebuilds the whole list view from
/// the store, in store order.
pub fn build_list_view(
  store: &TaskStore,
  today: NaiveDate,
  palette: &Palette
) -> ListView {
  let progress =
    Progress::from_store(store);
  ListView {
    rows: build_rows(
      store, today, palette
    ),
    progress,
    progress_color: progress
      .tier()
      .color(&palette.progress)
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    Duration,
    NaiveDate
  };

  use super::build_list_view;
  use crate::config::Palette;
  use crate::store::TaskStore;
  use crate::urgency::Urgency;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(
      2026, 10, 18
    )
    .expect("valid date")
  }

  #[test]
  fn rows_follow_store_order() {
    let mut store = TaskStore::new();
    store.add("first", None);
    store.add("second", None);
    store.add("third", None);

    let view = build_list_view(
      &store,
      today(),
      &Palette::default()
    );
    let texts: Vec<&str> = view
      .rows
      .iter()
      .map(|row| row.text.as_str())
      .collect();
    assert_eq!(
      texts,
      vec!["first", "second", "third"]
    );
  }

  #[test]
  fn due_rows_get_urgency_color() {
    let mut store = TaskStore::new();
    store.add(
      "late",
      Some(today() - Duration::days(1))
    );
    store.add("undated", None);

    let view = build_list_view(
      &store,
      today(),
      &Palette::default()
    );
    let late = &view.rows[0];
    assert_eq!(
      late.urgency,
      Some(Urgency::Overdue)
    );
    assert_eq!(
      late.row_class,
      "todo-item overdue"
    );
    assert_eq!(
      late.row_style,
      "background-color:#ffcccc;"
    );
    assert_eq!(
      late.label,
      "late (Due: 2026-10-17)"
    );

    let undated = &view.rows[1];
    assert_eq!(undated.urgency, None);
    assert!(undated.row_style.is_empty());
    assert_eq!(undated.label, "undated");
  }

  #[test]
  fn completed_rows_are_struck_through() {
    let mut store = TaskStore::new();
    let id = store
      .add("done", None)
      .expect("add");
    store.toggle_complete(id);

    let view = build_list_view(
      &store,
      today(),
      &Palette::default()
    );
    let row = &view.rows[0];
    assert!(row.completed);
    assert_eq!(
      row.text_style,
      "text-decoration:line-through;"
    );
    assert!(
      row.row_class.ends_with("completed")
    );
    assert_eq!(
      view.progress_bar_style(),
      "width:100%;background-color:#28a745;"
    );
  }

  #[test]
  fn empty_store_renders_zero_progress() {
    let view = build_list_view(
      &TaskStore::new(),
      today(),
      &Palette::default()
    );
    assert!(view.rows.is_empty());
    assert_eq!(view.progress.total, 0);
    assert_eq!(view.progress.percent, 0);
    assert_eq!(
      view.progress_color,
      "#dc3545"
    );
  }
}
