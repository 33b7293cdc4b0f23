use crate::config::ProgressColors;
use crate::store::TaskStore;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ProgressTier {
  Alert,
  Warning,
  Success
}

impl ProgressTier {
  pub fn from_percent(
    percent: u32
  ) -> Self {
    match percent {
      | 0..50 => Self::Alert,
      | 50..100 => Self::Warning,
      | _ => Self::Success
    }
  }

  pub fn color(
    self,
    colors: &ProgressColors
  ) -> String {
    match self {
      | Self::Alert => {
        colors.alert.clone()
      }
      | Self::Warning => {
        colors.warning.clone()
      }
      | Self::Success => {
        colors.success.clone()
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Progress {
  pub total:     usize,
  pub completed: usize,
  pub percent:   u32
}

impl Progress {
  pub fn new(
    total: usize,
    completed: usize
  ) -> Self {
    Self {
      total,
      completed,
      percent: completion_percent(
        total, completed
      )
    }
  }

  pub fn from_store(
    store: &TaskStore
  ) -> Self {
    Self::new(
      store.len(),
      store.completed_count()
    )
  }

  pub fn tier(&self) -> ProgressTier {
    ProgressTier::from_percent(
      self.percent
    )
  }

  pub fn percent_label(
    &self
  ) -> String {
    format!("{}%", self.percent)
  }

  pub fn width_style(&self) -> String {
    format!("width:{}%", self.percent)
  }
}

/// Completed share as a whole percent,
/// rounded half up. An empty list is 0%.
pub fn completion_percent(
  total: usize,
  completed: usize
) -> u32 {
  if total == 0 {
    return 0;
  }
  let completed =
    completed.min(total) as u64;
  let total = total as u64;
  ((completed * 200 + total)
    / (2 * total)) as u32
}
