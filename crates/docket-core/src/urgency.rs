use chrono::NaiveDate;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Urgency {
  Overdue,
  DueToday,
  DueTomorrow,
  Future
}

impl Urgency {
  pub fn css_class(
    self
  ) -> &'static str {
    match self {
      | Self::Overdue => "overdue",
      | Self::DueToday => "due-today",
      | Self::DueTomorrow => {
        "due-tomorrow"
      }
      | Self::Future => "future"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Overdue => "overdue",
      | Self::DueToday => "due today",
      | Self::DueTomorrow => {
        "due tomorrow"
      }
      | Self::Future => "future"
    }
  }
}

/// Whole-day distance from `today` to
/// `due`; negative once the date has
/// passed.
pub fn days_until(
  due: NaiveDate,
  today: NaiveDate
) -> i64 {
  due
    .signed_duration_since(today)
    .num_days()
}

pub fn classify(
  due: NaiveDate,
  today: NaiveDate
) -> Urgency {
  match days_until(due, today) {
    | diff if diff < 0 => {
      Urgency::Overdue
    }
    | 0 => Urgency::DueToday,
    | 1 => Urgency::DueTomorrow,
    | _ => Urgency::Future
  }
}
