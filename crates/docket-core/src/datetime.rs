use anyhow::Context;
use chrono::{
  Local,
  NaiveDate,
  Utc
};
use chrono_tz::Tz;

/// Value of an `<input type="date">`,
/// taken verbatim. An empty field means
/// no due date.
pub fn parse_due_input(
  raw: &str
) -> anyhow::Result<Option<NaiveDate>> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }

  NaiveDate::parse_from_str(
    trimmed, "%Y-%m-%d"
  )
  .map(Some)
  .with_context(|| {
    format!(
      "invalid due date `{raw}`; \
       expected YYYY-MM-DD"
    )
  })
}

/// IANA zone name, or `None` for
/// blank, `local` or anything chrono-tz
/// does not know.
pub fn parse_timezone(
  raw: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty()
    || trimmed
      .eq_ignore_ascii_case("local")
  {
    return None;
  }
  trimmed.parse::<Tz>().ok()
}

pub fn today_in_timezone(
  timezone: Tz
) -> NaiveDate {
  Utc::now()
    .with_timezone(&timezone)
    .date_naive()
}

pub fn today(
  timezone: Option<Tz>
) -> NaiveDate {
  match timezone {
    | Some(tz) => today_in_timezone(tz),
    | None => Local::now().date_naive()
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    parse_due_input,
    parse_timezone
  };

  #[test]
  fn empty_due_input_is_none() {
    assert_eq!(
      parse_due_input("")
        .expect("parse empty"),
      None
    );
    assert_eq!(
      parse_due_input("   ")
        .expect("parse blank"),
      None
    );
  }

  #[test]
  fn parses_iso_calendar_date() {
    assert_eq!(
      parse_due_input("2026-10-19")
        .expect("parse date"),
      NaiveDate::from_ymd_opt(
        2026, 10, 19
      )
    );
  }

  #[test]
  fn rejects_non_iso_dates() {
    let error =
      parse_due_input("19/10/2026")
        .expect_err("should fail");
    assert!(
      error
        .to_string()
        .contains("19/10/2026")
    );
    assert!(
      parse_due_input("2026-02-30")
        .is_err()
    );
  }

  #[test]
  fn timezone_names() {
    assert_eq!(
      parse_timezone(
        "America/Mexico_City"
      ),
      Some(
        chrono_tz::America::Mexico_City
      )
    );
    assert_eq!(
      parse_timezone("Local"),
      None
    );
    assert_eq!(
      parse_timezone("Nowhere/City"),
      None
    );
  }
}
