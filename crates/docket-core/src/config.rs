use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info,
  warn
};

use crate::datetime::parse_timezone;
use crate::urgency::Urgency;

pub const DEFAULT_BACKGROUND_KEY: &str =
  "bgColor";
pub const PALETTE_VERSION: u32 = 1;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct UrgencyColors {
  pub overdue:      String,
  pub due_today:    String,
  pub due_tomorrow: String,
  pub future:       String
}

impl Default for UrgencyColors {
  fn default() -> Self {
    Self {
      overdue:      "#ffcccc".to_string(),
      due_today:    "#ffeeba".to_string(),
      due_tomorrow: "#d4edda".to_string(),
      future:       "#e2f0cb".to_string()
    }
  }
}

impl UrgencyColors {
  pub fn color(
    &self,
    urgency: Urgency
  ) -> &str {
    match urgency {
      | Urgency::Overdue => &self.overdue,
      | Urgency::DueToday => {
        &self.due_today
      }
      | Urgency::DueTomorrow => {
        &self.due_tomorrow
      }
      | Urgency::Future => &self.future
    }
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
#[serde(default)]
pub struct ProgressColors {
  pub alert:   String,
  pub warning: String,
  pub success: String
}

impl Default for ProgressColors {
  fn default() -> Self {
    Self {
      alert:   "#dc3545".to_string(),
      warning: "#ffc107".to_string(),
      success: "#28a745".to_string()
    }
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
#[serde(default)]
pub struct PreferenceConfig {
  pub storage_key: String
}

impl Default for PreferenceConfig {
  fn default() -> Self {
    Self {
      storage_key:
        DEFAULT_BACKGROUND_KEY
          .to_string()
    }
  }
}

/// Colors, storage key and timezone
/// for the list view. Every field has
/// a default so a partial file is
/// fine.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Palette {
  pub version:     u32,
  pub timezone:    Option<String>,
  pub urgency:     UrgencyColors,
  pub progress:    ProgressColors,
  pub preferences: PreferenceConfig
}

impl Default for Palette {
  fn default() -> Self {
    Self {
      version:     PALETTE_VERSION,
      timezone:    None,
      urgency:     UrgencyColors::default(),
      progress:
        ProgressColors::default(),
      preferences:
        PreferenceConfig::default()
    }
  }
}

impl Palette {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut palette =
      toml::from_str::<Palette>(raw)
        .context(
          "failed to parse palette toml"
        )?;
    if palette.version != PALETTE_VERSION
    {
      anyhow::bail!(
        "unsupported palette version \
         {}; expected {PALETTE_VERSION}",
        palette.version
      );
    }
    palette.sanitize();
    Ok(palette)
  }

  /// Parses `raw`, logging and falling
  /// back to defaults when it is
  /// malformed.
  #[tracing::instrument(skip(raw))]
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(palette) => {
        info!(
          version = palette.version,
          timezone = ?palette.timezone,
          storage_key = %palette.preferences.storage_key,
          "loaded palette"
        );
        palette
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "failed parsing palette; using defaults"
        );
        Palette::default()
      }
    }
  }

  fn sanitize(&mut self) {
    let urgency_defaults =
      UrgencyColors::default();
    reset_blank(
      &mut self.urgency.overdue,
      &urgency_defaults.overdue,
      "urgency.overdue"
    );
    reset_blank(
      &mut self.urgency.due_today,
      &urgency_defaults.due_today,
      "urgency.due_today"
    );
    reset_blank(
      &mut self.urgency.due_tomorrow,
      &urgency_defaults.due_tomorrow,
      "urgency.due_tomorrow"
    );
    reset_blank(
      &mut self.urgency.future,
      &urgency_defaults.future,
      "urgency.future"
    );

    let progress_defaults =
      ProgressColors::default();
    reset_blank(
      &mut self.progress.alert,
      &progress_defaults.alert,
      "progress.alert"
    );
    reset_blank(
      &mut self.progress.warning,
      &progress_defaults.warning,
      "progress.warning"
    );
    reset_blank(
      &mut self.progress.success,
      &progress_defaults.success,
      "progress.success"
    );

    reset_blank(
      &mut self.preferences.storage_key,
      DEFAULT_BACKGROUND_KEY,
      "preferences.storage_key"
    );

    if let Some(raw) =
      self.timezone.as_deref()
      && !raw.trim().eq_ignore_ascii_case(
        "local"
      )
      && parse_timezone(raw).is_none()
    {
      warn!(
        timezone = %raw,
        "unknown timezone in palette; \
         using browser local time"
      );
      self.timezone = None;
    }
  }

  pub fn timezone(
    &self
  ) -> Option<chrono_tz::Tz> {
    self
      .timezone
      .as_deref()
      .and_then(parse_timezone)
  }
}

fn reset_blank(
  value: &mut String,
  fallback: &str,
  field: &str
) {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    warn!(
      field,
      fallback,
      "blank palette value; using \
       default"
    );
    *value = fallback.to_string();
  } else if trimmed.len() != value.len()
  {
    *value = trimmed.to_string();
  }
}
