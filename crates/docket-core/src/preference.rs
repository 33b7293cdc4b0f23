use std::collections::BTreeMap;

use anyhow::Context;
use tracing::debug;

/// String key/value storage that
/// outlives a page session, such as
/// browser `localStorage`.
pub trait KeyValueStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Option<String>;

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  items: BTreeMap<String, String>
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Option<String> {
    self.items.get(key).cloned()
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.items.insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

/// Page background color chosen with
/// the picker. Values are stored and
/// returned as raw CSS strings.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct BackgroundPreference {
  key: String
}

impl BackgroundPreference {
  pub fn new(
    key: impl Into<String>
  ) -> Self {
    Self { key: key.into() }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn load<S>(
    &self,
    storage: &S
  ) -> Option<String>
  where
    S: KeyValueStorage + ?Sized
  {
    let stored =
      storage.get_item(&self.key)?;
    if stored.trim().is_empty() {
      return None;
    }
    debug!(
      key = %self.key,
      color = %stored,
      "loaded background preference"
    );
    Some(stored)
  }

  pub fn save<S>(
    &self,
    storage: &mut S,
    color: &str
  ) -> anyhow::Result<()>
  where
    S: KeyValueStorage + ?Sized
  {
    storage
      .set_item(&self.key, color)
      .with_context(|| {
        format!(
          "failed to persist background \
           color under `{}`",
          self.key
        )
      })?;
    debug!(
      key = %self.key,
      color,
      "saved background preference"
    );
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::{
    BackgroundPreference,
    KeyValueStorage,
    MemoryStorage
  };

  #[test]
  fn missing_value_loads_none() {
    let storage = MemoryStorage::new();
    let pref =
      BackgroundPreference::new("bgColor");
    assert_eq!(pref.load(&storage), None);
  }

  #[test]
  fn save_overwrites_previous_value() {
    let mut storage = MemoryStorage::new();
    let pref =
      BackgroundPreference::new("bgColor");
    pref
      .save(&mut storage, "#112233")
      .expect("save first");
    pref
      .save(&mut storage, "#445566")
      .expect("save second");
    assert_eq!(
      pref.load(&storage).as_deref(),
      Some("#445566")
    );
  }

  #[test]
  fn stored_values_are_not_validated() {
    let mut storage = MemoryStorage::new();
    storage
      .set_item("bgColor", "not-a-color")
      .expect("set raw");
    let pref =
      BackgroundPreference::new("bgColor");
    assert_eq!(
      pref.load(&storage).as_deref(),
      Some("not-a-color")
    );
  }

  #[test]
  fn blank_value_is_treated_as_absent() {
    let mut storage = MemoryStorage::new();
    storage
      .set_item("bgColor", "  ")
      .expect("set blank");
    let pref =
      BackgroundPreference::new("bgColor");
    assert_eq!(pref.load(&storage), None);
  }

  struct FailingStorage;

  impl KeyValueStorage for FailingStorage {
    fn get_item(
      &self,
      _key: &str
    ) -> Option<String> {
      None
    }

    fn set_item(
      &mut self,
      _key: &str,
      _value: &str
    ) -> anyhow::Result<()> {
      anyhow::bail!("quota exceeded")
    }
  }

  #[test]
  fn save_error_names_the_key() {
    let pref =
      BackgroundPreference::new("bgColor");
    let error = pref
      .save(&mut FailingStorage, "#fff")
      .expect_err("should fail");
    let rendered = format!("{error:#}");
    assert!(rendered.contains("bgColor"));
    assert!(
      rendered.contains("quota exceeded")
    );
  }
}
