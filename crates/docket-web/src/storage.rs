use anyhow::anyhow;
use docket_core::{
  BackgroundPreference,
  KeyValueStorage,
  Palette
};
use wasm_bindgen::JsValue;

pub const DEFAULT_PICKER_COLOR: &str =
  "#ffffff";

/// `window.localStorage`, when the
/// browser exposes it.
pub struct LocalStorage {
  inner: web_sys::Storage
}

impl LocalStorage {
  pub fn open() -> Option<Self> {
    web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      })
      .map(|inner| Self { inner })
  }
}

impl KeyValueStorage for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Option<String> {
    self
      .inner
      .get_item(key)
      .ok()
      .flatten()
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .inner
      .set_item(key, value)
      .map_err(js_error)
  }
}

fn js_error(value: JsValue) -> anyhow::Error {
  anyhow!("{value:?}")
}

fn background_preference(
  palette: &Palette
) -> BackgroundPreference {
  BackgroundPreference::new(
    palette
      .preferences
      .storage_key
      .clone()
  )
}

pub fn load_background(
  palette: &Palette
) -> Option<String> {
  let Some(storage) = LocalStorage::open()
  else {
    tracing::warn!(
      "localStorage unavailable; \
       background preference not \
       restored"
    );
    return None;
  };
  background_preference(palette)
    .load(&storage)
}

pub fn save_background(
  palette: &Palette,
  color: &str
) {
  let Some(mut storage) =
    LocalStorage::open()
  else {
    tracing::warn!(
      "localStorage unavailable; \
       background preference not saved"
    );
    return;
  };
  if let Err(error) =
    background_preference(palette)
      .save(&mut storage, color)
  {
    tracing::error!(
      error = %format!("{error:#}"),
      "failed saving background color"
    );
  }
}

pub fn apply_page_background(
  color: &str
) {
  let Some(body) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.body()
    })
  else {
    tracing::warn!(
      "document body missing; cannot \
       apply background"
    );
    return;
  };

  if let Err(error) = body
    .style()
    .set_property(
      "background-color",
      color
    )
  {
    tracing::error!(
      ?error,
      color,
      "failed applying page background"
    );
  }
}

/// Value preselected in the color
/// picker.
pub fn picker_value(
  background: Option<&str>
) -> String {
  background
    .unwrap_or(DEFAULT_PICKER_COLOR)
    .to_string()
}
