use docket_core::datetime::today;
use docket_core::{
  Palette,
  TaskId,
  TaskStore,
  build_list_view
};
use gloo::console::log;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  ColorPicker,
  ProgressPanel,
  TaskForm,
  TaskList
};
use crate::storage::{
  apply_page_background,
  load_background,
  picker_value,
  save_background
};

const PALETTE_TOML: &str =
  include_str!("../assets/palette.toml");

#[function_component(App)]
pub fn app() -> Html {
  let palette = use_state(|| {
    Palette::load_or_default(
      PALETTE_TOML
    )
  });
  let store = use_state(TaskStore::new);
  let draft_text =
    use_state(String::new);
  let draft_due = use_state(String::new);
  let background = {
    let palette = palette.clone();
    use_state(move || {
      load_background(&palette)
    })
  };

  {
    use_effect_with(
      (*background).clone(),
      move |color| {
        if let Some(color) = color {
          apply_page_background(color);
          tracing::debug!(
            color = %color,
            "applied page background"
          );
        }
        || ()
      }
    );
  }

  let on_text_input = {
    let draft_text = draft_text.clone();
    Callback::from(move |value: String| {
      draft_text.set(value);
    })
  };

  let on_due_input = {
    let draft_due = draft_due.clone();
    Callback::from(move |value: String| {
      draft_due.set(value);
    })
  };

  let on_submit = {
    let store = store.clone();
    let draft_text = draft_text.clone();
    let draft_due = draft_due.clone();
    Callback::from(move |()| {
      let mut next = (*store).clone();
      let outcome =
        next.submit(&draft_text, &draft_due);
      let Some(id) = outcome.added else {
        ui_debug(
          "form.submit.empty",
          "ignored submission without \
           task text"
        );
        return;
      };

      ui_debug(
        "form.submit.added",
        &format!("task {id}")
      );
      store.set(next);
      if outcome.clear_inputs {
        draft_text.set(String::new());
        draft_due.set(String::new());
      }
    })
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(move |id: TaskId| {
      let mut next = (*store).clone();
      if next.toggle_complete(id).is_some()
      {
        store.set(next);
      }
    })
  };

  let on_remove = {
    let store = store.clone();
    Callback::from(move |id: TaskId| {
      let mut next = (*store).clone();
      if next.remove(id) {
        store.set(next);
      }
    })
  };

  let on_color_input = {
    let background = background.clone();
    let palette = palette.clone();
    Callback::from(move |color: String| {
      save_background(&palette, &color);
      background.set(Some(color));
    })
  };

  let view = build_list_view(
    &store,
    today(palette.timezone()),
    &palette
  );
  let bar_style =
    view.progress_bar_style();

  html! {
      <div class="container">
          <h1>{ "Docket" }</h1>
          <TaskForm
              text={(*draft_text).clone()}
              due={(*draft_due).clone()}
              on_text_input={on_text_input}
              on_due_input={on_due_input}
              on_submit={on_submit}
          />
          <TaskList
              rows={view.rows}
              on_toggle={on_toggle}
              on_remove={on_remove}
          />
          <ProgressPanel
              progress={view.progress}
              bar_style={bar_style}
          />
          <ColorPicker
              value={picker_value(background.as_deref())}
              on_input={on_color_input}
          />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
