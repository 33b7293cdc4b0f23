use docket_core::{
  TaskId,
  TaskRowView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRowView,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_remove =
    props.on_remove.clone();
  let title = props
    .row
    .urgency
    .map(|urgency| urgency.label())
    .unwrap_or_default();

  html! {
      <li
          class={props.row.row_class.clone()}
          style={props.row.row_style.clone()}
          title={title}
      >
          <input
              type="checkbox"
              checked={props.row.completed}
              onchange={move |_: yew::Event| on_toggle.emit(id)}
          />
          <span style={props.row.text_style}>{ props.row.label.clone() }</span>
          <button
              class="remove-btn"
              type="button"
              onclick={move |_: yew::MouseEvent| on_remove.emit(id)}
          >
              { "Remove" }
          </button>
      </li>
  }
}
