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

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<TaskRowView>,
  pub on_toggle: Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul class="todo-list">
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.id.0;
                  html! {
                      <TaskListRow
                          key={key}
                          row={row}
                          on_toggle={props.on_toggle.clone()}
                          on_remove={props.on_remove.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
