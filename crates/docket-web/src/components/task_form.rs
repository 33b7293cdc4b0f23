use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub text:          String,
  pub due:           String,
  pub on_text_input: Callback<String>,
  pub on_due_input:  Callback<String>,
  pub on_submit:     Callback<()>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        on_submit.emit(());
      }
    )
  };
  let on_text = {
    let on_text_input =
      props.on_text_input.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_text_input
          .emit(input.value());
      }
    )
  };
  let on_due = {
    let on_due_input =
      props.on_due_input.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_due_input.emit(input.value());
      }
    )
  };

  html! {
      <form class="todo-form" {onsubmit}>
          <input
              class="todo-input"
              type="text"
              placeholder="What needs doing?"
              required=true
              value={props.text.clone()}
              oninput={on_text}
          />
          <input
              class="todo-date"
              type="date"
              value={props.due.clone()}
              oninput={on_due}
          />
          <button class="btn" type="submit">{ "Add" }</button>
      </form>
  }
}
