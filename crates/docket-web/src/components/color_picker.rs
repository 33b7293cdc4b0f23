use web_sys::{
  HtmlInputElement,
  InputEvent
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
pub struct ColorPickerProps {
  pub value:    String,
  pub on_input: Callback<String>
}

#[function_component(ColorPicker)]
pub fn color_picker(
  props: &ColorPickerProps
) -> Html {
  let oninput = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  html! {
      <div class="settings">
          <label for="bg-color">{ "Background" }</label>
          <input
              id="bg-color"
              type="color"
              value={props.value.clone()}
              {oninput}
          />
      </div>
  }
}
