use docket_core::Progress;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ProgressPanelProps {
  pub progress:  Progress,
  pub bar_style: String
}

#[function_component(ProgressPanel)]
pub fn progress_panel(
  props: &ProgressPanelProps
) -> Html {
  html! {
      <div class="progress-panel">
          <div class="stats">
              <span>{ "Total: " }<strong id="total-tasks">{ props.progress.total }</strong></span>
              <span>{ "Completed: " }<strong id="completed-tasks">{ props.progress.completed }</strong></span>
              <span class="progress-text">{ props.progress.percent_label() }</span>
          </div>
          <div class="progress">
              <div class="progress-bar" style={props.bar_style.clone()}></div>
          </div>
      </div>
  }
}
