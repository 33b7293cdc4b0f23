mod color_picker;
mod progress_panel;
mod task_form;
mod task_list;
mod task_list_row;

pub use color_picker::ColorPicker;
pub use progress_panel::ProgressPanel;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
