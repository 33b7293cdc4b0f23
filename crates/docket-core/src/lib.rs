pub mod config;
pub mod datetime;
pub mod preference;
pub mod progress;
pub mod store;
pub mod task;
pub mod urgency;
pub mod view;

pub use config::Palette;
pub use preference::{
  BackgroundPreference,
  KeyValueStorage,
  MemoryStorage
};
pub use progress::{
  Progress,
  ProgressTier
};
pub use store::{
  SubmitOutcome,
  TaskStore
};
pub use task::{
  Task,
  TaskId
};
pub use urgency::Urgency;
pub use view::{
  ListView,
  TaskRowView,
  build_list_view
};
