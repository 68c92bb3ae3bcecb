mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::PostEditIntent;
pub use reducer::PostEditReducer;
pub use state::{EditField, EditForm, PostEditState};
