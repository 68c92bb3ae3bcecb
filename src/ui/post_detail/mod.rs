mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::PostDetailIntent;
pub use reducer::PostDetailReducer;
pub use state::{DeleteStatus, PostDetailState};
