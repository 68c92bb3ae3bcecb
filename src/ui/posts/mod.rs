mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::PostListIntent;
pub use reducer::PostListReducer;
pub use state::{preview, PostListState, PREVIEW_CHARS};
