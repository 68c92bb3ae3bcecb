mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginPhase, LoginState};
