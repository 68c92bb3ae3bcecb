//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! key press / API outcome ──→ Intent ──→ Reducer ──→ State ──→ view
//! ```
//!
//! Reducers are pure. Side effects (issuing requests, navigating, touching
//! the session) happen in `App` around the dispatch call.

/// Screen state. Must render on its own and compare cheaply.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened to a screen: a key, a fetched post, a failure.
pub trait Intent: Send + 'static {}

/// The only place where screen state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// (State, Intent) -> State, without side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
