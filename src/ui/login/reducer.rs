//! Reducer for the login form.

use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::{LoginPhase, LoginState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Fields are frozen while the request is in flight
            LoginIntent::Input(_) | LoginIntent::Backspace if state.is_submitting() => state,
            LoginIntent::Input(ch) => {
                let focus = state.focus;
                state.field_mut(focus).push(ch);
                if state.missing == Some(focus) {
                    state.missing = None;
                }
                state
            }
            LoginIntent::Backspace => {
                let focus = state.focus;
                state.field_mut(focus).pop();
                state
            }
            LoginIntent::NextField => {
                state.focus = state.focus.next();
                state
            }
            LoginIntent::Submit => {
                if state.is_submitting() {
                    return state;
                }
                if let Some(field) = state.first_empty_field() {
                    state.missing = Some(field);
                    state.focus = field;
                    return state;
                }
                state.missing = None;
                state.error = None;
                state.phase = LoginPhase::Submitting;
                state
            }
            LoginIntent::Failed { message } => {
                state.phase = LoginPhase::Idle;
                state.error = Some(message);
                state
            }
        }
    }
}
