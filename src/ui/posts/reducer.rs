use crate::ui::mvi::Reducer;

use super::intent::PostListIntent;
use super::state::PostListState;

pub struct PostListReducer;

impl Reducer for PostListReducer {
    type State = PostListState;
    type Intent = PostListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostListIntent::Loaded { posts } => PostListState::Ready { posts, selected: 0 },
            PostListIntent::Failed { message } => PostListState::Error { message },
            PostListIntent::MoveUp => match state {
                PostListState::Ready { posts, selected } => {
                    let selected = if selected == 0 {
                        posts.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    PostListState::Ready { posts, selected }
                }
                other => other,
            },
            PostListIntent::MoveDown => match state {
                PostListState::Ready { posts, selected } => {
                    let selected = if selected + 1 >= posts.len() {
                        0
                    } else {
                        selected + 1
                    };
                    PostListState::Ready { posts, selected }
                }
                other => other,
            },
        }
    }
}
