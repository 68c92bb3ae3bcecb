use crate::ui::mvi::Reducer;

use super::intent::PostEditIntent;
use super::state::{EditField, EditForm, PostEditState};

pub struct PostEditReducer;

impl Reducer for PostEditReducer {
    type State = PostEditState;
    type Intent = PostEditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostEditIntent::Loaded { post } => PostEditState::Ready(EditForm {
                post_id: post.id,
                author_id: Some(post.author.id),
                title: post.title,
                content: post.content,
                ..Default::default()
            }),
            PostEditIntent::LoadFailed { message } => PostEditState::Error { message },
            other => match state {
                PostEditState::Ready(form) => PostEditState::Ready(reduce_form(form, other)),
                state => state,
            },
        }
    }
}

fn reduce_form(mut form: EditForm, intent: PostEditIntent) -> EditForm {
    match intent {
        PostEditIntent::SaveFailed { message } => {
            form.saving = false;
            form.error = Some(message);
        }
        // Form is frozen while the update is in flight
        _ if form.saving => {}
        PostEditIntent::Input(ch) => {
            form.focused_mut().push(ch);
            if form.focus == EditField::Title {
                form.title_missing = false;
            }
        }
        PostEditIntent::Newline => match form.focus {
            EditField::Title => form.focus = EditField::Content,
            EditField::Content => form.content.push('\n'),
        },
        PostEditIntent::Backspace => {
            form.focused_mut().pop();
        }
        PostEditIntent::NextField => {
            form.focus = match form.focus {
                EditField::Title => EditField::Content,
                EditField::Content => EditField::Title,
            };
        }
        PostEditIntent::Submit => {
            if form.title.trim().is_empty() {
                form.title_missing = true;
                form.focus = EditField::Title;
            } else {
                form.title_missing = false;
                form.error = None;
                form.saving = true;
            }
        }
        PostEditIntent::Loaded { .. } | PostEditIntent::LoadFailed { .. } => {}
    }
    form
}
