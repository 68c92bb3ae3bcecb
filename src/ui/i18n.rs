//! User-facing message catalogue.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

/// Every string the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    AppTitle,
    LatestPosts,
    Loading,
    FetchPostsFailed,
    NoPosts,
    PostedBy,
    Author,
    FetchPostFailed,
    InvalidPostId,
    BackHome,
    BackToList,
    Edit,
    Delete,
    ConfirmDelete,
    Ok,
    Cancel,
    Deleting,
    DeleteFailed,
    Login,
    LoggingIn,
    Username,
    Password,
    LoginFailed,
    LoginError,
    RequiredField,
    NoAccount,
    SignedInAs,
    NotSignedIn,
    SignedOut,
    EditPost,
    Title,
    Content,
    Save,
    Saving,
    UpdateFailed,
    NotPostAuthor,
    RequestQueueFailed,
}

impl Language {
    pub fn text(self, msg: Msg) -> &'static str {
        match self {
            Language::En => english(msg),
            Language::Ja => japanese(msg),
        }
    }

    /// Format a server timestamp as a date in the local time zone.
    ///
    /// Unparseable input is shown as-is.
    pub fn format_date(self, raw: &str) -> String {
        self.format_date_in(raw, &chrono::Local)
    }

    /// Format a server timestamp as a date in `tz`. Timestamps without an
    /// offset are taken to be in `tz` already.
    pub fn format_date_in<Tz>(self, raw: &str, tz: &Tz) -> String
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let format = match self {
            Language::En => "%Y-%m-%d",
            Language::Ja => "%Y/%-m/%-d",
        };
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
            return parsed.with_timezone(tz).format(format).to_string();
        }
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format(format).to_string();
        }
        raw.to_string()
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::AppTitle => "Blog",
        Msg::LatestPosts => "Latest posts",
        Msg::Loading => "Loading...",
        Msg::FetchPostsFailed => "Failed to fetch posts.",
        Msg::NoPosts => "No posts yet.",
        Msg::PostedBy => "Posted by",
        Msg::Author => "Author",
        Msg::FetchPostFailed => "Failed to fetch the post.",
        Msg::InvalidPostId => "Invalid post ID.",
        Msg::BackHome => "Back to home",
        Msg::BackToList => "← Back to posts",
        Msg::Edit => "Edit",
        Msg::Delete => "Delete",
        Msg::ConfirmDelete => "Really delete this post?",
        Msg::Ok => "OK",
        Msg::Cancel => "Cancel",
        Msg::Deleting => "Deleting...",
        Msg::DeleteFailed => "Failed to delete the post.",
        Msg::Login => "Login",
        Msg::LoggingIn => "Logging in...",
        Msg::Username => "Username",
        Msg::Password => "Password",
        Msg::LoginFailed => "Login failed",
        Msg::LoginError => "An error occurred while logging in",
        Msg::RequiredField => "Please fill in this field.",
        Msg::NoAccount => "No account yet? Register on the blog site.",
        Msg::SignedInAs => "Signed in as",
        Msg::NotSignedIn => "Not signed in",
        Msg::SignedOut => "Signed out",
        Msg::EditPost => "Edit post",
        Msg::Title => "Title",
        Msg::Content => "Content",
        Msg::Save => "Save",
        Msg::Saving => "Saving...",
        Msg::UpdateFailed => "Failed to update the post.",
        Msg::NotPostAuthor => "Only the author can edit this post.",
        Msg::RequestQueueFailed => "Could not start the request",
    }
}

fn japanese(msg: Msg) -> &'static str {
    match msg {
        Msg::AppTitle => "ブログアプリ",
        Msg::LatestPosts => "最新の記事",
        Msg::Loading => "読み込み中...",
        Msg::FetchPostsFailed => "記事の取得に失敗しました。",
        Msg::NoPosts => "記事がありません。",
        Msg::PostedBy => "投稿者",
        Msg::Author => "著者",
        Msg::FetchPostFailed => "記事の取得に失敗しました",
        Msg::InvalidPostId => "無効な記事IDです",
        Msg::BackHome => "ホームへ戻る",
        Msg::BackToList => "← 記事一覧に戻る",
        Msg::Edit => "編集",
        Msg::Delete => "削除",
        Msg::ConfirmDelete => "本当にこの記事を削除しますか？",
        Msg::Ok => "OK",
        Msg::Cancel => "キャンセル",
        Msg::Deleting => "削除中...",
        Msg::DeleteFailed => "記事の削除に失敗しました",
        Msg::Login => "ログイン",
        Msg::LoggingIn => "ログイン中...",
        Msg::Username => "ユーザー名",
        Msg::Password => "パスワード",
        Msg::LoginFailed => "ログインに失敗しました",
        Msg::LoginError => "ログイン中にエラーが発生しました",
        Msg::RequiredField => "このフィールドを入力してください。",
        Msg::NoAccount => "アカウントをお持ちでない場合は、ブログサイトで登録してください。",
        Msg::SignedInAs => "ログイン中",
        Msg::NotSignedIn => "未ログイン",
        Msg::SignedOut => "ログアウトしました",
        Msg::EditPost => "記事を編集",
        Msg::Title => "タイトル",
        Msg::Content => "本文",
        Msg::Save => "保存",
        Msg::Saving => "保存中...",
        Msg::UpdateFailed => "記事の更新に失敗しました",
        Msg::NotPostAuthor => "この記事を編集できるのは著者のみです",
        Msg::RequestQueueFailed => "リクエストを開始できませんでした",
    }
}
