//! User-facing strings, per locale.

use std::fmt;
use std::str::FromStr;

/// Languages the message tables are available in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Every string the client shows to a user.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub title_required: &'static str,
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub toggle_failed: &'static str,
    pub delete_failed: &'static str,
    pub reorder_failed: &'static str,
    pub confirm_delete: &'static str,
    pub empty_list: &'static str,
}

static EN: Messages = Messages {
    title_required: "Please enter a title",
    load_failed: "Failed to load todos",
    create_failed: "Failed to create todo",
    toggle_failed: "Failed to update todo",
    delete_failed: "Failed to delete todo",
    reorder_failed: "Failed to save the new order",
    confirm_delete: "Delete this todo?",
    empty_list: "No todos yet",
};

static JA: Messages = Messages {
    title_required: "タイトルを入力してください",
    load_failed: "TODOの取得に失敗しました",
    create_failed: "TODOの作成に失敗しました",
    toggle_failed: "TODOの更新に失敗しました",
    delete_failed: "TODOの削除に失敗しました",
    reorder_failed: "並び替えの保存に失敗しました",
    confirm_delete: "このTODOを削除しますか？",
    empty_list: "TODOがありません",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ja => &JA,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ja => write!(f, "ja"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts bare language tags and region-qualified ones (`ja_JP.UTF-8`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "ja" => Ok(Locale::Ja),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
