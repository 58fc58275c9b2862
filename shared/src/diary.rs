//! Wire shapes of a single diary day.

use serde::{Deserialize, Serialize};

use crate::ledger::LedgerRow;
use crate::summary::Emotion;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub done: bool,
    pub item: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionDiary {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRecord {
    pub emotion_state: Emotion,
    pub emotion_diary: EmotionDiary,
}

/// Everything recorded for one day. Each section is optional because users
/// pick which sections their diary has during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<TodoItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_record: Option<EmotionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_table: Option<Vec<LedgerRow>>,
}
