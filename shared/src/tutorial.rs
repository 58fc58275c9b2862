//! Onboarding choice of which sections a diary day contains.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    Todolist,
    TodayQuestion,
    EmotionDiary,
    AccountBook,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Todolist,
        ContentKind::TodayQuestion,
        ContentKind::EmotionDiary,
        ContentKind::AccountBook,
    ];

    /// Element id of the option's checkbox.
    pub fn element_id(&self) -> &'static str {
        match self {
            ContentKind::Todolist => "todolist",
            ContentKind::TodayQuestion => "todayquestion",
            ContentKind::EmotionDiary => "emotiondiary",
            ContentKind::AccountBook => "accountbook",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Todolist => "todolist",
            ContentKind::TodayQuestion => "오늘의 질문",
            ContentKind::EmotionDiary => "감정 일기",
            ContentKind::AccountBook => "가계부",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOption {
    pub id: String,
    pub title: ContentKind,
    pub is_checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialSelection {
    options: Vec<ContentOption>,
}

impl Default for TutorialSelection {
    fn default() -> Self {
        Self {
            options: ContentKind::ALL
                .iter()
                .map(|kind| ContentOption {
                    id: kind.element_id().to_string(),
                    title: *kind,
                    is_checked: false,
                })
                .collect(),
        }
    }
}

impl TutorialSelection {
    pub fn options(&self) -> &[ContentOption] {
        &self.options
    }

    pub fn set(&mut self, kind: ContentKind, checked: bool) {
        if let Some(option) = self.options.iter_mut().find(|o| o.title == kind) {
            option.is_checked = checked;
        }
    }

    /// Flip an option and return its new state.
    pub fn toggle(&mut self, kind: ContentKind) -> bool {
        match self.options.iter_mut().find(|o| o.title == kind) {
            Some(option) => {
                option.is_checked = !option.is_checked;
                option.is_checked
            }
            None => false,
        }
    }

    pub fn is_checked(&self, kind: ContentKind) -> bool {
        self.options
            .iter()
            .any(|o| o.title == kind && o.is_checked)
    }

    /// Checked sections, in display order.
    pub fn selected(&self) -> Vec<ContentKind> {
        self.options
            .iter()
            .filter(|o| o.is_checked)
            .map(|o| o.title)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_every_option_unchecked() {
        let selection = TutorialSelection::default();
        assert_eq!(selection.options().len(), 4);
        assert!(selection.selected().is_empty());
        assert_eq!(selection.options()[1].id, "todayquestion");
    }

    #[test]
    fn test_toggle_and_set() {
        let mut selection = TutorialSelection::default();

        assert!(selection.toggle(ContentKind::AccountBook));
        selection.set(ContentKind::Todolist, true);
        assert_eq!(
            selection.selected(),
            vec![ContentKind::Todolist, ContentKind::AccountBook]
        );

        assert!(!selection.toggle(ContentKind::AccountBook));
        assert!(!selection.is_checked(ContentKind::AccountBook));
        assert!(selection.is_checked(ContentKind::Todolist));
    }

    #[test]
    fn test_option_json_shape() {
        let mut selection = TutorialSelection::default();
        selection.set(ContentKind::EmotionDiary, true);

        let json = serde_json::to_value(&selection.options()[2]).unwrap();
        assert_eq!(json["id"], "emotiondiary");
        assert_eq!(json["title"], "EMOTION_DIARY");
        assert_eq!(json["isChecked"], true);
    }
}
