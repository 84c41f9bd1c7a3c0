//! Form Drafts
//!
//! Immutable draft values backing dialogs and the scheduling form.
//! Every edit replaces the whole draft; open/close transitions swap in
//! a fresh one. Drafts are never persisted.

use crate::models::User;

/// Which operation a user dialog will dispatch on submit
#[derive(Debug, Clone, PartialEq)]
pub enum UserDialogMode {
    Create,
    /// Edit the given row; submit sends the full updated record.
    Edit(User),
}

impl UserDialogMode {
    pub fn initial_draft(&self) -> UserDraft {
        match self {
            UserDialogMode::Create => UserDraft::empty(),
            UserDialogMode::Edit(user) => UserDraft::from_user(user),
        }
    }
}

/// Draft for the user create/edit dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
}

impl UserDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_user(user: &User) -> Self {
        Self { username: user.username.clone(), email: user.email.clone() }
    }

    pub fn with_username(self, username: String) -> Self {
        Self { username, ..self }
    }

    pub fn with_email(self, email: String) -> Self {
        Self { email, ..self }
    }

    /// Full record for create (`id = None`) or update (`id` of the row).
    pub fn into_record(self, id: Option<i64>) -> User {
        User { id, username: self.username, email: self.email }
    }
}

/// Draft for the manual scheduling form
#[derive(Debug, Clone, PartialEq)]
pub struct ManualScheduleDraft {
    pub title: String,
    pub description: String,
    pub scheduled_time: String,
    pub interviewer_id: Option<i64>,
    pub interviewee_id: Option<i64>,
}

pub const MSG_SELECT_BOTH: &str = "Please select both interviewer and interviewee";
pub const MSG_DISTINCT_PEOPLE: &str = "Interviewer and interviewee cannot be the same person";

impl ManualScheduleDraft {
    pub fn new(scheduled_time: String) -> Self {
        Self {
            title: "Technical Interview".to_string(),
            description: "Interview session".to_string(),
            scheduled_time,
            interviewer_id: None,
            interviewee_id: None,
        }
    }

    pub fn with_title(self, title: String) -> Self {
        Self { title, ..self }
    }

    pub fn with_description(self, description: String) -> Self {
        Self { description, ..self }
    }

    pub fn with_scheduled_time(self, scheduled_time: String) -> Self {
        Self { scheduled_time, ..self }
    }

    pub fn with_interviewer(self, interviewer_id: Option<i64>) -> Self {
        Self { interviewer_id, ..self }
    }

    pub fn with_interviewee(self, interviewee_id: Option<i64>) -> Self {
        Self { interviewee_id, ..self }
    }

    /// Client-side pairing rules; a failure here blocks the network call.
    pub fn validate_pairing(&self) -> Result<(i64, i64), &'static str> {
        match (self.interviewer_id, self.interviewee_id) {
            (Some(interviewer), Some(interviewee)) if interviewer == interviewee => {
                Err(MSG_DISTINCT_PEOPLE)
            }
            (Some(interviewer), Some(interviewee)) => Ok((interviewer, interviewee)),
            _ => Err(MSG_SELECT_BOTH),
        }
    }
}

/// Draft for the random-pair dialog; the backend picks the participants.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPairDraft {
    pub title: String,
    pub description: String,
    pub scheduled_time: String,
}

impl RandomPairDraft {
    pub fn new(scheduled_time: String) -> Self {
        Self {
            title: "Technical Interview".to_string(),
            description: "Interview session with a random pair of users".to_string(),
            scheduled_time,
        }
    }

    pub fn with_title(self, title: String) -> Self {
        Self { title, ..self }
    }

    pub fn with_description(self, description: String) -> Self {
        Self { description, ..self }
    }

    pub fn with_scheduled_time(self, scheduled_time: String) -> Self {
        Self { scheduled_time, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_selectors_block_submission() {
        let draft = ManualScheduleDraft::new("2025-06-01T14:30".to_string());
        assert_eq!(draft.validate_pairing(), Err(MSG_SELECT_BOTH));

        let only_interviewer = draft.clone().with_interviewer(Some(1));
        assert_eq!(only_interviewer.validate_pairing(), Err(MSG_SELECT_BOTH));

        let only_interviewee = draft.with_interviewee(Some(2));
        assert_eq!(only_interviewee.validate_pairing(), Err(MSG_SELECT_BOTH));
    }

    #[test]
    fn test_same_person_blocks_submission() {
        let draft = ManualScheduleDraft::new("2025-06-01T14:30".to_string())
            .with_interviewer(Some(5))
            .with_interviewee(Some(5));
        assert_eq!(draft.validate_pairing(), Err(MSG_DISTINCT_PEOPLE));
    }

    #[test]
    fn test_distinct_pair_passes() {
        let draft = ManualScheduleDraft::new("2025-06-01T14:30".to_string())
            .with_interviewer(Some(1))
            .with_interviewee(Some(2));
        assert_eq!(draft.validate_pairing(), Ok((1, 2)));
    }

    #[test]
    fn test_field_edit_replaces_only_that_field() {
        let draft = ManualScheduleDraft::new("2025-06-01T14:30".to_string())
            .with_title("Pairing round".to_string());
        assert_eq!(draft.title, "Pairing round");
        assert_eq!(draft.description, "Interview session");
        assert_eq!(draft.scheduled_time, "2025-06-01T14:30");
    }

    #[test]
    fn test_user_draft_roundtrip() {
        let user = User { id: Some(7), username: "bob".to_string(), email: "b@x.com".to_string() };
        let draft = UserDraft::from_user(&user).with_email("b2@x.com".to_string());
        // Update sends the full record, not a patch.
        let record = draft.into_record(user.id);
        assert_eq!(record.id, Some(7));
        assert_eq!(record.username, "bob");
        assert_eq!(record.email, "b2@x.com");
    }

    #[test]
    fn test_create_record_has_no_id() {
        let record = UserDraft::empty()
            .with_username("ana".to_string())
            .with_email("ana@x.com".to_string())
            .into_record(None);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_dialog_mode_initial_drafts() {
        assert_eq!(UserDialogMode::Create.initial_draft(), UserDraft::empty());

        let user = User { id: Some(1), username: "ana".to_string(), email: "a@x.com".to_string() };
        let draft = UserDialogMode::Edit(user.clone()).initial_draft();
        assert_eq!(draft.username, "ana");
        assert_eq!(draft.email, "a@x.com");
    }

    #[test]
    fn test_random_pair_defaults() {
        let draft = RandomPairDraft::new("2025-06-01T15:00".to_string());
        assert_eq!(draft.title, "Technical Interview");
        assert_eq!(draft.description, "Interview session with a random pair of users");
        assert_eq!(draft.scheduled_time, "2025-06-01T15:00");
    }
}
