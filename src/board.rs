//! Page view model.
//!
//! All state the page renders lives in [`BoardState`] and changes only
//! through [`BoardState::reduce`]. Async work never touches the state
//! directly; it emits [`BoardAction`]s.

use std::cell::Cell;

use crate::activity::{Activities, Activity};
use crate::error::BoardError;
use crate::i18n::{Language, TextKey, resolve};
use crate::message::UiMessage;

/// Identifies one `GET /activities` request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Hands out load tickets in issue order.
#[derive(Debug, Default)]
pub struct RequestGate {
    issued: Cell<u64>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> LoadTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        LoadTicket(next)
    }
}

/// State of the activities list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityList {
    Loading,
    Ready(Activities),
    Failed,
}

impl ActivityList {
    /// Cards for the loaded activities, empty while loading or failed.
    pub fn cards(&self) -> Vec<ActivityCard<'_>> {
        match self {
            ActivityList::Ready(activities) => activities
                .iter()
                .map(|(name, activity)| ActivityCard::new(name, activity))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.activity.is_empty()
    }
}

/// A message currently on screen. `id` ties it to its hide timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMessage {
    pub id: u64,
    pub message: UiMessage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    SetLanguage(Language),
    ActivitiesLoaded {
        ticket: LoadTicket,
        result: Result<Activities, BoardError>,
    },
    EmailChanged(String),
    ActivitySelected(String),
    ResetForm,
    ShowMessage(UiMessage),
    HideMessage(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub language: Language,
    pub activities: ActivityList,
    pub form: SignupForm,
    pub message: Option<ShownMessage>,
    applied_load: LoadTicket,
    messages_shown: u64,
}

impl BoardState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            activities: ActivityList::Loading,
            form: SignupForm::default(),
            message: None,
            applied_load: LoadTicket::default(),
            messages_shown: 0,
        }
    }

    pub fn reduce(mut self, action: BoardAction) -> Self {
        match action {
            BoardAction::SetLanguage(language) => {
                self.language = language;
            }
            BoardAction::ActivitiesLoaded { ticket, result } => {
                if ticket <= self.applied_load {
                    log::debug!("dropping stale activities response {ticket:?}");
                    return self;
                }
                self.applied_load = ticket;
                self.activities = match result {
                    Ok(activities) => {
                        if !self.form.activity.is_empty()
                            && activities.get(&self.form.activity).is_none()
                        {
                            self.form.activity.clear();
                        }
                        ActivityList::Ready(activities)
                    }
                    Err(_) => ActivityList::Failed,
                };
            }
            BoardAction::EmailChanged(email) => {
                self.form.email = email;
            }
            BoardAction::ActivitySelected(activity) => {
                self.form.activity = activity;
            }
            BoardAction::ResetForm => {
                self.form = SignupForm::default();
            }
            BoardAction::ShowMessage(message) => {
                self.messages_shown += 1;
                self.message = Some(ShownMessage {
                    id: self.messages_shown,
                    message,
                });
            }
            BoardAction::HideMessage(id) => {
                if self.message.as_ref().is_some_and(|m| m.id == id) {
                    self.message = None;
                }
            }
        }
        self
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        resolve(self.language, key)
    }

    /// Dropdown options as `(value, label)`: the placeholder first, then one
    /// per activity.
    pub fn select_options(&self) -> Vec<(String, String)> {
        let placeholder = self.text(TextKey::SelectActivityOption).to_string();
        let mut options = vec![(String::new(), placeholder)];
        if let ActivityList::Ready(activities) = &self.activities {
            options.extend(activities.names().map(|n| (n.to_string(), n.to_string())));
        }
        options
    }

    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().map(|m| m.message.render(self.language))
    }
}

/// Render-ready view of one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub spots_left: i64,
    pub roster: &'a [String],
}

impl<'a> ActivityCard<'a> {
    pub fn new(name: &'a str, activity: &'a Activity) -> Self {
        Self {
            name,
            description: &activity.description,
            schedule: &activity.schedule,
            spots_left: activity.spots_left(),
            roster: &activity.participants,
        }
    }

    /// "7 spots left"
    pub fn availability(&self, language: Language) -> String {
        format!("{} {}", self.spots_left, resolve(language, TextKey::SpotsLeft))
    }

    /// "Current Participants (3):", or without a count when empty.
    pub fn roster_heading(&self, language: Language) -> String {
        let label = resolve(language, TextKey::CurrentParticipants);
        if self.roster.is_empty() {
            format!("{label}:")
        } else {
            format!("{label} ({}):", self.roster.len())
        }
    }
}
