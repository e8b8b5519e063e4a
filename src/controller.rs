//! Request orchestration for the board.
//!
//! Each operation talks to the backend through an [`ActivityApi`] and reports
//! every outcome as [`BoardAction`]s through `dispatch`. Failures end here:
//! they become status messages or a failed list, never errors for the caller.

use crate::api::ActivityApi;
use crate::board::{BoardAction, RequestGate, SignupForm};
use crate::error::BoardError;
use crate::i18n::{Language, TextKey, confirm_removal_prompt};
use crate::message::UiMessage;

pub struct Controller<A> {
    api: A,
    gate: RequestGate,
}

impl<A: ActivityApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            gate: RequestGate::new(),
        }
    }

    /// Fetch the activity list and hand it to the view model.
    pub async fn refresh(&self, dispatch: &impl Fn(BoardAction)) {
        let ticket = self.gate.issue();
        log::debug!("loading activities ({ticket:?})");
        let result = self.api.fetch_activities().await;
        if let Err(e) = &result {
            log::warn!("error fetching activities: {e}");
        }
        dispatch(BoardAction::ActivitiesLoaded { ticket, result });
    }

    /// Sign the form's email up for the form's activity.
    ///
    /// On success the form is reset and the list reloaded.
    pub async fn submit_signup(&self, form: &SignupForm, dispatch: &impl Fn(BoardAction)) {
        if !form.is_complete() {
            log::warn!("signup form submitted incomplete");
            dispatch(BoardAction::ShowMessage(UiMessage::local_error(
                TextKey::FailedToSignUp,
            )));
            return;
        }

        let email = form.email.trim();
        match self.api.signup(&form.activity, email).await {
            Ok(message) => {
                log::debug!("signed up {email} for {}", form.activity);
                dispatch(BoardAction::ShowMessage(UiMessage::success(message)));
                dispatch(BoardAction::ResetForm);
                self.refresh(dispatch).await;
            }
            Err(e) => {
                log::warn!("error signing up: {e}");
                dispatch(BoardAction::ShowMessage(failure_message(
                    &e,
                    TextKey::FailedToSignUp,
                )));
            }
        }
    }

    /// Remove `email` from `activity` once `confirm` approves the prompt.
    ///
    /// Returns `false` when the user cancelled and nothing was sent.
    pub async fn remove_participant(
        &self,
        language: Language,
        activity: &str,
        email: &str,
        confirm: impl FnOnce(&str) -> bool,
        dispatch: &impl Fn(BoardAction),
    ) -> bool {
        if !confirm(&confirm_removal_prompt(language, email, activity)) {
            return false;
        }

        match self.api.unregister(activity, email).await {
            Ok(message) => {
                log::debug!("unregistered {email} from {activity}");
                dispatch(BoardAction::ShowMessage(UiMessage::success(message)));
                self.refresh(dispatch).await;
            }
            Err(e) => {
                log::warn!("error unregistering: {e}");
                dispatch(BoardAction::ShowMessage(failure_message(
                    &e,
                    TextKey::FailedToUnregister,
                )));
            }
        }
        true
    }
}

/// Backend detail when there is one, otherwise a localized fallback.
fn failure_message(error: &BoardError, transport_fallback: TextKey) -> UiMessage {
    match error {
        BoardError::Rejected {
            detail: Some(detail),
            ..
        } => UiMessage::backend_error(detail.clone()),
        BoardError::Rejected { detail: None, .. } => UiMessage::local_error(TextKey::GenericError),
        BoardError::Network(_) | BoardError::Decode(_) => {
            UiMessage::local_error(transport_fallback)
        }
    }
}
