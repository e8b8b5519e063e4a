//! # activity-board
//!
//! Core of the Mergington High School extracurricular activity signup page.
//!
//! The page lists activities from a backend, lets a student sign up for one,
//! and lets anyone remove a participant from a roster. This crate holds
//! everything that does not need a browser:
//!
//! - **Data model**: [`Activity`] and the backend-ordered [`Activities`]
//! - **Translations**: [`Language`], [`TextKey`] and the string tables
//! - **Endpoint contract**: URL building and response interpretation
//! - **View model**: [`BoardState`] with a pure reducer
//! - **Controller**: async signup/removal/refresh flows over [`ActivityApi`]
//!
//! The Yew front end in `wasm-ui` supplies the HTTP client, storage and DOM.
//!
//! ## Example
//!
//! ```
//! use activity_board::{Activities, BoardAction, BoardState, Language, RequestGate};
//!
//! let body = r#"{"Chess Club": {"description": "Chess", "schedule": "Fridays",
//!                "max_participants": 10, "participants": ["a@x.edu", "b@x.edu", "c@x.edu"]}}"#;
//!
//! let gate = RequestGate::new();
//! let state = BoardState::new(Language::En).reduce(BoardAction::ActivitiesLoaded {
//!     ticket: gate.issue(),
//!     result: Activities::from_json(body),
//! });
//!
//! assert_eq!(state.activities.cards()[0].availability(Language::En), "7 spots left");
//! ```

pub mod activity;
pub mod api;
pub mod board;
pub mod controller;
pub mod error;
pub mod i18n;
pub mod message;

pub use activity::{Activities, Activity};
pub use api::{ActivityApi, ApiConfig, parse_activities_response, parse_mutation_response};
pub use board::{
    ActivityCard, ActivityList, BoardAction, BoardState, LoadTicket, RequestGate, ShownMessage,
    SignupForm,
};
pub use controller::Controller;
pub use error::{BoardError, Result};
pub use i18n::{
    LANGUAGE_STORAGE_KEY, Language, LanguageStore, TextKey, confirm_removal_prompt,
    initial_language, resolve, resolve_name, toggle_language,
};
pub use message::{MESSAGE_DURATION_MS, MessageText, Severity, UiMessage};
