//! Display languages and the UI string tables.
//!
//! Every string the page shows is named by a [`TextKey`]. Lookups by key are
//! exhaustive matches, so a key without a translation does not compile.
//! Static markup names keys by their camelCase attribute name
//! (`data-i18n="pageTitle"`); [`resolve_name`] handles those and falls back
//! to the raw name when it is unknown.

use std::borrow::Cow;

/// Storage key the chosen language is persisted under.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    /// ISO 639-1 code, also the persisted value.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// The other supported language.
    pub const fn toggled(self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }

    /// Label shown on the language toggle.
    pub const fn indicator(self) -> &'static str {
        match self {
            Language::En => "🇺🇸 EN",
            Language::Pt => "🇧🇷 PT",
        }
    }
}

/// Every translatable UI string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    SchoolName,
    PageTitle,
    AvailableActivities,
    LoadingActivities,
    SignUpTitle,
    StudentEmail,
    EmailPlaceholder,
    SelectActivity,
    SelectActivityOption,
    SignUpButton,
    Schedule,
    Availability,
    SpotsLeft,
    CurrentParticipants,
    NoParticipants,
    RemoveParticipant,
    ConfirmRemove,
    From,
    FailedToLoad,
    FailedToSignUp,
    FailedToUnregister,
    GenericError,
}

impl TextKey {
    pub const ALL: [TextKey; 22] = [
        TextKey::SchoolName,
        TextKey::PageTitle,
        TextKey::AvailableActivities,
        TextKey::LoadingActivities,
        TextKey::SignUpTitle,
        TextKey::StudentEmail,
        TextKey::EmailPlaceholder,
        TextKey::SelectActivity,
        TextKey::SelectActivityOption,
        TextKey::SignUpButton,
        TextKey::Schedule,
        TextKey::Availability,
        TextKey::SpotsLeft,
        TextKey::CurrentParticipants,
        TextKey::NoParticipants,
        TextKey::RemoveParticipant,
        TextKey::ConfirmRemove,
        TextKey::From,
        TextKey::FailedToLoad,
        TextKey::FailedToSignUp,
        TextKey::FailedToUnregister,
        TextKey::GenericError,
    ];

    /// Attribute name used in `data-i18n` markup.
    pub const fn name(self) -> &'static str {
        match self {
            TextKey::SchoolName => "schoolName",
            TextKey::PageTitle => "pageTitle",
            TextKey::AvailableActivities => "availableActivities",
            TextKey::LoadingActivities => "loadingActivities",
            TextKey::SignUpTitle => "signUpTitle",
            TextKey::StudentEmail => "studentEmail",
            TextKey::EmailPlaceholder => "emailPlaceholder",
            TextKey::SelectActivity => "selectActivity",
            TextKey::SelectActivityOption => "selectActivityOption",
            TextKey::SignUpButton => "signUpButton",
            TextKey::Schedule => "schedule",
            TextKey::Availability => "availability",
            TextKey::SpotsLeft => "spotsLeft",
            TextKey::CurrentParticipants => "currentParticipants",
            TextKey::NoParticipants => "noParticipants",
            TextKey::RemoveParticipant => "removeParticipant",
            TextKey::ConfirmRemove => "confirmRemove",
            TextKey::From => "from",
            TextKey::FailedToLoad => "failedToLoad",
            TextKey::FailedToSignUp => "failedToSignUp",
            TextKey::FailedToUnregister => "failedToUnregister",
            TextKey::GenericError => "genericError",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TextKey::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Localized string for `key`.
pub fn resolve(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Pt => portuguese(key),
    }
}

/// Localized string for a markup key name, or the name itself if unknown.
pub fn resolve_name(language: Language, name: &str) -> Cow<'_, str> {
    match TextKey::from_name(name) {
        Some(key) => Cow::Borrowed(resolve(language, key)),
        None => Cow::Borrowed(name),
    }
}

/// Question asked before removing `email` from `activity`.
pub fn confirm_removal_prompt(language: Language, email: &str, activity: &str) -> String {
    format!(
        "{} {} {} {}?",
        resolve(language, TextKey::ConfirmRemove),
        email,
        resolve(language, TextKey::From),
        activity
    )
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::SchoolName => "Mergington High School",
        TextKey::PageTitle => "Extracurricular Activities",
        TextKey::AvailableActivities => "Available Activities",
        TextKey::LoadingActivities => "Loading activities...",
        TextKey::SignUpTitle => "Sign Up for an Activity",
        TextKey::StudentEmail => "Student Email:",
        TextKey::EmailPlaceholder => "your-email@mergington.edu",
        TextKey::SelectActivity => "Select Activity:",
        TextKey::SelectActivityOption => "-- Select an activity --",
        TextKey::SignUpButton => "Sign Up",
        TextKey::Schedule => "Schedule:",
        TextKey::Availability => "Availability:",
        TextKey::SpotsLeft => "spots left",
        TextKey::CurrentParticipants => "Current Participants",
        TextKey::NoParticipants => "No participants yet. Be the first to sign up!",
        TextKey::RemoveParticipant => "Remove participant",
        TextKey::ConfirmRemove => "Are you sure you want to remove",
        TextKey::From => "from",
        TextKey::FailedToLoad => "Failed to load activities. Please try again later.",
        TextKey::FailedToSignUp => "Failed to sign up. Please try again.",
        TextKey::FailedToUnregister => "Failed to unregister. Please try again.",
        TextKey::GenericError => "An error occurred",
    }
}

fn portuguese(key: TextKey) -> &'static str {
    match key {
        TextKey::SchoolName => "Escola Secundária Mergington",
        TextKey::PageTitle => "Atividades Extracurriculares",
        TextKey::AvailableActivities => "Atividades Disponíveis",
        TextKey::LoadingActivities => "Carregando atividades...",
        TextKey::SignUpTitle => "Inscrever-se em uma Atividade",
        TextKey::StudentEmail => "E-mail do Aluno:",
        TextKey::EmailPlaceholder => "seu-email@mergington.edu",
        TextKey::SelectActivity => "Selecionar Atividade:",
        TextKey::SelectActivityOption => "-- Selecione uma atividade --",
        TextKey::SignUpButton => "Inscrever-se",
        TextKey::Schedule => "Horário:",
        TextKey::Availability => "Disponibilidade:",
        TextKey::SpotsLeft => "vagas restantes",
        TextKey::CurrentParticipants => "Participantes Atuais",
        TextKey::NoParticipants => "Ainda não há participantes. Seja o primeiro a se inscrever!",
        TextKey::RemoveParticipant => "Remover participante",
        TextKey::ConfirmRemove => "Tem certeza de que deseja remover",
        TextKey::From => "de",
        TextKey::FailedToLoad => {
            "Falha ao carregar atividades. Por favor, tente novamente mais tarde."
        }
        TextKey::FailedToSignUp => "Falha ao inscrever. Por favor, tente novamente.",
        TextKey::FailedToUnregister => "Falha ao cancelar inscrição. Por favor, tente novamente.",
        TextKey::GenericError => "Ocorreu um erro",
    }
}

/// Durable storage for the chosen display language.
pub trait LanguageStore {
    fn load(&self) -> Option<Language>;
    fn save(&self, language: Language);
}

/// Language to start with: the persisted choice, else English.
pub fn initial_language(store: &impl LanguageStore) -> Language {
    store.load().unwrap_or_default()
}

/// Flip to the other language and persist it.
pub fn toggle_language(store: &impl LanguageStore, current: Language) -> Language {
    let next = current.toggled();
    store.save(next);
    log::debug!("language switched to {}", next.code());
    next
}
