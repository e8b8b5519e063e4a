//! UI Components for the activity board.

use activity_board::{ActivityCard, ActivityList, Language, Severity, SignupForm, TextKey, resolve};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Language toggle button showing the active language.
#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    pub language: Language,
    pub on_toggle: Callback<()>,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <button id="language-toggle" class="language-toggle" {onclick}>
            <span class="current-lang">{ props.language.indicator() }</span>
        </button>
    }
}

/// One activity with its roster. `on_remove` emits `(activity, email)`.
fn activity_card(
    card: &ActivityCard<'_>,
    language: Language,
    on_remove: &Callback<(String, String)>,
) -> Html {
    let t = |key| resolve(language, key);

    let roster = if card.roster.is_empty() {
        html! {
            <p class="no-participants">{ t(TextKey::NoParticipants) }</p>
        }
    } else {
        html! {
            <ul class="participants-list">
                { for card.roster.iter().map(|email| {
                    let onclick = on_remove.reform({
                        let activity = card.name.to_string();
                        let email = email.clone();
                        move |_: MouseEvent| (activity.clone(), email.clone())
                    });
                    html! {
                        <li key={email.clone()}>
                            <span class="participant-email">{ email }</span>
                            <button
                                class="delete-btn"
                                title={t(TextKey::RemoveParticipant)}
                                {onclick}
                            >
                                { "🗑️" }
                            </button>
                        </li>
                    }
                })}
            </ul>
        }
    };

    html! {
        <div class="activity-card" key={card.name.to_string()}>
            <h4>{ card.name }</h4>
            <p>{ card.description }</p>
            <p><strong>{ t(TextKey::Schedule) }</strong>{ " " }{ card.schedule }</p>
            <p><strong>{ t(TextKey::Availability) }</strong>{ " " }{ card.availability(language) }</p>
            <div class="participants-section">
                <h5>{ card.roster_heading(language) }</h5>
                { roster }
            </div>
        </div>
    }
}

/// The activities list: loading text, failure text, or cards.
#[derive(Properties, PartialEq)]
pub struct ActivitiesPanelProps {
    pub language: Language,
    pub list: ActivityList,
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivitiesPanel)]
pub fn activities_panel(props: &ActivitiesPanelProps) -> Html {
    let language = props.language;

    let content = match &props.list {
        ActivityList::Loading => html! { <p>{ resolve(language, TextKey::LoadingActivities) }</p> },
        ActivityList::Failed => html! { <p>{ resolve(language, TextKey::FailedToLoad) }</p> },
        ActivityList::Ready(_) => props
            .list
            .cards()
            .iter()
            .map(|card| activity_card(card, language, &props.on_remove))
            .collect::<Html>(),
    };

    html! {
        <section id="activities-container">
            <h3>{ resolve(language, TextKey::AvailableActivities) }</h3>
            <div id="activities-list">{ content }</div>
        </section>
    }
}

/// Signup form.
#[derive(Properties, PartialEq)]
pub struct SignupPanelProps {
    pub language: Language,
    pub form: SignupForm,
    /// `(value, label)` pairs, placeholder first.
    pub options: Vec<(String, String)>,
    pub on_email: Callback<String>,
    pub on_activity: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupPanel)]
pub fn signup_panel(props: &SignupPanelProps) -> Html {
    let language = props.language;

    let on_input = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(target.value());
        })
    };

    let on_change = {
        let on_activity = props.on_activity.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            on_activity.emit(target.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section id="signup-container">
            <h3>{ resolve(language, TextKey::SignUpTitle) }</h3>
            <form id="signup-form" {onsubmit}>
                <div class="form-group">
                    <label for="email">{ resolve(language, TextKey::StudentEmail) }</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder={resolve(language, TextKey::EmailPlaceholder)}
                        value={props.form.email.clone()}
                        oninput={on_input}
                    />
                </div>
                <div class="form-group">
                    <label for="activity">{ resolve(language, TextKey::SelectActivity) }</label>
                    <select id="activity" required=true onchange={on_change}>
                        { for props.options.iter().map(|(value, label)| html! {
                            <option
                                value={value.clone()}
                                selected={*value == props.form.activity}
                            >
                                { label }
                            </option>
                        })}
                    </select>
                </div>
                <button type="submit">{ resolve(language, TextKey::SignUpButton) }</button>
            </form>
        </section>
    }
}

/// Status message area; hidden when there is nothing to show.
#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub message: Option<(String, Severity)>,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match &props.message {
        Some((text, severity)) => html! {
            <div id="message" class={severity.class()}>{ text }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}
