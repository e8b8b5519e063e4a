//! Main application component.

use std::ops::Deref;
use std::rc::Rc;

use activity_board::{
    ApiConfig, BoardAction, BoardState, Controller, MESSAGE_DURATION_MS, TextKey,
    initial_language, toggle_language,
};
use gloo::dialogs::confirm;
use gloo::timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::client::GlooApi;
use crate::components::{ActivitiesPanel, LanguageToggle, MessageBanner, SignupPanel};
use crate::document::apply_language;
use crate::storage::LocalLanguageStore;

/// Board view model as a Yew reducer.
#[derive(Clone, PartialEq)]
pub struct Board(BoardState);

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: BoardAction) -> Rc<Self> {
        Rc::new(Board(self.0.clone().reduce(action)))
    }
}

impl Deref for Board {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        &self.0
    }
}

/// Footer stamp: `host@commit timestamp`.
pub fn build_label() -> String {
    format!(
        "Build: {}@{} {}",
        env!("BUILD_HOST"),
        env!("BUILD_COMMIT"),
        env!("BUILD_TIMESTAMP")
    )
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let board = use_reducer(|| Board(BoardState::new(initial_language(&LocalLanguageStore))));
    let controller = use_memo((), |_| {
        Controller::new(GlooApi::new(ApiConfig::from_build_env(option_env!(
            "ACTIVITY_API_BASE"
        ))))
    });

    let refresh = {
        let controller = controller.clone();
        let dispatcher = board.dispatcher();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action: BoardAction| dispatcher.dispatch(action);
                controller.refresh(&dispatch).await;
            });
        })
    };

    // Translate the page shell and reload the list on start and on every
    // language change
    {
        let refresh = refresh.clone();
        use_effect_with(board.language, move |language| {
            apply_language(*language);
            refresh.emit(());
            || ()
        });
    }

    // Hide each status message after its display window
    {
        let dispatcher = board.dispatcher();
        let shown = board.message.as_ref().map(|m| m.id);
        use_effect_with(shown, move |shown| {
            let timeout = shown.map(|id| {
                Timeout::new(MESSAGE_DURATION_MS, move || {
                    dispatcher.dispatch(BoardAction::HideMessage(id));
                })
            });
            move || drop(timeout)
        });
    }

    let on_toggle_language = {
        let dispatcher = board.dispatcher();
        let current = board.language;
        Callback::from(move |_: ()| {
            let next = toggle_language(&LocalLanguageStore, current);
            dispatcher.dispatch(BoardAction::SetLanguage(next));
        })
    };

    let on_email = {
        let dispatcher = board.dispatcher();
        Callback::from(move |email: String| dispatcher.dispatch(BoardAction::EmailChanged(email)))
    };

    let on_activity = {
        let dispatcher = board.dispatcher();
        Callback::from(move |activity: String| {
            dispatcher.dispatch(BoardAction::ActivitySelected(activity))
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let dispatcher = board.dispatcher();
        let form = board.form.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            spawn_local(async move {
                let dispatch = move |action: BoardAction| dispatcher.dispatch(action);
                controller.submit_signup(&form, &dispatch).await;
            });
        })
    };

    let on_remove = {
        let controller = controller.clone();
        let dispatcher = board.dispatcher();
        let language = board.language;
        Callback::from(move |(activity, email): (String, String)| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action: BoardAction| dispatcher.dispatch(action);
                controller
                    .remove_participant(language, &activity, &email, confirm, &dispatch)
                    .await;
            });
        })
    };

    let language = board.language;
    let message = board
        .message_text()
        .zip(board.message.as_ref().map(|shown| shown.message.severity));

    html! {
        <div class="app">
            <header>
                <LanguageToggle language={language} on_toggle={on_toggle_language} />
                <h1>{ board.text(TextKey::SchoolName) }</h1>
                <h2>{ board.text(TextKey::PageTitle) }</h2>
            </header>

            <main>
                <ActivitiesPanel
                    language={language}
                    list={board.activities.clone()}
                    on_remove={on_remove}
                />

                <SignupPanel
                    language={language}
                    form={board.form.clone()}
                    options={board.select_options()}
                    on_email={on_email}
                    on_activity={on_activity}
                    on_submit={on_submit}
                />

                <MessageBanner message={message} />
            </main>

            <footer>
                <span class="footer-build">
                    { build_label() }
                </span>
            </footer>
        </div>
    }
}
