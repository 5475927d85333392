use crate::app::state::use_app_context;
use crate::components::daisy_ui::{Alert, DaisyColor};
use crate::components::{EmptyState, GameCard, query_html};
use crate::hooks::use_query;
use crate::i18n::t;
use crate::pages::{PageHeader, api_error_message, form_error_message, input_value, textarea_value};
use copa_core::model::Game;
use copa_core::query::{QueryState, keys};
use copa_core::teacher::{appeal_reason, parse_shirt_numbers};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    Saved(String),
    Failed(String),
}

fn feedback_html(feedback: Option<&Feedback>) -> Html {
    match feedback {
        None => Html::default(),
        Some(Feedback::Saved(message)) => {
            html! { <Alert color={Some(DaisyColor::Success)} message={message.clone()} /> }
        }
        Some(Feedback::Failed(message)) => {
            html! { <Alert color={Some(DaisyColor::Error)} message={message.clone()} /> }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameActionsProps {
    pub game_id: i64,
}

/// Participation and appeal forms for one game.
#[function_component(GameActions)]
pub fn game_actions(props: &GameActionsProps) -> Html {
    let ctx = use_app_context();
    let numbers = use_state(String::new);
    let reason = use_state(String::new);
    let feedback = use_state(|| None::<Feedback>);
    let busy = use_state(|| false);
    let game_id = props.game_id;

    let on_participation = {
        let api = ctx.api();
        let cache = ctx.cache();
        let (numbers, feedback, busy) = (numbers.clone(), feedback.clone(), busy.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let parsed = match parse_shirt_numbers(&numbers) {
                Ok(parsed) => parsed,
                Err(err) => return feedback.set(Some(Feedback::Failed(form_error_message(&err)))),
            };
            busy.set(true);
            let (api, cache) = (Rc::clone(&api), Rc::clone(&cache));
            let (numbers, feedback, busy) = (numbers.clone(), feedback.clone(), busy.clone());
            yew::platform::spawn_local(async move {
                match api.record_participation(game_id, &parsed).await {
                    Ok(()) => {
                        numbers.set(String::new());
                        cache.invalidate(&keys::my_games());
                        feedback.set(Some(Feedback::Saved(t("teacher.participation_saved"))));
                    }
                    Err(err) => feedback.set(Some(Feedback::Failed(api_error_message(
                        &err,
                        "teacher.participation_error",
                    )))),
                }
                busy.set(false);
            });
        })
    };

    let on_appeal = {
        let api = ctx.api();
        let (reason, feedback, busy) = (reason.clone(), feedback.clone(), busy.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = match appeal_reason(&reason) {
                Ok(text) => text,
                Err(err) => return feedback.set(Some(Feedback::Failed(form_error_message(&err)))),
            };
            busy.set(true);
            let api = Rc::clone(&api);
            let (reason, feedback, busy) = (reason.clone(), feedback.clone(), busy.clone());
            yew::platform::spawn_local(async move {
                match api.file_appeal(game_id, &text).await {
                    Ok(()) => {
                        reason.set(String::new());
                        feedback.set(Some(Feedback::Saved(t("teacher.appeal_saved"))));
                    }
                    Err(err) => feedback.set(Some(Feedback::Failed(api_error_message(
                        &err,
                        "teacher.appeal_error",
                    )))),
                }
                busy.set(false);
            });
        })
    };

    let on_numbers = {
        let numbers = numbers.clone();
        Callback::from(move |e: InputEvent| numbers.set(input_value(&e)))
    };
    let on_reason = {
        let reason = reason.clone();
        Callback::from(move |e: InputEvent| reason.set(textarea_value(&e)))
    };

    html! {
        <div class="game-actions grid gap-2 md:grid-cols-2 mt-2">
            <form class="flex flex-col gap-1" onsubmit={on_participation}>
                <label class="label-text" for={format!("numbers-{game_id}")}>{ t("teacher.shirt_numbers") }</label>
                <input id={format!("numbers-{game_id}")} class="input input-bordered input-sm"
                    placeholder="7, 10, 11" value={(*numbers).clone()} oninput={on_numbers} />
                <button type="submit" class="btn btn-sm btn-primary" disabled={*busy}>{ t("teacher.record_participation") }</button>
            </form>
            <form class="flex flex-col gap-1" onsubmit={on_appeal}>
                <label class="label-text" for={format!("reason-{game_id}")}>{ t("teacher.appeal_reason") }</label>
                <textarea id={format!("reason-{game_id}")} class="textarea textarea-bordered textarea-sm"
                    value={(*reason).clone()} oninput={on_reason} />
                <button type="submit" class="btn btn-sm btn-outline" disabled={*busy}>{ t("teacher.file_appeal") }</button>
            </form>
            { feedback_html(feedback.as_ref()) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MyGamesViewProps {
    pub games: QueryState<Vec<Game>>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(MyGamesView)]
pub fn my_games_view(props: &MyGamesViewProps) -> Html {
    html! {
        <section class="my-games-page">
            <PageHeader title={t("teacher.my_games")} subtitle={t("teacher.my_games_subtitle")} />
            { query_html(&props.games, "teacher.games_error", props.on_retry.clone(), |games| {
                if games.is_empty() {
                    return html! { <EmptyState title={t("teacher.no_games")} /> };
                }
                html! {
                    <div class="grid gap-4">
                        { for games.iter().map(|game| html! {
                            <GameCard key={game.id} game={Rc::new(game.clone())}>
                                <GameActions game_id={game.id} />
                            </GameCard>
                        }) }
                    </div>
                }
            }) }
        </section>
    }
}

#[function_component(MyGamesPage)]
pub fn my_games_page() -> Html {
    let games = use_query(Some(keys::my_games()), |api| async move { api.my_games().await });
    html! { <MyGamesView games={games.state} on_retry={Some(games.reload)} /> }
}
