use crate::app::state::use_app_context;
use crate::components::daisy_ui::{Alert, DaisyColor};
use crate::components::{EmptyState, query_html};
use crate::hooks::use_query;
use crate::i18n::{t, tr_count};
use crate::pages::games::{competition_options, school_options};
use crate::pages::{PageHeader, api_error_message, form_error_message, input_value, select_value};
use copa_core::model::OwnedTeam;
use copa_core::query::{QueryState, keys};
use copa_core::teacher::team_draft;
use yew::prelude::*;

fn team_card(team: &OwnedTeam) -> Html {
    let school = team.school.as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let competition = team
        .competition
        .as_ref()
        .map(|c| c.title.clone())
        .unwrap_or_default();
    html! {
        <article class="card bg-base-100 shadow team-card" key={team.id}>
            <div class="card-body">
                <h3 class="card-title">{ &team.name }</h3>
                <p class="text-sm">{ school }</p>
                <p class="text-sm opacity-70">{ competition }</p>
                <p class="text-sm">{ tr_count("teacher.athletes_count", team.athletes.len()) }</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MyTeamsViewProps {
    pub teams: QueryState<Vec<OwnedTeam>>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Create-team form, rendered above the list.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MyTeamsView)]
pub fn my_teams_view(props: &MyTeamsViewProps) -> Html {
    html! {
        <section class="my-teams-page">
            <PageHeader title={t("teacher.my_teams")} subtitle={t("teacher.my_teams_subtitle")} />
            { for props.children.iter() }
            { query_html(&props.teams, "teacher.teams_error", props.on_retry.clone(), |teams| {
                if teams.is_empty() {
                    html! { <EmptyState title={t("teacher.no_teams")} message={t("teacher.no_teams_hint")} /> }
                } else {
                    html! {
                        <div class="grid gap-4 md:grid-cols-2">{ for teams.iter().map(team_card) }</div>
                    }
                }
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct CreateTeamFormProps {
    schools: Vec<(i64, String)>,
    competitions: Vec<(i64, String)>,
    on_created: Callback<()>,
}

#[function_component(CreateTeamForm)]
fn create_team_form(props: &CreateTeamFormProps) -> Html {
    let ctx = use_app_context();
    let name = use_state(String::new);
    let school = use_state(String::new);
    let competition = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let api = ctx.api();
        let (name, school, competition) = (name.clone(), school.clone(), competition.clone());
        let (error, saving) = (error.clone(), saving.clone());
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = match team_draft(&name, &school, &competition) {
                Ok(draft) => draft,
                Err(err) => {
                    error.set(Some(form_error_message(&err)));
                    return;
                }
            };
            error.set(None);
            saving.set(true);
            let api = api.clone();
            let (name, error, saving, on_created) =
                (name.clone(), error.clone(), saving.clone(), on_created.clone());
            yew::platform::spawn_local(async move {
                match api.create_team(&draft).await {
                    Ok(team) => {
                        log::info!("team {} created", team.id);
                        name.set(String::new());
                        on_created.emit(());
                    }
                    Err(err) => error.set(Some(api_error_message(&err, "teacher.create_error"))),
                }
                saving.set(false);
            });
        })
    };
    let select = |state: &UseStateHandle<String>, label: &str, options: &[(i64, String)]| {
        let onchange = {
            let state = state.clone();
            Callback::from(move |e: Event| state.set(select_value(&e)))
        };
        html! {
            <label class="form-control">
                <span class="label-text">{ label.to_string() }</span>
                <select class="select select-bordered select-sm" {onchange}>
                    <option value="" selected={state.is_empty()}>{ t("filters.choose") }</option>
                    { for options.iter().map(|(id, text)| html! {
                        <option value={id.to_string()} selected={**state == id.to_string()}>{ text.clone() }</option>
                    }) }
                </select>
            </label>
        }
    };
    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
    };

    html! {
        <form class="card bg-base-200 mb-6 create-team" {onsubmit}>
            <div class="card-body">
                <h2 class="card-title">{ t("teacher.new_team") }</h2>
                <div class="flex flex-wrap gap-4 items-end">
                    <label class="form-control">
                        <span class="label-text">{ t("teacher.team_name") }</span>
                        <input class="input input-bordered input-sm" value={(*name).clone()} {oninput} />
                    </label>
                    { select(&school, &t("games.school"), &props.schools) }
                    { select(&competition, &t("games.competition"), &props.competitions) }
                    <button type="submit" class="btn btn-primary btn-sm" disabled={*saving}>{ t("teacher.create_team") }</button>
                </div>
                if let Some(message) = (*error).clone() {
                    <Alert color={Some(DaisyColor::Error)} {message} />
                }
            </div>
        </form>
    }
}

#[function_component(MyTeamsPage)]
pub fn my_teams_page() -> Html {
    let teams = use_query(Some(keys::my_teams()), |api| async move { api.my_teams().await });
    let schools = use_query(Some(keys::schools()), |api| async move { api.schools().await });
    let competitions = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let on_created = teams.reload.clone();
    html! {
        <MyTeamsView teams={teams.state} on_retry={Some(teams.reload)}>
            <CreateTeamForm
                schools={school_options(&schools.state)}
                competitions={competition_options(&competitions.state)}
                {on_created}
            />
        </MyTeamsView>
    }
}
