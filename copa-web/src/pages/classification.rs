use crate::app::state::Api;
use crate::components::daisy_ui::{Alert, DaisyColor, Loading};
use crate::components::{EmptyState, StandingsTable, StatusBadge, StatusKind};
use crate::hooks::use_query;
use crate::i18n::{t, tr, tr_count};
use crate::pages::{PageHeader, id_select};
use copa_core::error::ApiError;
use copa_core::model::{Competition, StandingRow};
use copa_core::query::{QueryKey, QueryState, keys};
use copa_core::standings::{
    DRAW_POINTS, LOSS_POINTS, StandingsView, WIN_POINTS, classification_key, standings_view,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

const LEGEND: &[(&str, &str)] = &[
    ("standings.played", "standings.legend.played"),
    ("standings.wins", "standings.legend.wins"),
    ("standings.draws", "standings.legend.draws"),
    ("standings.losses", "standings.legend.losses"),
    ("standings.goals_for", "standings.legend.goals_for"),
    ("standings.goals_against", "standings.legend.goals_against"),
    ("standings.goal_difference", "standings.legend.goal_difference"),
    ("standings.points", "standings.legend.points"),
];

pub fn points_rule() -> String {
    let (win, draw, loss) = (WIN_POINTS.to_string(), DRAW_POINTS.to_string(), LOSS_POINTS.to_string());
    let mut args = BTreeMap::new();
    args.insert("win", win.as_str());
    args.insert("draw", draw.as_str());
    args.insert("loss", loss.as_str());
    tr("classification.points_rule", Some(&args))
}

fn info_card(competition: &Competition, team_count: Option<usize>) -> Html {
    html! {
        <div class="card bg-base-100 shadow mb-4 competition-info">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <h2 class="card-title">{ &competition.title }</h2>
                    <StatusBadge status={StatusKind::Competition(competition.status)} />
                </div>
                <p class="text-sm">
                    { format!("{} · {} · {}", competition.modality, competition.gender, competition.sub_category) }
                </p>
                { team_count.map(|n| html! { <p class="text-sm team-count">{ tr_count("classification.team_count", n) }</p> }).unwrap_or_default() }
            </div>
        </div>
    }
}

fn legend() -> Html {
    html! {
        <dl class="grid grid-cols-2 md:grid-cols-4 gap-1 text-sm mt-4 standings-legend">
            { for LEGEND.iter().map(|(abbr, text)| html! {
                <div><dt class="inline font-bold">{ t(abbr) }</dt>{ ": " }<dd class="inline">{ t(text) }</dd></div>
            }) }
        </dl>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClassificationViewProps {
    pub competitions: QueryState<Vec<Competition>>,
    pub selected: Option<i64>,
    pub standings: QueryState<Vec<StandingRow>>,
    pub on_select: Callback<Option<i64>>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ClassificationView)]
pub fn classification_view(props: &ClassificationViewProps) -> Html {
    let options: Vec<(i64, String)> = props
        .competitions
        .data()
        .map(|list| list.iter().map(|c| (c.id, c.title.clone())).collect())
        .unwrap_or_default();
    let selected_competition = props
        .selected
        .and_then(|id| props.competitions.data()?.iter().find(|c| c.id == id));
    let team_count = props.standings.data().map(Vec::len);

    let body = match standings_view(props.selected, &props.standings) {
        StandingsView::NoSelection => html! {
            <EmptyState title={t("classification.select_prompt")} message={t("classification.select_hint")} />
        },
        StandingsView::Loading => html! { <Loading /> },
        StandingsView::Failed(err) => {
            log::debug!("classification failed: {err}");
            html! { <Alert color={Some(DaisyColor::Error)} message={t("classification.error")} on_retry={props.on_retry.clone()} /> }
        }
        StandingsView::Empty => html! {
            <EmptyState title={t("classification.empty")} message={t("classification.empty_hint")} />
        },
        StandingsView::Table(rows) => html! {
            <>
                <StandingsTable {rows} />
                <p class="text-sm mt-2 points-rule">{ points_rule() }</p>
                { legend() }
            </>
        },
    };

    html! {
        <section class="classification-page">
            <PageHeader title={t("classification.title")} subtitle={t("classification.subtitle")} />
            <div class="mb-4">
                { id_select(&t("games.competition"), &options, props.selected, props.on_select.clone(), &t("classification.choose")) }
            </div>
            { selected_competition.map(|c| info_card(c, team_count)).unwrap_or_default() }
            { body }
        </section>
    }
}

/// Cache key of the standings table; disabled until a competition is chosen.
#[must_use]
pub fn standings_key(selected: Option<i64>) -> Option<QueryKey> {
    selected.map(classification_key)
}

/// Standings of the selected competition. Only reached with a selection.
///
/// # Errors
///
/// Returns the gateway failure.
pub async fn fetch_standings(
    api: Rc<Api>,
    selected: Option<i64>,
) -> Result<Vec<StandingRow>, ApiError> {
    match selected {
        Some(id) => api.classification(id).await,
        None => Ok(Vec::new()),
    }
}

#[function_component(ClassificationPage)]
pub fn classification_page() -> Html {
    let selected = use_state(|| None::<i64>);
    let id = *selected;
    let competitions = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let standings = use_query(standings_key(id), move |api| fetch_standings(api, id));
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id| selected.set(id))
    };
    html! {
        <ClassificationView
            competitions={competitions.state}
            selected={id}
            standings={standings.state}
            {on_select}
            on_retry={Some(standings.reload)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Services;
    use crate::hooks::run_query;
    use async_trait::async_trait;
    use copa_core::config::ClientConfig;
    use copa_core::error::TransportError;
    use copa_core::storage::MemoryStorage;
    use copa_core::transport::{HttpRequest, HttpResponse, Transport};
    use futures::executor::block_on;
    use std::cell::RefCell;

    const TABLE: &str = r#"[
        {"posicao":1,"time":{"id":1,"nome":"Leões","escola":"EM Centro"},"jogos":1,"vitorias":1,
         "empates":0,"derrotas":0,"golsPro":3,"golsContra":1,"saldoGols":2,"pontos":3}
    ]"#;

    #[derive(Default)]
    struct Recording(RefCell<Vec<String>>);

    #[async_trait(?Send)]
    impl Transport for Recording {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.0.borrow_mut().push(request.url);
            Ok(HttpResponse {
                status: 200,
                body: TABLE.to_string(),
            })
        }
    }

    fn services() -> (Services, Rc<Recording>) {
        let transport = Rc::new(Recording::default());
        let services = Services::new(
            Rc::clone(&transport) as Rc<dyn Transport>,
            Rc::new(MemoryStorage::new()),
            &ClientConfig::default(),
        );
        (services, transport)
    }

    fn load(services: &Services, selected: Option<i64>) -> Option<Result<Rc<Vec<StandingRow>>, ApiError>> {
        block_on(run_query(
            Rc::clone(&services.cache),
            Rc::clone(&services.api),
            standings_key(selected),
            Rc::new(move |api: Rc<Api>| fetch_standings(api, selected)),
        ))
    }

    #[test]
    fn no_selection_never_fetches() {
        let (services, transport) = services();
        assert!(load(&services, None).is_none());
        assert!(transport.0.borrow().is_empty());
    }

    #[test]
    fn selection_fetches_once_under_its_key() {
        let (services, transport) = services();
        let rows = load(&services, Some(5)).unwrap().unwrap();
        assert_eq!(rows[0].team.name, "Leões");
        load(&services, Some(5)).unwrap().unwrap();

        assert_eq!(*transport.0.borrow(), vec!["/api/classificacao?competicaoId=5".to_string()]);
        assert_eq!(standings_key(Some(5)), Some(QueryKey::new(["classification", "5"])));
        assert!(services
            .cache
            .peek::<Vec<StandingRow>>(&QueryKey::new(["classification", "5"]))
            .is_some());
    }

    #[test]
    fn points_rule_names_every_outcome() {
        crate::i18n::set_lang("pt");
        assert_eq!(
            points_rule(),
            "Vitória = 3 pontos, Empate = 1 ponto, Derrota = 0 pontos"
        );
    }
}
