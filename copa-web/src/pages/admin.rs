use crate::app::state::use_app_context;
use crate::components::daisy_ui::{Alert, DaisyColor, Stat, StatItem};
use crate::components::{EmptyState, StatusBadge, StatusKind, query_html};
use crate::hooks::{QueryHandle, use_query};
use crate::i18n::{t, tr, tr_count};
use crate::pages::games::competition_options;
use crate::pages::{PageHeader, api_error_message, id_select};
use copa_core::model::{Appeal, AppealDecision, AppealStatus};
use copa_core::query::{QueryCache, QueryKey, QueryState, keys};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// Lists whose content changes when games are generated.
fn invalidate_games(cache: &QueryCache) {
    cache.invalidate_prefix(&keys::admin());
    cache.invalidate_prefix(&QueryKey::new(["games"]));
    cache.invalidate_prefix(&QueryKey::new(["recent-games"]));
    cache.invalidate_prefix(&QueryKey::new(["finished-games"]));
}

fn count_of<T>(handle: &QueryHandle<Vec<T>>) -> String {
    handle
        .state
        .data()
        .map_or_else(|| "…".to_string(), |items| items.len().to_string())
}

/// Appeals still waiting for a decision.
#[must_use]
pub fn pending_appeals(appeals: &[Appeal]) -> usize {
    appeals
        .iter()
        .filter(|a| matches!(a.status, AppealStatus::Open | AppealStatus::UnderReview))
        .count()
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppealsViewProps {
    pub appeals: QueryState<Vec<Appeal>>,
    pub on_decide: Callback<(i64, AppealStatus)>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(AppealsView)]
pub fn appeals_view(props: &AppealsViewProps) -> Html {
    query_html(&props.appeals, "admin.appeals_error", props.on_retry.clone(), |appeals| {
        if appeals.is_empty() {
            return html! { <EmptyState title={t("admin.no_appeals")} /> };
        }
        html! {
            <div class="overflow-x-auto">
                <p class="text-sm mb-2">{ tr_count("admin.pending_appeals", pending_appeals(appeals)) }</p>
                <table class="table appeals-table">
                    <thead>
                        <tr>
                            <th>{ t("admin.appeal_game") }</th>
                            <th>{ t("admin.appeal_reason") }</th>
                            <th>{ t("admin.appeal_status") }</th>
                            <th>{ t("admin.appeal_actions") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for appeals.iter().map(|appeal| {
                            let decide = |status: AppealStatus| {
                                let cb = props.on_decide.clone();
                                let id = appeal.id;
                                Callback::from(move |_: MouseEvent| cb.emit((id, status)))
                            };
                            let open = matches!(appeal.status, AppealStatus::Open | AppealStatus::UnderReview);
                            html! {
                                <tr key={appeal.id}>
                                    <td>{ appeal.game_id.map(|id| format!("#{id}")).unwrap_or_default() }</td>
                                    <td>
                                        { &appeal.reason }
                                        { appeal.response.as_ref().map(|r| html! { <p class="text-xs opacity-70">{ r.clone() }</p> }).unwrap_or_default() }
                                    </td>
                                    <td><StatusBadge status={StatusKind::Appeal(appeal.status)} /></td>
                                    <td class="flex gap-1">
                                        if open {
                                            <>
                                            <button type="button" class="btn btn-success btn-xs" onclick={decide(AppealStatus::Granted)}>{ t("admin.grant") }</button>
                                            <button type="button" class="btn btn-error btn-xs" onclick={decide(AppealStatus::Denied)}>{ t("admin.deny") }</button>
                                            </>
                                        }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    })
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let ctx = use_app_context();
    let competitions = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let schools = use_query(Some(keys::schools()), |api| async move { api.schools().await });
    let teachers = use_query(Some(keys::admin_list("teachers")), |api| async move {
        api.admin_teachers().await
    });
    let teams = use_query(Some(keys::admin_list("teams")), |api| async move {
        api.admin_teams().await
    });
    let games = use_query(Some(keys::admin_list("games")), |api| async move {
        api.admin_games().await
    });
    let appeals = use_query(Some(keys::admin_list("appeals")), |api| async move {
        api.admin_appeals().await
    });
    let target = use_state(|| None::<i64>);
    let message = use_state(|| None::<(DaisyColor, String)>);

    let on_generate = {
        let api = ctx.api();
        let cache = ctx.cache();
        let target = *target;
        let message = message.clone();
        let reload = games.reload.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(competition_id) = target else {
                message.set(Some((DaisyColor::Warning, t("admin.choose_competition"))));
                return;
            };
            let (api, cache, message, reload) =
                (Rc::clone(&api), Rc::clone(&cache), message.clone(), reload.clone());
            yew::platform::spawn_local(async move {
                match api.admin_generate_games(competition_id).await {
                    Ok(generated) => {
                        invalidate_games(&cache);
                        reload.emit(());
                        let count = generated.games.len().to_string();
                        let mut args = BTreeMap::new();
                        args.insert("count", count.as_str());
                        let text = generated
                            .message
                            .unwrap_or_else(|| tr("admin.generated", Some(&args)));
                        message.set(Some((DaisyColor::Success, text)));
                    }
                    Err(err) => message.set(Some((
                        DaisyColor::Error,
                        api_error_message(&err, "admin.generate_error"),
                    ))),
                }
            });
        })
    };

    let on_decide = {
        let api = ctx.api();
        let message = message.clone();
        let reload = appeals.reload.clone();
        Callback::from(move |(id, status): (i64, AppealStatus)| {
            let decision = AppealDecision { status, response: None };
            let (api, message, reload) = (Rc::clone(&api), message.clone(), reload.clone());
            yew::platform::spawn_local(async move {
                match api.admin_decide_appeal(id, &decision).await {
                    Ok(_) => reload.emit(()),
                    Err(err) => message.set(Some((
                        DaisyColor::Error,
                        api_error_message(&err, "admin.decide_error"),
                    ))),
                }
            });
        })
    };

    let on_target = {
        let target = target.clone();
        Callback::from(move |id| target.set(id))
    };

    let stats = vec![
        StatItem::new(t("nav.competitions"), count_of(&competitions)),
        StatItem::new(t("nav.schools"), count_of(&schools)),
        StatItem::new(t("admin.teachers"), count_of(&teachers)),
        StatItem::new(t("admin.teams"), count_of(&teams)),
        StatItem::new(t("nav.games"), count_of(&games)),
    ];

    html! {
        <section class="admin-page">
            <PageHeader title={t("admin.title")} subtitle={t("admin.subtitle")} />
            <Stat items={stats} class="mb-6" />
            <div class="card bg-base-100 shadow mb-6 generate-games">
                <div class="card-body">
                    <h2 class="card-title">{ t("admin.generate_title") }</h2>
                    <div class="flex flex-wrap gap-4 items-end">
                        { id_select(&t("games.competition"), &competition_options(&competitions.state), *target, on_target, &t("filters.choose")) }
                        <button type="button" class="btn btn-primary btn-sm" onclick={on_generate}>{ t("admin.generate") }</button>
                    </div>
                    if let Some((color, text)) = (*message).clone() {
                        <Alert color={Some(color)} message={text} />
                    }
                </div>
            </div>
            <h2 class="text-xl font-bold mb-2">{ t("admin.appeals") }</h2>
            <AppealsView appeals={appeals.state} {on_decide} on_retry={Some(appeals.reload)} />
        </section>
    }
}
