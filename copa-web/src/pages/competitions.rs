use crate::components::daisy_ui::{Stat, StatItem};
use crate::components::{EmptyState, StatusBadge, StatusKind, query_html};
use crate::hooks::use_query;
use crate::i18n::{t, tr_count};
use crate::pages::{PageHeader, input_value, wire_select};
use copa_core::filters::{CompetitionBreakdown, CompetitionFilters};
use copa_core::model::{Competition, CompetitionStatus, Gender, Modality};
use copa_core::query::{QueryState, keys};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompetitionsViewProps {
    pub competitions: QueryState<Vec<Competition>>,
    pub filters: CompetitionFilters,
    pub on_filters: Callback<CompetitionFilters>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

fn competition_card(competition: &Competition) -> Html {
    html! {
        <article class="card bg-base-100 shadow competition-card">
            <div class="card-body">
                <div class="flex justify-between items-start gap-2">
                    <h3 class="card-title">{ &competition.title }</h3>
                    <StatusBadge status={StatusKind::Competition(competition.status)} />
                </div>
                <p class="text-sm">
                    { format!("{} · {} · {}", competition.modality, competition.gender, competition.sub_category) }
                </p>
            </div>
        </article>
    }
}

#[function_component(CompetitionsView)]
pub fn competitions_view(props: &CompetitionsViewProps) -> Html {
    let filters = props.filters.clone();
    let on_search = {
        let (filters, cb) = (filters.clone(), props.on_filters.clone());
        Callback::from(move |e: InputEvent| {
            cb.emit(CompetitionFilters {
                search: input_value(&e),
                ..filters.clone()
            });
        })
    };
    let on_modality = {
        let (filters, cb) = (filters.clone(), props.on_filters.clone());
        Callback::from(move |m: Option<Modality>| cb.emit(CompetitionFilters { modality: m, ..filters.clone() }))
    };
    let on_gender = {
        let (filters, cb) = (filters.clone(), props.on_filters.clone());
        Callback::from(move |g: Option<Gender>| cb.emit(CompetitionFilters { gender: g, ..filters.clone() }))
    };
    let on_status = {
        let (filters, cb) = (filters.clone(), props.on_filters.clone());
        Callback::from(move |s: Option<CompetitionStatus>| cb.emit(CompetitionFilters { status: s, ..filters.clone() }))
    };
    let on_clear = {
        let cb = props.on_filters.clone();
        Callback::from(move |_: MouseEvent| cb.emit(CompetitionFilters::default()))
    };

    html! {
        <section class="competitions-page">
            <PageHeader title={t("competitions.title")} subtitle={t("competitions.subtitle")} />
            <div class="flex flex-wrap gap-4 items-end mb-4 filters">
                <label class="form-control">
                    <span class="label-text">{ t("filters.search") }</span>
                    <input class="input input-bordered input-sm" type="search"
                        placeholder={t("competitions.search_placeholder")}
                        value={props.filters.search.clone()} oninput={on_search} />
                </label>
                { wire_select(&t("competitions.modality"), Modality::ALL, Modality::as_wire, props.filters.modality, on_modality) }
                { wire_select(&t("competitions.gender"), Gender::ALL, Gender::as_wire, props.filters.gender, on_gender) }
                { wire_select(&t("competitions.status"), CompetitionStatus::ALL, CompetitionStatus::as_wire, props.filters.status, on_status) }
                if props.filters.is_active() {
                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_clear.clone()}>{ t("filters.clear") }</button>
                }
            </div>
            { query_html(&props.competitions, "competitions.error", props.on_retry.clone(), |all| {
                if all.is_empty() {
                    return html! { <EmptyState title={t("competitions.none_registered")} /> };
                }
                let visible = props.filters.apply(all);
                let breakdown = CompetitionBreakdown::of(visible.iter().copied());
                let stats = vec![
                    StatItem::new(Modality::Futsal.as_wire(), breakdown.futsal),
                    StatItem::new(Modality::Dodgeball.as_wire(), breakdown.dodgeball),
                    StatItem::new(Gender::Male.as_wire(), breakdown.male),
                    StatItem::new(Gender::Female.as_wire(), breakdown.female),
                ];
                html! {
                    <>
                        <p class="mb-2 result-count">{ tr_count("competitions.count", visible.len()) }</p>
                        <Stat items={stats} class="mb-4" />
                        if visible.is_empty() {
                            <EmptyState title={t("competitions.none_match")} message={t("filters.try_other")}>
                                <button type="button" class="btn btn-sm" onclick={on_clear.clone()}>{ t("filters.clear") }</button>
                            </EmptyState>
                        } else {
                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                { for visible.iter().map(|c| competition_card(c)) }
                            </div>
                        }
                    </>
                }
            }) }
        </section>
    }
}

#[function_component(CompetitionsPage)]
pub fn competitions_page() -> Html {
    let filters = use_state(CompetitionFilters::default);
    let query = use_query(Some(keys::competitions()), |api| async move {
        api.competitions().await
    });
    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next| filters.set(next))
    };
    html! {
        <CompetitionsView
            competitions={query.state}
            filters={(*filters).clone()}
            {on_filters}
            on_retry={Some(query.reload)}
        />
    }
}
