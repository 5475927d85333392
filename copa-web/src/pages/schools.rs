use crate::components::{EmptyState, query_html};
use crate::hooks::use_query;
use crate::i18n::{t, tr_count};
use crate::pages::{PageHeader, input_value};
use copa_core::filters::SchoolFilters;
use copa_core::model::School;
use copa_core::query::{QueryState, keys};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SchoolsViewProps {
    pub schools: QueryState<Vec<School>>,
    pub filters: SchoolFilters,
    pub on_filters: Callback<SchoolFilters>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(SchoolsView)]
pub fn schools_view(props: &SchoolsViewProps) -> Html {
    let on_search = {
        let cb = props.on_filters.clone();
        Callback::from(move |e: InputEvent| cb.emit(SchoolFilters { search: input_value(&e) }))
    };
    let on_clear = {
        let (filters, cb) = (props.filters.clone(), props.on_filters.clone());
        Callback::from(move |_: MouseEvent| {
            let mut next = filters.clone();
            next.clear();
            cb.emit(next);
        })
    };
    html! {
        <section class="schools-page">
            <PageHeader title={t("schools.title")} subtitle={t("schools.subtitle")} />
            <div class="flex flex-wrap gap-4 items-end mb-4 filters">
                <label class="form-control max-w-md">
                    <span class="label-text">{ t("filters.search") }</span>
                    <input class="input input-bordered input-sm" type="search"
                        placeholder={t("schools.search_placeholder")}
                        value={props.filters.search.clone()} oninput={on_search} />
                </label>
                if props.filters.is_active() {
                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_clear.clone()}>{ t("filters.clear") }</button>
                }
            </div>
            { query_html(&props.schools, "schools.error", props.on_retry.clone(), |all| {
                let visible = props.filters.apply(all);
                if visible.is_empty() {
                    if all.is_empty() {
                        return html! { <EmptyState title={t("schools.none_registered")} /> };
                    }
                    return html! {
                        <EmptyState title={t("schools.none_match")} message={t("filters.try_other")}>
                            <button type="button" class="btn btn-sm" onclick={on_clear.clone()}>{ t("filters.clear") }</button>
                        </EmptyState>
                    };
                }
                html! {
                    <>
                        <p class="mb-2 result-count">{ tr_count("schools.count", visible.len()) }</p>
                        <ul class="menu bg-base-100 rounded-box shadow">
                            { for visible.iter().map(|school| html! { <li key={school.id}><span>{ &school.name }</span></li> }) }
                        </ul>
                    </>
                }
            }) }
        </section>
    }
}

#[function_component(SchoolsPage)]
pub fn schools_page() -> Html {
    let filters = use_state(SchoolFilters::default);
    let query = use_query(Some(keys::schools()), |api| async move { api.schools().await });
    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next| filters.set(next))
    };
    html! {
        <SchoolsView
            schools={query.state}
            filters={(*filters).clone()}
            {on_filters}
            on_retry={Some(query.reload)}
        />
    }
}
