pub mod admin;
pub mod classification;
pub mod competitions;
pub mod games;
pub mod home;
pub mod login;
pub mod my_games;
pub mod my_teams;
pub mod not_found;
pub mod results;
pub mod schools;

pub use admin::AdminPage;
pub use classification::ClassificationPage;
pub use competitions::CompetitionsPage;
pub use games::GamesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_games::MyGamesPage;
pub use my_teams::MyTeamsPage;
pub use not_found::NotFound;
pub use results::ResultsPage;
pub use schools::SchoolsPage;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub(crate) fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub(crate) fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub(crate) fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

/// Page heading shared by every screen.
#[derive(Properties, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class="mb-6">
            <h1 class="text-3xl font-bold">{ props.title.clone() }</h1>
            { props.subtitle.as_ref().map(|s| html! { <p class="opacity-70">{ s.clone() }</p> }).unwrap_or_default() }
        </header>
    }
}

/// A `<select>` over a closed set of server labels with an "all" entry.
pub(crate) fn wire_select<E: Copy + PartialEq + 'static>(
    label: &str,
    options: &'static [E],
    wire: fn(E) -> &'static str,
    current: Option<E>,
    on_change: Callback<Option<E>>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let value = select_value(&e);
        on_change.emit(options.iter().copied().find(|o| wire(*o) == value));
    });
    html! {
        <label class="form-control">
            <span class="label-text">{ label.to_string() }</span>
            <select class="select select-bordered select-sm" {onchange}>
                <option value="" selected={current.is_none()}>{ crate::i18n::t("filters.all") }</option>
                { for options.iter().map(|option| html! {
                    <option value={wire(*option)} selected={current == Some(*option)}>{ wire(*option) }</option>
                }) }
            </select>
        </label>
    }
}

/// A `<select>` over fetched entities keyed by numeric id.
pub(crate) fn id_select(
    label: &str,
    options: &[(i64, String)],
    current: Option<i64>,
    on_change: Callback<Option<i64>>,
    all_label: &str,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        on_change.emit(copa_core::filters::parse_id(&select_value(&e)));
    });
    html! {
        <label class="form-control">
            <span class="label-text">{ label.to_string() }</span>
            <select class="select select-bordered select-sm" {onchange}>
                <option value="" selected={current.is_none()}>{ all_label.to_string() }</option>
                { for options.iter().map(|(id, name)| html! {
                    <option value={id.to_string()} selected={current == Some(*id)}>{ name.clone() }</option>
                }) }
            </select>
        </label>
    }
}

/// Inline message for a rejected teacher form.
pub(crate) fn form_error_message(err: &copa_core::teacher::FormError) -> String {
    use copa_core::teacher::FormError;
    use std::collections::BTreeMap;
    let with = |key: &str, name: &str, value: &str| {
        let mut args = BTreeMap::new();
        args.insert(name, value);
        crate::i18n::tr(key, Some(&args))
    };
    match err {
        FormError::NoNumbers => crate::i18n::t("teacher.errors.no_numbers"),
        FormError::InvalidNumber(raw) => with("teacher.errors.invalid_number", "value", raw),
        FormError::DuplicateNumber(n) => with("teacher.errors.duplicate_number", "value", &n.to_string()),
        FormError::EmptyReason => crate::i18n::t("teacher.errors.empty_reason"),
        FormError::MissingField(field) => with("teacher.errors.missing_field", "field", field),
    }
}

/// Message for a failed mutation: the server's text when it sent one.
pub(crate) fn api_error_message(err: &copa_core::error::ApiError, fallback_key: &str) -> String {
    err.server_message()
        .map_or_else(|| crate::i18n::t(fallback_key), str::to_string)
}
