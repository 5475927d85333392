use crate::components::daisy_ui::{Alert, DaisyColor, Loading};
use crate::i18n::t;
use copa_core::query::QueryState;
use yew::prelude::*;

/// Render a query: spinner while loading, an error alert with retry on
/// failure, and `render` once data arrived.
pub fn query_html<T>(
    state: &QueryState<T>,
    error_key: &str,
    on_retry: Option<Callback<()>>,
    render: impl FnOnce(&T) -> Html,
) -> Html {
    match state {
        QueryState::Idle | QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(err) => {
            log::debug!("query failed: {err}");
            let message = err
                .server_message()
                .map_or_else(|| t(error_key), str::to_string);
            html! { <Alert color={Some(DaisyColor::Error)} message={message} on_retry={on_retry} /> }
        }
        QueryState::Success(data) => render(data),
    }
}
