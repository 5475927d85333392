use crate::app::state::use_app_context;
use crate::components::daisy_ui::{Alert, DaisyColor};
use crate::i18n::t;
use crate::pages::input_value;
use crate::router::Route;
use copa_core::auth::{Credentials, landing_for, login};
use copa_core::error::AuthError;
use copa_core::role::LoginKind;
use yew::prelude::*;
use yew_router::prelude::*;

const KINDS: [(LoginKind, &str); 3] = [
    (LoginKind::Visitor, "login.kind.visitor"),
    (LoginKind::Teacher, "login.kind.teacher"),
    (LoginKind::Admin, "login.kind.admin"),
];

fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::MissingCredentials => t("login.missing_credentials"),
        AuthError::Rejected(message) => message.clone(),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let kind = use_state(|| LoginKind::Visitor);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let api = ctx.api();
        let kind = kind.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);
            let api = api.clone();
            let kind = *kind;
            let credentials = Credentials::new((*username).clone(), (*password).clone());
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            yew::platform::spawn_local(async move {
                match login(&api, kind, Some(&credentials)).await {
                    Ok(session) => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::landing(landing_for(session.role())));
                        }
                    }
                    Err(err) => error.set(Some(auth_error_message(&err))),
                }
                submitting.set(false);
            });
        })
    };

    let kind_buttons = KINDS.iter().map(|(option, key)| {
        let selected = *kind == *option;
        let onclick = {
            let kind = kind.clone();
            let error = error.clone();
            let option = *option;
            Callback::from(move |_: MouseEvent| {
                kind.set(option);
                error.set(None);
            })
        };
        html! {
            <button type="button" role="tab" aria-selected={selected.to_string()}
                class={classes!("tab", selected.then_some("tab-active"))} {onclick}>
                { t(key) }
            </button>
        }
    });

    let oninput_user = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| username.set(input_value(&e)))
    };
    let oninput_pass = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    html! {
        <section class="min-h-screen flex items-center justify-center bg-base-200 login-page">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <form class="card-body" {onsubmit}>
                    <h1 class="card-title text-2xl">{ t("app.title") }</h1>
                    <p class="opacity-70">{ t("login.subtitle") }</p>
                    <div class="tabs tabs-boxed" role="tablist">{ for kind_buttons }</div>
                    if kind.requires_credentials() {
                        <>
                        <label class="form-control">
                            <span class="label-text">{ t("login.username") }</span>
                            <input class="input input-bordered" name="username" autocomplete="username"
                                value={(*username).clone()} oninput={oninput_user} />
                        </label>
                        <label class="form-control">
                            <span class="label-text">{ t("login.password") }</span>
                            <input class="input input-bordered" type="password" name="password"
                                autocomplete="current-password" value={(*password).clone()} oninput={oninput_pass} />
                        </label>
                        </>
                    } else {
                        <p class="text-sm">{ t("login.visitor_hint") }</p>
                    }
                    if let Some(message) = (*error).clone() {
                        <Alert color={Some(DaisyColor::Error)} message={message} />
                    }
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { t("login.submitting") } else { t("login.submit") } }
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_shows_the_server_message() {
        crate::i18n::set_lang("pt");
        assert_eq!(
            auth_error_message(&AuthError::Rejected("Senha incorreta".into())),
            "Senha incorreta"
        );
        assert_ne!(
            auth_error_message(&AuthError::MissingCredentials),
            "login.missing_credentials"
        );
    }
}
