use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct AlertProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    #[prop_or_default]
    pub color: Option<f::DaisyColor>,
    /// Renders a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<f::Callback<()>>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Alert)]
pub fn alert(props: &AlertProps) -> f::Html {
    let mut classes = f::class_list(&["alert"], &f::Classes::new());
    if let Some(color) = props.color {
        classes.push(color.class("alert"));
    }
    let role = if props.color == Some(f::DaisyColor::Error) {
        "alert"
    } else {
        "status"
    };
    let retry = props.on_retry.clone().map(|cb| {
        let onclick = f::Callback::from(move |_| cb.emit(()));
        f::html! {
            <button type="button" class="btn btn-sm" {onclick}>{ crate::i18n::t("common.retry") }</button>
        }
    });
    f::html! {
        <div class={classes} {role}>
            <div>
                { props.title.as_ref().map(|title| f::html! { <strong>{ title.clone() }</strong> }).unwrap_or_default() }
                { props.message.as_ref().map(|msg| f::html! { <p>{ msg.clone() }</p> }).unwrap_or_default() }
                { for props.children.iter() }
            </div>
            { retry.unwrap_or_default() }
        </div>
    }
}
