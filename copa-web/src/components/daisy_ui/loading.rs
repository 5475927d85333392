use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct LoadingProps {
    /// Defaults to the translated "loading" text.
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or(f::DaisySize::Md)]
    pub size: f::DaisySize,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Loading)]
pub fn loading(props: &LoadingProps) -> f::Html {
    let mut class = f::class_list(&["loading", "loading-spinner"], &props.class);
    class.push(props.size.class("loading"));
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| crate::i18n::t("common.loading").into());
    f::html! {
        <div class="flex items-center justify-center gap-2 py-8" role="status" aria-live="polite">
            <span class={class}></span>
            <span>{ label }</span>
        </div>
    }
}
