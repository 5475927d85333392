use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    /// Optional action such as "clear filters".
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="card bg-base-200 text-center empty-state" role="status">
            <div class="card-body items-center">
                <h3 class="card-title">{ props.title.clone() }</h3>
                { props.message.as_ref().map(|m| html! { <p>{ m.clone() }</p> }).unwrap_or_default() }
                { for props.children.iter() }
            </div>
        </div>
    }
}
