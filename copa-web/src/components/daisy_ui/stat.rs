use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Eq)]
pub struct StatItem {
    pub title: f::AttrValue,
    pub value: f::AttrValue,
    pub description: Option<f::AttrValue>,
}

impl StatItem {
    #[must_use]
    pub fn new(title: impl Into<f::AttrValue>, value: impl ToString) -> Self {
        Self {
            title: title.into(),
            value: value.to_string().into(),
            description: None,
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub items: Vec<StatItem>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let class = f::class_list(&["stats", "stats-vertical", "lg:stats-horizontal", "shadow"], &props.class);
    f::html! {
        <div class={class}>
            { for props.items.iter().map(|item| f::html!{
                <div class="stat">
                    <div class="stat-title">{ item.title.clone() }</div>
                    <div class="stat-value">{ item.value.clone() }</div>
                    { item.description.as_ref().map(|d| f::html!{ <div class="stat-desc">{ d.clone() }</div> }).unwrap_or_default() }
                </div>
            }) }
        </div>
    }
}
