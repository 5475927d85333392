pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyColor {
    Neutral,
    #[default]
    Primary,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaisySize {
    Sm,
    Md,
    Lg,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, DaisySize, class_list};
    use yew::Classes;

    #[test]
    fn color_and_size_classes_carry_prefix() {
        assert_eq!(DaisyColor::Success.class("badge"), "badge-success");
        assert_eq!(DaisyColor::default().class("btn"), "btn-primary");
        assert_eq!(DaisySize::Lg.class("loading"), "loading-lg");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let rendered = class_list(&["table", "table-zebra"], &Classes::from("mt-4")).to_string();
        assert!(rendered.contains("table-zebra"));
        assert!(rendered.contains("mt-4"));
    }
}
