use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

// Both locales only distinguish "one" from everything else.
fn pick_form(value: &Value, count: Option<u64>) -> Option<&str> {
    match value {
        Value::String(text) => Some(text.as_str()),
        Value::Object(forms) => {
            let form = if count == Some(1) { "one" } else { "other" };
            forms.get(form).and_then(Value::as_str)
        }
        _ => None,
    }
}

fn interpolate(template: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

fn resolve(key: &str, count: Option<u64>, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        [&bundle.translations, &bundle.fallback]
            .into_iter()
            .find_map(|root| lookup(root, key).and_then(|v| pick_form(v, count)))
            .map(|template| interpolate(template, args))
    })
}

/// Translate a key to the current language.
///
/// Missing keys fall back to Portuguese, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, None, args).unwrap_or_else(|| key.to_string())
}

/// Translate a key with `one`/`other` forms, exposing `{count}`.
#[must_use]
pub fn tr_count(key: &str, count: usize) -> String {
    let rendered = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", rendered.as_str());
    resolve(key, u64::try_from(count).ok(), Some(&args)).unwrap_or_else(|| key.to_string())
}
