use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

/// The league is Brazilian; Portuguese is both the default and the fallback.
pub const DEFAULT_LANG: &str = "pt";

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "pt",
        name: "Português",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("pt", include_str!("../../i18n/pt.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let (_, data) = LOCALE_TABLE.iter().find(|(code, _)| *code == lang)?;
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("translation bundle {lang} is invalid: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                if child.is_object() && child.get("one").is_none() {
                    leaf_keys(child, &path, out);
                } else {
                    out.push(path);
                }
            }
        }
    }

    #[test]
    fn every_locale_parses() {
        for meta in locales() {
            assert!(load_translations(meta.code).is_some(), "{}", meta.code);
        }
        assert!(load_translations("xx").is_none());
    }

    #[test]
    fn bundles_share_the_same_keys() {
        let mut pt = Vec::new();
        let mut en = Vec::new();
        leaf_keys(&load_translations("pt").unwrap(), "", &mut pt);
        leaf_keys(&load_translations("en").unwrap(), "", &mut en);
        pt.sort();
        en.sort();
        assert_eq!(pt, en);
    }
}
