use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let keys: Vec<&str> = key.split('.').collect();
    let mut current = obj;

    for k in keys {
        match current.get(k) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Simple translation without variable substitution.
/// Falls back to English if key is not found in current language.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Supports template variable replacement using ordered key-value pairs.
/// Variables in the translated string use the format {key} or {{key}}.
/// A missing key renders as the key itself so pages always display.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| {
        log::warn!("missing translation key: {key}");
        key.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn missing_key_echoes_back() {
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn nested_lookup_walks_objects() {
        let json: Value =
            serde_json::from_str(r#"{"a":{"b":{"c":"leaf"}}}"#).expect("valid json");
        assert_eq!(
            get_nested_value(&json, "a.b.c").and_then(Value::as_str),
            Some("leaf")
        );
        assert!(get_nested_value(&json, "a.b.missing").is_none());
    }
}
