//! i18n coverage tests to ensure all required keys are present

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn find_nested_key(json: &Value, key: &str) -> bool {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = json;

    for part in parts {
        match current.get(part) {
            Some(value) => current = value,
            None => return false,
        }
    }

    current.is_string() || current.is_object()
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn locales_have_matching_keys() {
    let locales = locale_codes();
    let (_, base_json) = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locales {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(
                keys.contains(key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
        for key in &keys {
            assert!(
                base_keys.contains(key),
                "Extra key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn required_feature_keys_exist() {
    let locales = locale_codes();
    let required_keys = [
        "site.title",
        "page_title.home",
        "page_title.histbench",
        "page_title.about",
        "page_title.impact",
        "page_title.authors",
        "page_title.submit",
        "header.skip_to_content",
        "header.nav.home",
        "header.nav.histbench",
        "header.nav.histagent",
        "header.nav.impact",
        "header.nav.team",
        "header.nav.submit",
        "header.lang.en",
        "header.lang.zh",
        "footer.copyright",
        "histbench.distribution.label.text",
        "histbench.distribution.label.image",
        "histbench.distribution.label.manuscript",
        "histbench.distribution.label.audio_video",
        "submit.stepper.step1",
        "submit.stepper.step2",
        "submit.stepper.step3",
        "submit.buttons.prev",
        "submit.buttons.next",
        "submit.buttons.submit",
        "submit.buttons.submitting",
        "submit.form.label.difficulty",
        "submit.form.label.answer_type",
        "submit.form.error.question_short",
        "submit.form.error.question_long",
        "submit.form.error.explanation_short",
        "submit.form.error.explanation_long",
        "submit.status.success",
        "submit.status.error",
        "submit.status.network",
        "image_modal.close",
    ];

    for locale in locales {
        let (_, json) = load_locale(&locale);
        for key in required_keys {
            assert!(
                find_nested_key(&json, key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let opens = content.matches('{').count();
        let closes = content.matches('}').count();
        assert_eq!(
            opens, closes,
            "Unbalanced braces in locale '{locale}' ({opens} open, {closes} close)"
        );
    }
}
