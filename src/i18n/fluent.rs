// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the locale to use.
    ///
    /// A translation file that fails to parse is skipped with a warning on
    /// stderr; its keys then render as `MISSING: <key>`.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    eprintln!("[WARN] Failed to parse {filename}: {errors:?}");
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            if let Err(errors) = bundle.add_resource(resource) {
                eprintln!("[WARN] Duplicate messages in {filename}: {errors:?}");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key` in the current locale.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {key}")
    }
}

/// Picks the first available locale among the CLI flag, the configured
/// language and the OS locale.
///
/// Each candidate matches an available locale exactly, or else by language
/// alone (`it-IT` selects `it`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .filter_map(|candidate| candidate.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|locale| *locale == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|locale| locale.language == wanted.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(tag: &str) -> LanguageIdentifier {
        tag.parse().expect("valid language tag")
    }

    fn locales() -> Vec<LanguageIdentifier> {
        vec![id("en-US"), id("it")]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        let lang = resolve_locale(Some("it".to_string()), &config, None, &locales());
        assert_eq!(lang, Some(id("it")));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("it".to_string());

        let lang = resolve_locale(None, &config, Some("en-US".to_string()), &locales());
        assert_eq!(lang, Some(id("it")));
    }

    #[test]
    fn os_locale_matches_by_language() {
        let lang = resolve_locale(
            None,
            &Config::default(),
            Some("it-IT".to_string()),
            &locales(),
        );
        assert_eq!(lang, Some(id("it")));
    }

    #[test]
    fn unknown_candidates_are_skipped() {
        let lang = resolve_locale(
            Some("xx-invalid-$$".to_string()),
            &Config::default(),
            Some("de-DE".to_string()),
            &locales(),
        );
        assert_eq!(lang, None);
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&id("en-US")));
        assert!(i18n.available_locales.contains(&id("it")));
        assert_eq!(i18n.current_locale(), &id("en-US"));
    }

    #[test]
    fn italian_permission_alert_text() {
        let i18n = I18n::new(Some("it".to_string()), &Config::default());
        assert_eq!(i18n.tr("permission-denied-title"), "Permesso Negato");
        assert_eq!(
            i18n.tr("permission-denied-body"),
            "Vai nelle impostazioni e abilita l'accesso alla libreria foto."
        );
        assert_eq!(i18n.tr("empty-library"), "Nessuna foto disponibile");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
