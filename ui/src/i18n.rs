//! Internationalization (i18n) support for `phm-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - Fluent bundles (message formatting, reached through `i18n-embed`)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   zh-TW/phm-ui.ftl   (fallback/reference)
//!   en-US/phm-ui.ftl   (additional locale)
//! ```
//!
//! Unlike a process-wide loader, every page build owns its own
//! [`Localizer`], so the rendered language depends only on
//! [`crate::core::PageSettings::locale`] and never on the host OS locale.
//!
//! To add a new locale:
//! 1. Copy `zh-TW/phm-ui.ftl` to `i18n/<lang-id>/phm-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Register it in `ui/tests/i18n_missing_keys.rs` and run the tests.
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use i18n_embed_fl::fl;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::format::format_bound;
use crate::core::HighlightBand;
use crate::error::{DashboardError, Result};

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "phm-ui";

/// Locale the page was originally written in; must match `i18n.toml`.
pub const FALLBACK_LANGUAGE: &str = "zh-TW";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Resolved strings for one locale.
pub struct Localizer {
    loader: FluentLanguageLoader,
}

impl Localizer {
    /// Load `tag`, falling back to [`FALLBACK_LANGUAGE`] for messages (or
    /// whole locales) that are not embedded.
    pub fn new(tag: &str) -> Result<Self> {
        let requested: LanguageIdentifier = tag.parse().map_err(|err| DashboardError::Locale {
            tag: tag.to_string(),
            reason: format!("{err}"),
        })?;
        let fallback: LanguageIdentifier =
            FALLBACK_LANGUAGE.parse().map_err(|err| DashboardError::Locale {
                tag: FALLBACK_LANGUAGE.to_string(),
                reason: format!("{err}"),
            })?;

        let loader = FluentLanguageLoader::new(DOMAIN, fallback);
        i18n_embed::select(&loader, &Localizations, &[requested]).map_err(|err| {
            DashboardError::Locale {
                tag: tag.to_string(),
                reason: err.to_string(),
            }
        })?;
        // Only affects bundles already loaded, so it must follow `select`.
        // Bidi isolation marks would otherwise leak into captions.
        loader.set_use_isolating(false);

        tracing::debug!(locale = %loader.current_language(), "localizer ready");
        Ok(Self { loader })
    }

    /// Language actually in use after fallback resolution.
    pub fn language(&self) -> String {
        self.loader.current_language().to_string()
    }

    pub fn page_title(&self) -> String {
        fl!(&self.loader, "page-title")
    }

    pub fn data_path_label(&self) -> String {
        fl!(&self.loader, "label-data-path")
    }

    pub fn diagnosis_label(&self) -> String {
        fl!(&self.loader, "label-diagnosis-result")
    }

    pub fn diagnosis_placeholder(&self) -> String {
        fl!(&self.loader, "placeholder-diagnosis-result")
    }

    pub fn main_chart_title(&self) -> String {
        fl!(&self.loader, "chart-main-title")
    }

    pub fn main_series_name(&self) -> String {
        fl!(&self.loader, "series-main-name")
    }

    /// Titles of the auxiliary charts, in panel order.
    pub fn auxiliary_titles(&self) -> [String; 4] {
        [
            fl!(&self.loader, "chart-throttle"),
            fl!(&self.loader, "chart-cylinder-pressure"),
            fl!(&self.loader, "chart-temperature"),
            fl!(&self.loader, "chart-vibration"),
        ]
    }

    pub fn sampling_caption(&self, band: &HighlightBand) -> String {
        fl!(
            &self.loader,
            "sampling-range",
            start = format_bound(band.start()),
            end = format_bound(band.end())
        )
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == FALLBACK_LANGUAGE));
        assert!(langs.iter().any(|l| l == "en-US"));
    }

    #[test]
    fn fallback_lookup_works() {
        let l10n = Localizer::new(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(l10n.page_title(), "PHM預診系統");
        assert_eq!(l10n.auxiliary_titles(), ["油門", "缸壓", "溫度", "震動"]);
    }

    #[test]
    fn caption_interpolates_band_without_isolation_marks() {
        let l10n = Localizer::new(FALLBACK_LANGUAGE).unwrap();
        let band = HighlightBand::new(3.0, 6.0).unwrap();
        assert_eq!(l10n.sampling_caption(&band), "取樣範圍: 3 ~ 6 (可自訂)");
    }

    #[test]
    fn secondary_locale_caption_has_no_isolation_marks() {
        let l10n = Localizer::new("en-US").unwrap();
        let band = HighlightBand::new(3.0, 6.0).unwrap();
        let caption = l10n.sampling_caption(&band);
        assert!(!caption.contains(['\u{2068}', '\u{2069}']), "{caption:?}");
        assert_eq!(caption, "Sampling range: 3 ~ 6 (adjustable)");
    }

    #[test]
    fn secondary_locale_switches_strings() {
        let l10n = Localizer::new("en-US").unwrap();
        assert_eq!(l10n.language(), "en-US");
        assert_eq!(l10n.data_path_label(), "Data path:");
    }

    #[test]
    fn unknown_locale_falls_back() {
        let l10n = Localizer::new("zz-ZZ").unwrap();
        assert_eq!(l10n.diagnosis_placeholder(), "請輸入預診結果");
    }

    #[test]
    fn malformed_tag_is_rejected() {
        let err = Localizer::new("not a tag!").err().unwrap();
        assert!(matches!(err, DashboardError::Locale { .. }));
    }
}
