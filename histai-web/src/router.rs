//! Hash-fragment navigation state.
//!
//! The location fragment is the only persisted, bookmarkable state of the
//! site, serialized as `<page>_<language>` (e.g. `#histbench_en`). Parsing
//! is total: unknown tokens degrade to defaults instead of failing.

/// One of the fixed set of navigable pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    HistBench,
    HistAgent,
    Impact,
    Authors,
    Submit,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::HistBench,
        Self::HistAgent,
        Self::Impact,
        Self::Authors,
        Self::Submit,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::HistBench => "histbench",
            // "about" is the historical slug for the HistAgent page.
            Self::HistAgent => "about",
            Self::Impact => "impact",
            Self::Authors => "authors",
            Self::Submit => "submit",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.slug() == slug)
    }

    /// Translation key for the document title of this page.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Home => "page_title.home",
            Self::HistBench => "page_title.histbench",
            Self::HistAgent => "page_title.about",
            Self::Impact => "page_title.impact",
            Self::Authors => "page_title.authors",
            Self::Submit => "page_title.submit",
        }
    }
}

/// One of the two supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.slug() == slug)
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Pick a language from a browser-reported locale such as `zh-CN`.
    #[must_use]
    pub fn from_browser_locale(locale: &str) -> Self {
        if locale.starts_with(Self::Zh.slug()) {
            Self::Zh
        } else {
            Self::En
        }
    }
}

/// The `(page, language)` pair encoded in the location fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub language: Language,
}

impl NavState {
    #[must_use]
    pub const fn new(page: Page, language: Language) -> Self {
        Self { page, language }
    }

    /// Canonical fragment serialization, without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("{}_{}", self.page.slug(), self.language.slug())
    }

    /// Parse a raw fragment into a validated state.
    ///
    /// The substring before the first `_` is the candidate page; missing
    /// or unrecognized pages coerce to [`Page::Home`]. The substring after
    /// it is the candidate language; missing or unrecognized languages
    /// keep `current_language`, so a page-only fragment preserves the
    /// visitor's language choice.
    #[must_use]
    pub fn parse(raw: &str, current_language: Language) -> Self {
        let raw = raw.trim().trim_start_matches('#');
        let (page_part, lang_part) = match raw.split_once('_') {
            Some((p, l)) => (p, Some(l)),
            None => (raw, None),
        };

        let page = Page::from_slug(page_part).unwrap_or(Page::Home);
        let language = lang_part
            .and_then(Language::from_slug)
            .unwrap_or(current_language);

        Self { page, language }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_round_trips_every_state() {
        for page in Page::ALL {
            for language in Language::ALL {
                let state = NavState::new(page, language);
                let reparsed = NavState::parse(&state.fragment(), language.other());
                assert_eq!(reparsed, state);
            }
        }
    }

    #[test]
    fn parse_is_total_over_malformed_input() {
        let inputs = [
            "", "_", "#", "garbage", "garbage_", "_garbage", "home_klingon",
            "nope_zh", "submit_en_extra", "  #home_en  ", "__",
        ];
        for raw in inputs {
            let state = NavState::parse(raw, Language::Zh);
            assert!(Page::ALL.contains(&state.page), "bad page for {raw:?}");
            assert!(
                Language::ALL.contains(&state.language),
                "bad language for {raw:?}"
            );
        }
    }

    #[test]
    fn missing_language_keeps_the_current_one() {
        let state = NavState::parse("submit", Language::Zh);
        assert_eq!(state, NavState::new(Page::Submit, Language::Zh));

        let state = NavState::parse("histbench_xx", Language::En);
        assert_eq!(state, NavState::new(Page::HistBench, Language::En));
    }

    #[test]
    fn unknown_page_falls_back_to_home() {
        let state = NavState::parse("benchpress_zh", Language::En);
        assert_eq!(state, NavState::new(Page::Home, Language::Zh));
    }

    #[test]
    fn trailing_separator_content_counts_as_language_token() {
        // "submit_en_extra" splits at the first underscore; "en_extra" is
        // not a valid language, so the current language wins.
        let state = NavState::parse("submit_en_extra", Language::Zh);
        assert_eq!(state, NavState::new(Page::Submit, Language::Zh));
    }

    #[test]
    fn browser_locale_prefix_selects_chinese() {
        assert_eq!(Language::from_browser_locale("zh-CN"), Language::Zh);
        assert_eq!(Language::from_browser_locale("zh"), Language::Zh);
        assert_eq!(Language::from_browser_locale("en-US"), Language::En);
        assert_eq!(Language::from_browser_locale("fr"), Language::En);
        assert_eq!(Language::from_browser_locale(""), Language::En);
    }
}
