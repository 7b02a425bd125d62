//! Locale number symbols backed by CLDR data.

use finmov_shared::{EngineError, EngineResult};
use num_format::{Grouping, Locale};

/// Number symbols for one locale, resolved at call time from CLDR data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSymbols {
    language: String,
    region: Option<String>,
    decimal: &'static str,
    group: &'static str,
    minus: &'static str,
    grouping: Grouping,
}

impl LocaleSymbols {
    /// Resolves a BCP 47 style identifier (`es-AR`, `es_AR`, `en`).
    ///
    /// When the exact locale has no data of its own, the bare language is
    /// used (`en-US` resolves through `en`).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownLocale` when neither the identifier nor
    /// its language has locale data.
    pub fn resolve(locale_id: &str) -> EngineResult<Self> {
        let tag = canonical_tag(locale_id);
        let mut subtags = tag.split('-');
        let language = subtags.next().unwrap_or_default().to_string();
        let region = subtags
            .find(|subtag| {
                subtag.len() == 2 || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
            })
            .map(str::to_string);

        let locale = Locale::from_name(tag.as_str())
            .or_else(|_| Locale::from_name(language.as_str()))
            .map_err(|_| EngineError::UnknownLocale(locale_id.to_string()))?;

        Ok(Self {
            language,
            region,
            decimal: locale.decimal(),
            group: locale.separator(),
            minus: locale.minus_sign(),
            grouping: locale.grouping(),
        })
    }

    /// Lowercase language subtag (`es`).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag (`AR`), if the identifier carried one.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Decimal symbol.
    #[must_use]
    pub const fn decimal(&self) -> &'static str {
        self.decimal
    }

    /// Grouping (thousands) symbol.
    #[must_use]
    pub const fn group(&self) -> &'static str {
        self.group
    }

    /// Minus sign.
    #[must_use]
    pub const fn minus(&self) -> &'static str {
        self.minus
    }

    /// Inserts the locale's grouping symbol into a run of integer digits.
    #[must_use]
    pub fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 2 * self.group.len());
        for (i, ch) in digits.chars().enumerate() {
            out.push(ch);
            let remaining = len - i - 1;
            if remaining > 0 && self.separator_after(remaining) {
                out.push_str(self.group);
            }
        }
        out
    }

    /// Whether a separator goes in front of the last `remaining` digits.
    fn separator_after(&self, remaining: usize) -> bool {
        match self.grouping {
            Grouping::Standard => remaining % 3 == 0,
            Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
            Grouping::Posix => false,
        }
    }
}

/// `es_ar` -> `es-AR`, `zh_hant_tw` -> `zh-Hant-TW`.
fn canonical_tag(locale_id: &str) -> String {
    locale_id
        .trim()
        .split(['-', '_'])
        .filter(|subtag| !subtag.is_empty())
        .enumerate()
        .map(|(index, subtag)| match (index, subtag.len()) {
            (0, _) => subtag.to_ascii_lowercase(),
            (_, 2) => subtag.to_ascii_uppercase(),
            (_, 4) => {
                let lower = subtag.to_ascii_lowercase();
                let mut chars = lower.chars();
                chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            }
            _ => subtag.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}
