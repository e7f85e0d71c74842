//! # Language Tags
//!
//! A language tag is an ordinary vocabulary symbol built by
//! substituting a language code into a template, such as ``<lang:de>``.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{S2tgtError, S2tgtResult},
    types::TokenType,
    vocab::Dictionary,
};

/// The placeholder replaced by the language code.
pub const LANG_PLACEHOLDER: &str = "{}";

/// The default language tag template.
pub const DEFAULT_LANG_TAG_TEMPLATE: &str = "<lang:{}>";

/// A template with exactly one [`LANG_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LangTagTemplate {
    prefix: String,
    suffix: String,
}

impl Default for LangTagTemplate {
    fn default() -> Self {
        Self {
            prefix: "<lang:".to_string(),
            suffix: ">".to_string(),
        }
    }
}

impl LangTagTemplate {
    /// Parse a template.
    ///
    /// ## Returns
    /// [`S2tgtError::InvalidTemplate`] unless the template holds exactly one placeholder.
    pub fn new(template: &str) -> S2tgtResult<Self> {
        let mut parts = template.split(LANG_PLACEHOLDER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(prefix), Some(suffix), None) => Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(S2tgtError::InvalidTemplate(template.to_string())),
        }
    }

    /// Format the tag symbol for `lang`.
    pub fn format(
        &self,
        lang: &str,
    ) -> String {
        let mut tag = String::with_capacity(self.prefix.len() + lang.len() + self.suffix.len());
        tag.push_str(&self.prefix);
        tag.push_str(lang);
        tag.push_str(&self.suffix);
        tag
    }

    /// Recover the language code from a tag symbol, if it matches the template.
    pub fn parse_tag<'a>(
        &self,
        tag: &'a str,
    ) -> Option<&'a str> {
        tag.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
    }

    /// Look up the tag token for `lang` in `dict`.
    pub fn lookup<T: TokenType>(
        &self,
        dict: &Dictionary<T>,
        lang: &str,
    ) -> S2tgtResult<T> {
        dict.index(&self.format(lang))
    }
}

impl fmt::Display for LangTagTemplate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, LANG_PLACEHOLDER, self.suffix)
    }
}

impl FromStr for LangTagTemplate {
    type Err = S2tgtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LangTagTemplate {
    type Error = S2tgtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LangTagTemplate> for String {
    fn from(value: LangTagTemplate) -> Self {
        value.to_string()
    }
}

/// Register the tags for `langs` in `dict`, returning their tokens.
///
/// Tags already present keep their tokens.
pub fn register_lang_tags<T, I, S>(
    dict: &mut Dictionary<T>,
    template: &LangTagTemplate,
    langs: I,
) -> S2tgtResult<Vec<T>>
where
    T: TokenType,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    langs
        .into_iter()
        .map(|lang| dict.add_symbol(&template.format(lang.as_ref()), 1, false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let template = LangTagTemplate::default();
        assert_eq!(template.to_string(), DEFAULT_LANG_TAG_TEMPLATE);
        assert_eq!(template, LangTagTemplate::new(DEFAULT_LANG_TAG_TEMPLATE).unwrap());
        assert_eq!(template.format("de"), "<lang:de>");
        assert_eq!(template.parse_tag("<lang:de>"), Some("de"));
        assert_eq!(template.parse_tag("de"), None);
    }

    #[test]
    fn test_invalid_templates() {
        assert!(matches!(
            LangTagTemplate::new("<lang>"),
            Err(S2tgtError::InvalidTemplate(_))
        ));
        assert!(LangTagTemplate::new("{}{}").is_err());
        assert_eq!(LangTagTemplate::new("__{}__").unwrap().format("fr"), "__fr__");
    }

    #[test]
    fn test_serde() {
        let template: LangTagTemplate = serde_json::from_str("\"[{}]\"").unwrap();
        assert_eq!(template.format("ja"), "[ja]");
        assert_eq!(serde_json::to_string(&template).unwrap(), "\"[{}]\"");
        assert!(serde_json::from_str::<LangTagTemplate>("\"nope\"").is_err());
    }

    #[test]
    fn test_register_lang_tags() {
        let mut dict: Dictionary<u32> = Dictionary::default();
        let template = LangTagTemplate::default();
        let tokens = register_lang_tags(&mut dict, &template, ["de", "en", "de"]).unwrap();
        assert_eq!(tokens, vec![4, 5, 4]);
        assert_eq!(template.lookup(&dict, "en").unwrap(), 5);
        assert!(template.lookup(&dict, "fr").is_err());
    }
}
