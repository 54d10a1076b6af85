use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{FontStack, Theme, validate_themes};

/// Treats a missing value, `null` and `""` the same way: absent.
pub fn de_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|string| !string.trim().is_empty()))
}

pub fn de_optional_font_stack<'de, D>(deserializer: D) -> Result<Option<FontStack>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let Some(value) = Option::<StringOrVec>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match value {
        StringOrVec::One(string) => {
            let families = split_families(&string);

            if families.is_empty() {
                return Ok(None);
            }

            Ok(Some(FontStack::new(families)))
        }
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("font family list can't be empty."));
            }

            if vec.iter().any(|family| family.trim().is_empty()) {
                return Err(D::Error::custom("font family names can't be empty."));
            }

            Ok(Some(FontStack::new(vec)))
        }
    }
}

/// Splits a CSS font stack on commas outside quoted family names.
fn split_families(stack: &str) -> SmallVec<[String; 1]> {
    let mut families: SmallVec<[&str; 4]> = SmallVec::new();
    let mut quote = None;
    let mut start = 0;

    for (at, c) in stack.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, ',') => {
                families.push(&stack[start..at]);
                start = at + 1;
            }
            _ => {}
        }
    }
    families.push(&stack[start..]);

    families
        .into_iter()
        .map(str::trim)
        .filter(|family| !family.is_empty())
        .map(String::from)
        .collect()
}

pub fn de_themes<'de, D>(deserializer: D) -> Result<Vec<Theme>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Vec::<Theme>::deserialize(deserializer)?;

    validate_themes(&value).map_err(D::Error::custom)?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "de_optional_string")]
        value: Option<String>,
        #[serde(default, deserialize_with = "de_optional_font_stack")]
        font: Option<FontStack>,
    }

    #[test]
    fn test_empty_string_is_absent() {
        let fields: Fields = serde_json::from_str(r#"{ "value": "" }"#).unwrap();
        assert_eq!(fields.value, None);

        let fields: Fields = serde_json::from_str(r#"{ "value": "   " }"#).unwrap();
        assert_eq!(fields.value, None);

        let fields: Fields = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(fields.value, None);

        let fields: Fields = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(fields.value, None);
    }

    #[test]
    fn test_non_empty_string_is_kept_verbatim() {
        let fields: Fields = serde_json::from_str(r#"{ "value": " #fff " }"#).unwrap();
        assert_eq!(fields.value.as_deref(), Some(" #fff "));
    }

    #[test]
    fn test_font_stack_from_string() {
        let fields: Fields =
            serde_json::from_str(r#"{ "font": "Comic Neue,  system-ui ,sans-serif" }"#).unwrap();
        let font = fields.font.unwrap();

        assert_eq!(font.families(), ["Comic Neue", "system-ui", "sans-serif"]);
        assert_eq!(font.css(), "Comic Neue, system-ui, sans-serif");
    }

    #[test]
    fn test_font_stack_keeps_quoted_commas() {
        let fields: Fields =
            serde_json::from_str(r#"{ "font": "\"Foo, Bar\", 'Baz,Qux', serif" }"#).unwrap();
        let font = fields.font.unwrap();

        assert_eq!(font.families(), ["\"Foo, Bar\"", "'Baz,Qux'", "serif"]);
        assert_eq!(font.css(), "\"Foo, Bar\", 'Baz,Qux', serif");
    }

    #[test]
    fn test_font_stack_from_list() {
        let fields: Fields = serde_json::from_str(r#"{ "font": ["Inter", "serif"] }"#).unwrap();
        assert_eq!(fields.font.unwrap().css(), "Inter, serif");
    }

    #[test]
    fn test_font_stack_empty_values() {
        let fields: Fields = serde_json::from_str(r#"{ "font": "" }"#).unwrap();
        assert!(fields.font.is_none());

        assert!(serde_json::from_str::<Fields>(r#"{ "font": [] }"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{ "font": ["Inter", " "] }"#).is_err());
    }
}
