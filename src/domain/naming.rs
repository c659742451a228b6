//! Identifier naming conventions
//!
//! Item names arrive as free-form tokens (`user-profile`, `UserProfile`,
//! `user profile`) and are normalised into three forms:
//!
//! | Form | Example | Used for |
//! |------|---------|----------|
//! | dash | `user-profile` | file names, CSS classes |
//! | camel | `userProfile` | intermediate |
//! | pascal | `UserProfile` | element and import names |

use std::fmt;

use super::error::ValidationError;

/// Separator used by the dash form
const SEPARATOR: char = '-';

/// Converts a mixed-case or spaced name to dash form
///
/// Inserts a separator between an ASCII lower-case letter and a following
/// ASCII upper-case letter, collapses whitespace runs into one separator and
/// lower-cases the result.
pub fn to_dash(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                spaced.push(SEPARATOR);
            }
            in_whitespace = true;
            prev = Some(c);
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            spaced.push(SEPARATOR);
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced.to_lowercase()
}

/// Removes separators, upper-casing the character that followed each one
pub fn to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;

    for c in s.chars() {
        if c == SEPARATOR {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Camel form with the first character upper-cased
pub fn to_pascal(s: &str) -> String {
    capitalize(&to_camel(s))
}

/// Upper-cases the first character and leaves the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A validated item name with its derived forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    raw: String,
    dash: String,
    camel: String,
    pascal: String,
}

impl Identifier {
    /// Validates a caller-supplied token
    ///
    /// Accepts letters, digits, hyphens and spaces. The camel and pascal
    /// forms are derived from the dash form so every spelling of the same
    /// name lands on the same files.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let valid_chars = raw
            .chars()
            .all(|c| c.is_alphanumeric() || c == SEPARATOR || c == ' ');

        if raw.is_empty() || !valid_chars {
            return Err(ValidationError::InvalidName(raw.to_string()));
        }

        let dash = to_dash(raw);
        let camel = to_camel(&dash);
        if camel.is_empty() {
            return Err(ValidationError::InvalidName(raw.to_string()));
        }
        let pascal = capitalize(&camel);

        Ok(Self {
            raw: raw.to_string(),
            dash,
            camel,
            pascal,
        })
    }

    /// The trimmed name as the caller spelled it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn dash(&self) -> &str {
        &self.dash
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dash_splits_camel_humps() {
        assert_eq!(to_dash("UserProfile"), "user-profile");
        assert_eq!(to_dash("mainLayout"), "main-layout");
        assert_eq!(to_dash("UserAPI"), "user-api");
    }

    #[test]
    fn dash_collapses_whitespace() {
        assert_eq!(to_dash("user   profile"), "user-profile");
        assert_eq!(to_dash("Blog Post\tCard"), "blog-post-card");
    }

    #[test]
    fn dash_of_empty_is_empty() {
        assert_eq!(to_dash(""), "");
    }

    #[test]
    fn dash_keeps_acronym_runs_together() {
        assert_eq!(to_dash("XMLHttp"), "xmlhttp");
    }

    #[test]
    fn camel_removes_separators() {
        assert_eq!(to_camel("user-profile"), "userProfile");
        assert_eq!(to_camel("a-b-c"), "aBC");
        assert_eq!(to_camel("button"), "button");
        assert_eq!(to_camel("trailing-"), "trailing");
        assert_eq!(to_camel("double--dash"), "doubleDash");
    }

    #[test]
    fn pascal_and_capitalize() {
        assert_eq!(to_pascal("user-profile"), "UserProfile");
        assert_eq!(capitalize("home"), "Home");
        assert_eq!(capitalize("hOME"), "HOME");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn identifier_derives_forms_from_dash() {
        let id = Identifier::parse("UserAPI").unwrap();
        assert_eq!(id.raw(), "UserAPI");
        assert_eq!(id.dash(), "user-api");
        assert_eq!(id.camel(), "userApi");
        assert_eq!(id.pascal(), "UserApi");

        let id = Identifier::parse("  blog post ").unwrap();
        assert_eq!(id.dash(), "blog-post");
        assert_eq!(id.pascal(), "BlogPost");
    }

    #[test]
    fn identifier_rejects_bad_tokens() {
        assert!(Identifier::parse("").is_err());
        assert!(Identifier::parse("   ").is_err());
        assert!(Identifier::parse("---").is_err());
        assert!(Identifier::parse("user_profile").is_err());
        assert!(Identifier::parse("../etc").is_err());
        assert!(Identifier::parse("it's").is_err());
    }

    proptest! {
        #[test]
        fn pascal_is_capitalized_camel(s in "[a-zA-Z0-9 -]{0,24}") {
            prop_assert_eq!(to_pascal(&s), capitalize(&to_camel(&s)));
        }

        #[test]
        fn dash_is_idempotent(s in "[a-zA-Z0-9 \t-]{0,24}") {
            let once = to_dash(&s);
            prop_assert_eq!(to_dash(&once), once);
        }

        #[test]
        fn identifier_spellings_agree(s in "[a-z]{2,6}(-[a-z]{2,6}){0,3}") {
            let from_dash = Identifier::parse(&s).unwrap();
            let from_pascal = Identifier::parse(from_dash.pascal()).unwrap();
            prop_assert_eq!(from_pascal.dash(), from_dash.dash());
            prop_assert_eq!(from_pascal.pascal(), from_dash.pascal());
        }
    }
}
