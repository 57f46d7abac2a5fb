//! Validated identifier and token strings.
//!
//! Length is counted in characters. Checks run when the value is built or
//! decoded, never later.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{ModelError, ModelResult};

const ATTRIBUTE_KEY_PATTERN: &str = "[A-Za-z0-9_][A-Za-z0-9_-]*";
const INDEX_ID_PATTERN: &str = "[a-zA-Z0-9][a-zA-Z0-9-]*";
const RESOURCE_ID_PATTERN: &str = "[a-zA-Z0-9][a-zA-Z0-9_-]*";

static ATTRIBUTE_KEY_RE: Lazy<Regex> = Lazy::new(|| anchored(ATTRIBUTE_KEY_PATTERN));
static INDEX_ID_RE: Lazy<Regex> = Lazy::new(|| anchored(INDEX_ID_PATTERN));
static RESOURCE_ID_RE: Lazy<Regex> = Lazy::new(|| anchored(RESOURCE_ID_PATTERN));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("identifier pattern is valid")
}

fn check_length(field: &'static str, value: &str, min: usize, max: usize) -> ModelResult<()> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(ModelError::InvalidLength {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

fn check_pattern(
    field: &'static str,
    value: &str,
    re: &Regex,
    pattern: &'static str,
) -> ModelResult<()> {
    if !re.is_match(value) {
        return Err(ModelError::InvalidKey {
            field,
            value: value.to_string(),
            pattern,
        });
    }
    Ok(())
}

macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, $min:expr, $max:expr $(, $re:ident, $pattern:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MIN_LEN: usize = $min;
            pub const MAX_LEN: usize = $max;

            pub fn new(value: impl Into<String>) -> ModelResult<Self> {
                let value = value.into();
                check_length($field, &value, $min, $max)?;
                $( check_pattern($field, &value, &$re, $pattern)?; )?
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_string! {
    /// Document attribute name, e.g. `_category` or `dept_1`.
    AttributeKey, "attribute key", 1, 200, ATTRIBUTE_KEY_RE, ATTRIBUTE_KEY_PATTERN
}

validated_string! {
    IndexId, "index id", 36, 36, INDEX_ID_RE, INDEX_ID_PATTERN
}

validated_string! {
    DataSourceId, "data source id", 1, 100, RESOURCE_ID_RE, RESOURCE_ID_PATTERN
}

validated_string! {
    FaqId, "FAQ id", 1, 100, RESOURCE_ID_RE, RESOURCE_ID_PATTERN
}

validated_string! {
    /// Identifier of one data source synchronization run.
    ExecutionId, "execution id", 1, 100
}

validated_string! {
    QueryId, "query id", 1, 36
}

validated_string! {
    ResultId, "result id", 1, 73
}

validated_string! {
    /// Opaque continuation token. Echo it back verbatim to fetch the next page.
    PageToken, "next token", 1, 800
}
