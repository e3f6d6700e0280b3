use crate::{ParseError, ParseResult};
use arrayvec::ArrayString;
use core::{fmt, ops::Deref, str::FromStr};

/// Longest name the host accepts, in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

/// A catalog or column name.
///
/// Always a valid, lower-cased postgres-style identifier: a letter or underscore
/// followed by letters, digits, underscores or dollar signs, at most
/// [`MAX_IDENTIFIER_LENGTH`] bytes long.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Ord, PartialOrd, Copy)]
pub struct Identifier {
    name: ArrayString<64>,
}

impl Identifier {
    /// An alias for [`Identifier::from_str`], provided for convenience.
    ///
    /// # Errors
    /// Returns [`ParseError::IdentifierParseError`] if the input is empty, too long,
    /// or contains characters that are not allowed in an unquoted identifier.
    pub fn try_new<S: AsRef<str>>(string: S) -> ParseResult<Self> {
        Self::from_str(string.as_ref())
    }

    /// The name of this [Identifier]
    /// It already implements [Deref] to [str], so this method is not necessary for most use cases.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// An alias for [`Identifier::name`], provided for convenience.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.name()
    }
}

fn is_valid_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_valid_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

impl FromStr for Identifier {
    type Err = ParseError;

    fn from_str(string: &str) -> ParseResult<Self> {
        let mut chars = string.chars();
        let starts_well = chars.next().is_some_and(is_valid_start);
        if !starts_well || !chars.all(is_valid_continuation) {
            return Err(ParseError::IdentifierParseError(format!(
                "'{string}' is not a valid identifier"
            )));
        }
        if string.len() > MAX_IDENTIFIER_LENGTH {
            return Err(ParseError::IdentifierParseError(format!(
                "'{string}' is longer than {MAX_IDENTIFIER_LENGTH} bytes"
            )));
        }
        let name = ArrayString::from(&string.to_ascii_lowercase())
            .map_err(|e| ParseError::IdentifierParseError(e.to_string()))?;
        Ok(Identifier { name })
    }
}
crate::impl_serde_from_str!(Identifier);

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.name.fmt(f)
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.name.as_str()
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.name.as_str()
    }
}
