use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;

use regex::Regex;

use serde::Serialize;

use crate::error::{Error, Result};

/// Number of random bytes behind every subscription token
pub const TOKEN_BYTES: usize = 32;

lazy_static::lazy_static! {
    // Regex for checking token strings
    static ref TOKEN_REGEX: Regex = Regex::new(r"^[0-9a-f]{64}$").unwrap();
}

/// An opaque, unguessable subscription token.
/// 256 bits from the operating system CSPRNG, rendered as 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Generate a fresh random token
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        if !TOKEN_REGEX.is_match(token) {
            Err(Error::ParsingError("Token is of invalid format".into()))
        } else {
            Ok(Self(token.to_string()))
        }
    }
}
