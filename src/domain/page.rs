use std::str::FromStr;

use crate::error::{Error, Result};

/// A 1-based page number for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn new(number: u32) -> Result<Self> {
        if number == 0 {
            return Err(Error::ParsingError("Page must be at least 1".into()));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Rows to skip before this page, for a given page size
    pub fn offset(&self, per_page: i64) -> i64 {
        (i64::from(self.0) - 1) * per_page
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let number = value
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::ParsingError(format!("Invalid page \"{}\"", value)))?;
        Self::new(number)
    }
}
