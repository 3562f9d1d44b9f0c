use std::str::FromStr;

use crate::error::{Error, Result};

/// A comma separated list of facility ids, as passed in query strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityIds(Vec<i32>);

impl FacilityIds {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[i32]> for FacilityIds {
    fn as_ref(&self) -> &[i32] {
        &self.0
    }
}

impl FromStr for FacilityIds {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let ids = value
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse::<i32>()
                    .map_err(|_| Error::ParsingError(format!("Invalid facility id \"{}\"", id)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(ids))
    }
}
