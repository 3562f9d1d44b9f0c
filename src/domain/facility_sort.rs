use std::convert::Infallible;
use std::str::FromStr;

/// Ordering requested for a facility listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FacilitySort {
    /// Name ascending
    #[default]
    Name,
    /// Name descending (`za`)
    NameDesc,
    /// Most recently created first (`new`)
    Newest,
}

impl FacilitySort {
    /// The ORDER BY clause for this ordering, with `id` as a stable tiebreak
    pub fn order_by(&self) -> &'static str {
        match self {
            Self::Name => "name ASC, id ASC",
            Self::NameDesc => "name DESC, id DESC",
            Self::Newest => "id DESC",
        }
    }
}

impl FromStr for FacilitySort {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = match value.to_lowercase().as_str() {
            "za" => Self::NameDesc,
            "new" => Self::Newest,
            "" | "az" | "default" => Self::Name,
            other => {
                tracing::debug!("Unknown facility sort \"{}\", using name order", other);
                Self::Name
            }
        };
        Ok(value)
    }
}
