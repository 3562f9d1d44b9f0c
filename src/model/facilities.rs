use serde::Serialize;

use crate::domain::{FacilitySort, GeoPoint, Page};

/// Stored facility record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// External identifier, the join key for facility media
    pub facility_id: String,
    /// URL of the primary media row for this facility, empty when there is none.
    /// NOTE: Not a column, stamped after the facility rows are loaded
    #[sqlx(default)]
    pub primary_img: String,
}

/// Stored media record belonging to a facility
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FacilityMedia {
    pub id: i32,
    pub title: Option<String>,
    pub url: Option<String>,
    pub is_primary: bool,
    pub facility_id: String,
}

/// Filter for listing facilities
#[derive(Debug, Clone, Default)]
pub struct FacilityFilter {
    /// Only facilities within the search radius of this point
    pub near: Option<GeoPoint>,
    pub sort: FacilitySort,
    pub page: Page,
}
