use std::collections::{HashMap, HashSet};

use sqlx::{PgConnection, PgPool};

use crate::error::{Error, Result};
use crate::model::{Facility, FacilityFilter, FacilityMedia, Listing, Metadata};

use super::{fetch_all, fetch_count, fetch_optional, query, transaction};

/// Read access to facilities
#[async_trait::async_trait]
pub trait FacilityStore: Send + Sync {
    /// List a page of facilities in a unit of work of its own
    async fn list_facilities(&self, filter: &FacilityFilter) -> Result<Listing<Facility>>;

    /// Fetch a single facility by primary key in a unit of work of its own
    async fn get_facility(&self, id: i32) -> Result<Facility>;
}

/// Postgres Facility Repository
#[derive(Debug, Clone)]
pub struct PgFacilityRepo {
    pool: PgPool,
}

impl PgFacilityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a page of facilities, with the total match count and primary images
    #[tracing::instrument(name = "List facilities", skip(conn))]
    pub async fn list_in(
        conn: &mut PgConnection,
        filter: &FacilityFilter,
    ) -> Result<Listing<Facility>> {
        let total = fetch_count(conn, query::count_facilities(filter), "count facilities").await?;

        let mut facilities: Vec<Facility> =
            fetch_all(conn, query::select_facilities(filter), "list facilities").await?;

        Self::attach_primary_media_in(conn, &mut facilities).await?;

        Ok(Listing {
            data: facilities,
            metadata: Metadata {
                page: filter.page.number(),
                total,
            },
        })
    }

    #[tracing::instrument(name = "Fetch facility by id", skip(conn))]
    pub async fn get_in(conn: &mut PgConnection, id: i32) -> Result<Facility> {
        let facility: Facility = fetch_optional(conn, query::select_facility(id), "fetch facility")
            .await?
            .ok_or_else(|| Error::NotFound(format!("Facility {}", id)))?;

        let mut facilities = [facility];
        Self::attach_primary_media_in(conn, &mut facilities).await?;
        let [facility] = facilities;

        Ok(facility)
    }

    /// Stamp `primary_img` on a batch of facilities with one extra query
    #[tracing::instrument(name = "Attach primary facility media", skip_all)]
    pub async fn attach_primary_media_in(
        conn: &mut PgConnection,
        facilities: &mut [Facility],
    ) -> Result<()> {
        if facilities.is_empty() {
            return Ok(());
        }

        let facility_ids: Vec<String> = facilities
            .iter()
            .map(|facility| facility.facility_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let media: Vec<FacilityMedia> = fetch_all(
            conn,
            query::select_primary_media(facility_ids),
            "list primary facility media",
        )
        .await?;

        stamp_primary_media(facilities, media);
        Ok(())
    }
}

#[async_trait::async_trait]
impl FacilityStore for PgFacilityRepo {
    async fn list_facilities(&self, filter: &FacilityFilter) -> Result<Listing<Facility>> {
        let mut tx = transaction::begin(&self.pool).await?;
        let outcome = Self::list_in(&mut *tx, filter).await;
        transaction::finish(tx, outcome).await
    }

    async fn get_facility(&self, id: i32) -> Result<Facility> {
        let mut tx = transaction::begin(&self.pool).await?;
        let outcome = Self::get_in(&mut *tx, id).await;
        transaction::finish(tx, outcome).await
    }
}

/// Set every facility's primary image from the media rows, `""` when none matches.
/// When a facility has several primary rows the last one wins.
fn stamp_primary_media(facilities: &mut [Facility], media: Vec<FacilityMedia>) {
    let urls: HashMap<String, String> = media
        .into_iter()
        .filter_map(|media| Some((media.facility_id, media.url?)))
        .collect();

    for facility in facilities.iter_mut() {
        facility.primary_img = urls
            .get(&facility.facility_id)
            .cloned()
            .unwrap_or_default();
    }
}
