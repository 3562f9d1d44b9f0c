use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::domain::{FacilitySort, GeoPoint};
use crate::error::Error;
use crate::model::FacilityFilter;
use crate::repo::FacilityStore;

use super::{non_blank, parse_page, RestError, RestResult};

/// Query string accepted by the facility listing
#[derive(Debug, Deserialize)]
pub struct FacilitiesQuery {
    lat: Option<String>,
    lng: Option<String>,
    sort: Option<String>,
    page: Option<String>,
}

impl TryFrom<FacilitiesQuery> for FacilityFilter {
    type Error = Error;

    fn try_from(query: FacilitiesQuery) -> Result<Self, Self::Error> {
        let near = GeoPoint::from_query(query.lat.as_deref(), query.lng.as_deref())?;
        let sort = non_blank(query.sort)
            .map(|sort| sort.parse::<FacilitySort>().unwrap_or_default())
            .unwrap_or_default();
        let page = parse_page(query.page)?;

        Ok(Self { near, sort, page })
    }
}

/// List facilities, optionally near a point
#[tracing::instrument(name = "List facilities", skip(store))]
#[get("")]
async fn list(
    store: web::Data<dyn FacilityStore>,
    query: web::Query<FacilitiesQuery>,
) -> RestResult<impl Responder> {
    let filter: FacilityFilter = query.into_inner().try_into()?;

    let facilities = store.list_facilities(&filter).await?;
    if facilities.is_empty() {
        tracing::info!("No facilities found");
        return Err(RestError::NotFound("No facilities found".into()));
    }

    Ok(HttpResponse::Ok().json(facilities))
}

/// Fetch a single facility
#[tracing::instrument(name = "Get a facility by id", skip(store))]
#[get("/{id}")]
async fn fetch(
    store: web::Data<dyn FacilityStore>,
    path: web::Path<(i32,)>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();

    let facility = store.get_facility(id).await?;

    Ok(HttpResponse::Ok().json(facility))
}

/// Facilities API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/facilities").service(list).service(fetch)
}
