mod email_address;
mod facility_ids;
mod facility_sort;
mod geo_point;
mod page;

pub use email_address::EmailAddress;
pub use facility_ids::FacilityIds;
pub use facility_sort::FacilitySort;
pub use geo_point::GeoPoint;
pub use page::Page;
