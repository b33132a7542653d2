use super::*;
use crate::net::types::{AllowedAccess, BBox};

#[test]
fn samples_list_path_puts_paging_first() {
    let criteria = SampleCriteria { allowed_access: Some(AllowedAccess::Viewable), ..Default::default() };
    assert_eq!(
        samples_list_path(2, 20, &criteria),
        "/api/core/sample-with-locations?page=2&size=20&allowedAccess=VIEWABLE"
    );
}

#[test]
fn samples_list_path_encodes_search() {
    let criteria = SampleCriteria { name_contains: Some("rock & roll".to_owned()), ..Default::default() };
    assert_eq!(
        samples_list_path(0, 10, &criteria),
        "/api/core/sample-with-locations?page=0&size=10&name.contains=rock%20%26%20roll"
    );
}

#[test]
fn sample_path_encodes_id() {
    assert_eq!(sample_path("a/b c"), "/api/core/sample-with-locations/a%2Fb%20c");
    assert_eq!(sample_path("123"), "/api/core/sample-with-locations/123");
}

#[test]
fn count_and_geo_paths_without_criteria_have_no_query() {
    let criteria = SampleCriteria::default();
    assert_eq!(sample_count_path(&criteria), "/api/core/sample-with-locations/count");
    assert_eq!(geo_features_path(&criteria), "/api/core/sample-with-locations/findGeoFeatureCollection");
}

#[test]
fn geo_path_carries_bbox() {
    let criteria = SampleCriteria {
        bbox: Some(BBox { min_lon: 1.0, min_lat: 2.0, max_lon: 3.0, max_lat: 4.0 }),
        ..Default::default()
    };
    let path = geo_features_path(&criteria);
    assert!(path.starts_with("/api/core/sample-with-locations/findGeoFeatureCollection?"));
    assert!(path.contains("locationCriteria.lat.greaterOrEqualThan=2"));
    assert!(path.contains("locationCriteria.lon.lessOrEqualThan=3"));
}

#[test]
fn litho_users_path_omits_blank_search() {
    assert_eq!(litho_users_path("  ", 0, 50), "/api/management/litho-users?page=0&size=50");
    assert_eq!(litho_users_path(" jo ", 0, 50), "/api/management/litho-users?search=jo&page=0&size=50");
}

#[test]
fn activate_path_encodes_key() {
    assert_eq!(activate_path("abc+/="), "/api/activate?key=abc%2B%2F%3D");
}
