use super::*;
use crate::net::types::AllowedAccess;

#[test]
fn list_request_uses_settled_search_only() {
    let mut filter = SampleFilter::default();
    let generation = filter.set_search_text("granite".to_owned());
    let request = ListRequest::from_filter(&filter);
    assert_eq!(request.page, 0);
    assert_eq!(request.size, 20);
    assert_eq!(request.criteria.name_contains, None);
    assert_eq!(request.key, "/api/core/sample-with-locations?page=0&size=20&allowedAccess=VIEWABLE");

    filter.settle_search(generation);
    let request = ListRequest::from_filter(&filter);
    assert_eq!(request.criteria.name_contains.as_deref(), Some("granite"));
    assert!(request.key.ends_with("&name.contains=granite"));
}

#[test]
fn live_search_edit_leaves_request_unchanged() {
    let mut filter = SampleFilter::default();
    let before = ListRequest::from_filter(&filter);
    filter.set_search_text("gr".to_owned());
    assert_eq!(ListRequest::from_filter(&filter), before);
}

#[test]
fn list_key_changes_with_page() {
    let mut filter = SampleFilter::default();
    filter.set_allowed_access(AllowedAccess::Writeable);
    let first = ListRequest::from_filter(&filter);
    filter.set_page(1);
    let second = ListRequest::from_filter(&filter);
    assert_ne!(first.key, second.key);
}

#[test]
fn clear_resets_all_queries() {
    let owner = Owner::new();
    owner.with(|| {
        let queries = SampleQueries::new();
        queries.count.update(|q| {
            let ticket = q.begin("k");
            q.resolve(ticket, "k", Ok(5));
        });
        queries.clear();
        assert!(queries.count.with_untracked(|q| q.data.is_none() && q.cache().is_empty()));
    });
}
