use serde_json::json;

use crate::phonebook::{
    contact::ContactId,
    filter::ContactFilter,
};

#[test]
fn test_empty_filter() {
    assert_eq!(ContactFilter::new().to_bool_exp(), json!({}));
}

#[test]
fn test_id_membership_windows() {
    let mut filter = ContactFilter::new();
    filter.with_id_in(vec![ContactId::new(3), ContactId::new(7)]);
    assert_eq!(filter.to_bool_exp(), json!({ "id": { "_in": [3, 7] } }));

    let mut filter = ContactFilter::new();
    filter.with_id_not_in(vec![ContactId::new(3), ContactId::new(7)]);
    assert_eq!(filter.to_bool_exp(), json!({ "id": { "_nin": [3, 7] } }));
}

#[test]
fn test_search_combines_with_id_window() {
    let mut filter = ContactFilter::new();
    filter.with_id_not_in(vec![ContactId::new(1)]);
    filter.with_name_like("wa");

    assert_eq!(filter.to_bool_exp(), json!({
        "id": { "_nin": [1] },
        "first_name": { "_like": "%wa%" },
    }));
}

#[test]
fn test_name_predicates_replace_each_other() {
    let mut filter = ContactFilter::new();
    filter.with_name_like("wa");
    filter.with_name_equals("Wahyu", "Adit");

    assert_eq!(filter.to_bool_exp(), json!({
        "first_name": { "_eq": "Wahyu" },
        "last_name":  { "_eq": "Adit" },
    }));

    filter.with_name_like("wa");
    assert_eq!(filter.to_bool_exp(), json!({
        "first_name": { "_like": "%wa%" },
    }));
}

#[test]
fn test_name_equality_pair() {
    let mut filter = ContactFilter::new();
    filter.with_name_equals("Wahyu", "Adit");

    assert_eq!(filter.to_bool_exp(), json!({
        "first_name": { "_eq": "Wahyu" },
        "last_name":  { "_eq": "Adit" },
    }));
}
