//! Translation of grid load requests into backend listing queries.
//!
//! # Design
//! - Filters become `field eq 'value'` clauses joined with `" and "`, the
//!   expression dialect the listing endpoints evaluate server-side.
//! - Clauses are joined in field order so the same filter set always yields
//!   the same expression.
//! - Empty filter and sort state map to `None` rather than empty strings.

use crate::core::grid::{LoadRequest, SortDirection};
use tessera_api_models::PageQuery;

/// Build the filter expression for a load request, `None` when unfiltered.
#[must_use]
pub fn build_filter(request: &LoadRequest) -> Option<String> {
    if request.filters.is_empty() {
        return None;
    }
    let mut fields: Vec<&String> = request.filters.keys().collect();
    fields.sort();
    let clauses: Vec<String> = fields
        .into_iter()
        .map(|field| format!("{field} eq '{}'", request.filters[field]))
        .collect();
    Some(clauses.join(" and "))
}

/// Build the ordering expression, `None` when unsorted.
#[must_use]
pub fn build_order_by(request: &LoadRequest) -> Option<String> {
    let sort_by = request.sort_by.as_deref()?;
    match request.sort_direction {
        SortDirection::None => None,
        SortDirection::Ascending => Some(sort_by.to_string()),
        SortDirection::Descending => Some(format!("{sort_by} desc")),
    }
}

/// Convert a grid load request into the paged query the API accepts.
#[must_use]
pub fn to_page_query(request: &LoadRequest) -> PageQuery {
    PageQuery {
        skip_count: request.skip,
        max_result_count: request.take,
        filter: build_filter(request),
        order_by: build_order_by(request),
        query: None,
        is_deleted: None,
    }
}

/// Serialize a paged query into a URL query string (no leading `?`).
#[must_use]
pub fn to_query_string(query: &PageQuery) -> String {
    let mut parts = vec![
        format!("skipCount={}", query.skip_count),
        format!("maxResultCount={}", query.max_result_count),
    ];
    if let Some(filter) = &query.filter {
        parts.push(format!("filter={}", urlencoding::encode(filter)));
    }
    if let Some(order_by) = &query.order_by {
        parts.push(format!("orderBy={}", urlencoding::encode(order_by)));
    }
    if let Some(text) = &query.query {
        parts.push(format!("query={}", urlencoding::encode(text)));
    }
    if let Some(is_deleted) = query.is_deleted {
        parts.push(format!("isDeleted={is_deleted}"));
    }
    parts.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn request(filters: &[(&str, &str)]) -> LoadRequest {
        LoadRequest {
            skip: 20,
            take: 10,
            sort_by: None,
            sort_direction: SortDirection::None,
            filters: filters
                .iter()
                .map(|(field, value)| ((*field).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    #[test]
    fn filter_clauses_join_in_field_order() {
        let request = request(&[("name", "bob"), ("email", "ada")]);
        assert_eq!(
            build_filter(&request).as_deref(),
            Some("email eq 'ada' and name eq 'bob'")
        );
    }

    #[test]
    fn empty_state_maps_to_none() {
        let request = request(&[]);
        assert!(build_filter(&request).is_none());
        assert!(build_order_by(&request).is_none());
        let query = to_page_query(&request);
        assert_eq!(query.skip_count, 20);
        assert_eq!(query.max_result_count, 10);
        assert!(query.filter.is_none());
    }

    #[test]
    fn order_by_appends_desc_only_when_descending() {
        let mut req = request(&[]);
        req.sort_by = Some("name".into());
        req.sort_direction = SortDirection::Ascending;
        assert_eq!(build_order_by(&req).as_deref(), Some("name"));
        req.sort_direction = SortDirection::Descending;
        assert_eq!(build_order_by(&req).as_deref(), Some("name desc"));
    }

    #[test]
    fn query_string_encodes_expressions() {
        let req = LoadRequest {
            skip: 0,
            take: 25,
            sort_by: Some("email".into()),
            sort_direction: SortDirection::Descending,
            filters: HashMap::from([("name".to_string(), "bob smith".to_string())]),
        };
        let text = to_query_string(&to_page_query(&req));
        assert!(text.starts_with("skipCount=0&maxResultCount=25"));
        assert!(text.contains("filter=name%20eq%20%27bob%20smith%27"));
        assert!(text.contains("orderBy=email%20desc"));
    }
}
