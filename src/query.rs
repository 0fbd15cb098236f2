//! Typed builders for TheHive's server-side query pipelines.
//!
//! A query is an ordered list of stages; each stage is a JSON object carrying
//! a `_name` discriminator. Endpoints prepend a resource-selection stage and
//! append the output of [`build_subquery`], which contributes one stage per
//! supplied filter/sort/pagination input, always in that order.

pub mod filters;
pub mod page;
pub mod sort;

pub use filters::FilterExpr;
pub use page::Paginate;
pub use sort::{Order, SortExpr};

use serde_json::{Map, Value, json};

/// An ordered server-side query pipeline, one JSON object per stage.
pub type QueryExpr = Vec<Value>;

/// Wrap a serialized expression into a stage named `name`.
fn stage(name: &str, value: Value) -> Value {
    let mut object = match value {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    object.insert("_name".to_string(), json!(name));

    Value::Object(object)
}

/// Build the filter/sort/page tail of a query pipeline.
///
/// Each supplied input contributes exactly one stage, in fixed
/// filter, sort, page order. Absent inputs contribute nothing, so any
/// combination (including none at all) is valid.
pub fn build_subquery(
    filters: Option<&FilterExpr>,
    sortby: Option<&SortExpr>,
    paginate: Option<&Paginate>,
) -> QueryExpr {
    let mut subquery = QueryExpr::new();

    if let Some(filters) = filters {
        subquery.push(stage("filter", filters.to_value()));
    }

    if let Some(sortby) = sortby {
        subquery.push(stage("sort", sortby.to_value()));
    }

    if let Some(paginate) = paginate {
        subquery.push(stage("page", paginate.to_value()));
    }

    subquery
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_filter() -> FilterExpr {
        FilterExpr::eq("title", "phishing")
    }

    fn sample_sort() -> SortExpr {
        SortExpr::desc("date")
    }

    fn sample_page() -> Paginate {
        Paginate::new(0, 10)
    }

    #[rstest]
    #[case::none(false, false, false)]
    #[case::filter_only(true, false, false)]
    #[case::sort_only(false, true, false)]
    #[case::page_only(false, false, true)]
    #[case::filter_sort(true, true, false)]
    #[case::filter_page(true, false, true)]
    #[case::sort_page(false, true, true)]
    #[case::all(true, true, true)]
    fn stage_count_matches_present_inputs(
        #[case] with_filter: bool,
        #[case] with_sort: bool,
        #[case] with_page: bool,
    ) {
        let filter = sample_filter();
        let sort = sample_sort();
        let page = sample_page();

        let subquery = build_subquery(
            with_filter.then_some(&filter),
            with_sort.then_some(&sort),
            with_page.then_some(&page),
        );

        let expected: Vec<&str> = [
            with_filter.then_some("filter"),
            with_sort.then_some("sort"),
            with_page.then_some("page"),
        ]
        .into_iter()
        .flatten()
        .collect();

        let names: Vec<&str> = subquery
            .iter()
            .map(|stage| stage["_name"].as_str().unwrap())
            .collect();

        assert_eq!(names, expected);
    }

    #[test]
    fn filter_stage_merges_expression_keys() {
        let filter = sample_filter();
        let subquery = build_subquery(Some(&filter), None, None);

        assert_eq!(
            subquery,
            vec![json!({
                "_name": "filter",
                "_eq": { "_field": "title", "_value": "phishing" },
            })]
        );
    }

    #[test]
    fn sort_and_page_stages_keep_their_shapes() {
        let sort = SortExpr::asc("severity") & SortExpr::desc("date");
        let page = Paginate::new(5, 25).with_extra_data(["importDate"]);

        let subquery = build_subquery(None, Some(&sort), Some(&page));

        assert_eq!(
            subquery,
            vec![
                json!({
                    "_name": "sort",
                    "_fields": [{ "severity": "asc" }, { "date": "desc" }],
                }),
                json!({
                    "_name": "page",
                    "from": 5,
                    "to": 25,
                    "extraData": ["importDate"],
                }),
            ]
        );
    }
}
