//! Parse-level tests against the checked-in generator output.

mod common;

use assert2::{check, let_assert};
use common::fixture;
use documenter_search::SearchIndex;
use documenter_search::record::Category;
use documenter_search::validate::validate;
use rstest::rstest;

const SIMPLEX_PROJECTION: &str =
    "#DifferentiableFrankWolfe.simplex_projection-Tuple{AbstractVector{<:Real}}";

/// Test: both fixtures parse from their published script form.
#[rstest]
#[case("dev", 12)]
#[case("v0.4.1", 30)]
fn fixture_parses_with_expected_record_count(#[case] version: &str, #[case] expected: usize) {
    let_assert!(Ok(index) = SearchIndex::parse(&fixture(version)));
    check!(index.len() == expected);
}

/// Test: the docstring record for a function carries the method category
/// in both fixture versions.
#[rstest]
#[case("dev")]
#[case("v0.4.1")]
fn simplex_projection_is_a_method(#[case] version: &str) {
    let index = SearchIndex::parse(&fixture(version)).unwrap();
    let_assert!(Some(record) = index.find_location(SIMPLEX_PROJECTION));
    check!(record.title == "DifferentiableFrankWolfe.simplex_projection");
    check!(record.category == Category::Method);
    check!(record.page == "Home");
}

/// Test: category census of the release fixture matches the generator output.
#[test]
fn release_fixture_category_counts() {
    let index = SearchIndex::parse(&fixture("v0.4.1")).unwrap();
    let count = |category: Category| {
        index
            .records()
            .iter()
            .filter(|record| record.category == category)
            .count()
    };
    check!(count(Category::Page) == 18);
    check!(count(Category::Section) == 4);
    check!(count(Category::Module) == 1);
    check!(count(Category::Type) == 4);
    check!(count(Category::Method) == 3);
}

/// Test: records come back in file order; the first is the Home page body.
#[test]
fn records_keep_file_order() {
    let index = SearchIndex::parse(&fixture("dev")).unwrap();
    let first = &index.records()[0];
    check!(first.location == "");
    check!(first.page == "Home");
    check!(first.text.contains("CurrentModule"));
}

/// Test: a parse → serialize round trip of real generator output loses
/// nothing but whitespace.
#[rstest]
#[case("dev")]
#[case("v0.4.1")]
fn fixture_round_trips(#[case] version: &str) {
    let raw = fixture(version);
    let index = SearchIndex::parse(&raw).unwrap();

    let body = raw
        .trim_start()
        .strip_prefix("var documenterSearchIndex =")
        .unwrap();
    let original: serde_json::Value = serde_json::from_str(body).unwrap();
    let reserialized: serde_json::Value = serde_json::from_str(&index.to_json_string()).unwrap();
    check!(reserialized == original);

    let_assert!(Ok(reparsed) = SearchIndex::parse(&index.to_script_string()));
    check!(reparsed == index);
}

/// Test: page grouping of the release fixture, in traversal order.
#[test]
fn release_fixture_pages() {
    let index = SearchIndex::parse(&fixture("v0.4.1")).unwrap();
    let pages = index.pages();
    check!(pages.len() == 2);
    check!(pages[0].path == "");
    check!(pages[0].page == "Home");
    check!(pages[0].records == 15);
    check!(pages[1].path == "tutorial/");
    check!(pages[1].page == "Tutorial");
    check!(pages[1].records == 15);
}

/// Test: the generator's own output validates clean.
#[rstest]
#[case("dev")]
#[case("v0.4.1")]
fn fixtures_validate_clean(#[case] version: &str) {
    let index = SearchIndex::parse(&fixture(version)).unwrap();
    check!(validate(&index).is_empty());
}
