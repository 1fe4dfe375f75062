//! Query Engine Property Tests
//!
//! End-to-end properties of the canonical query pipeline:
//! - Search normalization is case- and whitespace-insensitive, and idempotent
//! - Filters AND-compose; an absent filter matches everything
//! - Sorting is stable; descending is the exact reverse of ascending
//! - Pages concatenate to the full result; stats ignore pagination
//! - The store's filter push-down changes nothing about the results

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use rolodb::directory::Directory;
use rolodb::model::{PartnerRecord, PartnerStatus, RelationLink};
use rolodb::query::{QueryEngine, QuerySpec, SortKey, SortOrder};
use rolodb::store::MemoryStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn record(company: &str, status: PartnerStatus) -> PartnerRecord {
    PartnerRecord {
        id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "Partner".to_string(),
        company: company.to_string(),
        profession: "Engineer".to_string(),
        email: "test@example.com".to_string(),
        phone: String::new(),
        rating: 3,
        status,
        classifications: Vec::new(),
        relations: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn rated(company: &str, rating: u8) -> PartnerRecord {
    PartnerRecord {
        rating,
        ..record(company, PartnerStatus::Active)
    }
}

fn with_relations(company: &str, count: usize) -> PartnerRecord {
    let relations = (0..count)
        .map(|i| RelationLink {
            name: format!("Contact {}", i),
            company: "Elsewhere".to_string(),
            kind: String::new(),
        })
        .collect();

    PartnerRecord {
        relations,
        ..record(company, PartnerStatus::Active)
    }
}

/// The mixed fixture most scenarios run against
fn directory_fixture() -> Vec<PartnerRecord> {
    vec![
        PartnerRecord {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            profession: "Admiral".to_string(),
            email: "grace@navy.example".to_string(),
            phone: "555-867-5309".to_string(),
            rating: 5,
            classifications: vec!["Tech".to_string(), "Gov".to_string()],
            ..record("USS Research", PartnerStatus::Active)
        },
        PartnerRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            rating: 4,
            classifications: vec!["tech".to_string()],
            ..record("analytical engines", PartnerStatus::Active)
        },
        PartnerRecord {
            first_name: "Charles".to_string(),
            last_name: "Babbage".to_string(),
            profession: "Inventor".to_string(),
            rating: 2,
            ..record("Difference Works", PartnerStatus::Archived)
        },
        PartnerRecord {
            first_name: "Mallory".to_string(),
            last_name: "Intruder".to_string(),
            rating: 1,
            ..record("Bad Actors Ltd", PartnerStatus::Blacklisted)
        },
    ]
}

fn companies(spec: &QuerySpec, records: Vec<PartnerRecord>) -> Vec<String> {
    QueryEngine::execute(records, spec)
        .page
        .items
        .into_iter()
        .map(|r| r.company)
        .collect()
}

// =============================================================================
// Search Normalization
// =============================================================================

/// Search matches regardless of case and surrounding whitespace.
#[test]
fn test_search_is_case_and_space_insensitive() {
    for needle in ["grace", "GRACE", "  Grace  "] {
        let spec = QuerySpec {
            search: needle.to_string(),
            ..QuerySpec::default()
        };

        let outcome = QueryEngine::execute(directory_fixture(), &spec);
        assert_eq!(outcome.page.total, 1, "search {:?} should match", needle);
        assert_eq!(outcome.page.items[0].first_name, "Grace");
    }
}

/// Every one of the six searchable attributes participates.
#[test]
fn test_search_covers_all_six_fields() {
    // first name, last name, profession, company, email, phone
    for needle in ["grace", "hopper", "admiral", "uss research", "navy.example", "867"] {
        let spec = QuerySpec {
            search: needle.to_string(),
            ..QuerySpec::default()
        };

        let outcome = QueryEngine::execute(directory_fixture(), &spec);
        assert!(
            outcome.page.items.iter().any(|r| r.first_name == "Grace"),
            "search {:?} should find the record",
            needle
        );
    }
}

/// Lowercasing is the whole normalization: accented characters are
/// distinct, so "Café" never matches "cafe".
#[test]
fn test_search_keeps_diacritics_distinct() {
    let records = vec![record("Café Premium", PartnerStatus::Active)];

    let miss = QuerySpec {
        search: "cafe".to_string(),
        ..QuerySpec::default()
    };
    assert_eq!(QueryEngine::execute(records.clone(), &miss).page.total, 0);

    let hit = QuerySpec {
        search: "café".to_string(),
        ..QuerySpec::default()
    };
    assert_eq!(QueryEngine::execute(records, &hit).page.total, 1);
}

// =============================================================================
// Filtering Scenarios
// =============================================================================

/// The default spec has no filters and returns every record.
#[test]
fn test_empty_spec_matches_everything() {
    let outcome = QueryEngine::execute(directory_fixture(), &QuerySpec::default());
    assert_eq!(outcome.page.total, 4);
}

/// An absent status filter includes archived and blacklisted records.
#[test]
fn test_missing_status_includes_every_lifecycle() {
    let outcome = QueryEngine::execute(directory_fixture(), &QuerySpec::default());

    let statuses: Vec<PartnerStatus> = outcome.page.items.iter().map(|r| r.status).collect();
    assert!(statuses.contains(&PartnerStatus::Active));
    assert!(statuses.contains(&PartnerStatus::Archived));
    assert!(statuses.contains(&PartnerStatus::Blacklisted));
}

/// A status filter excludes the other two lifecycles.
#[test]
fn test_status_filter_excludes_other_statuses() {
    let spec = QuerySpec {
        status: Some(PartnerStatus::Archived),
        ..QuerySpec::default()
    };

    let outcome = QueryEngine::execute(directory_fixture(), &spec);
    assert_eq!(outcome.page.total, 1);
    assert_eq!(outcome.page.items[0].last_name, "Babbage");
}

/// Profession is an exact, case-sensitive match, not a substring.
#[test]
fn test_profession_filter_is_exact_and_case_sensitive() {
    let exact = QuerySpec {
        profession: Some("Admiral".to_string()),
        ..QuerySpec::default()
    };
    assert_eq!(QueryEngine::execute(directory_fixture(), &exact).page.total, 1);

    let wrong_case = QuerySpec {
        profession: Some("admiral".to_string()),
        ..QuerySpec::default()
    };
    assert_eq!(
        QueryEngine::execute(directory_fixture(), &wrong_case).page.total,
        0
    );

    let substring = QuerySpec {
        profession: Some("Admi".to_string()),
        ..QuerySpec::default()
    };
    assert_eq!(
        QueryEngine::execute(directory_fixture(), &substring).page.total,
        0
    );
}

/// Classification membership is case-insensitive.
#[test]
fn test_classification_filter_is_case_insensitive() {
    let spec = QuerySpec {
        classification: Some("TECH".to_string()),
        ..QuerySpec::default()
    };

    // Matches "Tech" on one record and "tech" on another
    let outcome = QueryEngine::execute(directory_fixture(), &spec);
    assert_eq!(outcome.page.total, 2);
}

/// All present filters must match at once.
#[test]
fn test_filters_compose_with_and() {
    let spec = QuerySpec {
        search: "grace".to_string(),
        status: Some(PartnerStatus::Active),
        profession: Some("Admiral".to_string()),
        classification: Some("gov".to_string()),
        ..QuerySpec::default()
    };
    assert_eq!(QueryEngine::execute(directory_fixture(), &spec).page.total, 1);

    // Flip one predicate and the conjunction fails
    let spec = QuerySpec {
        status: Some(PartnerStatus::Archived),
        ..spec
    };
    assert_eq!(QueryEngine::execute(directory_fixture(), &spec).page.total, 0);
}

// =============================================================================
// Sorting Scenarios
// =============================================================================

/// Company order ignores case.
#[test]
fn test_company_sort_is_case_insensitive_ascending() {
    let records = vec![
        record("zeta", PartnerStatus::Active),
        record("ALPHA", PartnerStatus::Active),
        record("Middle", PartnerStatus::Active),
    ];

    let spec = QuerySpec {
        sort_by: Some(SortKey::Company),
        ..QuerySpec::default()
    };

    assert_eq!(companies(&spec, records), vec!["ALPHA", "Middle", "zeta"]);
}

/// Descending order is exactly the reverse of ascending order.
#[test]
fn test_descending_reverses_ascending() {
    for key in [SortKey::Company, SortKey::Rating, SortKey::Relations] {
        let records = vec![
            with_relations("Beta", 2),
            PartnerRecord {
                rating: 5,
                ..with_relations("Alpha", 0)
            },
            PartnerRecord {
                rating: 1,
                ..with_relations("Gamma", 7)
            },
        ];

        let asc = QuerySpec {
            sort_by: Some(key),
            sort_order: SortOrder::Asc,
            ..QuerySpec::default()
        };
        let desc = QuerySpec {
            sort_order: SortOrder::Desc,
            ..asc.clone()
        };

        let mut ascending: Vec<Uuid> = QueryEngine::execute(records.clone(), &asc)
            .page
            .items
            .iter()
            .map(|r| r.id)
            .collect();
        let descending: Vec<Uuid> = QueryEngine::execute(records, &desc)
            .page
            .items
            .iter()
            .map(|r| r.id)
            .collect();

        ascending.reverse();
        assert_eq!(ascending, descending, "key {:?}", key);
    }
}

/// Equal sort keys keep their pre-sort relative order.
#[test]
fn test_sort_is_stable_for_equal_keys() {
    let records = vec![
        rated("First In", 3),
        rated("Second In", 3),
        rated("Third In", 3),
    ];
    let expected: Vec<Uuid> = records.iter().map(|r| r.id).collect();

    let spec = QuerySpec {
        sort_by: Some(SortKey::Rating),
        ..QuerySpec::default()
    };

    let got: Vec<Uuid> = QueryEngine::execute(records, &spec)
        .page
        .items
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(got, expected);
}

/// Relation count sorts by list length only.
#[test]
fn test_relation_sort_uses_link_count() {
    let records = vec![
        with_relations("Three", 3),
        with_relations("None", 0),
        with_relations("One", 1),
    ];

    let spec = QuerySpec {
        sort_by: Some(SortKey::Relations),
        ..QuerySpec::default()
    };

    assert_eq!(companies(&spec, records), vec!["None", "One", "Three"]);
}

/// No sort key means the filtered order is the final order.
#[test]
fn test_unsorted_query_keeps_insertion_order() {
    let records = vec![
        record("Zeta", PartnerStatus::Active),
        record("Alpha", PartnerStatus::Active),
        record("Middle", PartnerStatus::Active),
    ];

    let spec = QuerySpec {
        sort_by: None,
        ..QuerySpec::default()
    };

    assert_eq!(companies(&spec, records), vec!["Zeta", "Alpha", "Middle"]);
}

// =============================================================================
// Pagination Properties
// =============================================================================

/// Walking every page yields the full sorted result, no gaps, no overlap.
#[test]
fn test_pages_concatenate_to_full_result() {
    let records: Vec<PartnerRecord> = (0..10)
        .map(|i| record(&format!("Company {:02}", i), PartnerStatus::Active))
        .collect();

    let full = QueryEngine::execute(records.clone(), &QuerySpec::default());
    assert_eq!(full.page.total_pages, 1);

    let mut walked = Vec::new();
    for page in 1..=4 {
        let spec = QuerySpec {
            page,
            limit: 3,
            ..QuerySpec::default()
        };
        walked.extend(QueryEngine::execute(records.clone(), &spec).page.items);
    }

    assert_eq!(walked, full.page.items);
}

/// A page past the end is empty but keeps the true totals.
#[test]
fn test_page_past_end_is_empty_with_stable_total() {
    let records: Vec<PartnerRecord> = (0..10)
        .map(|i| record(&format!("Company {:02}", i), PartnerStatus::Active))
        .collect();

    let spec = QuerySpec {
        page: 9,
        limit: 3,
        ..QuerySpec::default()
    };
    let outcome = QueryEngine::execute(records, &spec);

    assert!(outcome.page.items.is_empty());
    assert_eq!(outcome.page.total, 10);
    assert_eq!(outcome.page.total_pages, 4);
    assert_eq!(outcome.page.page, 9);
}

/// Ten records at three per page need four pages, the last with one.
#[test]
fn test_total_pages_rounds_up() {
    let records: Vec<PartnerRecord> = (0..10)
        .map(|i| record(&format!("Company {:02}", i), PartnerStatus::Active))
        .collect();

    let spec = QuerySpec {
        page: 4,
        limit: 3,
        ..QuerySpec::default()
    };
    let outcome = QueryEngine::execute(records, &spec);

    assert_eq!(outcome.page.total_pages, 4);
    assert_eq!(outcome.page.items.len(), 1);
}

// =============================================================================
// Stats Properties
// =============================================================================

/// Stats follow the filters and ignore page and limit entirely.
#[test]
fn test_stats_track_filters_not_pages() {
    let spec_page_one = QuerySpec {
        status: Some(PartnerStatus::Active),
        page: 1,
        limit: 1,
        ..QuerySpec::default()
    };
    let spec_page_two = QuerySpec {
        page: 2,
        ..spec_page_one.clone()
    };

    let one = QueryEngine::execute(directory_fixture(), &spec_page_one);
    let two = QueryEngine::execute(directory_fixture(), &spec_page_two);

    assert_eq!(one.stats, two.stats);
    assert_eq!(one.stats.total, 2);
    assert_eq!(one.stats.average_rating, 4.5);
}

/// A record with N classifications lands in N buckets.
#[test]
fn test_classification_fan_out_counts_records_per_tag() {
    let stats = QueryEngine::execute(directory_fixture(), &QuerySpec::default()).stats;

    // "Tech" and "tech" are distinct stored casings, so distinct buckets
    assert_eq!(stats.by_classification.get("Tech"), Some(&1));
    assert_eq!(stats.by_classification.get("tech"), Some(&1));
    assert_eq!(stats.by_classification.get("Gov"), Some(&1));
}

/// A filter that matches nothing produces the empty stats, never NaN.
#[test]
fn test_average_rating_of_empty_filter_is_zero() {
    let spec = QuerySpec {
        search: "no such partner anywhere".to_string(),
        ..QuerySpec::default()
    };

    let stats = QueryEngine::execute(directory_fixture(), &spec).stats;
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_rating, 0.0);
    assert!(stats.average_rating.is_finite());
}

// =============================================================================
// Adapter Equivalence
// =============================================================================

/// The store may narrow by status before the engine runs; results must
/// be identical to filtering the full snapshot.
#[test]
fn test_store_pushdown_matches_full_scan() {
    let records = directory_fixture();

    let spec = QuerySpec {
        search: "a".to_string(),
        status: Some(PartnerStatus::Active),
        sort_by: Some(SortKey::Rating),
        sort_order: SortOrder::Desc,
        ..QuerySpec::default()
    };

    let through_store = Directory::new(Arc::new(MemoryStore::with_records(records.clone())))
        .query(&spec)
        .unwrap();
    let through_snapshot = QueryEngine::execute(records, &spec);

    assert_eq!(through_store.page, through_snapshot.page);
    assert_eq!(through_store.stats, through_snapshot.stats);
}

/// Same records, same spec, same outcome, every time.
#[test]
fn test_engine_is_deterministic() {
    let spec = QuerySpec {
        sort_by: Some(SortKey::Company),
        ..QuerySpec::default()
    };

    let first = QueryEngine::execute(directory_fixture(), &spec);
    let second = QueryEngine::execute(directory_fixture(), &spec);

    let first_names: Vec<String> = first.page.items.iter().map(|r| r.company.clone()).collect();
    let second_names: Vec<String> = second.page.items.iter().map(|r| r.company.clone()).collect();
    assert_eq!(first_names, second_names);
    assert_eq!(first.stats, second.stats);
}
