//! End-to-end flows through `YgoDeckSdk` with an in-memory catalog source.

mod common;

use std::thread;

use common::FakeSource;
use ygodeck_sdk::{AddOutcome, FilterSpec, PageRequest, YgoDeckSdk, YgoError};

fn setup(n: u64) -> (YgoDeckSdk, FakeSource) {
    let source = FakeSource::new(common::sample_cards(n));
    let sdk = YgoDeckSdk::builder().source(source.clone()).build().unwrap();
    (sdk, source)
}

// ---------------------------------------------------------------------------
// Catalog flow
// ---------------------------------------------------------------------------

#[test]
fn catalog_is_empty_before_first_fetch() {
    let (sdk, source) = setup(5);
    assert!(sdk.catalog().is_empty());
    assert_eq!(source.calls(), 0);
}

#[test]
fn load_all_then_paginate() {
    let (sdk, _) = setup(25);
    sdk.load_all().unwrap();

    let page = sdk.catalog_page(&PageRequest::from_query(Some("2"), None));
    assert_eq!(common::ids(&page.cards), vec![21, 22, 23, 24, 25]);
    assert_eq!(page.page_info.total_pages, 2);
    assert_eq!(page.page_info.previous_page, 1);
}

#[test]
fn failed_fetch_keeps_previous_snapshot() {
    let (sdk, source) = setup(4);
    sdk.load_all().unwrap();

    source.set_failing(true);
    let err = sdk.search("Card 1").unwrap_err();
    assert!(matches!(err, YgoError::FetchFailed(_)));
    assert_eq!(sdk.catalog().len(), 4);
    assert_eq!(sdk.catalog().query, FilterSpec::All);
}

#[test]
fn blank_search_is_rejected_without_fetching() {
    let (sdk, source) = setup(4);
    assert!(matches!(sdk.search(" "), Err(YgoError::EmptyQuery(_))));
    assert_eq!(source.calls(), 0);
}

#[test]
fn empty_filter_is_rejected_without_fetching() {
    let (sdk, source) = setup(4);
    let none: [&str; 0] = [];
    assert!(matches!(sdk.filter(&none, &none, &none), Err(YgoError::EmptyQuery(_))));
    assert_eq!(source.calls(), 0);
}

#[test]
fn filter_replaces_snapshot() {
    let (sdk, _) = setup(4);
    let snapshot = sdk.filter(&["Normal Monster"], &[], &[]).unwrap();
    assert_eq!(snapshot.len(), 4);
    assert!(matches!(sdk.catalog().query, FilterSpec::ByFilters { .. }));
}

#[test]
fn successful_empty_search_is_not_an_error() {
    let (sdk, _) = setup(4);
    let snapshot = sdk.search("no such card").unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn card_info_fetches_single_card() {
    let (sdk, _) = setup(10);
    let card = sdk.card_info("7").unwrap();
    assert_eq!(card.id, 7);
    assert_eq!(common::ids(&sdk.catalog().cards), vec![7]);
}

#[test]
fn card_info_errors() {
    let (sdk, _) = setup(3);
    assert!(matches!(sdk.card_info("seven"), Err(YgoError::InvalidIdentifier(_))));
    assert!(matches!(sdk.card_info("99"), Err(YgoError::NotFound(_))));
}

// ---------------------------------------------------------------------------
// Deck flow
// ---------------------------------------------------------------------------

#[test]
fn add_from_current_snapshot_until_limit() {
    let (sdk, _) = setup(3);
    sdk.load_all().unwrap();

    for expected in 1..=3 {
        assert_eq!(sdk.add_to_deck("1").unwrap(), AddOutcome::Added { count: expected });
    }
    assert_eq!(sdk.add_to_deck("1").unwrap(), AddOutcome::LimitReached);
    assert_eq!(sdk.deck().len(), 3);
}

#[test]
fn add_requires_card_in_snapshot() {
    let (sdk, _) = setup(3);
    assert!(matches!(sdk.add_to_deck("1"), Err(YgoError::NotFound(_))));

    sdk.load_all().unwrap();
    assert!(matches!(sdk.add_to_deck("42"), Err(YgoError::NotFound(_))));
    assert!(sdk.deck().is_empty());
}

#[test]
fn card_viewed_on_info_page_can_be_added() {
    let (sdk, _) = setup(10);
    sdk.card_info("9").unwrap();
    assert!(sdk.add_to_deck("9").unwrap().is_added());
    assert_eq!(sdk.deck()[0].name, "Card 9");
}

#[test]
fn invalid_identifiers_are_rejected() {
    let (sdk, _) = setup(3);
    sdk.load_all().unwrap();
    assert!(matches!(sdk.add_to_deck("abc"), Err(YgoError::InvalidIdentifier(_))));
    assert!(matches!(sdk.remove_from_deck("1.5"), Err(YgoError::InvalidIdentifier(_))));
    assert!(sdk.deck().is_empty());
}

#[test]
fn remove_first_occurrence() {
    let (sdk, _) = setup(3);
    sdk.load_all().unwrap();
    for id in ["1", "2", "1"] {
        sdk.add_to_deck(id).unwrap();
    }
    assert!(sdk.remove_from_deck("1").unwrap());
    assert_eq!(common::ids(&sdk.deck()), vec![2, 1]);
    assert!(!sdk.remove_from_deck("3").unwrap());
    assert_eq!(common::ids(&sdk.deck()), vec![2, 1]);
}

#[test]
fn deck_survives_catalog_replacement() {
    let (sdk, _) = setup(5);
    sdk.load_all().unwrap();
    sdk.add_to_deck("5").unwrap();
    sdk.search("Card 1").unwrap();
    assert_eq!(common::ids(&sdk.deck()), vec![5]);
    assert_eq!(sdk.deck_store().count(5), 1);
}

#[test]
fn shared_sdk_under_concurrent_requests() {
    let (sdk, _) = setup(30);
    sdk.load_all().unwrap();

    thread::scope(|s| {
        for worker in 0..8 {
            let sdk = &sdk;
            s.spawn(move || {
                for round in 0..50 {
                    if worker == 0 && round % 10 == 0 {
                        sdk.load_all().unwrap();
                    }
                    let id = ((worker + round) % 5 + 1).to_string();
                    let _ = sdk.add_to_deck(&id).unwrap();
                    let page = sdk.catalog_page(&PageRequest::new(round % 3 + 1, 10));
                    assert_eq!(page.page_info.total_pages, 3);
                }
            });
        }
    });

    for id in 1..=5 {
        assert_eq!(sdk.deck_store().count(id), 3);
    }
    assert_eq!(sdk.deck().len(), 15);
}

#[test]
fn display_summarizes_state() {
    let (sdk, _) = setup(3);
    sdk.load_all().unwrap();
    sdk.add_to_deck("2").unwrap();
    assert_eq!(sdk.to_string(), "YgoDeckSdk(catalog=3 cards, deck=1 cards)");
}

// ---------------------------------------------------------------------------
// Async wrapper
// ---------------------------------------------------------------------------

#[cfg(feature = "async")]
#[tokio::test]
async fn async_wrapper_shares_state() {
    use ygodeck_sdk::AsyncYgoDeckSdk;

    let source = FakeSource::new(common::sample_cards(4));
    let sdk = AsyncYgoDeckSdk::from_sdk(YgoDeckSdk::builder().source(source).build().unwrap());
    let other = sdk.clone();

    sdk.load_all().await.unwrap();
    assert!(other.sdk().add_to_deck("4").unwrap().is_added());
    assert_eq!(sdk.sdk().deck().len(), 1);

    assert!(matches!(sdk.search("").await, Err(YgoError::EmptyQuery(_))));
    let card = sdk.card_info("2").await.unwrap();
    assert_eq!(card.name, "Card 2");
}
