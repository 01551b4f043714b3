//! Pagination walk over the in-memory repository: coverage, stability, and
//! the out-of-range redirect signal.

use std::collections::HashSet;

use bphub_core::defaults::PAGE_SIZE;
use bphub_core::{
    BlueprintRepository, Exposure, PageResolution, Pagination, SearchFilter, Viewer,
};
use bphub_db::test_fixtures::{published_card, second};
use bphub_db::MemoryBlueprintRepository;

fn forty_three_public_items() -> MemoryBlueprintRepository {
    let rows = (1..=43)
        .map(|i| published_card(i, 10, Exposure::Public, second(i)))
        .collect();
    MemoryBlueprintRepository::new(rows)
}

#[tokio::test]
async fn forty_three_items_split_into_two_pages() {
    let repo = forty_three_public_items();
    let filter = SearchFilter::default();
    let viewer = Viewer::Anonymous;

    let total = repo.count(&filter, &viewer).await.unwrap();
    assert_eq!(total, 43);

    let page1 = match Pagination::resolve(total, 1, PAGE_SIZE) {
        PageResolution::Resolved(p) => p,
        PageResolution::OutOfRange => panic!("page 1 is never out of range"),
    };
    assert_eq!(page1.total_pages, 2);

    let rows = repo
        .fetch_page(&filter, &viewer, page1.offset, page1.limit)
        .await
        .unwrap();
    assert_eq!(rows.len(), 30);
    // The 30 most recently published items, ids 43 down to 14.
    assert_eq!(rows[0].blueprint.id, 43);
    assert_eq!(rows[29].blueprint.id, 14);

    let page2 = match Pagination::resolve(total, 2, PAGE_SIZE) {
        PageResolution::Resolved(p) => p,
        PageResolution::OutOfRange => panic!("page 2 of 2 is in range"),
    };
    let rows = repo
        .fetch_page(&filter, &viewer, page2.offset, page2.limit)
        .await
        .unwrap();
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0].blueprint.id, 13);
    assert_eq!(rows[12].blueprint.id, 1);
}

#[tokio::test]
async fn concatenated_pages_cover_every_visible_item_exactly_once() {
    let repo = forty_three_public_items();
    let filter = SearchFilter::default();
    let viewer = Viewer::Anonymous;

    let total = repo.count(&filter, &viewer).await.unwrap();
    let mut seen = Vec::new();
    let mut page = 1u32;
    loop {
        let pg = match Pagination::resolve(total, page, PAGE_SIZE) {
            PageResolution::Resolved(p) => p,
            PageResolution::OutOfRange => break,
        };
        let rows = repo
            .fetch_page(&filter, &viewer, pg.offset, pg.limit)
            .await
            .unwrap();
        seen.extend(rows.iter().map(|c| c.blueprint.id));
        if page == pg.total_pages {
            break;
        }
        page += 1;
    }

    let unique: HashSet<i64> = seen.iter().copied().collect();
    assert_eq!(seen.len(), 43, "no omissions");
    assert_eq!(unique.len(), 43, "no duplicates");
}

#[tokio::test]
async fn repeated_requests_yield_identical_ordered_results() {
    let repo = forty_three_public_items();
    let filter = SearchFilter::default();
    let viewer = Viewer::Anonymous;

    let first = repo.fetch_page(&filter, &viewer, 0, 30).await.unwrap();
    let second_fetch = repo.fetch_page(&filter, &viewer, 0, 30).await.unwrap();
    assert_eq!(first, second_fetch);
}

#[tokio::test]
async fn page_beyond_the_last_signals_redirect() {
    let repo = forty_three_public_items();
    let total = repo
        .count(&SearchFilter::default(), &Viewer::Anonymous)
        .await
        .unwrap();
    assert_eq!(
        Pagination::resolve(total, 3, PAGE_SIZE),
        PageResolution::OutOfRange
    );
}
