//! End-to-end search flows against an in-memory catalogue.

use std::sync::Arc;
use std::time::Duration;

use pricepal_catalog::prelude::*;
use pricepal_data::InMemorySource;
use pricepal_search::prelude::*;

const RETAILERS: [&str; 7] = [
    "Amazon",
    "Flipkart",
    "Croma",
    "Myntra",
    "Reliance Digital",
    "Zepto",
    "Blinkit",
];

fn item(id: u64, title: &str, brand: &str, category: &str, price: f64) -> ApiProduct {
    ApiProduct {
        id,
        title: title.to_string(),
        description: format!("{} with a great display and all-day battery life.", title),
        price,
        discount_percentage: 12.96,
        brand: Some(brand.to_string()),
        category: category.to_string(),
        thumbnail: format!("https://cdn.dummyjson.com/products/{}/thumbnail.jpg", id),
        ..Default::default()
    }
}

fn catalogue() -> Vec<ApiProduct> {
    vec![
        item(1, "iPhone 9", "Apple", "smartphones", 549.0),
        item(2, "iPhone X", "Apple", "smartphones", 899.0),
        item(3, "iPhone 13 Pro", "Apple", "smartphones", 1099.0),
        item(4, "Galaxy S22", "Samsung", "smartphones", 799.0),
        item(5, "MacBook Pro", "Apple", "laptops", 1749.0),
    ]
}

fn session(source: InMemorySource) -> (Arc<InMemorySource>, Arc<SearchSession<Arc<InMemorySource>>>) {
    let source = Arc::new(source);
    let session = SearchSession::new(Arc::clone(&source), ProductMapper::default());
    (source, Arc::new(session))
}

#[tokio::test]
async fn test_iphone_search_maps_three_products() {
    let (_, session) = session(InMemorySource::new(catalogue()));
    let view = session.submit("iphone").await;

    assert_eq!(view.state, RequestState::Succeeded);
    assert_eq!(view.items.len(), 3);
    for product in &view.items {
        assert!(RETAILERS.contains(&product.retailer.as_str()), "{}", product.retailer);
        assert!(product.price.amount() > 0);
        assert_eq!(product.discount_percentage, Some(13));
        assert!(product.summary.as_deref().is_some_and(|s| s.chars().count() <= 103));
    }
}

#[tokio::test]
async fn test_hashed_assignment_is_stable() {
    let (_, session) = session(InMemorySource::new(catalogue()));
    let first = session.submit("iphone").await;
    let second = session.submit("iphone").await;

    let retailers = |view: &RequestView<Product>| {
        view.items
            .iter()
            .map(|p| p.retailer.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(retailers(&first), retailers(&second));
}

#[tokio::test]
async fn test_blank_query_makes_no_calls() {
    let (source, session) = session(InMemorySource::new(catalogue()));

    let results = session.submit("").await;
    let suggestions = session.suggest("   ").await;

    assert_eq!(results.state, RequestState::Idle);
    assert_eq!(suggestions.items, popular_suggestions());
    assert_eq!(source.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_slow_stale_response_does_not_overwrite_newer_results() {
    let source = InMemorySource::new(catalogue()).with_delay("apple", Duration::from_secs(3));
    let (_, session) = session(source);
    let mut results = session.subscribe_results();

    let slow = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.submit("apple").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let fresh = session.submit("galaxy").await;
    assert_eq!(fresh.query, "galaxy");
    assert_eq!(fresh.items.len(), 1);

    let after_slow = slow.await.unwrap();
    assert_eq!(after_slow.query, "galaxy");

    let current = results.borrow_and_update().clone();
    assert_eq!(current.query, "galaxy");
    assert_eq!(current.items[0].title, "Galaxy S22");
}

#[tokio::test(start_paused = true)]
async fn test_typing_settles_into_one_lookup_then_search() {
    let (source, session) = session(InMemorySource::new(catalogue()));
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let driver = session.drive_input(rx, DEFAULT_DEBOUNCE);

    let mut typed = String::new();
    for ch in "mac".chars() {
        typed.push(ch);
        tx.send(typed.clone()).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    drop(tx);
    driver.await.unwrap();

    let suggestions = session.suggestions();
    assert_eq!(suggestions.query, "mac");
    let groups = SuggestionGroups::group(&suggestions.items);
    assert_eq!(groups.products.len(), 1);
    assert_eq!(groups.brands[0].text, "Apple");

    let results = session.submit(&typed).await;
    assert_eq!(results.items[0].title, "MacBook Pro");

    let calls = source.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].limit, Some(DEFAULT_SUGGESTION_LIMIT));
    assert_eq!(calls[1].limit, None);
}

#[tokio::test]
async fn test_failed_search_is_visible_to_subscribers() {
    let (_, session) = session(InMemorySource::new(catalogue()).fail_with_status(500));
    let results = session.subscribe_results();

    session.submit("iphone").await;

    let view = results.borrow().clone();
    assert!(matches!(view.state, RequestState::Failed { .. }));
    assert!(session.search_service().search("iphone").await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_submits_keep_newest_query() {
    let source = InMemorySource::new(catalogue())
        .with_delay("iphone", Duration::from_secs(2))
        .with_delay("galaxy", Duration::from_secs(1));
    let (source, session) = session(source);

    let views = futures::future::join_all(
        ["iphone", "galaxy", "macbook"]
            .into_iter()
            .map(|q| session.submit(q)),
    )
    .await;

    assert_eq!(source.call_count(), 3);
    assert!(views.iter().all(|v| v.query == "macbook"));
    assert_eq!(session.results().items[0].title, "MacBook Pro");
}
