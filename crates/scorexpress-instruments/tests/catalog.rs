use scorexpress_core::models::category::Category;
use scorexpress_core::models::level::Level;
use scorexpress_instruments::Instrument;
use scorexpress_instruments::calculation::Calculation;
use scorexpress_instruments::catalog::{
    Catalog, CatalogSource, CategoryLoader, DEFAULT_PAGE_SIZE, paginate,
};
use scorexpress_instruments::error::InstrumentError;
use scorexpress_instruments::instruments::{cardiology, neurology};
use scorexpress_instruments::interpretation::InterpretationRule;
use scorexpress_instruments::scoring::ScoreRange;

fn failing() -> Result<Vec<Instrument>, InstrumentError> {
    Err(InstrumentError::CategoryLoad {
        category: Category::Surgery,
        reason: "storage unavailable".to_string(),
    })
}

fn panicking() -> Result<Vec<Instrument>, InstrumentError> {
    panic!("loader crashed")
}

fn empty_rule() -> InterpretationRule {
    InterpretationRule::chain(ScoreRange::integers(0.0, 0.0)).otherwise(Level::Normal, "ok")
}

fn mislabeled() -> Result<Vec<Instrument>, InstrumentError> {
    Ok(vec![Instrument {
        id: "stray".to_string(),
        name: "Stray".to_string(),
        short_name: "Stray".to_string(),
        category: Category::Cardiology,
        description: String::new(),
        source: String::new(),
        notes: None,
        more_info_link: None,
        reference_values: Vec::new(),
        criteria: Vec::new(),
        calculation: Calculation::Sum,
        interpretation: empty_rule(),
    }])
}

fn source(loaders: Vec<(Category, CategoryLoader)>) -> CatalogSource {
    CatalogSource::new(loaders)
}

#[tokio::test]
async fn builtin_catalog_loads_every_instrument() {
    let catalog = Catalog::load(&CatalogSource::builtin()).await;
    assert_eq!(catalog.len(), 19);
    assert_eq!(catalog.categories().len(), 10);
    assert!(catalog.get("crb65").is_some());
    assert!(catalog.get("does-not-exist").is_none());
}

#[tokio::test]
async fn all_instruments_follow_table_order() {
    let source = source(vec![
        (Category::Neurology, neurology::instruments),
        (Category::Cardiology, cardiology::instruments),
    ]);
    let ids: Vec<String> = source
        .all_instruments()
        .await
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec!["glasgow", "chads2vasc", "wells-dvt", "heart", "nyha"]);
}

#[tokio::test]
async fn failing_category_is_skipped() {
    let source = source(vec![
        (Category::Cardiology, cardiology::instruments),
        (Category::Surgery, failing),
        (Category::Neurology, neurology::instruments),
    ]);

    let all = source.all_instruments().await;
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|i| i.category != Category::Surgery));

    let err = source
        .instruments_by_category(Category::Surgery)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("storage unavailable"));
}

#[tokio::test]
async fn panicking_category_is_skipped() {
    let source = source(vec![
        (Category::Surgery, panicking),
        (Category::Neurology, neurology::instruments),
    ]);

    let all = source.all_instruments().await;
    assert_eq!(all.len(), 1);

    let err = source
        .instruments_by_category(Category::Surgery)
        .await
        .unwrap_err();
    assert!(matches!(err, InstrumentError::CategoryLoad { category: Category::Surgery, .. }));
}

#[tokio::test]
async fn instrument_in_the_wrong_category_fails_the_category() {
    let source = source(vec![(Category::Neurology, mislabeled)]);
    let err = source
        .instruments_by_category(Category::Neurology)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::WrongCategory {
            expected: Category::Neurology,
            found: Category::Cardiology,
            ..
        }
    ));
}

#[tokio::test]
async fn unmapped_category_is_empty() {
    let instruments = CatalogSource::builtin()
        .instruments_by_category(Category::Dermatology)
        .await
        .expect("unmapped categories load as empty");
    assert!(instruments.is_empty());
}

#[tokio::test]
async fn category_listing_keeps_declaration_order() {
    let catalog = Catalog::load(&CatalogSource::builtin()).await;
    let ids: Vec<String> = catalog
        .instruments_by_category(Category::Pneumology)
        .iter()
        .map(|i| i.id.clone())
        .collect();
    assert_eq!(ids, vec!["crb65", "wells-pe", "curb-65", "mmrc"]);
}

#[test]
fn duplicate_ids_keep_the_first_definition() {
    let mut first = cardiology::instruments().unwrap();
    let mut second = cardiology::instruments().unwrap();
    first.truncate(1);
    second.truncate(1);
    second[0].name = "Shadow".to_string();
    first.append(&mut second);

    let catalog = Catalog::from_instruments(first);
    assert_eq!(catalog.len(), 1);
    assert_ne!(catalog.require("chads2vasc").unwrap().name, "Shadow");
}

#[test]
fn require_reports_unknown_ids() {
    let catalog = Catalog::default();
    let err = catalog.require("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown instrument: nope");
}

#[tokio::test]
async fn search_matches_names_and_descriptions() {
    let catalog = Catalog::load(&CatalogSource::builtin()).await;

    let ids = |term: &str| -> Vec<String> {
        catalog.search(term).iter().map(|i| i.id.clone()).collect()
    };

    assert_eq!(ids("glasgow"), vec!["glasgow"]);
    assert_eq!(ids("  CURB "), vec!["curb-65"]);
    assert!(ids("pneumonia").contains(&"crb65".to_string()));
    assert_eq!(catalog.search("").len(), 19);
    assert!(ids("zzzz").is_empty());
}

#[test]
fn paginate_splits_into_pages_of_nine() {
    let items: Vec<u32> = (1..=19).collect();

    let first = paginate(&items, 1, DEFAULT_PAGE_SIZE);
    assert_eq!(first.items, (1..=9).collect::<Vec<_>>());
    assert_eq!(first.total_pages, 3);

    let last = paginate(&items, 3, DEFAULT_PAGE_SIZE);
    assert_eq!(last.items, vec![19]);
}

#[test]
fn paginate_clamps_the_page_number() {
    let items: Vec<u32> = (1..=10).collect();
    assert_eq!(paginate(&items, 0, 9).page, 1);
    assert_eq!(paginate(&items, 42, 9).page, 2);

    let empty: Vec<u32> = Vec::new();
    let page = paginate(&empty, 3, 9);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}
