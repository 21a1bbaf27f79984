//! End-to-end scenarios through the collection store.

use std::num::NonZeroUsize;

use board_model::{Company, Industry, RecordId};
use board_query::{CollectionStore, LoadOutcome, PredicateSet, SortDirection, SortKey};

fn company(id: u64, name: &str, industry: Industry) -> Company {
    Company {
        id: RecordId::new(id),
        name: name.to_string(),
        industry,
        website: format!("https://{}.example", name.to_lowercase()),
        headquarters: "Oslo".to_string(),
        created_at: None,
    }
}

fn loaded_store(companies: Vec<Company>, page_size: usize) -> CollectionStore<Company> {
    let mut store = CollectionStore::with_page_size(NonZeroUsize::new(page_size).unwrap());
    let ticket = store.begin_load();
    assert_eq!(store.finish_load(ticket, Ok(companies)), LoadOutcome::Applied);
    store
}

#[test]
fn twelve_companies_split_into_ten_and_two() {
    let companies = (1..=12)
        .map(|id| company(id, &format!("Company {id}"), Industry::Technology))
        .collect();
    let mut store = loaded_store(companies, 10);

    let first = store.view();
    assert_eq!(first.records.len(), 10);
    assert_eq!(first.total_pages, 2);

    store.set_page(2).unwrap();
    let second = store.view();
    assert_eq!(second.records.len(), 2);
    assert_eq!(second.current_page, 2);
    assert_eq!(second.total_pages, 2);
}

#[test]
fn finance_filter_keeps_relative_order() {
    let companies = vec![
        company(1, "Zeta Bank", Industry::Finance),
        company(2, "Medic", Industry::Healthcare),
        company(3, "Code Co", Industry::Technology),
        company(4, "Alpha Capital", Industry::Finance),
        company(5, "Learn", Industry::Education),
    ];
    let mut store = loaded_store(companies, 10);
    store
        .set_filters(PredicateSet::new().with("industry", ["FINANCE"]))
        .unwrap();

    let view = store.view();
    let names: Vec<&str> = view.records.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta Bank", "Alpha Capital"]);
}

#[test]
fn name_sort_is_case_insensitive() {
    let companies = vec![
        company(1, "Beta", Industry::Technology),
        company(2, "alpha", Industry::Technology),
        company(3, "Gamma", Industry::Technology),
    ];
    let mut store = loaded_store(companies, 10);
    store
        .set_sort(Some(SortKey::new("name", SortDirection::Ascending)))
        .unwrap();

    let view = store.view();
    let names: Vec<&str> = view.records.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "Beta", "Gamma"]);
}

#[test]
fn duplicate_ids_collapse_on_load() {
    let companies = vec![
        company(7, "Old Name", Industry::Technology),
        company(8, "Other", Industry::Technology),
        company(7, "New Name", Industry::Finance),
    ];
    let store = loaded_store(companies, 10);
    assert_eq!(store.len(), 2);
    let seven = store.find(RecordId::new(7)).unwrap();
    assert_eq!(seven.name, "New Name");
    assert_eq!(seven.industry, Industry::Finance);
}

#[test]
fn accented_names_sort_alongside_their_base_letter() {
    let companies = ["Zoe", "Émile", "Eva", "Ölberg", "Otto"]
        .iter()
        .enumerate()
        .map(|(index, name)| company(index as u64 + 1, name, Industry::Technology))
        .collect();
    let mut store = loaded_store(companies, 10);
    store
        .set_sort(Some(SortKey::new("name", SortDirection::Ascending)))
        .unwrap();

    let view = store.view();
    let names: Vec<&str> = view.records.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Émile", "Eva", "Ölberg", "Otto", "Zoe"]);
}
