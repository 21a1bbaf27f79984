//! The shared list flow over a loaded store.

use board_cli::listing::{JOBS_DEFAULT_SORT, ListOptions, apply_options, facets};
use board_model::{Company, Industry, Job, JobType, RecordId, WorkMode};
use board_query::CollectionStore;
use chrono::{TimeZone, Utc};

fn company(id: u64, name: &str, industry: Industry, headquarters: &str) -> Company {
    Company {
        id: RecordId::new(id),
        name: name.to_string(),
        industry,
        website: String::new(),
        headquarters: headquarters.to_string(),
        created_at: None,
    }
}

fn job(id: u64, title: &str, job_type: JobType, work_mode: WorkMode) -> Job {
    Job {
        id: RecordId::new(id),
        title: title.to_string(),
        company_id: RecordId::new(1),
        company: None,
        experience_level: Default::default(),
        job_type,
        work_mode,
        description: String::new(),
        posted_at: None,
        is_active: true,
        remaining_days: None,
        applications: None,
    }
}

fn companies() -> CollectionStore<Company> {
    let mut store = CollectionStore::default();
    store.set_all(vec![
        company(1, "delta", Industry::Finance, "Oslo"),
        company(2, "Alpha", Industry::Technology, "Berlin"),
        company(3, "charlie", Industry::Finance, "Lagos"),
        company(4, "Bravo", Industry::Healthcare, "Oslo"),
        company(5, "echo", Industry::Finance, "Oslo"),
    ]);
    store
}

fn names(store: &CollectionStore<Company>) -> Vec<String> {
    store.view().records.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_filter_sort_and_page_together() {
    let mut store = companies();
    let options = ListOptions {
        filters: vec!["industry=FINANCE".to_string()],
        sort: Some("name".to_string()),
        page: 2,
        page_size: 2,
        ..ListOptions::default()
    };
    apply_options(&mut store, &options).unwrap();

    let view = store.view();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.total_matches, 3);
    assert_eq!(names(&store), vec!["echo"]);
}

#[test]
fn test_repeated_filters_or_within_and_across_dimensions() {
    let mut store = companies();
    let options = ListOptions {
        filters: vec![
            "industry=FINANCE".to_string(),
            "industry=HEALTHCARE".to_string(),
            "headquarters=Oslo".to_string(),
        ],
        ..ListOptions::default()
    };
    apply_options(&mut store, &options).unwrap();
    assert_eq!(names(&store), vec!["delta", "Bravo", "echo"]);
}

#[test]
fn test_descending_sort() {
    let mut store = companies();
    let options = ListOptions {
        sort: Some("name".to_string()),
        descending: true,
        ..ListOptions::default()
    };
    apply_options(&mut store, &options).unwrap();
    assert_eq!(
        names(&store),
        vec!["echo", "delta", "charlie", "Bravo", "Alpha"]
    );
}

#[test]
fn test_search_is_case_insensitive() {
    let mut store = companies();
    let options = ListOptions {
        search: Some("ALP".to_string()),
        ..ListOptions::default()
    };
    apply_options(&mut store, &options).unwrap();
    assert_eq!(names(&store), vec!["Alpha"]);
}

#[test]
fn test_page_past_end_shows_last_page() {
    let mut store = companies();
    let options = ListOptions {
        page: 40,
        page_size: 2,
        ..ListOptions::default()
    };
    apply_options(&mut store, &options).unwrap();
    assert_eq!(store.view().current_page, 3);
    assert_eq!(names(&store), vec!["echo"]);
}

#[test]
fn test_bad_inputs_are_reported() {
    let unknown_dimension = ListOptions {
        filters: vec!["salary=100".to_string()],
        ..ListOptions::default()
    };
    let err = apply_options(&mut companies(), &unknown_dimension).unwrap_err();
    assert!(format!("{err:#}").contains("cannot be filtered by 'salary'"));

    let malformed = ListOptions {
        filters: vec!["industry".to_string()],
        ..ListOptions::default()
    };
    assert!(apply_options(&mut companies(), &malformed).is_err());

    let unknown_sort = ListOptions {
        sort: Some("salary".to_string()),
        ..ListOptions::default()
    };
    assert!(apply_options(&mut companies(), &unknown_sort).is_err());

    let zero_page = ListOptions {
        page: 0,
        ..ListOptions::default()
    };
    assert!(apply_options(&mut companies(), &zero_page).is_err());
}

#[test]
fn test_job_dimensions_use_wire_values() {
    let mut store = CollectionStore::default();
    store.set_all(vec![
        job(1, "Backend", JobType::FullTime, WorkMode::Remote),
        job(2, "Support", JobType::PartTime, WorkMode::Onsite),
        job(3, "Data", JobType::FullTime, WorkMode::Onsite),
    ]);
    let options = ListOptions {
        filters: vec!["type=FULL_TIME".to_string(), "workMode=ONSITE".to_string()],
        ..ListOptions::default()
    };
    apply_options(&mut store, &options).unwrap();
    let view = store.view();
    let titles: Vec<&str> = view.records.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["Data"]);
}

fn posted_jobs() -> CollectionStore<Job> {
    let posted = |id: u64, title: &str, day: u32| Job {
        posted_at: Some(Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()),
        ..job(id, title, JobType::FullTime, WorkMode::Remote)
    };
    let mut store = CollectionStore::default();
    store.set_all(vec![
        posted(1, "Oldest", 1),
        posted(2, "Newest", 20),
        posted(3, "Middle", 10),
    ]);
    store
}

fn titles(store: &CollectionStore<Job>) -> Vec<String> {
    store.view().records.iter().map(|j| j.title.clone()).collect()
}

#[test]
fn test_jobs_default_to_newest_first() {
    let mut store = posted_jobs();
    let options = ListOptions::default().with_default_sort(JOBS_DEFAULT_SORT);
    apply_options(&mut store, &options).unwrap();
    assert_eq!(titles(&store), vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn test_explicit_sort_beats_the_jobs_default() {
    let mut store = posted_jobs();
    let options = ListOptions {
        sort: Some("title".to_string()),
        ..ListOptions::default()
    }
    .with_default_sort(JOBS_DEFAULT_SORT);
    assert!(!options.descending);
    apply_options(&mut store, &options).unwrap();
    assert_eq!(titles(&store), vec!["Middle", "Newest", "Oldest"]);
}

#[test]
fn test_facets_list_each_dimension() {
    let store = companies();
    let facets = facets(store.records());
    assert_eq!(
        facets,
        vec![
            (
                "industry",
                vec![
                    "FINANCE".to_string(),
                    "TECHNOLOGY".to_string(),
                    "HEALTHCARE".to_string()
                ]
            ),
            (
                "headquarters",
                vec!["Oslo".to_string(), "Berlin".to_string(), "Lagos".to_string()]
            ),
        ]
    );
}
