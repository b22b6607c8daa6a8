// End-to-end flows: page request → form → shell → backend → rendered page.

use crate::router::handle;
use crate::search::{HttpSearchClient, SearchError};
use crate::shell::Shell;
use crate::tests::utils::{
    body_string, config_for, get, htmx_get, listing, spawn_backend, wait_until_settled,
    FakeBackend, HangingBackend,
};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[test]
fn first_visit_renders_loading_then_polls_into_results() {
    let backend = FakeBackend::new();
    let shell = Shell::new(backend.clone());

    let body = body_string(handle(get("/"), &shell).unwrap());
    assert!(body.contains(r#"hx-get="/results""#));
    assert!(!body.contains("car-grid"));

    wait_until_settled(&shell);
    assert_eq!(backend.requests(), ["{}"]);

    let results = body_string(handle(htmx_get("/results"), &shell).unwrap());
    assert!(results.contains("Available Cars (0)"));
    assert!(results.contains("No cars found. Try adjusting your filters."));
    assert!(!results.contains("error-message"));
    assert!(!results.contains(r#"hx-get="/results""#));

    // Polling and partial swaps never count as a page load.
    handle(htmx_get("/results"), &shell).unwrap();
    handle(htmx_get("/search?make=Fiat"), &shell).unwrap();
    assert_eq!(backend.requests(), ["{}", r#"{"make":"Fiat"}"#]);
}

#[test]
fn page_loads_are_served_while_the_backend_hangs() {
    let (backend, release, started) = HangingBackend::new();
    let shell = Shell::new(backend);

    let (done_tx, done_rx) = mpsc::channel();
    for _ in 0..2 {
        let shell = shell.clone();
        let done_tx = done_tx.clone();
        thread::spawn(move || {
            let body = body_string(handle(get("/"), &shell).unwrap());
            done_tx.send(body).unwrap();
        });
    }

    for _ in 0..2 {
        let body = done_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("page load blocked on the backend");
        assert!(body.contains("Loading cars..."));
        assert!(body.contains(r#"hx-get="/results""#));
    }
    started.recv().unwrap();

    let polled = body_string(handle(htmx_get("/results"), &shell).unwrap());
    assert!(polled.contains(r#"hx-get="/results""#));

    drop(release);
    wait_until_settled(&shell);
}

#[test]
fn reload_after_filtered_search_starts_over() {
    let backend = FakeBackend::new();
    backend
        .respond(Ok(vec![listing("Toyota", "Camry", 2019), listing("Ford", "Focus", 2015)]))
        .respond(Ok(vec![listing("Toyota", "Camry", 2019)]))
        .respond(Ok(vec![listing("Toyota", "Camry", 2019), listing("Ford", "Focus", 2015)]));
    let shell = Shell::new(backend.clone());

    handle(get("/"), &shell).unwrap();
    wait_until_settled(&shell);
    let filtered = body_string(handle(get("/search?make=Toyota"), &shell).unwrap());
    assert!(filtered.contains("Available Cars (1)"));

    let reloaded = body_string(handle(get("/"), &shell).unwrap());
    assert!(reloaded.contains(r#"name="make" value="""#));
    assert!(reloaded.contains(r#"hx-get="/results""#));
    assert!(!reloaded.contains("Available Cars (1)"));

    wait_until_settled(&shell);
    assert_eq!(backend.requests(), ["{}", r#"{"make":"Toyota"}"#, "{}"]);
    let results = body_string(handle(htmx_get("/results"), &shell).unwrap());
    assert!(results.contains("Available Cars (2)"));
    assert!(results.contains("2015 Ford Focus"));
}

#[test]
fn first_visit_against_real_client_posts_empty_object() {
    let (base, requests) = spawn_backend(200, "[]");
    let shell = Shell::new(HttpSearchClient::new(&config_for(&base)).unwrap());

    handle(get("/"), &shell).unwrap();

    assert_eq!(requests.recv().unwrap().body, "{}");
    let settled = wait_until_settled(&shell);
    assert!(settled.cars.is_empty());
    assert_eq!(settled.error, None);
}

#[test]
fn search_by_make_shows_cards_in_response_order() {
    let backend = FakeBackend::new();
    backend.respond(Ok(vec![
        listing("Toyota", "Camry", 2019),
        listing("Toyota", "Corolla", 2020),
    ]));
    let shell = Shell::new(backend.clone());

    let resp = handle(get("/search?make=Toyota&model=&min_year=&location="), &shell).unwrap();
    let body = body_string(resp);

    assert_eq!(backend.requests(), [r#"{"make":"Toyota"}"#]);
    assert!(body.contains("Available Cars (2)"));

    let camry = body.find("2019 Toyota Camry").expect("camry card");
    let corolla = body.find("2020 Toyota Corolla").expect("corolla card");
    assert!(camry < corolla);

    // The submitted value stays in its input.
    assert!(body.contains(r#"value="Toyota""#));
}

#[test]
fn numeric_fields_are_sent_as_numbers() {
    let backend = FakeBackend::new();
    let shell = Shell::new(backend.clone());

    handle(
        get("/search?min_year=2015&max_price=30000&max_mileage=&min_score=7.5"),
        &shell,
    )
    .unwrap();

    assert_eq!(
        backend.requests(),
        [r#"{"min_year":2015,"max_price":30000,"min_score":7.5}"#]
    );
}

#[test]
fn network_failure_shows_banner_and_keeps_loading_off() {
    let backend = FakeBackend::new();
    backend.respond(Err(SearchError::Transport(
        "error sending request: connection refused".into(),
    )));
    let shell = Shell::new(backend);

    handle(get("/"), &shell).unwrap();
    let settled = wait_until_settled(&shell);
    let body = body_string(handle(htmx_get("/results"), &shell).unwrap());

    assert!(body.contains("⚠️ error sending request: connection refused"));
    assert!(body.contains("Available Cars (0)"));
    assert!(!settled.loading);
    assert!(settled.cars.is_empty());
}

#[test]
fn failure_banner_sits_above_previous_results() {
    let backend = FakeBackend::new();
    backend
        .respond(Ok(vec![listing("Jeep", "Wrangler", 2018)]))
        .respond(Err(SearchError::Transport("connection reset".into())));
    let shell = Shell::new(backend);

    handle(get("/"), &shell).unwrap();
    wait_until_settled(&shell);
    let body = body_string(handle(get("/search?make=Jeep"), &shell).unwrap());

    let banner = body.find("⚠️ connection reset").expect("banner");
    let card = body.find("2018 Jeep Wrangler").expect("stale card");
    assert!(banner < card);
    assert!(body.contains("Available Cars (1)"));
    assert!(!body.contains("No cars found"));
}

#[test]
fn non_success_status_reads_failed_to_fetch() {
    let (base, _requests) = spawn_backend(503, "");
    let shell = Shell::new(HttpSearchClient::new(&config_for(&base)).unwrap());

    let body = body_string(handle(get("/search?make=Toyota"), &shell).unwrap());

    assert!(body.contains("⚠️ Failed to fetch cars"));
}

#[test]
fn reset_searches_everything_and_clears_fields() {
    let backend = FakeBackend::new();
    let shell = Shell::new(backend.clone());

    handle(get("/search?make=Toyota&min_price=10000"), &shell).unwrap();
    let body = body_string(handle(get("/reset?make=Toyota&min_price=10000"), &shell).unwrap());

    assert_eq!(
        backend.requests(),
        [r#"{"make":"Toyota","min_price":10000}"#, "{}"]
    );
    assert!(!body.contains(r#"value="Toyota""#));
    assert!(!body.contains(r#"value="10000""#));
    assert!(body.contains(r#"name="make" value="""#));
}
