//! Which results end up on screen when searches overlap or fail.

use docfind_theme::client::{
    ClientConfig, DropdownView, Key, KeyPress, Phase, SearchWidget, WidgetEvent,
};
use docfind_theme::testing::{FakeLoader, FakeSearch};
use std::cell::RefCell;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

fn input(text: &str) -> WidgetEvent {
    WidgetEvent::Input(text.to_string())
}

#[tokio::test(start_paused = true)]
async fn test_slow_early_query_never_overwrites_later_one() {
    let fake = FakeSearch::new();
    fake.delay("x", Duration::from_millis(500));
    let widget = SearchWidget::new(ClientConfig::new("/"), FakeLoader(fake.clone()), |_: &str| {});
    let states = widget.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();

    let script = async move {
        tx.send(input("x")).unwrap();
        sleep(Duration::from_millis(300)).await;
        tx.send(input("y")).unwrap();
        sleep(Duration::from_millis(1000)).await;
    };
    tokio::join!(widget.run(rx), script);

    assert_eq!(fake.queries(), ["x", "y"]);
    let state = states.borrow().clone();
    assert_eq!(state.query, "y");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].title, "y");
    assert_eq!(state.phase, Phase::Open);
}

#[tokio::test(start_paused = true)]
async fn test_failed_query_shows_no_results() {
    let fake = FakeSearch::new();
    fake.fail("broken");
    let widget = SearchWidget::new(ClientConfig::new("/"), FakeLoader(fake.clone()), |_: &str| {});
    let states = widget.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();

    let script = async move {
        tx.send(input("broken")).unwrap();
        sleep(Duration::from_millis(300)).await;
    };
    tokio::join!(widget.run(rx), script);

    let state = states.borrow().clone();
    assert!(state.results.is_empty());
    let view = DropdownView::from_state(&state).unwrap();
    assert!(view.no_results);
}

#[tokio::test(start_paused = true)]
async fn test_escape_discards_in_flight_results() {
    let fake = FakeSearch::new();
    fake.delay("slow", Duration::from_millis(500));
    let widget = SearchWidget::new(ClientConfig::new("/"), FakeLoader(fake.clone()), |_: &str| {});
    let states = widget.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();

    let script = async move {
        tx.send(WidgetEvent::Focus).unwrap();
        tx.send(input("slow")).unwrap();
        sleep(Duration::from_millis(300)).await;
        tx.send(WidgetEvent::KeyDown(KeyPress::plain(Key::Escape)))
            .unwrap();
        sleep(Duration::from_millis(1000)).await;
    };
    tokio::join!(widget.run(rx), script);

    let state = states.borrow().clone();
    assert!(!state.is_open);
    assert!(state.results.is_empty());
    assert_eq!(state.query, "slow");
    assert_eq!(DropdownView::from_state(&state), None);
}

#[tokio::test(start_paused = true)]
async fn test_click_navigates_and_resets() {
    let fake = FakeSearch::new();
    let visited = RefCell::new(Vec::new());
    let host = |href: &str| visited.borrow_mut().push(href.to_string());
    let widget = SearchWidget::new(ClientConfig::new("/"), FakeLoader(fake.clone()), host);
    let states = widget.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();

    let script = async move {
        tx.send(input("setup")).unwrap();
        sleep(Duration::from_millis(300)).await;
        tx.send(WidgetEvent::Hover(0)).unwrap();
        tx.send(WidgetEvent::Select(0)).unwrap();
    };
    tokio::join!(widget.run(rx), script);

    assert_eq!(visited.borrow().as_slice(), ["/docs/setup".to_string()]);
    let state = states.borrow().clone();
    assert_eq!(state.query, "");
    assert!(!state.is_open);
    assert_eq!(state.active_index, None);
}

#[tokio::test(start_paused = true)]
async fn test_max_results_passed_through() {
    let fake = FakeSearch::new();
    let mut config = ClientConfig::new("/");
    config.max_results = 0;
    let widget = SearchWidget::new(config, FakeLoader(fake.clone()), |_: &str| {});
    let states = widget.subscribe();
    let (tx, rx) = mpsc::unbounded_channel();

    let script = async move {
        tx.send(input("anything")).unwrap();
        sleep(Duration::from_millis(300)).await;
    };
    tokio::join!(widget.run(rx), script);

    assert!(states.borrow().results.is_empty());
}
