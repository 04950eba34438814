//! Presenter + haptics flow through the facade crate.

use tokio::sync::mpsc;
use tokio::time::Instant;

use tui_charades::adapter::{
    play_pattern, CurrentRoute, HapticSignal, Haptics, Navigator, NoHaptics, Presenter, Route,
};
use tui_charades::types::{Buzz, RoundAction};

#[derive(Default)]
struct Log {
    routes: Vec<Route>,
    buzzes: Vec<Buzz>,
}

struct LogNav<'a>(&'a std::cell::RefCell<Log>);
struct LogHaptics<'a>(&'a std::cell::RefCell<Log>);

impl Navigator for LogNav<'_> {
    fn navigate(&mut self, route: Route) {
        self.0.borrow_mut().routes.push(route);
    }
}

impl Haptics for LogHaptics<'_> {
    fn buzz(&mut self, buzz: Buzz) {
        self.0.borrow_mut().buzzes.push(buzz);
    }
}

#[test]
fn full_round_buzz_and_navigation_order() {
    let log = std::cell::RefCell::new(Log::default());
    {
        let mut p = Presenter::new(3, LogNav(&log), LogHaptics(&log));
        p.start();
        p.apply_action(RoundAction::MarkCorrect);
        p.apply_action(RoundAction::MarkCorrect);
        p.apply_action(RoundAction::MarkSkipped);

        // Host polls every 50ms for a minute.
        for _ in 0..1200 {
            p.advance(50);
        }
    }

    let log = log.into_inner();
    assert_eq!(log.routes, vec![Route::Round, Route::Score { score: 1 }]);

    let mut expected = vec![Buzz::Correct, Buzz::Correct];
    expected.extend(std::iter::repeat(Buzz::Panic).take(10));
    expected.push(Buzz::GameOver);
    assert_eq!(log.buzzes, expected);
}

#[test]
fn summary_reports_the_finished_round() {
    let mut p = Presenter::new(11, CurrentRoute::default(), NoHaptics);
    p.start();
    p.mark_correct();
    p.mark_skipped();
    p.mark_skipped();
    p.advance(60_000);

    let value: serde_json::Value =
        serde_json::from_str(&p.summary().to_json_line().unwrap()).unwrap();
    assert_eq!(value["score"], -1);
    assert_eq!(value["correct"], 1);
    assert_eq!(value["skipped"], 2);
    assert_eq!(value["wordsSeen"], 4);
    assert_eq!(p.navigator().0, Route::Score { score: -1 });
}

#[test]
fn silent_pattern_completes_without_signals() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio_test::block_on(play_pattern(Buzz::None, tx));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn panic_pattern_lasts_200ms() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();
    tokio::spawn(play_pattern(Buzz::Panic, tx));

    assert_eq!(rx.recv().await, Some(HapticSignal::On(Buzz::Panic)));
    assert_eq!(rx.recv().await, Some(HapticSignal::Off));
    assert_eq!(start.elapsed().as_millis(), 200);
    assert_eq!(rx.recv().await, None);
}
