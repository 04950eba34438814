//! Round state properties exercised through the public API.

use std::collections::HashMap;

use tui_charades::core::{RoundState, SimpleRng};
use tui_charades::types::{is_known_word, Buzz, RoundPhase, WORDS, WORD_COUNT};

fn started(seed: u32) -> RoundState {
    let mut round = RoundState::new(seed);
    round.start();
    round
}

#[test]
fn score_equals_corrects_minus_skips_for_random_sequences() {
    let mut rng = SimpleRng::new(777);
    for seed in 1..40 {
        let mut round = started(seed);
        let (mut c, mut s) = (0i32, 0i32);
        let len = rng.next_range(80);
        for _ in 0..len {
            if rng.next_range(2) == 0 {
                round.mark_correct();
                c += 1;
            } else {
                round.mark_skipped();
                s += 1;
            }
            assert!(is_known_word(round.current_word()));
        }
        assert_eq!(round.score(), c - s, "seed {seed}");
    }
}

#[test]
fn twenty_second_pop_reshuffles_a_full_deck() {
    let mut round = started(2024);
    let mut first_deck = vec![round.current_word()];
    for _ in 0..(WORD_COUNT - 1) {
        round.mark_skipped();
        first_deck.push(round.current_word());
    }
    assert_eq!(round.queue().refills(), 1);

    round.mark_skipped();
    assert_eq!(round.queue().refills(), 2);

    let mut second_deck = vec![round.current_word()];
    second_deck.extend_from_slice(round.queue().remaining());

    let count = |deck: &[&'static str]| {
        let mut m: HashMap<&str, usize> = HashMap::new();
        for w in deck {
            *m.entry(*w).or_default() += 1;
        }
        m
    };
    let expected = count(&WORDS);
    assert_eq!(count(&first_deck), expected);
    assert_eq!(count(&second_deck), expected);
}

#[test]
fn panic_threshold_is_ten_inclusive() {
    let mut round = started(1);
    round.on_tick(11);
    assert_eq!(round.pending_buzz(), Buzz::None);

    for seconds in (1..=10).rev() {
        round.on_tick(seconds);
        assert_eq!(round.pending_buzz(), Buzz::Panic, "tick {seconds}");
        round.consume_buzz();
    }
}

#[test]
fn expiry_and_acknowledgements() {
    let mut round = started(1);
    round.on_timer_expired();
    assert!(round.finished());
    assert_eq!(round.pending_buzz(), Buzz::GameOver);
    assert_eq!(round.phase(), RoundPhase::Finished);

    round.consume_finished();
    assert!(!round.finished());
    round.consume_buzz();
    assert_eq!(round.pending_buzz(), Buzz::None);
}

#[test]
fn three_correct_one_skip_scores_two() {
    let mut round = started(5);
    round.mark_correct();
    round.mark_correct();
    round.mark_correct();
    assert_eq!(round.pending_buzz(), Buzz::Correct);
    round.mark_skipped();
    assert_eq!(round.score(), 2);
}

#[test]
fn disposed_round_ignores_later_time() {
    let mut round = started(5);
    round.advance(20_500);
    let before = round.snapshot();

    round.dispose();
    round.dispose();
    round.advance(90_000);

    assert_eq!(round.snapshot(), before);
    assert_eq!(round.remaining_seconds(), 40);
    assert_eq!(round.phase(), RoundPhase::Running);
}

#[test]
fn restarted_round_begins_on_a_fresh_deck() {
    let mut round = started(64);
    for _ in 0..5 {
        round.mark_skipped();
    }
    round.advance(60_000);
    assert!(round.finished());
    round.consume_finished();
    round.consume_buzz();

    round.start();
    assert_eq!(round.phase(), RoundPhase::Running);
    assert_eq!(round.score(), 0);
    assert_eq!(round.queue().len(), WORD_COUNT - 1);

    let refills = round.queue().refills();
    for _ in 0..(WORD_COUNT - 1) {
        round.mark_skipped();
    }
    assert_eq!(round.queue().refills(), refills);
    round.mark_skipped();
    assert_eq!(round.queue().refills(), refills + 1);
}

#[test]
fn disposed_round_ignores_direct_callbacks() {
    let mut round = started(8);
    round.dispose();
    round.on_tick(5);
    assert_eq!(round.remaining_seconds(), 60);
    assert_eq!(round.pending_buzz(), Buzz::None);

    round.on_timer_expired();
    assert!(!round.finished());
    assert_eq!(round.pending_buzz(), Buzz::None);
}
