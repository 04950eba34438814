//! RNG module - shuffled word deck
//!
//! The word queue holds one full deck of the fixed word list, shuffled once
//! per refill. Words are taken from the head of the deck; a fresh shuffled
//! deck is dealt only when a word is requested from an empty queue.
//!
//! Also provides a simple LCG so a seed reproduces the same word order.

use arrayvec::ArrayVec;

use crate::types::{WORDS, WORD_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// FIFO queue over shuffled decks of [`WORDS`].
#[derive(Debug, Clone)]
pub struct WordQueue {
    words: ArrayVec<&'static str, WORD_COUNT>,
    rng: SimpleRng,
    refills: u32,
}

impl WordQueue {
    /// Create an empty queue. The first [`WordQueue::pop`] deals a deck.
    pub fn new(seed: u32) -> Self {
        Self {
            words: ArrayVec::new(),
            rng: SimpleRng::new(seed),
            refills: 0,
        }
    }

    /// Replace the queue contents with a freshly shuffled deck.
    pub fn refill(&mut self) {
        self.words.clear();
        self.words.extend(WORDS.iter().copied());
        self.rng.shuffle(self.words.as_mut_slice());
        self.refills = self.refills.wrapping_add(1);
    }

    /// Take the word at the head of the queue, dealing a new deck first when empty.
    pub fn pop(&mut self) -> &'static str {
        if self.words.is_empty() {
            self.refill();
        }
        // Non-empty after refill; WORDS is a non-empty constant.
        self.words.pop_at(0).unwrap_or(WORDS[0])
    }

    /// Words left in the current deck, head first.
    pub fn remaining(&self) -> &[&'static str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of decks dealt so far.
    pub fn refills(&self) -> u32 {
        self.refills
    }
}

impl Default for WordQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
