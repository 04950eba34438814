//! RoundView: maps a [`RoundSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RoundSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PANIC_THRESHOLD_SECONDS;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub(crate) const CARD_BG: Rgb = Rgb::new(30, 30, 40);
pub(crate) const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER_CALM: Rgb = Rgb::new(200, 200, 200);
const BORDER_PANIC: Rgb = Rgb::new(240, 170, 60);
const BORDER_BUZZ: Rgb = Rgb::new(230, 70, 70);

pub(crate) const HINT_STYLE: CellStyle = CellStyle::plain(Rgb::new(140, 140, 150), SCREEN_BG);

/// Place a `w x h` card in the middle of the viewport.
pub(crate) fn card_origin(viewport: Viewport, w: u16, h: u16) -> (u16, u16) {
    (
        viewport.width.saturating_sub(w) / 2,
        viewport.height.saturating_sub(h) / 2,
    )
}

/// Round screen: clock, score and the current word on a bordered card.
pub struct RoundView {
    card_w: u16,
    card_h: u16,
}

impl Default for RoundView {
    fn default() -> Self {
        Self {
            card_w: 40,
            card_h: 11,
        }
    }
}

impl RoundView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(16),
            card_h: card_h.max(7),
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// `buzzing` is true while a haptic pattern is in a buzz segment; the card
    /// border flashes to make it visible.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        buzzing: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(SCREEN_BG, SCREEN_BG).into_cell(' '));

        let (x, y) = card_origin(viewport, self.card_w, self.card_h);
        let (w, h) = (self.card_w, self.card_h);

        let card = CellStyle::plain(Rgb::new(220, 220, 220), CARD_BG);
        fb.fill_rect(x + 1, y + 1, w.saturating_sub(2), h.saturating_sub(2), ' ', card);

        let in_panic = snap.remaining_seconds <= PANIC_THRESHOLD_SECONDS;
        let border_fg = if buzzing {
            BORDER_BUZZ
        } else if in_panic {
            BORDER_PANIC
        } else {
            BORDER_CALM
        };
        fb.draw_box(x, y, w, h, CellStyle::plain(border_fg, SCREEN_BG));

        // Header: clock on the left, score on the right.
        let label = card.dim();
        let clock_style = if in_panic {
            CellStyle::plain(BORDER_PANIC, CARD_BG).bold()
        } else {
            card.bold()
        };
        fb.put_str(x + 2, y + 1, "TIME", label);
        fb.put_str(x + 7, y + 1, &snap.clock(), clock_style);

        let score = snap.score.to_string();
        let score_x = (x + w).saturating_sub(3 + score.chars().count() as u16);
        fb.put_str(score_x.saturating_sub(6), y + 1, "SCORE", label);
        fb.put_str(score_x, y + 1, &score, card.bold());

        // The word itself.
        let word = snap.word.to_uppercase();
        let word_style = CellStyle::plain(Rgb::new(255, 255, 255), CARD_BG).bold();
        fb.put_str_centered(x + 1, w.saturating_sub(2), y + h / 2, &word, word_style);

        fb.put_str_centered(
            x + 1,
            w.saturating_sub(2),
            y + h - 2,
            "enter: correct   backspace: skip",
            label,
        );

        if y + h < viewport.height {
            fb.put_str_centered(0, viewport.width, y + h, "q: quit", HINT_STYLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, buzzing: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, buzzing, viewport, &mut fb);
        fb
    }
}
