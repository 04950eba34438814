//! ScoreView: the screen shown after the round finishes.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::round_view::{card_origin, Viewport, CARD_BG, HINT_STYLE, SCREEN_BG};

pub struct ScoreView {
    card_w: u16,
    card_h: u16,
}

impl Default for ScoreView {
    fn default() -> Self {
        Self {
            card_w: 30,
            card_h: 9,
        }
    }
}

impl ScoreView {
    pub fn render_into(&self, score: i32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(SCREEN_BG, SCREEN_BG).into_cell(' '));

        let (x, y) = card_origin(viewport, self.card_w, self.card_h);
        let (w, h) = (self.card_w, self.card_h);
        let inner_w = w.saturating_sub(2);

        let card = CellStyle::plain(Rgb::new(220, 220, 220), CARD_BG);
        fb.fill_rect(x + 1, y + 1, inner_w, h.saturating_sub(2), ' ', card);
        fb.draw_box(x, y, w, h, CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG));

        fb.put_str_centered(x + 1, inner_w, y + 2, "TIME'S UP", card.bold());
        fb.put_str_centered(x + 1, inner_w, y + 4, "SCORE", card.dim());

        let value = if score < 0 {
            CellStyle::plain(Rgb::new(230, 90, 90), CARD_BG).bold()
        } else {
            CellStyle::plain(Rgb::new(120, 220, 120), CARD_BG).bold()
        };
        fb.put_str_centered(x + 1, inner_w, y + 5, &score.to_string(), value);

        if y + h < viewport.height {
            fb.put_str_centered(0, viewport.width, y + h, "r: play again   q: quit", HINT_STYLE);
        }
    }

    pub fn render(&self, score: i32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(score, viewport, &mut fb);
        fb
    }
}
