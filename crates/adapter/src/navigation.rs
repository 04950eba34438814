//! Navigation boundary: which screen the host should show.

use serde::Serialize;

/// Screens reachable from a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Route {
    /// The round screen (word, clock, score).
    Round,
    /// The score screen; carries the final score as its only argument.
    Score { score: i32 },
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Navigator that just remembers the latest route. The host renders whatever
/// it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRoute(pub Route);

impl Default for CurrentRoute {
    fn default() -> Self {
        Self(Route::Round)
    }
}

impl Navigator for CurrentRoute {
    fn navigate(&mut self, route: Route) {
        self.0 = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_route_follows_navigation() {
        let mut nav = CurrentRoute::default();
        nav.navigate(Route::Score { score: -1 });
        assert_eq!(nav.0, Route::Score { score: -1 });
    }

    #[test]
    fn score_route_serializes_its_argument() {
        let json = serde_json::to_string(&Route::Score { score: 4 }).unwrap();
        assert_eq!(json, r#"{"screen":"score","score":4}"#);
    }
}
