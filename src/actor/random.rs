use rand::Rng;

use super::*;
use crate::hand::evaluate_win;

// [RandomAgent]
// 和了可能な場合は必ず和了し,それ以外はランダムに打牌する
// リーチ中はツモ切り
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: rand::rngs::StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand::SeedableRng::seed_from_u64(seed),
        }
    }

    fn choose(&mut self, ts: &[Tile]) -> Option<Tile> {
        if ts.is_empty() {
            return None;
        }
        Some(ts[self.rng.gen_range(0..ts.len())])
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn draw_response(&mut self, view: &View<'_>, tile: Tile, _is_replacement: bool) -> DrawResponse {
        if evaluate_win(view).is_some() {
            return DrawResponse::SelfWin;
        }
        if view.is_riichi(view.seat()) {
            return DrawResponse::Discard(tile);
        }
        DrawResponse::Discard(self.choose(view.hand()).unwrap_or(tile))
    }

    fn discard_response(&mut self, view: &View<'_>, _tile: Tile) -> DiscardResponse {
        if evaluate_win(view).is_some() {
            DiscardResponse::Win
        } else {
            DiscardResponse::Pass
        }
    }

    fn meld_response(&mut self, _view: &View<'_>, _meld: &Meld) -> bool {
        true
    }

    fn call_discard(&mut self, view: &View<'_>, meld: &Meld) -> Tile {
        let ts = discardable_after_call(view, meld);
        self.choose(&ts).unwrap_or_else(|| view.hand()[0])
    }
}
