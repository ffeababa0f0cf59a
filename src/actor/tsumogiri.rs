use super::*;

// [TsumogiriAgent]
// ツモ切りのみを行う. 鳴き, 和了は行わない
#[derive(Debug, Clone, Default)]
pub struct TsumogiriAgent {}

impl TsumogiriAgent {
    pub fn new() -> Self {
        Self {}
    }
}

impl Agent for TsumogiriAgent {
    fn name(&self) -> String {
        "Tsumogiri".to_string()
    }

    fn draw_response(&mut self, _view: &View<'_>, tile: Tile, _is_replacement: bool) -> DrawResponse {
        DrawResponse::Discard(tile)
    }

    fn discard_response(&mut self, _view: &View<'_>, _tile: Tile) -> DiscardResponse {
        DiscardResponse::Pass
    }

    fn meld_response(&mut self, _view: &View<'_>, _meld: &Meld) -> bool {
        false
    }

    fn call_discard(&mut self, view: &View<'_>, meld: &Meld) -> Tile {
        // 鳴かないので呼び出されることはないが,念のため喰い替えにならない牌を選択
        let ts = discardable_after_call(view, meld);
        ts.last().copied().unwrap_or_else(|| view.hand()[0])
    }
}
