#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use mahjong_rules::model::*;
use mahjong_rules::{
    Agent, DiscardResponse, DrawResponse, Listener, Table, TableConfig, Wall,
};

pub fn ts(s: &str) -> Vec<Tile> {
    tiles_from_string(s).unwrap()
}

pub fn t(s: &str) -> Tile {
    Tile::from_symbol(s).unwrap()
}

// 応答を事前に指定するAgent
// 指定がない場合はツモ切り, パス, 槍槓しない
#[derive(Debug, Default)]
pub struct Scripted {
    pub draws: VecDeque<DrawResponse>,
    pub discards: VecDeque<DiscardResponse>,
    pub call_discards: VecDeque<Tile>,
    pub rob: bool,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(mut self, rs: Vec<DrawResponse>) -> Self {
        self.draws = rs.into();
        self
    }

    pub fn discards(mut self, rs: Vec<DiscardResponse>) -> Self {
        self.discards = rs.into();
        self
    }

    pub fn call_discards(mut self, ts: Vec<Tile>) -> Self {
        self.call_discards = ts.into();
        self
    }

    pub fn rob(mut self) -> Self {
        self.rob = true;
        self
    }
}

impl Agent for Scripted {
    fn name(&self) -> String {
        "Scripted".to_string()
    }

    fn draw_response(&mut self, _view: &View<'_>, tile: Tile, _is_replacement: bool) -> DrawResponse {
        self.draws.pop_front().unwrap_or(DrawResponse::Discard(tile))
    }

    fn discard_response(&mut self, _view: &View<'_>, _tile: Tile) -> DiscardResponse {
        self.discards.pop_front().unwrap_or(DiscardResponse::Pass)
    }

    fn meld_response(&mut self, _view: &View<'_>, _meld: &Meld) -> bool {
        self.rob
    }

    fn call_discard(&mut self, view: &View<'_>, _meld: &Meld) -> Tile {
        self.call_discards
            .pop_front()
            .unwrap_or_else(|| *view.hand().last().unwrap())
    }
}

// 受け取ったイベントを記録するListener
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Arc<Mutex<Vec<Event>>>,
}

impl Listener for Recorder {
    fn notify_event(&mut self, _seats: &[SeatRecord; SEAT], _round: &RoundState, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

// 聴牌しておらず,塔子や対子を含まない手牌
pub const LOOSE_A: &str = "m147p258s369z2345";
pub const LOOSE_B: &str = "m258p369s147z2346";
pub const LOOSE_C: &str = "m369p147s258z2347";

pub fn table_with(agents: [Scripted; SEAT], listeners: Vec<Box<dyn Listener>>) -> Table {
    table_with_config(TableConfig::default(), agents, listeners)
}

pub fn table_with_config(
    config: TableConfig,
    agents: [Scripted; SEAT],
    listeners: Vec<Box<dyn Listener>>,
) -> Table {
    let [a0, a1, a2, a3] = agents;
    Table::new(
        config,
        [Box::new(a0), Box::new(a1), Box::new(a2), Box::new(a3)],
        listeners,
    )
}

// 親は座席0, 東場
pub fn start(table: &mut Table, hands: [&str; SEAT], draws: &str, replacements: &str) {
    let hands = [ts(hands[0]), ts(hands[1]), ts(hands[2]), ts(hands[3])];
    let wall = Wall::arranged(&hands, &ts(draws), &ts(replacements), &[], 7, 1).unwrap();
    table.start_hand(wall, 0, WE).unwrap();
}
