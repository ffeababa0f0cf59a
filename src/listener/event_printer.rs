use log::{debug, info};

use super::Listener;
use crate::model::*;
use crate::util::misc::vec_to_string;

// [EventPrinter]
// イベントをログに出力
#[derive(Debug, Default)]
pub struct EventPrinter {
    step: usize,
}

impl EventPrinter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Listener for EventPrinter {
    fn notify_event(&mut self, seats: &[SeatRecord; SEAT], round: &RoundState, event: &Event) {
        use Event::*;
        self.step += 1;
        match event {
            New(e) => {
                self.step = 0;
                info!(
                    "New round_wind: {}, dealer: {}, doras: {}, scores: {:?}",
                    e.round_wind,
                    e.dealer,
                    tiles_to_string(&e.doras),
                    e.scores
                );
            }
            Deal(e) => {
                debug!("(step:{}) Deal seat {} {}", self.step, e.seat, e.tile);
                debug!("{}", seats[e.seat]);
            }
            Discard(e) => {
                debug!(
                    "(step:{}) Discard seat {} {}{}",
                    self.step,
                    e.seat,
                    e.tile,
                    if e.is_riichi { " riichi" } else { "" }
                );
            }
            Meld(e) => {
                debug!("(step:{}) Meld seat {} {}", self.step, e.seat, e.meld);
                debug!("{}", seats[e.seat]);
            }
            Dora(e) => {
                debug!("(step:{}) Dora {}", self.step, e.tile);
            }
            Riichi(e) => {
                debug!(
                    "(step:{}) Riichi seat {} sticks: {}",
                    self.step, e.seat, e.riichi_sticks
                );
            }
            End(e) => {
                info!("End {}", e);
                if !e.ura_doras.is_empty() {
                    info!("ura_dora: {}", vec_to_string(&e.ura_doras));
                }
                for (s, rec) in seats.iter().enumerate() {
                    info!("seat {}: {} {}", s, rec.score, tiles_to_string(&rec.hand));
                }
                debug!("wall: {}", round.wall_count);
            }
        }
    }
}
