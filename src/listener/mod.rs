mod event_printer;

use std::fmt;

use crate::model::*;

pub use event_printer::EventPrinter;

// 卓のイベントを受け取るオブザーバー
// 状態を変更することはできない
pub trait Listener: Send {
    fn notify_event(&mut self, _seats: &[SeatRecord; SEAT], _round: &RoundState, _event: &Event) {}
}

impl fmt::Debug for dyn Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener")
    }
}
