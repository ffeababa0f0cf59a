// 卓の進行を管理するモジュール
mod check;
mod table;
mod wall;

pub use self::{
    check::{
        added_kan_candidates, can_declare_nine_kinds, chi_candidates, concealed_kan_candidates,
        has_discard_after_call, open_kan_candidate, pon_candidates, prohibited_discards,
        riichi_discards,
    },
    table::{Phase, Table},
    wall::Wall,
};
