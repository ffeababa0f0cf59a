mod common;

use common::*;
use mahjong_rules::hand::YakuId;
use mahjong_rules::model::*;
use mahjong_rules::{
    DiscardResponse, DrawResponse, EventPrinter, MahjongError, MeldSpec, Phase, TableConfig,
};

fn agents() -> [Scripted; SEAT] {
    [Scripted::new(), Scripted::new(), Scripted::new(), Scripted::new()]
}

fn pon(tiles: &str) -> DiscardResponse {
    DiscardResponse::Call(MeldSpec::new(MeldType::Pon, &ts(tiles)))
}

fn chi(tiles: &str) -> DiscardResponse {
    DiscardResponse::Call(MeldSpec::new(MeldType::Chi, &ts(tiles)))
}

// 座席1: s3待ち (一気通貫), 座席2: s3のポンが可能
const CALL_HANDS: [&str; SEAT] = ["", "m123456789p11s12", "s33p258m258z12345", "m1479p1369s589z67"];

#[test]
fn win_takes_priority_over_pon() {
    let [a0, a1, a2, a3] = agents();
    let a1 = a1.discards(vec![DiscardResponse::Win]);
    let a2 = a2.discards(vec![pon("s33")]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, CALL_HANDS, "s3", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Discard);
    assert_eq!(res.wins.len(), 1);
    assert_eq!(res.wins[0].seat, 1);
    assert_eq!(res.wins[0].from, Some(0));
    assert!(res.wins[0].yaku.contains(&YakuId::Ikkitsuukan));
    assert!(table.seats()[2].melds.is_empty());
}

#[test]
fn pon_takes_priority_over_chi() {
    let [a0, a1, a2, a3] = agents();
    let a1 = a1.discards(vec![chi("s12")]);
    let a2 = a2.discards(vec![pon("s33")]).call_discards(ts("z5"));
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, CALL_HANDS, "s3", "");

    for _ in 0..3 {
        assert!(!table.next_step().unwrap());
    }
    assert_eq!(*table.phase(), Phase::AwaitCallDiscard { seat: 2, meld: 0 });
    let m = &table.seats()[2].melds[0];
    assert_eq!(m.meld_type(), MeldType::Pon);
    assert_eq!(m.from(), 0);
    assert_eq!(table.seats()[1].hand.len(), 13);
    assert!(table.seats()[1].melds.is_empty());

    // 鳴いた座席はツモを行わずに打牌する
    assert!(!table.next_step().unwrap());
    assert_eq!(
        *table.phase(),
        Phase::AwaitDiscardResponse {
            seat: 2,
            tile: t("z5")
        }
    );
    assert_eq!(table.seats()[2].hand.len(), 10);
}

#[test]
fn swap_calling_is_illegal() {
    let [a0, a1, a2, a3] = agents();
    let a2 = a2.discards(vec![pon("s33")]).call_discards(ts("s3"));
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    let hands = ["", "m123456789p11s12", "s333p258m258z1234", "m1479p1369s589z67"];
    start(&mut table, hands, "s3", "");

    let err = table.run_hand().unwrap_err();
    assert!(matches!(err, MahjongError::IllegalAction { seat: 2, .. }));
}

#[test]
fn chi_from_non_left_seat_is_protocol_violation() {
    let [a0, a1, a2, a3] = agents();
    let a2 = a2.discards(vec![chi("s24")]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, CALL_HANDS, "s3", "");

    let err = table.run_hand().unwrap_err();
    assert!(matches!(err, MahjongError::ProtocolViolation { seat: 2, .. }));
    assert_eq!(err.seat(), Some(2));
}

#[test]
fn win_without_yaku_is_illegal() {
    let [a0, a1, a2, a3] = agents();
    let a1 = a1.discards(vec![DiscardResponse::Win]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    // 座席1はs2で和了形になるが役がない (チーのみ可能)
    start(&mut table, ["", "m111456p234s13z55", LOOSE_B, LOOSE_C], "s2", "");

    let err = table.run_hand().unwrap_err();
    assert!(matches!(err, MahjongError::IllegalAction { seat: 1, .. }));
}

#[test]
fn illegal_draw_responses() {
    let cases = vec![
        DrawResponse::SelfWin,
        DrawResponse::Riichi(t("z1")),
        DrawResponse::Discard(t("z7")),
        DrawResponse::Kan(t("m1")),
    ];
    for resp in cases {
        let [a0, a1, a2, a3] = agents();
        let a0 = a0.draws(vec![resp.clone()]);
        let mut table = table_with([a0, a1, a2, a3], vec![]);
        start(&mut table, [LOOSE_A, LOOSE_B, LOOSE_C, ""], "z1", "");

        let err = table.run_hand().unwrap_err();
        assert!(
            matches!(err, MahjongError::IllegalAction { seat: 0, .. }),
            "{:?}: {}",
            resp,
            err
        );
    }
}

#[test]
fn nine_kinds() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::NineKinds]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, ["m19p19s19z1234m234", "", "", ""], "", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Draw(DrawType::Kyushukyuhai));
    assert!(!res.is_win());
}

#[test]
fn nine_kinds_after_first_turn_is_protocol_violation() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Discard(t("z1")), DrawResponse::NineKinds]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, [LOOSE_A, LOOSE_B, LOOSE_C, ""], "z1m1p1s1", "");

    let err = table.run_hand().unwrap_err();
    assert!(matches!(err, MahjongError::ProtocolViolation { seat: 0, .. }));
}

// 座席0: s69待ち
const TENPAI: &str = "m234567p234s5578";

#[test]
fn riichi_stake_and_lock() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![
        DrawResponse::Riichi(t("z1")),
        DrawResponse::Discard(t("m2")),
    ]);
    let rec = Recorder::default();
    let events = rec.events.clone();
    let mut table = table_with([a0, a1, a2, a3], vec![Box::new(rec)]);
    start(&mut table, [TENPAI, LOOSE_A, LOOSE_B, LOOSE_C], "z1m1p1s1z7", "");

    assert!(!table.next_step().unwrap());
    assert!(!table.next_step().unwrap());
    // 宣言牌が通過するまでは供託しない
    assert_eq!(table.seats()[0].score, 25000);
    assert_eq!(table.round().riichi_sticks, 0);
    assert!(table.round().riichi[0]);
    let d = &table.seats()[0].discards[0];
    assert!(d.riichi && d.drawn);

    assert!(!table.next_step().unwrap());
    assert_eq!(table.seats()[0].score, 24000);
    assert_eq!(table.round().riichi_sticks, 1);
    assert!(table.round().double_riichi[0]);
    assert!(table.round().ippatsu[0]);
    assert!(events
        .lock()
        .unwrap()
        .iter()
        .any(|e| matches!(e, Event::Riichi(r) if r.seat == 0 && r.riichi_sticks == 1)));

    // リーチ後はツモ牌以外を打牌できない
    let err = table.run_hand().unwrap_err();
    assert!(matches!(err, MahjongError::IllegalAction { seat: 0, .. }));
}

#[test]
fn riichi_discard_won_on_keeps_stake() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Riichi(t("z1"))]);
    let a1 = a1.discards(vec![DiscardResponse::Win]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, [TENPAI, "m123456789p111z1", LOOSE_B, LOOSE_C], "z1", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Discard);
    assert_eq!(res.wins[0].seat, 1);
    assert_eq!(res.riichi_sticks, 0);
    assert_eq!(res.scores[0], 25000);
    assert!(res.ura_doras.is_empty());
}

#[test]
fn multiple_winners() {
    let hands = ["", "m123456789p111z1", "m123456789s111z1", ""];
    let build = |config: TableConfig| {
        let [a0, a1, a2, a3] = agents();
        let a1 = a1.discards(vec![DiscardResponse::Win]);
        let a2 = a2.discards(vec![DiscardResponse::Win]);
        let mut table = table_with_config(config, [a0, a1, a2, a3], vec![]);
        start(&mut table, hands, "z1", "");
        table
    };

    let res = build(TableConfig::default()).run_hand().unwrap();
    let seats: Vec<Seat> = res.wins.iter().map(|w| w.seat).collect();
    assert_eq!(seats, vec![1, 2]);

    let config = TableConfig {
        multiple_ron: false,
        ..Default::default()
    };
    let res = build(config).run_hand().unwrap();
    let seats: Vec<Seat> = res.wins.iter().map(|w| w.seat).collect();
    assert_eq!(seats, vec![1]);
}

#[test]
fn exhaustive_draw_reports_tenpai() {
    let mut table = table_with(agents(), vec![]);
    start(&mut table, [TENPAI, LOOSE_A, LOOSE_B, LOOSE_C], "m1p1s1z7", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Draw(DrawType::Kouhaiheikyoku));
    assert_eq!(res.tenpai, [true, false, false, false]);
    assert_eq!(table.wall().remaining(), 0);
    let n: usize = table.seats().iter().map(|r| r.discards.len()).sum();
    assert_eq!(n, TILE_TOTAL - DEAD_WALL - HAND * SEAT);
}

#[test]
fn four_winds_abort() {
    let mut table = table_with(agents(), vec![]);
    start(&mut table, ["", LOOSE_A, LOOSE_B, LOOSE_C], "z1z1z1z1", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Draw(DrawType::Suufuurenda));
    assert!(table.seats().iter().all(|r| r.discards.len() == 1));
}

#[test]
fn kan_draws_one_replacement_and_reveals_one_dora() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Kan(t("m1"))]);
    let rec = Recorder::default();
    let events = rec.events.clone();
    let mut table = table_with([a0, a1, a2, a3], vec![Box::new(rec)]);
    start(&mut table, ["m1111p123s456z123", "", "", ""], "z5", "z7");

    assert!(!table.next_step().unwrap());
    assert!(!table.next_step().unwrap());
    assert_eq!(
        *table.phase(),
        Phase::AwaitDraw {
            seat: 0,
            is_replacement: true
        }
    );
    assert_eq!(table.round().dora_indicators.len(), 1);
    assert_eq!(table.seats()[0].melds[0].meld_type(), MeldType::Ankan);
    let remaining = table.wall().remaining();

    assert!(!table.next_step().unwrap());
    assert_eq!(table.round().dora_indicators.len(), 2);
    assert_eq!(table.wall().remaining(), remaining - 1);
    assert_eq!(table.seats()[0].discards[0].tile, t("z7"));
    assert_eq!(table.seats()[0].hand.len(), 10);
    assert_eq!(
        *table.phase(),
        Phase::AwaitDiscardResponse {
            seat: 0,
            tile: t("z7")
        }
    );

    let events = events.lock().unwrap();
    let n = events.len();
    assert!(matches!(events[n - 4], Event::Meld(_)));
    assert!(matches!(events[n - 3], Event::Dora(_)));
    assert!(matches!(&events[n - 2], Event::Deal(d) if d.is_replacement && d.seat == 0));
    assert!(matches!(events[n - 1], Event::Discard(_)));
}

#[test]
fn added_kan_can_be_robbed() {
    let [a0, a1, a2, a3] = agents();
    let a1 = a1
        .discards(vec![pon("p99")])
        .call_discards(ts("z7"))
        .draws(vec![DrawResponse::Kan(t("p9"))]);
    let a3 = a3.rob();
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    let hands = ["", "p99m147s258z34567", "", "m123456789p78s11"];
    start(&mut table, hands, "p9m5s5p5p9", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::RobbedKan);
    assert_eq!(res.wins.len(), 1);
    assert_eq!(res.wins[0].seat, 3);
    assert_eq!(res.wins[0].from, Some(1));
    assert!(res.wins[0].yaku.contains(&YakuId::Chankan));
    assert!(res.wins[0].yaku.contains(&YakuId::Ikkitsuukan));
}

#[test]
fn four_kans_by_two_seats_abort() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Kan(t("m1")), DrawResponse::Kan(t("p1"))]);
    let a1 = a1.draws(vec![DrawResponse::Kan(t("s1")), DrawResponse::Kan(t("z1"))]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    let hands = ["m1111p1111s234z23", "s1111z1111m789p89", "", ""];
    start(&mut table, hands, "z5z6", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Draw(DrawType::Suukansanra));
    assert_eq!(res.doras.len(), 5);
    assert_eq!(table.wall().kan_count(), 4);
}

#[test]
fn four_riichi_abort() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Riichi(t("z1"))]);
    let a1 = a1.draws(vec![DrawResponse::Riichi(t("z2"))]);
    let a2 = a2.draws(vec![DrawResponse::Riichi(t("z3"))]);
    let a3 = a3.draws(vec![DrawResponse::Riichi(t("z4"))]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    // 4人とも聴牌 (s69, s25, s9z5, p5z7待ち)
    let hands = [TENPAI, "p123456789s1134", "m111999p999s99z55", "m345678p55s666z77"];
    start(&mut table, hands, "z1z2z3z4", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Draw(DrawType::Suuchariichi));
    assert_eq!(res.riichi_sticks, 4);
    assert_eq!(res.scores, [24000; SEAT]);
    assert_eq!(res.tenpai, [false; SEAT]);
    assert_eq!(table.round().riichi_count(), SEAT);
}

#[test]
fn thirteen_orphans_robs_concealed_kan() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Kan(t("m1"))]);
    let a1 = a1.rob();
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    // 座席1: 国士無双のm1待ち
    let hands = ["m111234p123s456z5", "m9p19s19z12345677", LOOSE_B, LOOSE_C];
    start(&mut table, hands, "m1", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::RobbedKan);
    assert_eq!(res.wins.len(), 1);
    assert_eq!(res.wins[0].seat, 1);
    assert_eq!(res.wins[0].from, Some(0));
    assert_eq!(res.wins[0].tile, t("m1"));
    assert!(res.wins[0].yaku.contains(&YakuId::Kokushimusou));
    assert!(!res.wins[0].yaku.contains(&YakuId::Chankan));
    assert_eq!(res.doras.len(), 1);
}

#[test]
fn win_on_replacement_draw() {
    let [a0, a1, a2, a3] = agents();
    let a0 = a0.draws(vec![DrawResponse::Kan(t("m1")), DrawResponse::SelfWin]);
    let mut table = table_with([a0, a1, a2, a3], vec![]);
    start(&mut table, ["m11117p123s456z55", "", "", ""], "m8", "m9");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::SelfDraw);
    assert_eq!(res.wins[0].seat, 0);
    assert_eq!(res.wins[0].from, None);
    assert_eq!(res.wins[0].tile, t("m9"));
    assert_eq!(res.wins[0].melds.len(), 1);
    assert!(res.wins[0].yaku.contains(&YakuId::Rinshankaihou));
    assert!(res.wins[0].yaku.contains(&YakuId::Menzentsumo));
    assert_eq!(res.doras.len(), 2);
    assert_eq!(table.seats()[0].discards.len(), 0);
}

#[test]
fn event_printer_runs_a_full_hand() {
    let mut table = table_with(agents(), vec![Box::new(EventPrinter::new())]);
    start(&mut table, [TENPAI, LOOSE_A, LOOSE_B, LOOSE_C], "m1p1s1z7", "");

    let res = table.run_hand().unwrap();
    assert_eq!(res.reason, HandEndReason::Draw(DrawType::Kouhaiheikyoku));
    assert_eq!(*table.phase(), Phase::HandEnd);
}
