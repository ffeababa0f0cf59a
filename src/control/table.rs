use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use super::check::*;
use super::wall::Wall;
use crate::actor::{Agent, DiscardResponse, DrawResponse, MeldSpec};
use crate::config::TableConfig;
use crate::error::{MahjongError, Res};
use crate::hand::*;
use crate::listener::Listener;
use crate::model::*;

// [Phase]
// 卓の進行状態 next_step()の呼び出しごとに1つ進む
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    // 配牌前
    DealStart,
    // ツモ待ち
    AwaitDraw { seat: Seat, is_replacement: bool },
    // チー・ポン後の打牌待ち (meldは副露のindex)
    AwaitCallDiscard { seat: Seat, meld: Index },
    // 打牌に対するロン・鳴き待ち
    AwaitDiscardResponse { seat: Seat, tile: Tile },
    HandEnd,
}

// 打牌に対して各座席が選択可能な応答
#[derive(Debug, Default)]
struct CallOptions {
    win: bool,
    chi: Vec<[Tile; 2]>,
    pon: Vec<[Tile; 2]>,
    kan: Option<[Tile; 3]>,
}

impl CallOptions {
    fn is_empty(&self) -> bool {
        !self.win && self.chi.is_empty() && self.pon.is_empty() && self.kan.is_none()
    }
}

// [Table]
pub struct Table {
    config: TableConfig,
    agents: [Box<dyn Agent>; SEAT],
    listeners: Vec<Box<dyn Listener>>,
    seats: [SeatRecord; SEAT],
    round: RoundState,
    wall: Wall,
    phase: Phase,
    kan_seats: Vec<Seat>,         // 槓を行った座席 (局全体)
    pending_riichi: Option<Seat>, // 宣言牌が通過すれば成立するリーチ
    pending_abort: bool,          // 四槓散了 (次の打牌が通過すれば流局)
    result: Option<HandResult>,
}

impl Table {
    pub fn new(
        config: TableConfig,
        agents: [Box<dyn Agent>; SEAT],
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        let mut seats: [SeatRecord; SEAT] = Default::default();
        for rec in &mut seats {
            rec.score = config.initial_score;
        }
        let wall = Wall::shuffled(config.seed, config.red_fives);
        Self {
            config,
            agents,
            listeners,
            seats,
            round: RoundState::default(),
            wall,
            phase: Phase::HandEnd,
            kan_seats: vec![],
            pending_riichi: None,
            pending_abort: false,
            result: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn seats(&self) -> &[SeatRecord; SEAT] {
        &self.seats
    }

    #[inline]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[inline]
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    #[inline]
    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    pub fn set_scores(&mut self, scores: &[Score; SEAT]) {
        for (rec, &sc) in self.seats.iter_mut().zip(scores) {
            rec.score = sc;
        }
    }

    // 局の開始 (所持点と供託は前局から引き継ぐ)
    pub fn start_hand(&mut self, wall: Wall, dealer: Seat, round_wind: Rank) -> Res {
        if dealer >= SEAT {
            return Err(MahjongError::construction(format!("invalid dealer: {}", dealer)));
        }
        if round_wind as usize >= SEAT {
            return Err(MahjongError::construction(format!(
                "invalid round wind: {}",
                round_wind
            )));
        }

        for (s, rec) in self.seats.iter_mut().enumerate() {
            *rec = SeatRecord {
                wind: ((s + SEAT - dealer) % SEAT) as Rank,
                score: rec.score,
                ..Default::default()
            };
        }
        self.round = RoundState {
            round_wind,
            dealer,
            riichi_sticks: self.round.riichi_sticks,
            ..Default::default()
        };
        self.wall = wall;
        self.phase = Phase::DealStart;
        self.kan_seats.clear();
        self.pending_riichi = None;
        self.pending_abort = false;
        self.result = None;
        Ok(())
    }

    // 状態を1つ進める 局が終了した場合はtrueを返却
    pub fn next_step(&mut self) -> Res<bool> {
        let res = match self.phase.clone() {
            Phase::DealStart => self.do_deal(),
            Phase::AwaitDraw {
                seat,
                is_replacement,
            } => self.do_draw(seat, is_replacement),
            Phase::AwaitCallDiscard { seat, meld } => self.do_call_discard(seat, meld),
            Phase::AwaitDiscardResponse { seat, tile } => self.do_discard_response(seat, tile),
            Phase::HandEnd => return Ok(true),
        };
        if let Err(e) = &res {
            error!("{}", e);
        }
        res
    }

    pub fn run_hand(&mut self) -> Res<HandResult> {
        while !self.next_step()? {}
        self.result
            .clone()
            .ok_or_else(|| MahjongError::construction("hand has not been started"))
    }

    fn notify_event(&mut self, event: Event) {
        for l in &mut self.listeners {
            l.notify_event(&self.seats, &self.round, &event);
        }
    }

    // [配牌]
    fn do_deal(&mut self) -> Res<bool> {
        for s in 0..SEAT {
            for _ in 0..HAND {
                let t = self
                    .wall
                    .draw()
                    .ok_or_else(|| MahjongError::construction("not enough tiles to deal"))?;
                self.seats[s].add_tile(t);
            }
        }
        self.round.dora_indicators = self.wall.dora_indicators().to_vec();
        self.round.wall_count = self.wall.remaining();

        let scores = self.scores();
        self.notify_event(Event::new(
            self.round.round_wind,
            self.round.dealer,
            self.round.riichi_sticks,
            self.round.dora_indicators.clone(),
            scores,
            self.round.wall_count,
        ));
        info!(
            "hand start: round_wind={}, dealer={}",
            self.round.round_wind, self.round.dealer
        );

        self.phase = Phase::AwaitDraw {
            seat: self.round.dealer,
            is_replacement: false,
        };
        Ok(false)
    }

    // [ツモ]
    fn do_draw(&mut self, seat: Seat, is_replacement: bool) -> Res<bool> {
        let tile = if is_replacement {
            let (t, dora) = self
                .wall
                .draw_replacement()
                .ok_or_else(|| MahjongError::construction("no replacement tile left"))?;
            self.round.dora_indicators.push(dora);
            self.notify_event(Event::dora(dora));
            t
        } else {
            match self.wall.draw() {
                Some(t) => t,
                None => {
                    self.end_draw(DrawType::Kouhaiheikyoku);
                    return Ok(true);
                }
            }
        };
        self.round.wall_count = self.wall.remaining();
        self.seats[seat].add_tile(tile);
        debug!("seat {} draws {}", seat, tile);
        self.notify_event(Event::deal(seat, tile, is_replacement));

        let action = if is_replacement {
            ActionKind::ReplacementDraw
        } else {
            ActionKind::Draw
        };
        let resp = {
            let view = View::new(seat, seat, action, tile, &self.seats, &self.round);
            self.agents[seat].draw_response(&view, tile, is_replacement)
        };
        debug!("seat {} responds {:?}", seat, resp);

        match resp {
            DrawResponse::SelfWin => {
                let win = self.win_record(seat, seat, action, tile).ok_or_else(|| {
                    MahjongError::illegal(seat, &resp, "no winning hand with yaku")
                })?;
                self.end_win(HandEndReason::SelfDraw, vec![win]);
                Ok(true)
            }
            DrawResponse::Kan(t) => self.declare_kan(seat, t, tile, &resp),
            DrawResponse::Riichi(t) => {
                self.declare_riichi(seat, t, &resp)?;
                self.discard(seat, t, tile, true, &resp)?;
                Ok(false)
            }
            DrawResponse::Discard(t) => {
                if self.round.riichi[seat] && t != tile {
                    return Err(MahjongError::illegal(
                        seat,
                        &resp,
                        "must discard the drawn tile during riichi",
                    ));
                }
                let t = if self.round.riichi[seat] { tile } else { t };
                self.discard(seat, t, tile, false, &resp)?;
                Ok(false)
            }
            DrawResponse::NineKinds => {
                if is_replacement || !self.no_calls() || !self.seats[seat].discards.is_empty() {
                    return Err(MahjongError::protocol(
                        seat,
                        &resp,
                        "nine kinds is only available on the first uninterrupted draw",
                    ));
                }
                if !can_declare_nine_kinds(&self.seats[seat]) {
                    return Err(MahjongError::illegal(
                        seat,
                        &resp,
                        "fewer than nine kinds of terminals and honors",
                    ));
                }
                self.end_draw(DrawType::Kyushukyuhai);
                Ok(true)
            }
        }
    }

    // [打牌]
    fn discard(
        &mut self,
        seat: Seat,
        t: Tile,
        drawn: Tile,
        is_riichi: bool,
        resp: &DrawResponse,
    ) -> Res {
        let is_drawn = t.is_identical(&drawn);
        let tile = self.seats[seat]
            .remove_tile(if is_drawn { drawn } else { t })
            .ok_or_else(|| MahjongError::illegal(seat, resp, format!("{} is not in hand", t)))?;
        self.push_discard(seat, tile, is_drawn, is_riichi);
        Ok(())
    }

    fn push_discard(&mut self, seat: Seat, tile: Tile, is_drawn: bool, is_riichi: bool) {
        if !is_riichi {
            self.round.ippatsu[seat] = false;
        }
        self.seats[seat].discards.push(Discard {
            tile,
            drawn: is_drawn,
            riichi: is_riichi,
        });
        debug!("seat {} discards {}", seat, tile);
        self.notify_event(Event::discard(seat, tile, is_drawn, is_riichi));
        self.phase = Phase::AwaitDiscardResponse { seat, tile };
    }

    // [リーチ]
    fn declare_riichi(&mut self, seat: Seat, t: Tile, resp: &DrawResponse) -> Res {
        if self.round.riichi[seat] {
            return Err(MahjongError::protocol(seat, resp, "already in riichi"));
        }
        let rec = &self.seats[seat];
        if !rec.is_concealed() {
            return Err(MahjongError::protocol(seat, resp, "riichi requires a concealed hand"));
        }
        if self.wall.remaining() < SEAT {
            return Err(MahjongError::protocol(seat, resp, "not enough tiles left for riichi"));
        }
        if rec.score < self.config.riichi_cost {
            return Err(MahjongError::illegal(seat, resp, "not enough points for riichi"));
        }
        if !riichi_discards(rec).contains(&t) {
            return Err(MahjongError::illegal(
                seat,
                resp,
                format!("hand is not tenpai after discarding {}", t),
            ));
        }

        // 鳴きのない第一巡のリーチはダブルリーチ
        let is_double = self.no_calls() && rec.discards.is_empty();
        self.round.riichi[seat] = true;
        self.round.double_riichi[seat] = is_double;
        self.round.ippatsu[seat] = true;
        self.pending_riichi = Some(seat);
        info!("seat {} declares riichi", seat);
        Ok(())
    }

    // 宣言牌が通過した時点でリーチ棒を供託
    fn accept_riichi(&mut self, seat: Seat) {
        self.seats[seat].score -= self.config.riichi_cost;
        self.round.riichi_sticks += 1;
        let sticks = self.round.riichi_sticks;
        self.notify_event(Event::riichi(seat, sticks));
    }

    // [暗槓・加槓]
    fn declare_kan(&mut self, seat: Seat, t: Tile, drawn: Tile, resp: &DrawResponse) -> Res<bool> {
        if self.kan_seats.len() >= MAX_KAN {
            return Err(MahjongError::protocol(seat, resp, "no more kan is allowed"));
        }
        if self.wall.remaining() == 0 {
            return Err(MahjongError::protocol(seat, resp, "no kan on the last tile"));
        }

        let is_riichi = self.round.riichi[seat];
        let rec = &self.seats[seat];
        let (meld, action) = if concealed_kan_candidates(rec, drawn, is_riichi).contains(&t) {
            let mut tiles = vec![];
            for _ in 0..TILE {
                let x = self.seats[seat]
                    .remove_tile(t)
                    .ok_or_else(|| MahjongError::illegal(seat, resp, "kan tile is missing"))?;
                tiles.push(x);
            }
            let m = Meld::new(seat, MeldType::Ankan, tiles, None, seat)
                .map_err(|e| MahjongError::illegal(seat, resp, e.to_string()))?;
            self.seats[seat].melds.push(m.clone());
            (m, ActionKind::Ankan)
        } else if !is_riichi && added_kan_candidates(rec).contains(&t) {
            let i = rec
                .melds
                .iter()
                .position(|m| m.meld_type() == MeldType::Pon && m.head() == t)
                .ok_or_else(|| MahjongError::illegal(seat, resp, "no pon to promote"))?;
            let x = self.seats[seat]
                .remove_tile(t)
                .ok_or_else(|| MahjongError::illegal(seat, resp, "kan tile is missing"))?;
            let m = self.seats[seat].melds[i]
                .promote(x)
                .map_err(|e| MahjongError::illegal(seat, resp, e.to_string()))?;
            self.seats[seat].melds[i] = m.clone();
            (m, ActionKind::Kakan)
        } else {
            return Err(MahjongError::illegal(seat, resp, format!("cannot kan {}", t)));
        };

        info!("seat {} declares kan {}", seat, meld);
        self.notify_event(Event::meld(seat, meld.clone()));

        // 槍槓 (暗槓は国士無双のみ)
        let mut winners = vec![];
        for i in 1..SEAT {
            let s = (seat + i) % SEAT;
            let eligible = {
                let view = View::new(s, seat, action, t, &self.seats, &self.round);
                evaluate_win(&view).is_some()
                    && (action == ActionKind::Kakan || is_guoshi_form(&view.winning_hand()))
            };
            if !eligible {
                continue;
            }
            let rob = {
                let view = View::new(s, seat, action, t, &self.seats, &self.round);
                self.agents[s].meld_response(&view, &meld)
            };
            if rob {
                winners.push(s);
            }
        }
        if !winners.is_empty() {
            if !self.config.multiple_ron {
                winners.truncate(1);
            }
            let wins = winners
                .into_iter()
                .filter_map(|s| self.win_record(s, seat, action, t))
                .collect();
            self.end_win(HandEndReason::RobbedKan, wins);
            return Ok(true);
        }

        self.round.ippatsu = [false; SEAT];
        self.record_kan(seat);
        self.phase = Phase::AwaitDraw {
            seat,
            is_replacement: true,
        };
        Ok(false)
    }

    fn record_kan(&mut self, seat: Seat) {
        self.kan_seats.push(seat);
        if self.kan_seats.len() == MAX_KAN && self.kan_seats.iter().any(|&s| s != seat) {
            self.pending_abort = true;
        }
    }

    // [鳴き後の打牌]
    fn do_call_discard(&mut self, seat: Seat, meld: Index) -> Res<bool> {
        let m = self.seats[seat]
            .melds
            .get(meld)
            .cloned()
            .ok_or_else(|| MahjongError::construction("meld not found"))?;
        let t = {
            let tile = m.called_tile().unwrap_or_else(|| m.head());
            let view = View::new(seat, seat, ActionKind::Call, tile, &self.seats, &self.round);
            self.agents[seat].call_discard(&view, &m)
        };

        if prohibited_discards(&m).contains(&t) {
            return Err(MahjongError::illegal(
                seat,
                t,
                format!("{} cannot be discarded right after {}", t, m),
            ));
        }
        let tile = self.seats[seat]
            .remove_tile(t)
            .ok_or_else(|| MahjongError::illegal(seat, t, format!("{} is not in hand", t)))?;
        self.push_discard(seat, tile, false, false);
        Ok(false)
    }

    // [打牌に対する応答]
    fn do_discard_response(&mut self, discarder: Seat, tile: Tile) -> Res<bool> {
        let can_call = self.wall.remaining() > 0 && !self.pending_abort;

        let mut options: Vec<(Seat, CallOptions)> = vec![];
        for i in 1..SEAT {
            let s = (discarder + i) % SEAT;
            let mut opt = CallOptions::default();
            {
                let view =
                    View::new(s, discarder, ActionKind::Discard, tile, &self.seats, &self.round);
                opt.win = evaluate_win(&view).is_some();
            }
            if can_call && !self.round.riichi[s] {
                let rec = &self.seats[s];
                if s == next_seat(discarder) {
                    opt.chi = chi_candidates(rec, tile)
                        .into_iter()
                        .filter(|c| has_discard_after_call(rec, MeldType::Chi, c, tile))
                        .collect();
                }
                opt.pon = pon_candidates(rec, tile)
                    .into_iter()
                    .filter(|c| has_discard_after_call(rec, MeldType::Pon, c, tile))
                    .collect();
                if self.kan_seats.len() < MAX_KAN {
                    opt.kan = open_kan_candidate(rec, tile);
                }
            }
            if !opt.is_empty() {
                options.push((s, opt));
            }
        }

        let mut responses = vec![];
        for (s, opt) in &options {
            let s = *s;
            let resp = {
                let view =
                    View::new(s, discarder, ActionKind::Discard, tile, &self.seats, &self.round);
                self.agents[s].discard_response(&view, tile)
            };
            debug!("seat {} responds {:?}", s, resp);
            check_discard_response(s, opt, &resp)?;
            responses.push((s, resp));
        }

        // ロン (放銃者から近い順)
        let mut winners: Vec<Seat> = responses
            .iter()
            .filter(|(_, r)| *r == DiscardResponse::Win)
            .map(|(s, _)| *s)
            .collect();
        if !winners.is_empty() {
            if !self.config.multiple_ron {
                winners.truncate(1);
            }
            let wins = winners
                .into_iter()
                .filter_map(|s| self.win_record(s, discarder, ActionKind::Discard, tile))
                .collect();
            self.end_win(HandEndReason::Discard, wins);
            return Ok(true);
        }

        if let Some(s) = self.pending_riichi.take() {
            self.accept_riichi(s);
            if self.round.riichi_count() == SEAT {
                self.end_draw(DrawType::Suuchariichi);
                return Ok(true);
            }
        }

        // 大明槓 > ポン > チー
        let call = responses
            .into_iter()
            .filter_map(|(s, r)| match r {
                DiscardResponse::Call(spec) => Some((s, spec)),
                _ => None,
            })
            .max_by_key(|(_, spec)| match spec.meld_type {
                MeldType::Minkan => 2,
                MeldType::Pon => 1,
                _ => 0,
            });
        if let Some((s, spec)) = call {
            self.apply_call(s, discarder, tile, spec)?;
            return Ok(false);
        }

        if self.is_suufuurenda() {
            self.end_draw(DrawType::Suufuurenda);
            return Ok(true);
        }
        if self.pending_abort && self.config.four_kan_abort {
            self.end_draw(DrawType::Suukansanra);
            return Ok(true);
        }

        self.phase = Phase::AwaitDraw {
            seat: next_seat(discarder),
            is_replacement: false,
        };
        Ok(false)
    }

    // [チー・ポン・大明槓]
    fn apply_call(&mut self, seat: Seat, discarder: Seat, tile: Tile, spec: MeldSpec) -> Res {
        let mut tiles = vec![];
        for &t in &spec.tiles {
            let x = self.seats[seat].remove_tile(t).ok_or_else(|| {
                MahjongError::illegal(seat, &spec, format!("{} is not in hand", t))
            })?;
            tiles.push(x);
        }
        tiles.push(tile);
        let meld = Meld::new(seat, spec.meld_type, tiles, Some(tile), discarder)
            .map_err(|e| MahjongError::illegal(seat, &spec, e.to_string()))?;

        info!("seat {} calls {}", seat, meld);
        self.round.ippatsu = [false; SEAT];
        self.seats[seat].melds.push(meld.clone());
        self.notify_event(Event::meld(seat, meld));

        if spec.meld_type == MeldType::Minkan {
            self.record_kan(seat);
            self.phase = Phase::AwaitDraw {
                seat,
                is_replacement: true,
            };
        } else {
            self.phase = Phase::AwaitCallDiscard {
                seat,
                meld: self.seats[seat].melds.len() - 1,
            };
        }
        Ok(())
    }

    // [流局・和了]
    fn no_calls(&self) -> bool {
        self.seats.iter().all(|r| r.melds.is_empty())
    }

    // 四風連打 (第一巡で4人が同じ字牌を打牌)
    fn is_suufuurenda(&self) -> bool {
        if !self.no_calls() || self.seats.iter().any(|r| r.discards.len() != 1) {
            return false;
        }
        let t = self.seats[0].discards[0].tile;
        t.is_honor() && self.seats.iter().all(|r| r.discards[0].tile == t)
    }

    fn scores(&self) -> [Score; SEAT] {
        let mut scores = [0; SEAT];
        for (sc, rec) in scores.iter_mut().zip(&self.seats) {
            *sc = rec.score;
        }
        scores
    }

    fn win_record(
        &self,
        seat: Seat,
        actor: Seat,
        action: ActionKind,
        tile: Tile,
    ) -> Option<WinRecord> {
        let view = View::new(seat, actor, action, tile, &self.seats, &self.round);
        let yaku = evaluate_win(&view)?;
        Some(WinRecord {
            seat,
            from: if actor == seat { None } else { Some(actor) },
            tile,
            hand: view.winning_hand(),
            melds: self.seats[seat].melds.clone(),
            yaku,
        })
    }

    fn end_win(&mut self, reason: HandEndReason, wins: Vec<WinRecord>) {
        let ura_doras = if wins.iter().any(|w| self.round.riichi[w.seat]) {
            self.wall.ura_indicators().to_vec()
        } else {
            vec![]
        };
        let riichi_sticks = self.round.riichi_sticks;
        self.round.riichi_sticks = 0;
        self.finish(HandResult {
            reason,
            wins,
            tenpai: [false; SEAT],
            riichi_sticks,
            scores: self.scores(),
            doras: self.round.dora_indicators.clone(),
            ura_doras,
        });
    }

    fn end_draw(&mut self, draw: DrawType) {
        let mut tenpai = [false; SEAT];
        if draw == DrawType::Kouhaiheikyoku {
            for (tp, rec) in tenpai.iter_mut().zip(&self.seats) {
                *tp = is_tenpai(&rec.hand);
            }
        }
        self.finish(HandResult {
            reason: HandEndReason::Draw(draw),
            wins: vec![],
            tenpai,
            riichi_sticks: self.round.riichi_sticks,
            scores: self.scores(),
            doras: self.round.dora_indicators.clone(),
            ura_doras: vec![],
        });
    }

    fn finish(&mut self, result: HandResult) {
        info!("hand end: {}", result);
        self.phase = Phase::HandEnd;
        self.notify_event(Event::End(result.clone()));
        self.result = Some(result);
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("agents", &self.agents)
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("seats", &self.seats)
            .finish()
    }
}

// 選択肢に含まれない応答はProtocolViolation
// 選択肢の種類は正しいが使用する牌が不正な応答はIllegalAction
fn check_discard_response(seat: Seat, opt: &CallOptions, resp: &DiscardResponse) -> Res {
    let same_pair = |cands: &[[Tile; 2]], tiles: &[Tile]| {
        tiles.len() == 2
            && cands.iter().any(|c| {
                (c[0] == tiles[0] && c[1] == tiles[1]) || (c[0] == tiles[1] && c[1] == tiles[0])
            })
    };

    match resp {
        DiscardResponse::Pass => Ok(()),
        DiscardResponse::Win => {
            if opt.win {
                Ok(())
            } else {
                Err(MahjongError::illegal(seat, resp, "no winning hand with yaku"))
            }
        }
        DiscardResponse::Call(spec) => {
            let ok = match (spec.meld_type, opt.kan) {
                (MeldType::Chi, _) if !opt.chi.is_empty() => same_pair(&opt.chi, &spec.tiles),
                (MeldType::Pon, _) if !opt.pon.is_empty() => same_pair(&opt.pon, &spec.tiles),
                (MeldType::Minkan, Some(kan)) => {
                    spec.tiles.len() == 3 && spec.tiles.iter().all(|t| kan.contains(t))
                }
                (t, _) => {
                    return Err(MahjongError::protocol(
                        seat,
                        resp,
                        format!("{:?} is not available", t),
                    ))
                }
            };
            if ok {
                Ok(())
            } else {
                Err(MahjongError::illegal(seat, resp, "tiles do not form the meld"))
            }
        }
    }
}
