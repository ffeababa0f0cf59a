use std::fmt;

use serde::{Deserialize, Serialize};

use super::split::{normal_form_split, GroupType, Split};
use super::wait::{is_guoshi_form, is_seven_pair_form};
use crate::model::*;

use SetPairType::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YakuId {
    Bakaze,
    Jikaze,
    Haku,
    Hatsu,
    Chun,
    Tanyaochuu,
    Pinfu,
    Iipeikou,
    Ryanpeikou,
    Ikkitsuukan,
    Sanshokudoujun,
    Sanshokudoukou,
    Chanta,
    Junchan,
    Honroutou,
    Chinroutou,
    Toitoihou,
    Sanankou,
    Suuankou,
    Suuankoutanki,
    Sankantsu,
    Suukantsu,
    Honiisou,
    Chiniisou,
    Shousangen,
    Daisangen,
    Shousuushii,
    Daisuushii,
    Ryuuiisou,
    Tsuuiisou,
    Chuurenpoutou,
    Junseichuurenpoutou,
    Kokushimusou,
    Kokushimusoujuusanmenmachi,
    Chiitoitsu,
    Menzentsumo,
    Riichi,
    Dabururiichi,
    Ippatsu,
    Haiteiraoyue,
    Houteiraoyui,
    Rinshankaihou,
    Chankan,
    Tenhou,
    Tiihou,
}

impl YakuId {
    pub fn yaku(self) -> &'static Yaku {
        // YAKU_LISTはYakuIdをすべて含む
        YAKU_LIST
            .iter()
            .find(|y| y.id == self)
            .unwrap_or(&YAKU_LIST[0])
    }

    pub fn name(self) -> &'static str {
        self.yaku().name
    }

    pub fn is_yakuman(self) -> bool {
        self.yaku().fan_close >= 13
    }
}

impl fmt::Display for YakuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// [ParsedHand]
// 門前の分解に副露を加えたすべての面子

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPairType {
    Pair,    // 雀頭
    Shuntsu, // 順子
    Koutsu,  // 刻子
    Chi,     // チー
    Pon,     // ポン
    Minkan,  // 明槓 (加槓を含む)
    Ankan,   // 暗槓
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPair(pub SetPairType, pub Tile);

impl SetPair {
    #[inline]
    fn is_run(&self) -> bool {
        matches!(self.0, Shuntsu | Chi)
    }

    #[inline]
    fn is_triplet(&self) -> bool {
        matches!(self.0, Koutsu | Pon | Minkan | Ankan)
    }

    // 么九牌を含む
    fn has_end(&self) -> bool {
        if self.is_run() {
            self.1.rank() == 1 || self.1.rank() == 7
        } else {
            self.1.is_end()
        }
    }
}

#[derive(Debug, Default)]
struct Counts {
    shuntsu: usize,
    koutsu: usize,
    chi: usize,
    pon: usize,
    minkan: usize,
    ankan: usize,
    shuntsu_total: usize, // shuntsu + chi
    koutsu_total: usize,  // koutsu + pon + minkan + ankan
    ankou_total: usize,   // koutsu + ankan (ロンで完成した刻子は除く)
}

#[derive(Debug)]
pub struct ParsedHand {
    sets: Vec<SetPair>,
    pair: Tile,
    counts: Counts,
    iipeikou_count: usize, // 一盃口, 二盃口用
}

impl ParsedHand {
    fn new(split: &Split, melds: &[Meld], winning_tile: Tile, is_self_drawn: bool) -> Self {
        let mut sets = vec![];
        let mut pair = winning_tile;
        for g in split {
            sets.push(match g.0 {
                GroupType::Pair => {
                    pair = g.1;
                    SetPair(Pair, g.1)
                }
                GroupType::Run => SetPair(Shuntsu, g.1),
                GroupType::Triplet => SetPair(Koutsu, g.1),
            });
        }
        for m in melds {
            sets.push(match m.meld_type() {
                MeldType::Chi => SetPair(Chi, m.head()),
                MeldType::Pon => SetPair(Pon, m.head()),
                MeldType::Minkan | MeldType::Kakan => SetPair(Minkan, m.head()),
                MeldType::Ankan => SetPair(Ankan, m.head()),
            });
        }

        let mut cnt = Counts::default();
        for SetPair(tp, _) in &sets {
            match tp {
                Pair => {}
                Shuntsu => cnt.shuntsu += 1,
                Koutsu => cnt.koutsu += 1,
                Chi => cnt.chi += 1,
                Pon => cnt.pon += 1,
                Minkan => cnt.minkan += 1,
                Ankan => cnt.ankan += 1,
            }
        }
        cnt.shuntsu_total = cnt.shuntsu + cnt.chi;
        cnt.koutsu_total = cnt.koutsu + cnt.pon + cnt.minkan + cnt.ankan;
        cnt.ankou_total = cnt.koutsu + cnt.ankan;

        // ロン和了で和了牌が刻子にしか含まれない場合,その刻子は明刻扱い
        if !is_self_drawn {
            let in_other = split
                .iter()
                .any(|g| g.0 != GroupType::Triplet && g.contains(winning_tile));
            let in_triplet = split
                .iter()
                .any(|g| g.0 == GroupType::Triplet && g.1 == winning_tile);
            if in_triplet && !in_other {
                cnt.ankou_total -= 1;
            }
        }

        let mut runs = TileTable::default();
        for SetPair(tp, t) in &sets {
            if *tp == Shuntsu {
                table_inc(&mut runs, *t, 1);
            }
        }
        let iipeikou_count = runs.iter().flatten().map(|&n| n as usize / 2).sum();

        Self {
            sets,
            pair,
            counts: cnt,
            iipeikou_count,
        }
    }
}

// [YakuContext]
pub struct YakuContext<'a> {
    view: View<'a>,
    seat: Seat,
    hand: Vec<Tile>,       // 和了牌を含む門前の手牌
    melds: &'a [Meld],     // 自分の副露
    tiles: Vec<Tile>,      // 手牌と副露のすべての牌
    winning_tile: Tile,    // 和了牌
    is_self_drawn: bool,   // ツモ和了
    is_open: bool,         // 鳴きの有無 (暗槓は含まない)
    prevalent_wind: Rank,  // 場風
    seat_wind: Rank,       // 自風
    parsed: Vec<ParsedHand>,
}

impl<'a> YakuContext<'a> {
    // 面子分解は1度だけ行い,すべての役で共有する
    pub fn new(view: &View<'a>) -> Self {
        let seat = view.seat();
        let hand = view.winning_hand();
        let melds = view.melds(seat);
        let winning_tile = view.tile();
        let is_self_drawn = view.is_self_draw();

        let mut tiles = hand.clone();
        for m in melds {
            tiles.extend_from_slice(m.tiles());
        }

        let parsed = normal_form_split(&hand)
            .map(|s| ParsedHand::new(&s, melds, winning_tile, is_self_drawn))
            .collect();

        Self {
            view: *view,
            seat,
            hand,
            melds,
            tiles,
            winning_tile,
            is_self_drawn,
            is_open: melds.iter().any(|m| m.is_open()),
            prevalent_wind: view.round_wind(),
            seat_wind: view.seat_wind(seat),
            parsed,
        }
    }

    pub fn has_normal_form(&self) -> bool {
        !self.parsed.is_empty()
    }

    // 成立している役をYAKU_LISTの順に返却
    // 分解に依存する役はいずれか1つの分解で成立すればよい (役ごとに独立に判定)
    pub fn calc_yaku(&self) -> Vec<YakuId> {
        YAKU_LIST
            .iter()
            .filter(|y| match y.check {
                YakuCheck::View(f) => f(self),
                YakuCheck::Split(f) => self.parsed.iter().any(|ph| f(self, ph)),
            })
            .map(|y| y.id)
            .collect()
    }

    // 和了牌を1枚除いた13枚
    fn hand_before_win(&self) -> Vec<Tile> {
        let mut h = self.hand.clone();
        if let Some(i) = h.iter().position(|t| *t == self.winning_tile) {
            h.remove(i);
        }
        h
    }

    // 刻子(槓子)として揃っているか. 副露していない場合は手牌にちょうど3枚
    fn has_honor_triplet(&self, t: Tile) -> bool {
        if self.melds.iter().any(|m| !m.is_run() && m.head() == t) {
            return true;
        }
        self.hand.iter().filter(|h| **h == t).count() == 3
    }

    fn is_first_draw(&self) -> bool {
        self.is_self_drawn
            && self.view.action() == ActionKind::Draw
            && self.view.no_melds_on_table()
            && self.view.discards(self.seat).is_empty()
    }
}

pub enum YakuCheck {
    View(fn(&YakuContext<'_>) -> bool),
    Split(fn(&YakuContext<'_>, &ParsedHand) -> bool),
}

pub struct Yaku {
    pub id: YakuId,
    pub name: &'static str,
    pub check: YakuCheck,
    pub fan_close: usize, // 鳴きなしの翻
    pub fan_open: usize,  // 鳴きありの翻(食い下がり)
}

impl fmt::Debug for Yaku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.name, self.fan_close, self.fan_open)
    }
}

macro_rules! yaku {
    ($id: ident, $n: expr, view $f: expr, $c: expr, $o: expr) => {
        Yaku {
            id: YakuId::$id,
            name: $n,
            check: YakuCheck::View($f),
            fan_close: $c,
            fan_open: $o,
        }
    };
    ($id: ident, $n: expr, split $f: expr, $c: expr, $o: expr) => {
        Yaku {
            id: YakuId::$id,
            name: $n,
            check: YakuCheck::Split($f),
            fan_close: $c,
            fan_open: $o,
        }
    };
}

pub static YAKU_LIST: &[Yaku] = &[
    yaku!(Bakaze, "場風", view is_bakaze, 1, 1),
    yaku!(Jikaze, "自風", view is_jikaze, 1, 1),
    yaku!(Haku, "白", view is_haku, 1, 1),
    yaku!(Hatsu, "發", view is_hatsu, 1, 1),
    yaku!(Chun, "中", view is_chun, 1, 1),
    yaku!(Tanyaochuu, "断么九", view is_tanyaochuu, 1, 1),
    yaku!(Pinfu, "平和", split is_pinfu, 1, 0),
    yaku!(Iipeikou, "一盃口", split is_iipeikou, 1, 0),
    yaku!(Ryanpeikou, "二盃口", split is_ryanpeikou, 3, 0),
    yaku!(Ikkitsuukan, "一気通貫", split is_ikkitsuukan, 2, 1),
    yaku!(Sanshokudoujun, "三色同順", split is_sanshokudoujun, 2, 1),
    yaku!(Sanshokudoukou, "三色同刻", split is_sanshokudoukou, 2, 2),
    yaku!(Chanta, "チャンタ", split is_chanta, 2, 1),
    yaku!(Junchan, "純チャン", split is_junchan, 3, 2),
    yaku!(Honroutou, "混老頭", view is_honroutou, 2, 2),
    yaku!(Chinroutou, "清老頭", view is_chinroutou, 13, 13),
    yaku!(Toitoihou, "対々和", split is_toitoihou, 2, 2),
    yaku!(Sanankou, "三暗刻", split is_sanankou, 2, 2),
    yaku!(Suuankou, "四暗刻", split is_suuankou, 13, 0),
    yaku!(Suuankoutanki, "四暗刻単騎", split is_suuankoutanki, 14, 0),
    yaku!(Sankantsu, "三槓子", view is_sankantsu, 2, 2),
    yaku!(Suukantsu, "四槓子", view is_suukantsu, 13, 13),
    yaku!(Honiisou, "混一色", view is_honiisou, 3, 2),
    yaku!(Chiniisou, "清一色", view is_chiniisou, 6, 5),
    yaku!(Shousangen, "小三元", split is_shousangen, 2, 2),
    yaku!(Daisangen, "大三元", split is_daisangen, 13, 13),
    yaku!(Shousuushii, "小四喜", split is_shousuushii, 13, 13),
    yaku!(Daisuushii, "大四喜", split is_daisuushii, 14, 14),
    yaku!(Ryuuiisou, "緑一色", view is_ryuuiisou, 13, 13),
    yaku!(Tsuuiisou, "字一色", view is_tsuuiisou, 13, 13),
    yaku!(Chuurenpoutou, "九蓮宝燈", view is_chuurenpoutou, 13, 0),
    yaku!(Junseichuurenpoutou, "純正九蓮宝燈", view is_junseichuurenpoutou, 14, 0),
    // 特殊な組み合わせ
    yaku!(Kokushimusou, "国士無双", view is_kokushimusou, 13, 0),
    yaku!(Kokushimusoujuusanmenmachi, "国士無双十三面待ち", view is_kokushimusoujuusanmenmachi, 14, 0),
    yaku!(Chiitoitsu, "七対子", view is_chiitoitsu, 2, 0),
    // 特殊条件
    yaku!(Menzentsumo, "門前自摸", view is_menzentsumo, 1, 0),
    yaku!(Riichi, "リーチ", view is_riichi, 1, 0),
    yaku!(Dabururiichi, "ダブルリーチ", view is_dabururiichi, 2, 0),
    yaku!(Ippatsu, "一発", view is_ippatsu, 1, 0),
    yaku!(Haiteiraoyue, "海底撈月", view is_haiteiraoyue, 1, 1),
    yaku!(Houteiraoyui, "河底撈魚", view is_houteiraoyui, 1, 1),
    yaku!(Rinshankaihou, "嶺上開花", view is_rinshankaihou, 1, 1),
    yaku!(Chankan, "槍槓", view is_chankan, 1, 1),
    yaku!(Tenhou, "天和", view is_tenhou, 13, 0),
    yaku!(Tiihou, "地和", view is_tiihou, 13, 0),
];

// 役の優先順位と点数計算は外部で行う
// 以下の役は条件が排他的になるように定義
//     一盃口, 二盃口
//     チャンタ, 純チャンタ
//     混老頭, 清老頭, 字一色
//     混一色, 清一色
//     三暗刻, 四暗刻, 四暗刻単騎
//     三槓子, 四槓子
//     小四喜, 大四喜
//     九蓮宝燈, 純正九蓮宝燈
//     国士無双, 国士無双十三面待ち
//     リーチ, ダブルリーチ

const GREEN: [Tile; 5] = [
    Tile::kind(Category::Suo, 2),
    Tile::kind(Category::Suo, 3),
    Tile::kind(Category::Suo, 4),
    Tile::kind(Category::Suo, 6),
    Tile::kind(Category::Dragon, DG),
];

// 場風
fn is_bakaze(ctx: &YakuContext<'_>) -> bool {
    ctx.has_honor_triplet(Tile::kind(Category::Wind, ctx.prevalent_wind))
}

// 自風
fn is_jikaze(ctx: &YakuContext<'_>) -> bool {
    ctx.has_honor_triplet(Tile::kind(Category::Wind, ctx.seat_wind))
}

// 白
fn is_haku(ctx: &YakuContext<'_>) -> bool {
    ctx.has_honor_triplet(Tile::kind(Category::Dragon, DW))
}

// 發
fn is_hatsu(ctx: &YakuContext<'_>) -> bool {
    ctx.has_honor_triplet(Tile::kind(Category::Dragon, DG))
}

// 中
fn is_chun(ctx: &YakuContext<'_>) -> bool {
    ctx.has_honor_triplet(Tile::kind(Category::Dragon, DR))
}

// 断么九
fn is_tanyaochuu(ctx: &YakuContext<'_>) -> bool {
    ctx.tiles.iter().all(|t| t.is_simple())
}

// 平和 (門前で4順子)
fn is_pinfu(ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ctx.melds.is_empty() && ph.counts.shuntsu == 4
}

// 一盃口
fn is_iipeikou(ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    !ctx.is_open && ph.iipeikou_count == 1
}

// 二盃口
fn is_ryanpeikou(ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    !ctx.is_open && ph.iipeikou_count == 2
}

// 一気通貫
fn is_ikkitsuukan(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    if ph.counts.shuntsu_total < 3 {
        return false;
    }

    let mut f147 = [[false; 3]; 3];
    for s in &ph.sets {
        if s.is_run() {
            let (t, r) = (s.1.category().index(), s.1.rank());
            if r == 1 || r == 4 || r == 7 {
                f147[t][r as usize / 3] = true;
            }
        }
    }

    f147.iter().any(|f| f[0] && f[1] && f[2])
}

// 同じ数字が萬子,筒子,索子のすべてに存在するか
fn is_sanshoku(ph: &ParsedHand, pred: fn(&SetPair) -> bool) -> bool {
    let mut mps = [[false; 3]; TNUM];
    for s in &ph.sets {
        if pred(s) && s.1.is_number() {
            mps[s.1.rank() as usize][s.1.category().index()] = true;
        }
    }
    mps.iter().any(|m| m[0] && m[1] && m[2])
}

// 三色同順
fn is_sanshokudoujun(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.shuntsu_total >= 3 && is_sanshoku(ph, SetPair::is_run)
}

// 三色同刻
fn is_sanshokudoukou(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.koutsu_total >= 3 && is_sanshoku(ph, SetPair::is_triplet)
}

// チャンタ
fn is_chanta(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.shuntsu_total != 0
        && ph.sets.iter().all(|s| s.has_end())
        && ph.sets.iter().any(|s| s.1.is_honor())
}

// 純チャン
fn is_junchan(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.shuntsu_total != 0
        && ph.sets.iter().all(|s| s.has_end() && !s.1.is_honor())
}

// 混老頭 (国士無双は除く)
fn is_honroutou(ctx: &YakuContext<'_>) -> bool {
    ctx.tiles.iter().all(|t| t.is_end())
        && ctx.tiles.iter().any(|t| t.is_honor())
        && ctx.tiles.iter().any(|t| t.is_terminal())
        && !is_guoshi_form(&ctx.hand)
}

// 清老頭
fn is_chinroutou(ctx: &YakuContext<'_>) -> bool {
    ctx.tiles.iter().all(|t| t.is_terminal())
}

// 対々和
fn is_toitoihou(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.koutsu_total == 4
}

// 三暗刻
fn is_sanankou(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.ankou_total == 3
}

// 四暗刻
fn is_suuankou(ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.ankou_total == 4 && ph.pair != ctx.winning_tile
}

// 四暗刻単騎
fn is_suuankoutanki(ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    ph.counts.ankou_total == 4 && ph.pair == ctx.winning_tile
}

// 三槓子
fn is_sankantsu(ctx: &YakuContext<'_>) -> bool {
    ctx.melds.iter().filter(|m| m.is_kan()).count() == 3
}

// 四槓子
fn is_suukantsu(ctx: &YakuContext<'_>) -> bool {
    ctx.melds.iter().filter(|m| m.is_kan()).count() == 4
}

// 数牌の種別 (数牌を含まない場合はNone, 複数の場合はSome(None))
fn number_category(ctx: &YakuContext<'_>) -> Option<Option<Category>> {
    let mut cat = None;
    for t in ctx.tiles.iter().filter(|t| t.is_number()) {
        match cat {
            None => cat = Some(Some(t.category())),
            Some(Some(c)) if c != t.category() => return Some(None),
            _ => {}
        }
    }
    cat
}

// 混一色
fn is_honiisou(ctx: &YakuContext<'_>) -> bool {
    matches!(number_category(ctx), Some(Some(_))) && ctx.tiles.iter().any(|t| t.is_honor())
}

// 清一色
fn is_chiniisou(ctx: &YakuContext<'_>) -> bool {
    matches!(number_category(ctx), Some(Some(_))) && ctx.tiles.iter().all(|t| t.is_number())
}

fn count_triplets(ph: &ParsedHand, pred: fn(&Tile) -> bool) -> usize {
    ph.sets
        .iter()
        .filter(|s| s.is_triplet() && pred(&s.1))
        .count()
}

// 小三元
fn is_shousangen(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    count_triplets(ph, Tile::is_dragon) == 2 && ph.pair.is_dragon()
}

// 大三元
fn is_daisangen(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    count_triplets(ph, Tile::is_dragon) == 3
}

// 小四喜
fn is_shousuushii(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    count_triplets(ph, Tile::is_wind) == 3 && ph.pair.is_wind()
}

// 大四喜
fn is_daisuushii(_ctx: &YakuContext<'_>, ph: &ParsedHand) -> bool {
    count_triplets(ph, Tile::is_wind) == 4
}

// 緑一色
fn is_ryuuiisou(ctx: &YakuContext<'_>) -> bool {
    ctx.tiles.iter().all(|t| GREEN.contains(t))
}

// 字一色
fn is_tsuuiisou(ctx: &YakuContext<'_>) -> bool {
    ctx.tiles.iter().all(|t| t.is_honor())
}

// 九蓮宝燈の形 (1112345678999 + 1枚) の場合,その数牌の枚数表を返却
fn chuuren_row(ctx: &YakuContext<'_>) -> Option<TileRow> {
    if !ctx.melds.is_empty() || ctx.hand.len() != 14 {
        return None;
    }
    let cat = match number_category(ctx) {
        Some(Some(c)) if ctx.hand.iter().all(|t| t.is_number()) => c,
        _ => return None,
    };
    let row = tiles_to_tile_table(&ctx.hand)[cat.index()];
    let ok = row[1] >= 3 && row[9] >= 3 && (2..9).all(|i| row[i] >= 1);
    if ok {
        Some(row)
    } else {
        None
    }
}

// 和了牌を除いた13枚が1112345678999
fn is_pure_chuuren(ctx: &YakuContext<'_>) -> bool {
    let before = tiles_to_tile_table(&ctx.hand_before_win());
    let row = before[ctx.winning_tile.category().index()];
    row == [0, 3, 1, 1, 1, 1, 1, 1, 1, 3]
}

// 九蓮宝燈
fn is_chuurenpoutou(ctx: &YakuContext<'_>) -> bool {
    chuuren_row(ctx).is_some() && !is_pure_chuuren(ctx)
}

// 純正九蓮宝燈
fn is_junseichuurenpoutou(ctx: &YakuContext<'_>) -> bool {
    chuuren_row(ctx).is_some() && is_pure_chuuren(ctx)
}

// 和了牌を除いた13枚がすべて異なる
fn is_guoshi_thirteen_way(ctx: &YakuContext<'_>) -> bool {
    let before = ctx.hand_before_win();
    let tt = tiles_to_tile_table(&before);
    ORPHANS.iter().all(|&t| table_count(&tt, t) == 1)
}

// 国士無双
fn is_kokushimusou(ctx: &YakuContext<'_>) -> bool {
    is_guoshi_form(&ctx.hand) && !is_guoshi_thirteen_way(ctx)
}

// 国士無双十三面待ち
fn is_kokushimusoujuusanmenmachi(ctx: &YakuContext<'_>) -> bool {
    is_guoshi_form(&ctx.hand) && is_guoshi_thirteen_way(ctx)
}

// 七対子 (二盃口として分解できる場合は除く)
fn is_chiitoitsu(ctx: &YakuContext<'_>) -> bool {
    is_seven_pair_form(&ctx.hand) && !ctx.has_normal_form()
}

// 門前自摸
fn is_menzentsumo(ctx: &YakuContext<'_>) -> bool {
    ctx.is_self_drawn && !ctx.is_open
}

// リーチ
fn is_riichi(ctx: &YakuContext<'_>) -> bool {
    ctx.view.is_riichi(ctx.seat) && !ctx.view.is_double_riichi(ctx.seat)
}

// ダブルリーチ
fn is_dabururiichi(ctx: &YakuContext<'_>) -> bool {
    ctx.view.is_double_riichi(ctx.seat)
}

// 一発
fn is_ippatsu(ctx: &YakuContext<'_>) -> bool {
    ctx.view.is_riichi(ctx.seat) && ctx.view.is_ippatsu(ctx.seat)
}

// 海底撈月
fn is_haiteiraoyue(ctx: &YakuContext<'_>) -> bool {
    ctx.is_self_drawn && ctx.view.action() == ActionKind::Draw && ctx.view.wall_count() == 0
}

// 河底撈魚
fn is_houteiraoyui(ctx: &YakuContext<'_>) -> bool {
    ctx.view.action() == ActionKind::Discard && ctx.view.wall_count() == 0
}

// 嶺上開花
fn is_rinshankaihou(ctx: &YakuContext<'_>) -> bool {
    ctx.is_self_drawn && ctx.view.action() == ActionKind::ReplacementDraw
}

// 槍槓
fn is_chankan(ctx: &YakuContext<'_>) -> bool {
    ctx.view.action() == ActionKind::Kakan && ctx.view.actor() != ctx.seat
}

// 天和
fn is_tenhou(ctx: &YakuContext<'_>) -> bool {
    ctx.is_first_draw() && ctx.seat == ctx.view.dealer()
}

// 地和
fn is_tiihou(ctx: &YakuContext<'_>) -> bool {
    ctx.is_first_draw() && ctx.seat != ctx.view.dealer()
}
