// 手牌の分解と役の判定を行うモジュール
mod evaluate;
mod split;
mod wait;
mod yaku;

pub use self::{
    evaluate::{count_dora, count_red, evaluate_win, evaluate_yaku, is_winning_shape},
    split::{is_normal_form, normal_form_split, Group, GroupType, Split, SplitIter},
    wait::{
        guoshi_wait_list, is_guoshi_form, is_seven_pair_form, is_tenpai, is_winning_form,
        normal_form_wait_list, seven_pair_wait_list, tenpai_discards, wait_list,
    },
    yaku::{ParsedHand, SetPair, SetPairType, Yaku, YakuCheck, YakuContext, YakuId, YAKU_LIST},
};
