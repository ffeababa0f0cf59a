use serde::{Deserialize, Serialize};

use crate::error::{MahjongError, Res};
use crate::model::*;

// [TableConfig]
// 卓のルール設定 省略された項目は既定値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub initial_score: Score, // 配給原点
    pub red_fives: usize,     // 各数牌の赤5の枚数
    pub riichi_cost: Score,   // リーチ棒
    pub seed: u64,            // 牌山生成のシード値
    pub multiple_ron: bool,   // ダブロン, トリロンの有無 (無効の場合は上家取り)
    pub four_kan_abort: bool, // 四槓散了の有無
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_score: 25000,
            red_fives: 1,
            riichi_cost: 1000,
            seed: 0,
            multiple_ron: true,
            four_kan_abort: true,
        }
    }
}

impl TableConfig {
    pub fn from_json(s: &str) -> Res<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Res {
        if self.red_fives > TILE {
            return Err(MahjongError::construction(format!(
                "red_fives must be at most {}: {}",
                TILE, self.red_fives
            )));
        }
        if self.riichi_cost < 0 {
            return Err(MahjongError::construction("riichi_cost must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = TableConfig::default();
        assert_eq!(c.initial_score, 25000);
        assert_eq!(c.red_fives, 1);
        assert_eq!(c.riichi_cost, 1000);
        assert!(c.multiple_ron && c.four_kan_abort);
    }

    #[test]
    fn test_from_json() {
        let c = TableConfig::from_json(r#"{"red_fives": 0, "seed": 7}"#).unwrap();
        assert_eq!(c.red_fives, 0);
        assert_eq!(c.seed, 7);
        assert_eq!(c.initial_score, 25000);

        assert!(matches!(
            TableConfig::from_json(r#"{"red_fives": 5}"#),
            Err(MahjongError::Construction(_))
        ));
        assert!(matches!(
            TableConfig::from_json("{"),
            Err(MahjongError::Config(_))
        ));
    }
}
