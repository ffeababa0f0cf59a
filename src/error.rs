use std::fmt;

use thiserror::Error;

use crate::model::Seat;

// 局を継続できないエラーの一覧
// Agentは合法手のみを返すことが前提なので,いずれも回復処理は行わない
#[derive(Debug, Error)]
pub enum MahjongError {
    // 牌や副露の不正な生成
    #[error("construction error: {0}")]
    Construction(String),

    // 合法性の前提条件を満たさない操作 (錯和, 不正な槓やリーチなど)
    #[error("illegal action by seat {seat}: {action} ({reason})")]
    IllegalAction {
        seat: Seat,
        action: String,
        reason: String,
    },

    // 提示した選択肢に含まれない応答
    #[error("protocol violation by seat {seat}: {response} ({reason})")]
    ProtocolViolation {
        seat: Seat,
        response: String,
        reason: String,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl MahjongError {
    pub fn construction(reason: impl Into<String>) -> Self {
        Self::Construction(reason.into())
    }

    pub fn illegal(seat: Seat, action: impl fmt::Debug, reason: impl Into<String>) -> Self {
        Self::IllegalAction {
            seat,
            action: format!("{:?}", action),
            reason: reason.into(),
        }
    }

    pub fn protocol(seat: Seat, response: impl fmt::Debug, reason: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            seat,
            response: format!("{:?}", response),
            reason: reason.into(),
        }
    }

    // エラーの原因となった座席 (生成エラーの場合はNone)
    pub fn seat(&self) -> Option<Seat> {
        match self {
            Self::IllegalAction { seat, .. } | Self::ProtocolViolation { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}

pub type Res<T = ()> = Result<T, MahjongError>;
