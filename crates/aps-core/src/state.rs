//! 結轉狀態模型

use serde::{Deserialize, Serialize};

use crate::{PeriodPlan, PlanningConstants};

/// 跨期結轉狀態（由呼叫端持有並於每次求解後推進）
///
/// 引擎本身無狀態：每次求解都是輸入的純函數，
/// 狀態轉移只經由 [`CarryOverState::advance`] 明確發生。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryOverState {
    /// 現有可用庫存
    pub inventory_on_hand: u64,

    /// 未結欠交
    pub backorders_pending: u64,

    /// 期初員工數
    pub workforce: u64,
}

impl CarryOverState {
    /// 創建新的結轉狀態
    pub fn new(inventory_on_hand: u64, backorders_pending: u64, workforce: u64) -> Self {
        Self {
            inventory_on_hand,
            backorders_pending,
            workforce,
        }
    }

    /// 從規劃常數的初始種子建立（會話起始時執行一次）
    pub fn from_constants(constants: &PlanningConstants) -> Self {
        Self {
            inventory_on_hand: constants.initial_inventory,
            backorders_pending: constants.initial_backorders,
            workforce: constants.initial_workforce,
        }
    }

    /// 以一期的求解結果推進狀態，產生下一期的結轉狀態
    ///
    /// 庫存與欠交直接取用求解結果；員工數 = 期初 + 聘僱 − 解僱。
    pub fn advance(&self, plan: &PeriodPlan) -> Self {
        Self {
            inventory_on_hand: plan.decision.ending_inventory,
            backorders_pending: plan.decision.ending_backorders,
            workforce: (self.workforce + plan.decision.workers_hired)
                .saturating_sub(plan.decision.workers_fired),
        }
    }
}
