//! 庫存目標罰分評估

use aps_core::PlanningConstants;
use rust_decimal::Decimal;

/// 庫存目標罰分
///
/// 超額與短缺互斥：期末庫存不可能同時高於且低於目標，
/// 故兩者至多一項為正。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryPenalty {
    /// 超出目標的罰分
    pub excess: Decimal,

    /// 低於目標的罰分
    pub shortage: Decimal,
}

impl InventoryPenalty {
    /// 總罰分
    pub fn total(&self) -> Decimal {
        self.excess + self.shortage
    }
}

/// 罰分評估器
///
/// 在最佳化完成「之後」執行：求解器的目標式不含罰分，
/// 因此所選的期末庫存在求解時並不知曉罰分存在。
pub struct PenaltyAssessor;

impl PenaltyAssessor {
    /// 依期末庫存與目標水準評估罰分
    pub fn assess(constants: &PlanningConstants, ending_inventory: u64) -> InventoryPenalty {
        let ending = Decimal::from(ending_inventory);
        let target = constants.target_inventory;

        let excess = (ending - target).max(Decimal::ZERO) * constants.excess_inventory_penalty;
        let shortage = (target - ending).max(Decimal::ZERO) * constants.shortage_inventory_penalty;

        InventoryPenalty { excess, shortage }
    }
}
