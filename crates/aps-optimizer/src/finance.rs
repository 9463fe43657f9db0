//! 成本與利潤會計

use aps_core::{CarryOverState, CostBreakdown, PlanDecision, PlanningConstants, RealizedDemand};
use rust_decimal::Decimal;

/// 成本會計
///
/// 由整數決策值與常數以 `Decimal` 精確重算各成本項，
/// 避免求解器浮點目標值滲入回報的金額。
pub struct CostAccountant;

impl CostAccountant {
    /// 計算一期的成本明細
    ///
    /// 正常與加班人力成本皆按期初員工數計。
    pub fn assess(
        constants: &PlanningConstants,
        demand: &RealizedDemand,
        state: &CarryOverState,
        decision: &PlanDecision,
    ) -> CostBreakdown {
        CostBreakdown {
            revenue: demand.quantity * constants.selling_price,
            production_cost: Decimal::from(decision.production_qty)
                * constants.unit_production_cost,
            holding_cost: Decimal::from(decision.ending_inventory)
                * constants.holding_cost_per_unit,
            backorder_cost: Decimal::from(decision.ending_backorders)
                * constants.backorder_cost_per_unit,
            hiring_cost: Decimal::from(decision.workers_hired) * constants.hiring_cost,
            firing_cost: Decimal::from(decision.workers_fired) * constants.firing_cost,
            regular_labor_cost: constants.regular_labor_cost(state.workforce),
            overtime_labor_cost: constants
                .overtime_labor_cost(state.workforce, decision.overtime_hours_per_day),
        }
    }

    /// 罰分前利潤（收益 − 總成本，即求解器的目標值）
    pub fn gross_profit(costs: &CostBreakdown) -> Decimal {
        costs.revenue - costs.total_cost()
    }
}
