//! 期別最佳化主入口

use aps_core::{
    CarryOverState, FinancialSummary, PeriodPlan, PlanningConstants, RealizedDemand, Result,
};

use crate::finance::CostAccountant;
use crate::model::ProductionModel;
use crate::penalty::PenaltyAssessor;

/// 期別最佳化器
///
/// 持有驗證過的規劃常數；每次 [`solve`](Self::solve) 都是
/// 輸入的純函數，對相同輸入組回傳相同結果，失敗時不產生
/// 任何部分結果。
#[derive(Debug)]
pub struct PeriodOptimizer {
    constants: PlanningConstants,
}

impl PeriodOptimizer {
    /// 創建新的最佳化器（常數於此驗證一次）
    pub fn new(constants: PlanningConstants) -> Result<Self> {
        constants.validate()?;
        Ok(Self { constants })
    }

    /// 獲取規劃常數引用
    pub fn constants(&self) -> &PlanningConstants {
        &self.constants
    }

    /// 求解單一期別
    ///
    /// 建構一個混合整數規劃、求解、取出決策值，
    /// 並於求解後計算成本明細與庫存目標罰分。
    pub fn solve(&self, demand: &RealizedDemand, state: &CarryOverState) -> Result<PeriodPlan> {
        tracing::info!(
            "開始求解期別 {}：需求 {}，庫存 {}，欠交 {}，員工 {}",
            demand.period_id,
            demand.quantity,
            state.inventory_on_hand,
            state.backorders_pending,
            state.workforce
        );

        if !demand.is_integral() {
            tracing::warn!(
                "期別 {} 的需求 {} 非整數；決策變數皆為整數，庫存平衡可能無解",
                demand.period_id,
                demand.quantity
            );
        }

        let start_time = std::time::Instant::now();

        // Step 1: 建構並求解模型
        tracing::debug!("Step 1: 建構混合整數規劃模型");
        let raw = ProductionModel::new(&self.constants, demand, state).solve()?;

        // Step 2: 取出決策變數值
        tracing::debug!("Step 2: 取出決策變數值");
        let decision = raw.into_decision();

        // Step 3: 成本與罰分前利潤
        tracing::debug!("Step 3: 成本會計");
        let costs = CostAccountant::assess(&self.constants, demand, state, &decision);
        let gross_profit = CostAccountant::gross_profit(&costs);

        // Step 4: 庫存目標罰分（求解後評估，不在目標式內）
        tracing::debug!("Step 4: 罰分評估");
        let penalty = PenaltyAssessor::assess(&self.constants, decision.ending_inventory);

        let financials = FinancialSummary {
            gross_profit,
            excess_penalty: penalty.excess,
            shortage_penalty: penalty.shortage,
            total_penalty: penalty.total(),
            net_profit: gross_profit - penalty.total(),
        };

        tracing::info!(
            "期別 {} 求解完成，耗時 {:?}：生產 {}，淨利 {}",
            demand.period_id,
            start_time.elapsed(),
            decision.production_qty,
            financials.net_profit
        );

        Ok(PeriodPlan {
            period_id: demand.period_id.clone(),
            realized_demand: demand.quantity,
            decision,
            costs,
            financials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aps_core::{PlanError, MAX_OVERTIME_HOURS_PER_DAY};
    use rust_decimal::Decimal;

    fn sample_constants() -> PlanningConstants {
        PlanningConstants {
            selling_price: Decimal::from(50),
            unit_production_cost: Decimal::from(10),
            holding_cost_per_unit: Decimal::from(1),
            backorder_cost_per_unit: Decimal::from(5),
            hiring_cost: Decimal::from(20),
            firing_cost: Decimal::from(30),
            working_days: 60,
            normal_hours_per_day: Decimal::from(8),
            normal_hour_wage: Decimal::from(1),
            overtime_hour_wage: Decimal::from(2),
            normal_production_rate: Decimal::from(1),
            overtime_production_rate: Decimal::new(8, 1),
            target_inventory: Decimal::from(100),
            excess_inventory_penalty: Decimal::new(5, 1),
            shortage_inventory_penalty: Decimal::from(2),
            initial_inventory: 50,
            initial_backorders: 0,
            initial_workforce: 10,
        }
    }

    #[test]
    fn test_invalid_constants_rejected_at_construction() {
        let mut constants = sample_constants();
        constants.selling_price = Decimal::from(-1);

        let err = PeriodOptimizer::new(constants).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_reference_scenario() {
        // 需求 500、庫存 50、員工 10：最省成本的解是恰好補足缺口
        let optimizer = PeriodOptimizer::new(sample_constants()).unwrap();
        let demand = RealizedDemand::new("Q1", Decimal::from(500)).unwrap();
        let state = CarryOverState::new(50, 0, 10);

        let plan = optimizer.solve(&demand, &state).unwrap();
        let decision = &plan.decision;

        // 庫存平衡等式精確成立
        assert_eq!(
            decision.ending_inventory as i64,
            50 + decision.production_qty as i64 - 500
        );

        // 生產不超過期初員工數決定的產能
        let capacity = sample_constants()
            .max_capacity(state.workforce, decision.overtime_hours_per_day);
        assert!(Decimal::from(decision.production_qty) <= capacity);
        assert!(decision.overtime_hours_per_day <= MAX_OVERTIME_HOURS_PER_DAY);

        // 最適解：生產 450 補足缺口，不聘不裁不加班
        assert_eq!(decision.production_qty, 450);
        assert_eq!(decision.ending_inventory, 0);
        assert_eq!(decision.ending_backorders, 0);
        assert_eq!(decision.workers_hired, 0);
        assert_eq!(decision.workers_fired, 0);
        assert_eq!(decision.overtime_hours_per_day, 0);

        // 收益 25000 − 生產 4500 − 人力 4800 = 15700
        assert_eq!(plan.financials.gross_profit, Decimal::from(15_700));
        // 期末庫存 0，短缺罰分 (100 − 0) × 2 = 200
        assert_eq!(plan.financials.shortage_penalty, Decimal::from(200));
        assert_eq!(plan.financials.excess_penalty, Decimal::ZERO);
        assert_eq!(plan.financials.total_penalty, Decimal::from(200));
        assert_eq!(plan.financials.net_profit, Decimal::from(15_500));
    }

    #[test]
    fn test_zero_demand_keeps_inventory() {
        // 需求為零：不生產，庫存原地結轉
        let optimizer = PeriodOptimizer::new(sample_constants()).unwrap();
        let demand = RealizedDemand::new("Q2", Decimal::ZERO).unwrap();
        let state = CarryOverState::new(150, 0, 10);

        let plan = optimizer.solve(&demand, &state).unwrap();

        assert_eq!(plan.decision.production_qty, 0);
        assert_eq!(plan.decision.ending_inventory, 150);
        assert_eq!(plan.decision.ending_backorders, 0);

        // 期末庫存 150 超出目標 100：超額罰分 50 × 0.5 = 25
        assert_eq!(plan.financials.excess_penalty, Decimal::from(25));
        assert_eq!(plan.financials.shortage_penalty, Decimal::ZERO);
        assert_eq!(
            plan.financials.net_profit,
            plan.financials.gross_profit - plan.financials.total_penalty
        );
    }

    #[test]
    fn test_overtime_used_when_capacity_is_tight() {
        // 需求超過正常產能 4800 + 庫存 50，須動用加班
        let optimizer = PeriodOptimizer::new(sample_constants()).unwrap();
        let demand = RealizedDemand::new("Q3", Decimal::from(5_000)).unwrap();
        let state = CarryOverState::new(50, 0, 10);

        let plan = optimizer.solve(&demand, &state).unwrap();
        let decision = &plan.decision;

        assert!(decision.overtime_hours_per_day >= 1);
        assert!(decision.overtime_hours_per_day <= MAX_OVERTIME_HOURS_PER_DAY);
        assert_eq!(decision.production_qty, 4_950);

        let capacity = sample_constants()
            .max_capacity(state.workforce, decision.overtime_hours_per_day);
        assert!(Decimal::from(decision.production_qty) <= capacity);
    }

    #[test]
    fn test_failed_solve_yields_no_plan() {
        let mut constants = sample_constants();
        constants.working_days = 1;
        constants.normal_hours_per_day = Decimal::ONE;
        constants.overtime_production_rate = Decimal::ONE;

        let optimizer = PeriodOptimizer::new(constants).unwrap();
        let demand = RealizedDemand::new("Q1", Decimal::from(100)).unwrap();
        let state = CarryOverState::new(0, 0, 1);

        let err = optimizer.solve(&demand, &state).unwrap_err();
        assert!(matches!(err, PlanError::Infeasible(_)));
    }
}
