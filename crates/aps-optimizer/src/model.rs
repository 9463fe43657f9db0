//! 混合整數規劃模型建構

use aps_core::{
    CarryOverState, PlanDecision, PlanError, PlanningConstants, RealizedDemand, Result,
    MAX_OVERTIME_HOURS_PER_DAY,
};
use good_lp::{
    constraint, default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 求解器回傳的原始變數值（未捨入）
#[derive(Debug, Clone, Copy)]
pub struct RawSolution {
    pub production_qty: f64,
    pub workers_hired: f64,
    pub workers_fired: f64,
    pub ending_inventory: f64,
    pub ending_backorders: f64,
    pub overtime_hours_per_day: f64,
}

impl RawSolution {
    /// 將求解值捨入為非負整數（吸收求解器數值容差）
    pub fn into_decision(self) -> PlanDecision {
        PlanDecision {
            production_qty: round_nonneg(self.production_qty),
            workers_hired: round_nonneg(self.workers_hired),
            workers_fired: round_nonneg(self.workers_fired),
            ending_inventory: round_nonneg(self.ending_inventory),
            ending_backorders: round_nonneg(self.ending_backorders),
            overtime_hours_per_day: round_nonneg(self.overtime_hours_per_day),
        }
    }
}

fn round_nonneg(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

/// 單一期別的生產規劃模型
///
/// 每次求解都是輸入的純函數：模型不持有任何跨期狀態。
pub struct ProductionModel<'a> {
    constants: &'a PlanningConstants,
    demand: &'a RealizedDemand,
    state: &'a CarryOverState,
}

impl<'a> ProductionModel<'a> {
    /// 創建新的期別模型
    pub fn new(
        constants: &'a PlanningConstants,
        demand: &'a RealizedDemand,
        state: &'a CarryOverState,
    ) -> Self {
        Self {
            constants,
            demand,
            state,
        }
    }

    /// 建構並求解混合整數規劃
    ///
    /// 目標為最大化「收益 − 成本」；庫存目標罰分不進入目標式，
    /// 於求解後另行評估。
    pub fn solve(&self) -> Result<RawSolution> {
        // 係數轉換：Decimal 僅在求解器邊界轉為 f64
        let selling_price = coeff("selling_price", self.constants.selling_price)?;
        let unit_production_cost =
            coeff("unit_production_cost", self.constants.unit_production_cost)?;
        let holding_cost = coeff("holding_cost_per_unit", self.constants.holding_cost_per_unit)?;
        let backorder_cost = coeff(
            "backorder_cost_per_unit",
            self.constants.backorder_cost_per_unit,
        )?;
        let hiring_cost = coeff("hiring_cost", self.constants.hiring_cost)?;
        let firing_cost = coeff("firing_cost", self.constants.firing_cost)?;
        let normal_hours = coeff("normal_hours_per_day", self.constants.normal_hours_per_day)?;
        let normal_wage = coeff("normal_hour_wage", self.constants.normal_hour_wage)?;
        let overtime_wage = coeff("overtime_hour_wage", self.constants.overtime_hour_wage)?;
        let normal_rate = coeff(
            "normal_production_rate",
            self.constants.normal_production_rate,
        )?;
        let overtime_rate = coeff(
            "overtime_production_rate",
            self.constants.overtime_production_rate,
        )?;
        let demand_qty = coeff("realized_demand", self.demand.quantity)?;

        let working_days = f64::from(self.constants.working_days);
        let workforce = self.state.workforce as f64;
        let inventory = self.state.inventory_on_hand as f64;
        let backorders = self.state.backorders_pending as f64;

        let mut vars = variables!();
        let production = vars.add(variable().integer().min(0).name("production_qty"));
        let hired = vars.add(variable().integer().min(0).name("workers_hired"));
        let fired = vars.add(variable().integer().min(0).name("workers_fired"));
        let ending_inventory = vars.add(variable().integer().min(0).name("ending_inventory"));
        let ending_backorders = vars.add(variable().integer().min(0).name("ending_backorders"));
        let overtime = vars.add(
            variable()
                .integer()
                .min(0)
                .max(MAX_OVERTIME_HOURS_PER_DAY as f64)
                .name("overtime_hours_per_day"),
        );

        // 收益由需求驅動（未滿足的需求成為欠交，而非流失收益）；
        // 正常人力成本按期初員工數計，與產量無關
        let revenue = demand_qty * selling_price;
        let regular_labor_cost = workforce * working_days * normal_hours * normal_wage;

        // 目標：最大化 收益 − 總成本
        let objective = Expression::from(revenue - regular_labor_cost)
            - production * unit_production_cost
            - ending_inventory * holding_cost
            - ending_backorders * backorder_cost
            - hired * hiring_cost
            - fired * firing_cost
            - overtime * (workforce * working_days * overtime_wage);

        // 產能上限使用期初員工數：本期聘僱/解僱不改變本期產能
        let capacity = Expression::from(workforce * working_days * normal_hours * normal_rate)
            + overtime * (workforce * working_days * overtime_rate);

        // 庫存平衡：期末庫存 = 期初庫存 + 生產 − 需求 − 既有欠交
        // 既有欠交僅扣除一次；期末欠交不在此等式中推導
        let balance_net = inventory - demand_qty - backorders;

        let solution = vars
            .maximise(objective)
            .using(default_solver)
            .with(constraint!(Expression::from(production) - capacity <= 0.0))
            .with(constraint!(
                Expression::from(ending_inventory) - production == balance_net
            ))
            .with(constraint!(Expression::from(ending_backorders) >= 0.0))
            .solve()
            .map_err(|err| map_resolution_error(err, &self.demand.period_id))?;

        Ok(RawSolution {
            production_qty: solution.value(production),
            workers_hired: solution.value(hired),
            workers_fired: solution.value(fired),
            ending_inventory: solution.value(ending_inventory),
            ending_backorders: solution.value(ending_backorders),
            overtime_hours_per_day: solution.value(overtime),
        })
    }
}

fn coeff(name: &str, value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| PlanError::Internal(format!("常數 {name} 無法轉為 f64: {value}")))
}

fn map_resolution_error(err: ResolutionError, period_id: &str) -> PlanError {
    match err {
        ResolutionError::Infeasible => {
            PlanError::Infeasible(format!("期別 {period_id} 的模型無可行解"))
        }
        ResolutionError::Unbounded => PlanError::Unbounded(format!("期別 {period_id} 的模型無界")),
        other => PlanError::Solver(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_solve_returns_balanced_solution() {
        let constants = sample_constants();
        let demand = RealizedDemand::new("Q1", Decimal::from(500)).unwrap();
        let state = CarryOverState::new(50, 0, 10);

        let decision = ProductionModel::new(&constants, &demand, &state)
            .solve()
            .unwrap()
            .into_decision();

        // 期末庫存 = 50 + 生產 − 500 − 0，且 ≥ 0
        assert_eq!(
            decision.ending_inventory as i64,
            50 + decision.production_qty as i64 - 500
        );
        assert!(decision.overtime_hours_per_day <= MAX_OVERTIME_HOURS_PER_DAY);
    }

    #[test]
    fn test_infeasible_model_is_surfaced() {
        // 需求遠超最大產能：1 人 × 1 天 × (1 + 4×1) = 5 單位
        let mut constants = sample_constants();
        constants.working_days = 1;
        constants.normal_hours_per_day = Decimal::ONE;
        constants.overtime_production_rate = Decimal::ONE;

        let demand = RealizedDemand::new("Q1", Decimal::from(100)).unwrap();
        let state = CarryOverState::new(0, 0, 1);

        let err = ProductionModel::new(&constants, &demand, &state)
            .solve()
            .unwrap_err();

        assert!(matches!(err, PlanError::Infeasible(_)));
        assert!(err.is_solver_error());
    }

    #[test]
    fn test_round_nonneg_absorbs_tolerance() {
        assert_eq!(round_nonneg(449.999_999_7), 450);
        assert_eq!(round_nonneg(-0.000_000_3), 0);
        assert_eq!(round_nonneg(0.0), 0);
    }
}
