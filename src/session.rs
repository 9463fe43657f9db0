//! 規劃會話
//!
//! 結轉狀態（庫存、欠交、員工數）是每個會話唯一的可變資源，
//! 由會話以 `&mut self` 序列化讀寫；引擎本身無狀態。

use std::collections::HashMap;

use rust_decimal::Decimal;

use aps_core::{
    CarryOverState, PeriodPlan, PlanError, PlanningConstants, RealizedDemand, Result,
};
use aps_optimizer::PeriodOptimizer;

/// 規劃會話：兩狀態機
///
/// 「尚未設定常數」→（[`configure`](Self::configure)）→
/// 「已設定，可重複求解」。每次求解後以該期結果推進結轉狀態。
#[derive(Default)]
pub struct PlanningSession {
    optimizer: Option<PeriodOptimizer>,
    state: Option<CarryOverState>,
    history: Vec<PeriodPlan>,
}

impl PlanningSession {
    /// 創建尚未設定常數的會話
    pub fn new() -> Self {
        Self::default()
    }

    /// 檢查會話是否已設定常數
    pub fn is_configured(&self) -> bool {
        self.optimizer.is_some()
    }

    /// 設定規劃常數並重置結轉狀態
    ///
    /// 常數於此驗證一次；結轉狀態由常數中的初始種子重建，
    /// 既有的求解歷史一併清空。
    pub fn configure(&mut self, constants: PlanningConstants) -> Result<()> {
        let optimizer = PeriodOptimizer::new(constants)?;
        self.state = Some(CarryOverState::from_constants(optimizer.constants()));
        self.optimizer = Some(optimizer);
        self.history.clear();

        tracing::info!("會話已設定常數並重置結轉狀態");
        Ok(())
    }

    /// 從名稱→數值映射設定常數（原始線上輸入的形態）
    pub fn configure_from_named_values(
        &mut self,
        values: &HashMap<String, Decimal>,
    ) -> Result<()> {
        self.configure(PlanningConstants::from_named_values(values)?)
    }

    /// 求解一個期別並推進結轉狀態
    pub fn solve_period(
        &mut self,
        period_id: impl Into<String>,
        quantity: Decimal,
    ) -> Result<PeriodPlan> {
        let demand = RealizedDemand::new(period_id, quantity)?;
        self.solve(demand)
    }

    /// 以文字需求輸入求解一個期別
    pub fn solve_period_str(
        &mut self,
        period_id: impl Into<String>,
        raw_quantity: &str,
    ) -> Result<PeriodPlan> {
        let demand = RealizedDemand::parse(period_id, raw_quantity)?;
        self.solve(demand)
    }

    fn solve(&mut self, demand: RealizedDemand) -> Result<PeriodPlan> {
        let optimizer = self.optimizer.as_ref().ok_or(PlanError::NotConfigured)?;
        let state = self.state.ok_or(PlanError::NotConfigured)?;

        let plan = optimizer.solve(&demand, &state)?;

        // 求解成功後才推進狀態：失敗的求解不留下任何狀態變化
        self.state = Some(state.advance(&plan));
        self.history.push(plan.clone());

        Ok(plan)
    }

    /// 當前結轉狀態（未設定時為 `None`）
    pub fn state(&self) -> Option<&CarryOverState> {
        self.state.as_ref()
    }

    /// 規劃常數引用（未設定時為 `None`）
    pub fn constants(&self) -> Option<&PlanningConstants> {
        self.optimizer.as_ref().map(PeriodOptimizer::constants)
    }

    /// 已求解期別的歷史（依求解順序）
    pub fn history(&self) -> &[PeriodPlan] {
        &self.history
    }

    /// 最近一次求解的結果
    pub fn last_plan(&self) -> Option<&PeriodPlan> {
        self.history.last()
    }
}
