//! 期別規劃結果模型

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單次求解的決策變數值
///
/// 所有數值皆為非負整數，且精確滿足模型約束。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDecision {
    /// 生產數量
    pub production_qty: u64,

    /// 聘僱員工數
    pub workers_hired: u64,

    /// 解僱員工數
    pub workers_fired: u64,

    /// 期末可用庫存
    pub ending_inventory: u64,

    /// 期末未結欠交
    pub ending_backorders: u64,

    /// 每個工作日的加班時數（0 至 4）
    pub overtime_hours_per_day: u64,
}

/// 成本明細（由決策值與常數以 Decimal 精確重算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 總收益（需求驅動）
    pub revenue: Decimal,

    /// 生產成本
    pub production_cost: Decimal,

    /// 庫存持有成本
    pub holding_cost: Decimal,

    /// 欠交成本
    pub backorder_cost: Decimal,

    /// 聘僱成本
    pub hiring_cost: Decimal,

    /// 解僱成本
    pub firing_cost: Decimal,

    /// 正常人力成本
    pub regular_labor_cost: Decimal,

    /// 加班人力成本
    pub overtime_labor_cost: Decimal,
}

impl CostBreakdown {
    /// 總成本
    pub fn total_cost(&self) -> Decimal {
        self.production_cost
            + self.holding_cost
            + self.backorder_cost
            + self.hiring_cost
            + self.firing_cost
            + self.regular_labor_cost
            + self.overtime_labor_cost
    }
}

/// 利潤與罰分彙總
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// 罰分前利潤（求解器目標值）
    pub gross_profit: Decimal,

    /// 超出目標庫存罰分
    pub excess_penalty: Decimal,

    /// 低於目標庫存罰分
    pub shortage_penalty: Decimal,

    /// 總罰分
    pub total_penalty: Decimal,

    /// 扣除罰分後的總利潤
    pub net_profit: Decimal,
}

/// 單一期別的完整規劃結果
///
/// 不可變；由引擎回傳一次後不再保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodPlan {
    /// 期別識別
    pub period_id: String,

    /// 該期實際需求
    pub realized_demand: Decimal,

    /// 決策變數值
    pub decision: PlanDecision,

    /// 成本明細
    pub costs: CostBreakdown,

    /// 利潤與罰分彙總
    pub financials: FinancialSummary,
}

impl PeriodPlan {
    /// 員工數淨變化（聘僱 − 解僱）
    pub fn net_workforce_change(&self) -> i64 {
        self.decision.workers_hired as i64 - self.decision.workers_fired as i64
    }

    /// 檢查是否動用加班
    pub fn uses_overtime(&self) -> bool {
        self.decision.overtime_hours_per_day > 0
    }
}

impl fmt::Display for PeriodPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} 最佳化結果 ---", self.period_id)?;
        writeln!(f, "實際需求: {}", self.realized_demand)?;
        writeln!(f, "生產數量: {}", self.decision.production_qty)?;
        writeln!(f, "聘僱員工: {}", self.decision.workers_hired)?;
        writeln!(f, "解僱員工: {}", self.decision.workers_fired)?;
        writeln!(f, "期末庫存: {}", self.decision.ending_inventory)?;
        writeln!(f, "期末欠交: {}", self.decision.ending_backorders)?;
        writeln!(f, "每日加班時數: {}", self.decision.overtime_hours_per_day)?;
        writeln!(f, "--- 財務彙總 ---")?;
        writeln!(f, "罰分前利潤: {}", self.financials.gross_profit)?;
        writeln!(f, "庫存超額罰分: {}", self.financials.excess_penalty)?;
        writeln!(f, "庫存短缺罰分: {}", self.financials.shortage_penalty)?;
        writeln!(f, "總罰分: {}", self.financials.total_penalty)?;
        write!(f, "總利潤（含罰分）: {}", self.financials.net_profit)
    }
}
