//! # APS
//!
//! 總量生產規劃：逐期求解最大化淨利的生產量、聘僱/解僱
//! 與加班時數，並由 [`PlanningSession`] 持有跨期結轉狀態。

pub mod session;

// Re-export 主要類型
pub use aps_core::{
    CarryOverState, CostBreakdown, FinancialSummary, PeriodPlan, PlanDecision, PlanError,
    PlanningConstants, RealizedDemand, Result, MAX_OVERTIME_HOURS_PER_DAY,
};
pub use aps_optimizer::PeriodOptimizer;
pub use session::PlanningSession;
