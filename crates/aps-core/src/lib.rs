//! # APS Core
//!
//! 總量生產規劃的核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod plan;
pub mod state;

// Re-export 主要類型
pub use config::{PlanningConstants, MAX_OVERTIME_HOURS_PER_DAY};
pub use demand::RealizedDemand;
pub use plan::{CostBreakdown, FinancialSummary, PeriodPlan, PlanDecision};
pub use state::CarryOverState;

/// 規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("缺少常數: {0}")]
    MissingConstant(String),

    #[error("常數 {name} 無效: {reason}")]
    InvalidConstant { name: String, reason: String },

    #[error("需求值無效: {0}")]
    InvalidDemand(String),

    #[error("尚未設定規劃常數")]
    NotConfigured,

    #[error("模型不可行: {0}")]
    Infeasible(String),

    #[error("模型無界: {0}")]
    Unbounded(String),

    #[error("求解器錯誤: {0}")]
    Solver(String),

    #[error("內部錯誤: {0}")]
    Internal(String),
}

impl PlanError {
    /// 檢查是否為輸入驗證錯誤（模型建構之前偵測）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlanError::MissingConstant(_)
                | PlanError::InvalidConstant { .. }
                | PlanError::InvalidDemand(_)
                | PlanError::NotConfigured
        )
    }

    /// 檢查是否為求解失敗錯誤（輸入合法但求解器無法求解）
    pub fn is_solver_error(&self) -> bool {
        matches!(
            self,
            PlanError::Infeasible(_) | PlanError::Unbounded(_) | PlanError::Solver(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
