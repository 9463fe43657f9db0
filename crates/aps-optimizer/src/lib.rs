//! # APS Optimization Engine
//!
//! 核心最佳化引擎：逐期建構混合整數規劃模型、求解、
//! 取出決策值，並於求解後進行利潤與罰分會計。

pub mod finance;
pub mod model;
pub mod optimizer;
pub mod penalty;

// Re-export 主要類型
pub use finance::CostAccountant;
pub use optimizer::PeriodOptimizer;
pub use penalty::{InventoryPenalty, PenaltyAssessor};
