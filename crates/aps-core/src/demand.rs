//! 實際需求模型

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 單一期別的實際需求
///
/// 與預測不同，實際需求在期別開始後才觀測到，
/// 未滿足的部分成為欠交而非流失收益。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealizedDemand {
    /// 期別識別（如 "Q1"）
    pub period_id: String,

    /// 需求數量（非負實數）
    pub quantity: Decimal,
}

impl RealizedDemand {
    /// 創建新的實際需求
    pub fn new(period_id: impl Into<String>, quantity: Decimal) -> Result<Self> {
        if quantity < Decimal::ZERO {
            return Err(PlanError::InvalidDemand(format!(
                "需求必須非負，實際為 {}",
                quantity
            )));
        }
        Ok(Self {
            period_id: period_id.into(),
            quantity,
        })
    }

    /// 從文字輸入解析需求（原始輸入以字串傳遞）
    pub fn parse(period_id: impl Into<String>, raw: &str) -> Result<Self> {
        let quantity = Decimal::from_str(raw.trim())
            .map_err(|_| PlanError::InvalidDemand(format!("無法解析為數值: {raw:?}")))?;
        Self::new(period_id, quantity)
    }

    /// 檢查需求是否為整數
    ///
    /// 決策變數皆為整數；非整數需求會使庫存平衡等式無整數解。
    pub fn is_integral(&self) -> bool {
        self.quantity.fract() == Decimal::ZERO
    }
}
