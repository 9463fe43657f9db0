//! 規劃常數配置模型

use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 每個工作日允許的最大加班時數
pub const MAX_OVERTIME_HOURS_PER_DAY: u64 = 4;

/// 規劃常數（每個部署/會話提供一次）
///
/// 所有金額與比率皆以 `Decimal` 表示；數值必須非負，
/// 於建構時以 [`PlanningConstants::validate`] 驗證一次。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConstants {
    /// 單位售價
    pub selling_price: Decimal,

    /// 單位生產成本
    pub unit_production_cost: Decimal,

    /// 單位庫存持有成本（按期末庫存計）
    pub holding_cost_per_unit: Decimal,

    /// 單位欠交成本（按期末欠交計）
    pub backorder_cost_per_unit: Decimal,

    /// 每名員工的聘僱成本
    pub hiring_cost: Decimal,

    /// 每名員工的解僱成本
    pub firing_cost: Decimal,

    /// 每期工作日數
    pub working_days: u32,

    /// 每日正常工時
    pub normal_hours_per_day: Decimal,

    /// 正常工時薪資率
    pub normal_hour_wage: Decimal,

    /// 加班工時薪資率
    pub overtime_hour_wage: Decimal,

    /// 正常工時單位產出率
    pub normal_production_rate: Decimal,

    /// 加班工時單位產出率
    pub overtime_production_rate: Decimal,

    /// 期末目標庫存水準（僅用於求解後的罰分評估，非硬性約束）
    pub target_inventory: Decimal,

    /// 超出目標庫存的罰分率
    pub excess_inventory_penalty: Decimal,

    /// 低於目標庫存的罰分率
    pub shortage_inventory_penalty: Decimal,

    /// 初始庫存（會話起始的結轉狀態種子）
    pub initial_inventory: u64,

    /// 初始欠交
    pub initial_backorders: u64,

    /// 初始員工數
    pub initial_workforce: u64,
}

impl PlanningConstants {
    /// 從名稱→數值映射建構（原始線上輸入的形態）
    ///
    /// 缺少任何必要鍵即為致命輸入錯誤（[`PlanError::MissingConstant`]），
    /// 整數欄位若帶小數或為負則回傳 [`PlanError::InvalidConstant`]。
    pub fn from_named_values(values: &HashMap<String, Decimal>) -> Result<Self> {
        let get = |key: &str| -> Result<Decimal> {
            values
                .get(key)
                .copied()
                .ok_or_else(|| PlanError::MissingConstant(key.to_string()))
        };

        let constants = Self {
            selling_price: get("selling_price")?,
            unit_production_cost: get("unit_production_cost")?,
            holding_cost_per_unit: get("holding_cost_per_unit")?,
            backorder_cost_per_unit: get("backorder_cost_per_unit")?,
            hiring_cost: get("hiring_cost")?,
            firing_cost: get("firing_cost")?,
            working_days: to_u32("working_days", get("working_days")?)?,
            normal_hours_per_day: get("normal_hours_per_day")?,
            normal_hour_wage: get("normal_hour_wage")?,
            overtime_hour_wage: get("overtime_hour_wage")?,
            normal_production_rate: get("normal_production_rate")?,
            overtime_production_rate: get("overtime_production_rate")?,
            target_inventory: get("target_inventory")?,
            excess_inventory_penalty: get("excess_inventory_penalty")?,
            shortage_inventory_penalty: get("shortage_inventory_penalty")?,
            initial_inventory: to_u64("initial_inventory", get("initial_inventory")?)?,
            initial_backorders: to_u64("initial_backorders", get("initial_backorders")?)?,
            initial_workforce: to_u64("initial_workforce", get("initial_workforce")?)?,
        };

        constants.validate()?;
        Ok(constants)
    }

    /// 驗證所有常數
    ///
    /// 所有數值必須非負；違反者以欄位名稱回報。
    pub fn validate(&self) -> Result<()> {
        let decimal_fields = [
            ("selling_price", self.selling_price),
            ("unit_production_cost", self.unit_production_cost),
            ("holding_cost_per_unit", self.holding_cost_per_unit),
            ("backorder_cost_per_unit", self.backorder_cost_per_unit),
            ("hiring_cost", self.hiring_cost),
            ("firing_cost", self.firing_cost),
            ("normal_hours_per_day", self.normal_hours_per_day),
            ("normal_hour_wage", self.normal_hour_wage),
            ("overtime_hour_wage", self.overtime_hour_wage),
            ("normal_production_rate", self.normal_production_rate),
            ("overtime_production_rate", self.overtime_production_rate),
            ("target_inventory", self.target_inventory),
            ("excess_inventory_penalty", self.excess_inventory_penalty),
            ("shortage_inventory_penalty", self.shortage_inventory_penalty),
        ];

        for (name, value) in decimal_fields {
            if value < Decimal::ZERO {
                return Err(PlanError::InvalidConstant {
                    name: name.to_string(),
                    reason: format!("必須非負，實際為 {}", value),
                });
            }
        }

        Ok(())
    }

    /// 每期每名員工的正常工時總數
    pub fn regular_labor_hours(&self) -> Decimal {
        Decimal::from(self.working_days) * self.normal_hours_per_day
    }

    /// 指定員工數與每日加班時數下的最大產能
    ///
    /// 產能 = 員工數 × 工作日 × (正常工時 × 正常產出率 + 加班時數 × 加班產出率)
    pub fn max_capacity(&self, workforce: u64, overtime_hours_per_day: u64) -> Decimal {
        let per_day = self.normal_hours_per_day * self.normal_production_rate
            + Decimal::from(overtime_hours_per_day) * self.overtime_production_rate;
        Decimal::from(workforce) * Decimal::from(self.working_days) * per_day
    }

    /// 指定員工數的正常人力成本（與產量無關）
    pub fn regular_labor_cost(&self, workforce: u64) -> Decimal {
        Decimal::from(workforce) * self.regular_labor_hours() * self.normal_hour_wage
    }

    /// 指定員工數與每日加班時數的加班人力成本
    pub fn overtime_labor_cost(&self, workforce: u64, overtime_hours_per_day: u64) -> Decimal {
        Decimal::from(workforce)
            * Decimal::from(self.working_days)
            * Decimal::from(overtime_hours_per_day)
            * self.overtime_hour_wage
    }
}

fn to_u32(name: &str, value: Decimal) -> Result<u32> {
    to_u64(name, value)?
        .try_into()
        .map_err(|_| PlanError::InvalidConstant {
            name: name.to_string(),
            reason: format!("超出範圍: {}", value),
        })
}

fn to_u64(name: &str, value: Decimal) -> Result<u64> {
    if value.fract() != Decimal::ZERO {
        return Err(PlanError::InvalidConstant {
            name: name.to_string(),
            reason: format!("必須為整數，實際為 {}", value),
        });
    }
    value.to_u64().ok_or_else(|| PlanError::InvalidConstant {
        name: name.to_string(),
        reason: format!("必須為非負整數，實際為 {}", value),
    })
}
