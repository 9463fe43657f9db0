//! 單期引擎直接呼叫示例（不經會話）

use aps::{CarryOverState, PeriodOptimizer, PlanningConstants, RealizedDemand};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 單期最佳化示例 ===\n");

    let constants = PlanningConstants {
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
    };

    let optimizer = PeriodOptimizer::new(constants)?;
    let demand = RealizedDemand::new("Q1", Decimal::from(500))?;
    let state = CarryOverState::new(50, 0, 10);

    let plan = optimizer.solve(&demand, &state)?;

    println!("{plan}\n");

    println!("--- 成本明細 ---");
    println!("收益: {}", plan.costs.revenue);
    println!("生產成本: {}", plan.costs.production_cost);
    println!("庫存持有成本: {}", plan.costs.holding_cost);
    println!("欠交成本: {}", plan.costs.backorder_cost);
    println!("聘僱成本: {}", plan.costs.hiring_cost);
    println!("解僱成本: {}", plan.costs.firing_cost);
    println!("正常人力成本: {}", plan.costs.regular_labor_cost);
    println!("加班人力成本: {}", plan.costs.overtime_labor_cost);
    println!("總成本: {}", plan.costs.total_cost());

    Ok(())
}
