//! 多期規劃會話示例

use aps::{PlanningConstants, PlanningSession};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 多期總量生產規劃示例 ===\n");

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

    let mut session = PlanningSession::new();
    session.configure(constants)?;

    // 各期實際需求於期別開始後觀測
    let demands = [("Q1", 500u64), ("Q2", 350), ("Q3", 0), ("Q4", 620)];

    for (period_id, quantity) in demands {
        let plan = session.solve_period(period_id, Decimal::from(quantity))?;
        println!("{plan}\n");

        if let Some(state) = session.state() {
            println!(
                "下一期結轉狀態: 庫存 {}，欠交 {}，員工 {}\n",
                state.inventory_on_hand, state.backorders_pending, state.workforce
            );
        }
    }

    println!(
        "會話合計 {} 期，累計淨利 {}",
        session.history().len(),
        session
            .history()
            .iter()
            .map(|p| p.financials.net_profit)
            .sum::<Decimal>()
    );

    Ok(())
}
