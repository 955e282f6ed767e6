//! Dashboard overview: fixed headline figures, recent sales, revenue series.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    pub name: &'static str,
    pub email: &'static str,
    pub amount: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub month: &'static str,
    pub revenue: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub recent_sales: Vec<Sale>,
    pub revenue: Vec<ChartPoint>,
}

pub const CHART_MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Monthly revenue in thousands.
const MONTHLY_REVENUE_K: [u32; 12] = [4, 3, 5, 4, 6, 5, 7, 6, 8, 7, 9, 8];

#[must_use]
pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard { title: "Total Revenue", value: "$45,231.89", change: "+20.1%", trend: Trend::Up },
        StatCard { title: "Active Users", value: "2,350", change: "+180", trend: Trend::Up },
        StatCard { title: "Sales", value: "+12,234", change: "+19%", trend: Trend::Up },
        StatCard { title: "Active Now", value: "573", change: "-12", trend: Trend::Down },
    ]
}

#[must_use]
pub fn recent_sales() -> Vec<Sale> {
    vec![
        Sale { name: "Olivia Martin", email: "olivia.martin@email.com", amount: "+$1,999.00", avatar: "OM" },
        Sale { name: "Jackson Lee", email: "jackson.lee@email.com", amount: "+$39.00", avatar: "JL" },
        Sale { name: "Isabella Nguyen", email: "isabella.nguyen@email.com", amount: "+$299.00", avatar: "IN" },
        Sale { name: "William Kim", email: "will@email.com", amount: "+$99.00", avatar: "WK" },
        Sale { name: "Sofia Davis", email: "sofia.davis@email.com", amount: "+$39.00", avatar: "SD" },
    ]
}

#[must_use]
pub fn revenue_series() -> Vec<ChartPoint> {
    CHART_MONTHS
        .into_iter()
        .zip(MONTHLY_REVENUE_K)
        .map(|(month, k)| ChartPoint { month, revenue: k * 1000 })
        .collect()
}

#[must_use]
pub fn overview() -> DashboardOverview {
    DashboardOverview { stats: stat_cards(), recent_sales: recent_sales(), revenue: revenue_series() }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
