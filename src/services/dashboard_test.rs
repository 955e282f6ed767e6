use super::*;

#[test]
fn four_stat_cards_with_one_downtrend() {
    let cards = stat_cards();
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].value, "$45,231.89");
    let down: Vec<_> = cards.iter().filter(|c| c.trend == Trend::Down).map(|c| c.title).collect();
    assert_eq!(down, vec!["Active Now"]);
}

#[test]
fn five_recent_sales() {
    let sales = recent_sales();
    assert_eq!(sales.len(), 5);
    assert_eq!(sales[0].avatar, "OM");
}

#[test]
fn revenue_series_covers_twelve_months_scaled() {
    let series = revenue_series();
    assert_eq!(series.len(), 12);
    assert_eq!(series[0], ChartPoint { month: "Jan", revenue: 4000 });
    assert_eq!(series[11].month, "Dec");
    assert!(series.iter().all(|p| p.revenue % 1000 == 0));
}

#[test]
fn overview_serializes_trend_lowercase() {
    let json = serde_json::to_value(overview()).unwrap();
    assert_eq!(json["stats"][3]["trend"], "down");
    assert_eq!(json["recent_sales"].as_array().unwrap().len(), 5);
}
