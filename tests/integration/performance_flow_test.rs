//! Integration tests for the performance views built end to end
//!
//! Runs report, chart and pie requests through `PerformanceService` over an
//! in-memory repository, covering the single-consultant example, empty periods,
//! display-name fallback and failure propagation.

#[path = "../helpers/mod.rs"]
mod helpers;

use consultant_performance::core::AppError;
use consultant_performance::reports::models::ValidationKind;
use consultant_performance::reports::{InMemoryPerformanceRepository, PerformanceQuery};
use helpers::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_single_consultant_report() {
    let service = service(ana_repository());

    let report = service
        .build_report(&query(&["ana"], "2024-03", "2024-03"))
        .await
        .expect("report should build")
        .ready()
        .expect("report should not be a validation message");

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.consultant_name, "Ana");
    assert_eq!(row.month, month("2024-03"));
    assert_eq!(row.net_revenue, dec!(900.00));
    assert_eq!(row.commission, dec!(45.00));
    assert_eq!(row.fixed_cost, dec!(2000.00));
    assert_eq!(row.profit(), dec!(-1145.00));

    let totals = report.totals[&month("2024-03")];
    assert_eq!(totals.net_revenue, dec!(900.00));
    assert_eq!(totals.profit(), dec!(-1145.00));
}

#[tokio::test]
async fn test_single_consultant_pie() {
    let service = service(ana_repository());

    let pie = service
        .build_pie(&query(&["ana"], "2024-03", "2024-03"))
        .await
        .unwrap()
        .ready()
        .unwrap();

    assert!(pie.has_data);
    assert_eq!(pie.total, dec!(900.00));
    assert_eq!(pie.series.len(), 1);
    assert_eq!(pie.series[0].percent, dec!(100));
}

#[tokio::test]
async fn test_single_consultant_chart() {
    let service = service(ana_repository());

    let chart = service
        .build_chart(&query(&["ana"], "2024-03", "2024-03"))
        .await
        .unwrap()
        .ready()
        .unwrap();

    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].consultant_name, "Ana");
    assert_eq!(chart.series[0].net_revenue, dec!(900.00));
    assert_eq!(chart.average_fixed_cost, dec!(2000.00));
}

#[tokio::test]
async fn test_period_without_revenue_gives_empty_pie() {
    let repository = InMemoryPerformanceRepository::new()
        .with_consultant("ana", "Ana")
        .with_consultant("bruno", "Bruno")
        .with_salary(salary("ana", dec!(2000), date(2023, 1, 1)));
    let service = service(repository);

    let pie = service
        .build_pie(&query(&["ana", "bruno"], "2024-01", "2024-06"))
        .await
        .unwrap()
        .ready()
        .unwrap();

    assert!(!pie.has_data);
    assert_eq!(pie.total, Decimal::ZERO);
    assert_eq!(pie.series.len(), 2);
    assert!(pie.series.iter().all(|slice| slice.percent == Decimal::ZERO));
}

#[tokio::test]
async fn test_team_pie_shares() {
    let service = service(team_repository());

    let pie = service
        .build_pie(&query(&["ana", "bruno", "carla"], "2024-01", "2024-03"))
        .await
        .unwrap()
        .ready()
        .unwrap();

    // Ana: 900 + 450 + 1700 = 3050, Bruno: 4000, Carla: 0
    assert_eq!(pie.series[0].net_revenue, dec!(3050));
    assert_eq!(pie.series[1].net_revenue, dec!(4000));
    assert_eq!(pie.series[2].net_revenue, Decimal::ZERO);
    assert_eq!(pie.total, dec!(7050));
    assert_eq!(pie.series[1].percent.round_dp(2), dec!(56.74));

    let drift = (pie.percent_sum() - dec!(100)).abs();
    assert!(drift < dec!(0.000001));
}

#[tokio::test]
async fn test_team_chart_average() {
    let service = service(team_repository());

    let chart = service
        .build_chart(&query(&["ana", "bruno", "carla"], "2024-01", "2024-03"))
        .await
        .unwrap()
        .ready()
        .unwrap();

    let names: Vec<&str> = chart.series.iter().map(|p| p.consultant_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
    // (2000 + 3000 + 0) / 3
    assert_eq!(chart.average_fixed_cost.round_dp(2), dec!(1666.67));
}

#[tokio::test]
async fn test_unknown_consultant_is_shown_by_id() {
    let repository = ana_repository()
        .with_invoice(invoice("ghost", date(2024, 3, 2), dec!(100), None, None));
    let service = service(repository);

    let chart = service
        .build_chart(&query(&["ghost"], "2024-03", "2024-03"))
        .await
        .unwrap()
        .ready()
        .unwrap();

    assert_eq!(chart.series[0].consultant_name, "ghost");
    assert_eq!(chart.series[0].net_revenue, dec!(100));
    assert_eq!(chart.average_fixed_cost, Decimal::ZERO);
}

#[tokio::test]
async fn test_validation_outcomes_for_all_views() {
    let service = service(ana_repository());
    let no_consultants = PerformanceQuery::new(Vec::<String>::new(), Some(month("2024-01")), Some(month("2024-02")));
    let no_months = PerformanceQuery::new(vec!["ana"], None, None);

    let report = service.build_report(&no_consultants).await.unwrap();
    let chart = service.build_chart(&no_consultants).await.unwrap();
    let pie = service.build_pie(&no_months).await.unwrap();

    assert_eq!(report.validation().map(|m| m.kind), Some(ValidationKind::EmptySelection));
    assert_eq!(chart.validation().map(|m| m.kind), Some(ValidationKind::EmptySelection));
    assert_eq!(pie.validation().map(|m| m.kind), Some(ValidationKind::MissingMonthRange));
}

#[tokio::test]
async fn test_reversed_range_fails_fast() {
    let service = service(ana_repository());

    let result = service.build_report(&query(&["ana"], "2024-04", "2024-03")).await;

    match result {
        Err(AppError::InvalidRange { from, to }) => {
            assert_eq!(from, month("2024-04"));
            assert_eq!(to, month("2024-03"));
        }
        other => panic!("expected InvalidRange, got {:?}", other.map(|o| o.is_ready())),
    }
}

#[tokio::test]
async fn test_one_failing_consultant_aborts_the_request() {
    let repository = team_repository().failing_for("bruno");
    let service = service(repository);

    let report = service
        .build_report(&query(&["ana", "bruno", "carla"], "2024-01", "2024-03"))
        .await;
    assert!(matches!(report, Err(AppError::DataAccess(_))));

    let pie = service
        .build_pie(&query(&["ana", "bruno"], "2024-01", "2024-03"))
        .await;
    assert!(matches!(pie, Err(AppError::DataAccess(_))));

    // consultants not touching the failing records are unaffected
    let chart = service
        .build_chart(&query(&["ana", "carla"], "2024-01", "2024-03"))
        .await
        .unwrap();
    assert!(chart.is_ready());
}
