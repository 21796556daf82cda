use super::common::*;
use crate::scoring::domain::Polarity;
use crate::scoring::{
    critical_alerts, evaluate, tally, IndicatorStatus, IndicatorTrend, ScoringError,
};

#[test]
fn status_thresholds_use_inclusive_lower_bounds() {
    let on_target = evaluate(Some(100.0), 100.0, Polarity::HigherBetter).expect("evaluates");
    let just_below = evaluate(Some(69.99), 100.0, Polarity::HigherBetter).expect("evaluates");
    let attention = evaluate(Some(70.0), 100.0, Polarity::HigherBetter).expect("evaluates");

    assert_eq!(on_target.status, IndicatorStatus::OnTarget);
    assert_eq!(just_below.status, IndicatorStatus::Critical);
    assert_eq!(attention.status, IndicatorStatus::Attention);
}

#[test]
fn ratio_is_reported_without_rounding() {
    for (current, target) in [(90.0, 100.0), (25.0, 15.0), (1.0, 3.0), (-4.0, 8.0)] {
        let evaluation = evaluate(Some(current), target, Polarity::HigherBetter).expect("evaluates");
        assert_eq!(evaluation.ratio, current / target * 100.0);
    }
}

#[test]
fn missing_reading_is_reported_as_no_data() {
    let evaluation = evaluate(None, 100.0, Polarity::HigherBetter).expect("evaluates");

    assert_eq!(evaluation.status, IndicatorStatus::NoData);
    assert_eq!(evaluation.ratio, 0.0);
}

#[test]
fn zero_target_is_rejected() {
    match evaluate(Some(10.0), 0.0, Polarity::HigherBetter) {
        Err(ScoringError::InvalidArgument { field, .. }) => assert_eq!(field, "target"),
        other => panic!("expected invalid target, got {other:?}"),
    }
}

#[test]
fn non_finite_reading_is_rejected() {
    match evaluate(Some(f64::NAN), 100.0, Polarity::HigherBetter) {
        Err(ScoringError::InvalidArgument { field, .. }) => assert_eq!(field, "current_value"),
        other => panic!("expected invalid reading, got {other:?}"),
    }
    assert!(evaluate(Some(1.0), f64::INFINITY, Polarity::HigherBetter).is_err());
}

#[test]
fn lower_better_polarity_is_carried_but_not_inverted() {
    let waiting = &indicators()[1];

    let evaluation = waiting.evaluate().expect("evaluates");

    assert_eq!(evaluation.polarity, Polarity::LowerBetter);
    assert_eq!(evaluation.ratio, 25.0 / 15.0 * 100.0);
    assert_eq!(evaluation.status, IndicatorStatus::OnTarget);
}

#[test]
fn tally_counts_each_status_once() {
    let mut set = indicators();
    set.push(indicator("i3", "o1", 100.0, None, Polarity::HigherBetter));
    set.push(indicator("i4", "o1", 100.0, Some(40.0), Polarity::HigherBetter));
    set.push(indicator("i5", "o1", 0.0, Some(40.0), Polarity::HigherBetter));

    let counts = tally(&set);

    assert_eq!(counts.on_target, 1);
    assert_eq!(counts.attention, 1);
    assert_eq!(counts.critical, 1);
    assert_eq!(counts.no_data, 2);
    assert_eq!(counts.total(), set.len());
}

#[test]
fn critical_alerts_skip_indicators_without_data() {
    let set = vec![
        indicator("i3", "o1", 100.0, None, Polarity::HigherBetter),
        indicator("i4", "o1", 200.0, Some(50.0), Polarity::HigherBetter),
        indicator("i5", "o1", 100.0, Some(95.0), Polarity::HigherBetter),
    ];

    let alerts = critical_alerts(&set);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].indicator_id.as_str(), "i4");
    assert_eq!(alerts[0].current_value, 50.0);
    assert_eq!(alerts[0].ratio, 25.0);
}

#[test]
fn evaluation_is_deterministic() {
    let first = evaluate(Some(83.3), 97.1, Polarity::LowerBetter);
    let second = evaluate(Some(83.3), 97.1, Polarity::LowerBetter);

    assert_eq!(first, second);
    assert_eq!(tally(&indicators()), tally(&indicators()));
}

#[test]
fn trend_reads_the_baseline_gap_through_polarity() {
    let set = indicators();

    // Digitalisation rose from 20 to 90; waiting time fell from 45 to 25 days.
    assert_eq!(set[0].trend(), IndicatorTrend::Improving);
    assert_eq!(set[1].trend(), IndicatorTrend::Improving);

    assert_eq!(
        IndicatorTrend::between(20.0, Some(12.0), Polarity::HigherBetter),
        IndicatorTrend::Worsening
    );
    assert_eq!(
        IndicatorTrend::between(45.0, Some(50.0), Polarity::LowerBetter),
        IndicatorTrend::Worsening
    );
}

#[test]
fn trend_is_flat_on_baseline_and_empty_without_reading() {
    for polarity in [Polarity::HigherBetter, Polarity::LowerBetter] {
        assert_eq!(
            IndicatorTrend::between(45.0, Some(45.0), polarity),
            IndicatorTrend::Flat
        );
        assert_eq!(
            IndicatorTrend::between(0.0, Some(0.0), polarity),
            IndicatorTrend::Flat
        );
        assert_eq!(
            IndicatorTrend::between(45.0, None, polarity),
            IndicatorTrend::NoData
        );
        assert_eq!(
            IndicatorTrend::between(45.0, Some(f64::NAN), polarity),
            IndicatorTrend::NoData
        );
    }

    let pending = indicator("i3", "o1", 100.0, None, Polarity::HigherBetter);
    assert_eq!(pending.trend(), IndicatorTrend::NoData);
    assert_eq!(pending.trend().label(), "No data");
}
