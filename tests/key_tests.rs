use chart_windowing::{Domain, Evaluator, FallbackHint, LinearScale, ScaleKey, WindowingConfig};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

#[test]
fn test_datetime_coerces_to_epoch_millis() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
    assert_eq!(dt.coerce(), dt.timestamp_millis() as f64);
}

#[test]
fn test_naive_date_coerces_to_midnight_millis() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let midnight = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(date.coerce(), midnight.timestamp_millis() as f64);
}

#[test]
fn test_numeric_coercions() {
    assert_eq!(1.5f64.coerce(), 1.5);
    assert_eq!(3i64.coerce(), 3.0);
    assert_eq!(7u32.coerce(), 7.0);
}

#[test]
fn test_filter_over_datetime_keys() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let data: Vec<(DateTime<Utc>, f64)> = (0..10)
        .map(|i| (start + Duration::days(i), i as f64))
        .collect();

    let first = data[0].0;
    let last = data[9].0;
    let domain = Domain::from_keys(&first, &last);
    let scale = LinearScale::new((domain.start, domain.end), (0.0, 200.0));

    let eval = Evaluator::new(WindowingConfig::default());
    let result = eval.filter_data(&data, domain, |p| p.0, &scale, &FallbackHint::default());

    assert_eq!(result.plot_data.len(), 10);
    assert_eq!(result.domain, domain);
}
