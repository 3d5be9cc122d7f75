use super::*;

#[test]
fn icon_url_uses_requested_scale() {
    assert_eq!(icon_url("10d", IconSize::Small), "https://openweathermap.org/img/wn/10d@2x.png");
    assert_eq!(icon_url("01n", IconSize::Large), "https://openweathermap.org/img/wn/01n@4x.png");
}

#[test]
fn round_whole_rounds_half_up() {
    assert_eq!(round_whole(21.5), 22);
    assert_eq!(round_whole(21.49), 21);
    assert_eq!(round_whole(-2.5), -2);
    assert_eq!(round_whole(-2.6), -3);
}

#[test]
fn unit_formatters() {
    assert_eq!(degrees(18.7), "19°");
    assert_eq!(percent(64.0), "64%");
    assert_eq!(wind_speed(3.5), "3.5 m/s");
    assert_eq!(wind_speed(4.0), "4 m/s");
    assert_eq!(pressure(1012.6), "1013 hPa");
}

#[test]
fn history_time_from_sheet_timestamp() {
    assert_eq!(history_time("2025-01-14 15:42:10"), "03:42 PM");
    assert_eq!(history_time("2025-01-14 00:05:00"), "12:05 AM");
    assert_eq!(history_time("2025-01-14 12:00:00"), "12:00 PM");
}

#[test]
fn history_time_from_iso_timestamp() {
    assert_eq!(history_time("2025-01-14T09:07:59.123Z"), "09:07 AM");
}

#[test]
fn history_time_unparseable_is_empty() {
    assert_eq!(history_time(""), "");
    assert_eq!(history_time("yesterday"), "");
    assert_eq!(history_time("2025-01-14 25:00:00"), "");
}
