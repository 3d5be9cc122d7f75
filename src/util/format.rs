//! Display formatting for weather values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Provider icon sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSize {
    /// Forecast cards.
    Small,
    /// Current conditions and the day detail modal.
    Large,
}

/// Icon image URL for a provider icon code such as `"10d"`.
pub fn icon_url(icon: &str, size: IconSize) -> String {
    let scale = match size {
        IconSize::Small => "2x",
        IconSize::Large => "4x",
    };
    format!("{ICON_BASE_URL}/{icon}@{scale}.png")
}

/// Round half-up to a whole number, matching how temperatures are shown.
#[allow(clippy::cast_possible_truncation)]
pub fn round_whole(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn degrees(value: f64) -> String {
    format!("{}°", round_whole(value))
}

pub fn percent(value: f64) -> String {
    format!("{value}%")
}

pub fn wind_speed(value: f64) -> String {
    format!("{value} m/s")
}

pub fn pressure(value: f64) -> String {
    format!("{} hPa", round_whole(value))
}

/// Clock time (`hh:mm AM`) for a history timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]` and ISO `YYYY-MM-DDTHH:MM[:SS]` forms.
/// Anything unparseable renders as an empty string.
pub fn history_time(timestamp: &str) -> String {
    let Some(time) = timestamp.trim().split(['T', ' ']).nth(1) else {
        return String::new();
    };
    let mut parts = time.split(':');
    let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
        return String::new();
    };
    let (Ok(hour), Ok(minute)) = (hour.parse::<u32>(), minute.get(..2).unwrap_or(minute).parse::<u32>())
    else {
        return String::new();
    };
    if hour > 23 || minute > 59 {
        return String::new();
    }
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minute:02} {suffix}")
}
