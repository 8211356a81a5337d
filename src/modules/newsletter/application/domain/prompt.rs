use chrono::{DateTime, Duration, Utc};

/// How long the signup prompt stays hidden after it was shown.
pub const PROMPT_COOLDOWN_DAYS: i64 = 7;

/// Anonymous visitors see the prompt when it was never shown, or when the
/// cooldown has fully elapsed since it last was.
pub fn should_show_prompt(
    is_authenticated: bool,
    last_shown: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    if is_authenticated {
        return false;
    }

    match last_shown {
        None => true,
        Some(shown) => now - shown > Duration::days(PROMPT_COOLDOWN_DAYS),
    }
}
