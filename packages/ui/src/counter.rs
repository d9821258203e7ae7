use std::time::Duration;

use dioxus::prelude::*;

use crate::auth::sleep;

const FRAME: Duration = Duration::from_millis(40);

/// Value shown at `elapsed` of a linear count-up to `target` over `duration`.
pub fn counter_value(target: u32, elapsed: Duration, duration: Duration) -> u32 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (target as f64 * progress).floor() as u32
}

/// Number that counts up from zero when mounted.
#[component]
pub fn AnimatedCounter(
    target: u32,
    #[props(default = 2000)] duration_ms: u64,
    #[props(default = "".to_string())] suffix: String,
) -> Element {
    let mut value = use_signal(|| 0u32);

    use_future(move || async move {
        let duration = Duration::from_millis(duration_ms);
        let mut elapsed = Duration::ZERO;
        loop {
            value.set(counter_value(target, elapsed, duration));
            if elapsed >= duration {
                break;
            }
            sleep(FRAME).await;
            elapsed += FRAME;
        }
    });

    rsx! {
        span { class: "counter", "{value}{suffix}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_value() {
        let total = Duration::from_secs(2);
        assert_eq!(counter_value(500, Duration::ZERO, total), 0);
        assert_eq!(counter_value(500, Duration::from_secs(1), total), 250);
        assert_eq!(counter_value(500, Duration::from_secs(3), total), 500);
        assert_eq!(counter_value(15, Duration::from_millis(10), Duration::ZERO), 15);
    }
}
