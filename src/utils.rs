use crate::config::DISPLAY_PAD_WIDTH;

/// Unit label for `value` minutes ("minute" or "minutes").
pub fn minutes_label(value: u32) -> &'static str {
    if value == 1 {
        "minute"
    } else {
        "minutes"
    }
}

/// Toast text announcing a committed selection.
///
/// # Examples
/// ```
/// use timer_knob::utils::confirmation_message;
/// assert_eq!(confirmation_message(1), "Timer set to 1 minute.");
/// assert_eq!(confirmation_message(5), "Timer set to 5 minutes.");
/// ```
pub fn confirmation_message(value: u32) -> String {
    format!("Timer set to {} {}.", value, minutes_label(value))
}

/// Zero-padded readout text, e.g. `5` -> `"05"`.
pub fn format_display(value: u32) -> String {
    format!("{:0width$}", value, width = DISPLAY_PAD_WIDTH)
}

/// CSS `box-shadow` for the knob; the glow widens as the value grows.
pub fn knob_glow(value: u32) -> String {
    let blur = value as f64 / 5.0;
    let spread = value as f64 / 20.0;
    format!("0 0 {}px {}px rgba(99, 102, 241, 0.6)", blur, spread)
}

/// CSS `transform` that turns the knob to `rotation_degrees`.
pub fn knob_transform(rotation_degrees: f64) -> String {
    format!("rotate({}deg)", rotation_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_unit() {
        assert_eq!(confirmation_message(0), "Timer set to 0 minutes.");
        assert_eq!(confirmation_message(1), "Timer set to 1 minute.");
        assert_eq!(confirmation_message(5), "Timer set to 5 minutes.");
        assert_eq!(confirmation_message(999), "Timer set to 999 minutes.");
    }

    #[test]
    fn pads_readout() {
        assert_eq!(format_display(0), "00");
        assert_eq!(format_display(7), "07");
        assert_eq!(format_display(42), "42");
        assert_eq!(format_display(999), "999");
    }

    #[test]
    fn glow_scales_with_value() {
        assert_eq!(knob_glow(0), "0 0 0px 0px rgba(99, 102, 241, 0.6)");
        assert_eq!(knob_glow(100), "0 0 20px 5px rgba(99, 102, 241, 0.6)");
        assert_eq!(knob_glow(1), "0 0 0.2px 0.05px rgba(99, 102, 241, 0.6)");
    }

    #[test]
    fn transform_uses_degrees() {
        assert_eq!(knob_transform(36.0), "rotate(36deg)");
    }
}
