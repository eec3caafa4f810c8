//! Text measurement and width helpers.

/// Returns the display width of a string in terminal columns.
///
/// ANSI escape sequences are excluded from the measurement, so styled and
/// unstyled renditions of the same text report the same width.
pub fn display_width(s: &str) -> usize {
    console::measure_text_width(s)
}

/// Centers a string within `width` display columns.
///
/// Wide (e.g. CJK) characters are measured by display width, not char count.
/// When the padding is odd, the extra column goes to the right. Strings that
/// already exceed `width` are returned unchanged.
pub fn pad_center(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Truncates a string to fit within `max_width` display columns, appending
/// `…` when anything was cut.
///
/// # Example
///
/// ```rust
/// use consoleverse::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    // One column is reserved for the ellipsis.
    let limit = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }

    out.push('…');
    out
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step grayscale ramp; everything else lands in the
/// 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use consoleverse::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
        };
    }
    let red = (r as u16 * 5 / 255) as u8;
    let green = (g as u16 * 5 / 255) as u8;
    let blue = (b as u16 * 5 / 255) as u8;
    16 + 36 * red + 6 * green + blue
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_width_ignores_ansi() {
        assert_eq!(display_width("plain"), 5);
        assert_eq!(display_width("\x1b[31mplain\x1b[0m"), 5);
    }

    #[test]
    fn test_pad_center_even_and_odd() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("toolong", 3), "toolong");
    }

    #[test]
    fn test_truncate_no_cut() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_with_cut() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("123456", 5), "1234…");
        assert_eq!(truncate_to_width("Hello", 1), "…");
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    proptest! {
        #[test]
        fn prop_truncate_never_exceeds_width(s in ".{0,64}", max in 1usize..40) {
            use unicode_width::UnicodeWidthStr;
            let t = truncate_to_width(&s, max);
            prop_assert!(t.width() <= max);
        }

        #[test]
        fn prop_pad_center_hits_requested_width(s in "[a-z]{0,10}", width in 0usize..30) {
            let padded = pad_center(&s, width);
            prop_assert!(display_width(&padded) >= width.min(display_width(&s)));
            if display_width(&s) <= width {
                prop_assert_eq!(display_width(&padded), width);
            }
        }
    }
}
