//! Internal utility functions.
//!
//! Helpers for fourcc decoding, timestamp conversion, and duration
//! formatting shared by the public modules.

use std::time::Duration;

use ffmpeg_next::Rational;

/// Decode a packed fourcc value into its four-character string form.
///
/// The tag is stored little-endian, one ASCII character per byte.
/// Non-printable bytes are rendered as `?` so the result is always four
/// characters long.
pub(crate) fn fourcc_to_string(tag: u32) -> String {
    (0..4)
        .map(|shift| {
            let byte = ((tag >> (8 * shift)) & 0xFF) as u8;
            if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '?'
            }
        })
        .collect()
}

/// Rescale a PTS value from stream time base to seconds.
pub(crate) fn pts_to_seconds(pts: i64, time_base: Rational) -> f64 {
    pts as f64 * time_base.numerator() as f64 / time_base.denominator() as f64
}

/// Convert a frame rate to an FFmpeg rational with millisecond precision.
///
/// Fractional rates such as 23.976 become `23976/1000` instead of being
/// truncated to an integer.
pub(crate) fn fps_to_rational(fps: f64) -> Rational {
    Rational::new((fps * 1000.0).round() as i32, 1000)
}

/// Format a duration as `HH:MM:SS`, truncating sub-second precision.
pub(crate) fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourcc_decodes_ascii_tags() {
        // 'mp4v' packed little-endian.
        let tag = u32::from_le_bytes(*b"mp4v");
        assert_eq!(fourcc_to_string(tag), "mp4v");

        let tag = u32::from_le_bytes(*b"avc1");
        assert_eq!(fourcc_to_string(tag), "avc1");
    }

    #[test]
    fn fourcc_masks_non_printable_bytes() {
        assert_eq!(fourcc_to_string(0), "????");
        let tag = u32::from_le_bytes([b'm', 0x01, b'4', 0xFF]);
        assert_eq!(fourcc_to_string(tag), "m?4?");
    }

    #[test]
    fn pts_conversion_uses_time_base() {
        let time_base = Rational::new(1, 12800);
        assert!((pts_to_seconds(12800, time_base) - 1.0).abs() < 1e-9);
        assert!((pts_to_seconds(6400, time_base) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fps_rational_keeps_fractional_rates() {
        let rate = fps_to_rational(23.976);
        assert_eq!(rate.numerator(), 23976);
        assert_eq!(rate.denominator(), 1000);

        let rate = fps_to_rational(8.0);
        assert_eq!(rate.numerator(), 8000);
        assert_eq!(rate.denominator(), 1000);
    }

    #[test]
    fn duration_formats_as_hh_mm_ss() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_duration(Duration::from_secs(75)), "00:01:15");
        assert_eq!(format_duration(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(format_duration(Duration::from_secs_f64(2.9)), "00:00:02");
    }
}
