//! OCR text cleanup ahead of label correction and extraction.
//!
//! Characters outside the report alphabet become spaces, never vanish, so two
//! digit runs separated by OCR noise (`13·5`) stay two numbers.

/// Symbols that carry meaning next to lab readings: decimal and list
/// separators, ranges, units, comparison signs.
const REPORT_SYMBOLS: &str = ".,;:-/()[]+=%#<>*_'\"°µ\u{2013}";

fn is_report_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || REPORT_SYMBOLS.contains(c)
}

/// Replace stray symbols and control characters with spaces, trim each line,
/// drop blank lines.
pub fn sanitize_report_text(raw: &str) -> String {
    let spaced: String = raw
        .chars()
        .map(|c| match c {
            '\n' => '\n',
            c if c.is_control() => ' ',
            c if is_report_char(c) => c,
            _ => ' ',
        })
        .collect();

    spaced
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::extract;

    #[test]
    fn control_characters_become_spaces() {
        let clean = sanitize_report_text("Hemoglobin:\x00 13.5\x01\x02\nGlucose: 98");
        assert_eq!(clean, "Hemoglobin:  13.5\nGlucose: 98");
    }

    #[test]
    fn units_and_ranges_survive() {
        let raw = "Cholesterol: 210 mg/dL (100-200)";
        assert_eq!(sanitize_report_text(raw), raw);
    }

    #[test]
    fn blank_lines_dropped_and_lines_trimmed() {
        let raw = "  Line one  \n\n\n   Line two\r\n\n";
        assert_eq!(sanitize_report_text(raw), "Line one\nLine two");
    }

    #[test]
    fn decorative_symbols_removed() {
        assert_eq!(sanitize_report_text("★ Hb: 12.9 ✓"), "Hb: 12.9");
        assert_eq!(sanitize_report_text(""), "");
        assert_eq!(sanitize_report_text("\x00\x01\x02"), "");
    }

    #[test]
    fn noise_between_digits_does_not_merge_them() {
        let raw = "Hemoglobin: 13·5";
        assert_eq!(sanitize_report_text(raw), "Hemoglobin: 13 5");
        assert_eq!(extract(&sanitize_report_text(raw)), extract(raw));
        assert_eq!(extract(&sanitize_report_text(raw)).hemoglobin, Some(13.0));
    }

    #[test]
    fn extraction_unchanged_for_clean_reports() {
        let raw = "Hemoglobin: 13.5 g/dL\nBlood Sugar: 110\nTotal Cholesterol: 205";
        assert_eq!(extract(&sanitize_report_text(raw)), extract(raw));
    }
}
