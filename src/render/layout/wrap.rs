use crate::error::LayoutError;
use crate::render::helpers::text_metrics::TextMeasure;

/// Greedy word wrap.
///
/// Breaks at the last word boundary that keeps the measured line within
/// `max_width`. A word wider than `max_width` gets a line of its own and is
/// never hyphenated. Whitespace runs collapse to single spaces; text with no
/// words yields no lines.
pub fn measure_wrap<M: TextMeasure + ?Sized>(
    measurer: &M,
    text: &str,
    max_width: f32,
    font_size: f32,
) -> Result<Vec<String>, LayoutError> {
    // Also rejects NaN
    if !(max_width > 0.0) {
        return Err(LayoutError::InvalidWidth(max_width));
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if measurer.measure_text(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::helpers::text_metrics::get_helvetica_measurer;

    /// Every character is `font_size / 10` mm wide
    struct Monospace;

    impl TextMeasure for Monospace {
        fn measure_text(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size / 10.0
        }
    }

    #[test]
    fn test_breaks_at_last_fitting_word() {
        let lines = measure_wrap(&Monospace, "aaa bbb ccc ddd", 7.0, 10.0).unwrap();
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_exact_width_fits() {
        let lines = measure_wrap(&Monospace, "abc def", 7.0, 10.0).unwrap();
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let lines = measure_wrap(&Monospace, "a supercalifragilistic b", 5.0, 10.0).unwrap();
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_whitespace_collapses() {
        let lines = measure_wrap(&Monospace, "  one \n two\tthree  ", 100.0, 10.0).unwrap();
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(measure_wrap(&Monospace, "   ", 10.0, 10.0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_width() {
        assert_eq!(
            measure_wrap(&Monospace, "text", 0.0, 10.0),
            Err(LayoutError::InvalidWidth(0.0))
        );
        assert!(measure_wrap(&Monospace, "text", -3.0, 10.0).is_err());
        assert!(measure_wrap(&Monospace, "text", f32::NAN, 10.0).is_err());
    }

    #[test]
    fn test_lines_within_width_with_builtin_metrics() {
        let measurer = get_helvetica_measurer();
        let text = "A proactive and results-driven Software Engineer with extensive experience \
                    in the integration, deployment, and support of Point of Sale (POS) systems \
                    and mobile applications. Skilled in providing onsite and offsite client \
                    support, ensuring smooth system implementations.";

        for width in [20.0, 45.5, 85.0, 180.0] {
            let lines = measure_wrap(measurer, text, width, 10.0).unwrap();
            assert!(lines.len() > 1 || width >= 180.0);
            for line in &lines {
                let single_word = !line.contains(' ');
                assert!(
                    single_word || measurer.measure_width_mm(line, 10.0) <= width,
                    "line {:?} exceeds {} mm",
                    line,
                    width
                );
            }

            let rejoined = lines.join(" ");
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), original);
        }
    }

    #[test]
    fn test_restartable() {
        let text = "Kubernetes Docker Flutter Angular Spring Boot";
        let first = measure_wrap(&Monospace, text, 12.0, 10.0).unwrap();
        let second = measure_wrap(&Monospace, text, 12.0, 10.0).unwrap();
        assert_eq!(first, second);
    }
}
