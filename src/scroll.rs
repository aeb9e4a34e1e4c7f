//! Scroll-derived selection logic for the navigation controller.

/// Fraction of the viewport the page must scroll before the side dock shows.
pub const DOCK_REVEAL_FRACTION: f64 = 0.5;

/// A section counts as active once its top crosses this fraction of the
/// viewport below the scroll offset.
pub const ACTIVE_LINE_FRACTION: f64 = 1.0 / 3.0;

/// Plain threshold, no hysteresis band.
pub fn dock_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * DOCK_REVEAL_FRACTION
}

/// Pick the active section: scanning the ordered anchor list from the end,
/// the first section whose top offset has crossed the one-third viewport
/// line wins — i.e. the last section in document order that has scrolled
/// past the mark. `None` until the first section crosses it.
pub fn active_section<'a>(
    section_tops: &[(&'a str, f64)],
    scroll_y: f64,
    viewport_height: f64,
) -> Option<&'a str> {
    let line = scroll_y + viewport_height * ACTIVE_LINE_FRACTION;
    section_tops
        .iter()
        .rev()
        .find(|(_, top)| *top <= line)
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [(&str, f64); 5] = [
        ("about", 800.0),
        ("projects", 1600.0),
        ("skills", 2400.0),
        ("achievements", 3200.0),
        ("contact", 4000.0),
    ];

    #[test]
    fn no_section_before_first_threshold() {
        assert_eq!(active_section(&TOPS, 0.0, 900.0), None);
    }

    #[test]
    fn boundary_top_counts_as_crossed() {
        // about.top == scroll + viewport/3 exactly.
        assert_eq!(active_section(&TOPS, 500.0, 900.0), Some("about"));
    }

    #[test]
    fn last_crossed_section_wins() {
        // Line at 2000 + 300 = 2300: about and projects have crossed.
        assert_eq!(active_section(&TOPS, 2000.0, 900.0), Some("projects"));
        // Deep scroll selects the final section.
        assert_eq!(active_section(&TOPS, 10_000.0, 900.0), Some("contact"));
    }

    #[test]
    fn monotonic_scroll_yields_non_decreasing_sections() {
        let index_of = |id: &str| TOPS.iter().position(|(s, _)| *s == id);
        let mut previous: Option<usize> = None;
        let mut scroll = 0.0;
        while scroll < 5000.0 {
            let current = active_section(&TOPS, scroll, 900.0).and_then(index_of);
            match (previous, current) {
                (Some(p), Some(c)) => assert!(c >= p, "regressed from {p} to {c}"),
                (Some(_), None) => panic!("active section vanished while scrolling down"),
                _ => {}
            }
            if current.is_some() {
                previous = current;
            }
            scroll += 37.0;
        }
        assert_eq!(previous, Some(4));
    }

    #[test]
    fn active_id_is_always_a_known_section() {
        for step in 0..200 {
            let scroll = step as f64 * 25.0;
            if let Some(id) = active_section(&TOPS, scroll, 900.0) {
                assert!(TOPS.iter().any(|(s, _)| *s == id));
            }
        }
    }

    #[test]
    fn dock_reveal_is_a_pure_threshold() {
        assert!(!dock_visible(0.0, 900.0));
        assert!(!dock_visible(450.0, 900.0));
        assert!(dock_visible(450.1, 900.0));
        assert!(dock_visible(2000.0, 900.0));
    }

    #[test]
    fn empty_anchor_list_selects_nothing() {
        assert_eq!(active_section(&[], 5000.0, 900.0), None);
    }
}
