use super::*;
use crate::error::ChunkError;

fn spans_for(text: &str, max_chars: usize, overlap_chars: usize) -> Vec<(usize, usize)> {
    let map = TextMap::new(text);
    chunk_spans(&map, &SplitConfig::new(max_chars, overlap_chars)).unwrap()
}

#[test]
fn test_empty_text_yields_no_spans() {
    assert_eq!(spans_for("", 100, 10), vec![]);
}

#[test]
fn test_short_text_is_one_span() {
    assert_eq!(spans_for("hello", 100, 10), vec![(0, 5)]);
}

#[test]
fn test_rejects_zero_max_chars() {
    let map = TextMap::new("abc");
    let err = chunk_spans(&map, &SplitConfig::new(0, 0)).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidConfig(_)));
}

#[test]
fn test_rejects_overlap_at_or_above_max() {
    let map = TextMap::new("abc");
    let err = chunk_spans(&map, &SplitConfig::new(10, 10)).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidConfig(_)));

    let err = chunk_spans(&map, &SplitConfig::new(10, 11)).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidConfig(_)));
}

#[test]
fn test_no_newline_windows_step_by_overlap() {
    // 1000 characters, no newlines: spans fall exactly on the window grid.
    let text = "x".repeat(1000);
    let spans = spans_for(&text, 400, 50);
    assert_eq!(spans, vec![(0, 400), (350, 750), (700, 1000)]);
}

#[test]
fn test_snaps_to_newline_inside_window() {
    // Newline at position 50 is past min_end (0.6 * 80 = 48), so the first
    // chunk ends just after it instead of at the hard end 80.
    let text = format!("{}\n{}", "a".repeat(50), "b".repeat(100));
    let spans = spans_for(&text, 80, 0);
    assert_eq!(spans[0], (0, 51));
    // Remaining text has no newline, so the rest falls on hard ends.
    assert_eq!(spans, vec![(0, 51), (51, 131), (131, 151)]);
}

#[test]
fn test_ignores_newline_before_min_end() {
    // Newline at position 2 is far below min_end (0.6 * 50 = 30): no snap.
    let text = format!("ab\n{}", "c".repeat(97));
    let spans = spans_for(&text, 50, 0);
    assert_eq!(spans[0], (0, 50));
}

#[test]
fn test_final_chunk_never_snaps() {
    // The window reaches the end of text; the trailing newline is kept
    // inside the last chunk rather than forcing an extra empty span.
    let text = "line one\nline two\n";
    let spans = spans_for(text, 100, 10);
    assert_eq!(spans, vec![(0, text.len())]);
}

#[test]
fn test_spans_cover_text_with_bounded_overlap() {
    let text: String = ("lorem ipsum dolor sit amet\n").repeat(40);
    for &(max_chars, overlap) in &[(100, 0), (100, 20), (37, 9), (250, 50)] {
        let spans = spans_for(&text, max_chars, overlap);
        let len = text.chars().count();

        assert_eq!(spans.first().unwrap().0, 0);
        assert_eq!(spans.last().unwrap().1, len);
        for window in spans.windows(2) {
            let (prev, next) = (window[0], window[1]);
            // In order, no gaps, overlap within bounds.
            assert!(next.0 > prev.0);
            assert!(next.1 > prev.1);
            assert!(next.0 <= prev.1, "gap between spans");
            assert!(prev.1 - next.0 <= overlap, "overlap exceeds limit");
        }
        for &(start, end) in &spans {
            assert!(end > start);
            assert!(end - start <= max_chars);
        }
    }
}

#[test]
fn test_spans_are_character_offsets_not_bytes() {
    // Multibyte characters: 10 two-byte chars still form spans of 4 chars.
    let text = "é".repeat(10);
    let spans = spans_for(&text, 4, 0);
    assert_eq!(spans, vec![(0, 4), (4, 8), (8, 10)]);

    let map = TextMap::new(&text);
    assert_eq!(map.byte_range(0, 4), (0, 8));
    assert_eq!(map.byte_range(8, 10), (16, 20));
}

#[test]
fn test_line_lookup() {
    let map = TextMap::new("one\ntwo\nthree");
    assert_eq!(map.line_at(0), 1);
    assert_eq!(map.line_at(3), 1); // the newline itself ends line 1
    assert_eq!(map.line_at(4), 2);
    assert_eq!(map.line_at(7), 2);
    assert_eq!(map.line_at(8), 3);
    assert_eq!(map.line_at(12), 3);
}

#[test]
fn test_overlap_region_is_shared_text() {
    let text: String = "abcdefghij".repeat(20); // 200 chars, no newlines
    let spans = spans_for(&text, 60, 15);
    let chars: Vec<char> = text.chars().collect();
    for window in spans.windows(2) {
        let (prev, next) = (window[0], window[1]);
        // The overlap is a suffix of the earlier span and a prefix of the
        // later one, so both read the same characters.
        let shared: String = chars[next.0..prev.1].iter().collect();
        assert!(!shared.is_empty() || prev.1 == next.0);
        assert_eq!(prev.1 - next.0, 15);
    }
}
