//! Span Compositor
//!
//! Splits a text into plain and highlighted segments from detected spans.
//! Offsets are character offsets (the service counts code points), never
//! byte offsets.
//!
//! Input is not trusted to be sorted or disjoint: spans are ordered by
//! `(masked_start, masked_end)`, and a span starting inside an already
//! highlighted region is dropped. Output always partitions the text.

use crate::models::DetectedSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Span label, highlighted segments only
    pub label: Option<String>,
}

impl Segment {
    pub fn is_highlighted(&self) -> bool {
        self.kind == SegmentKind::Highlighted
    }
}

/// Compose `base` with spans positioned by `masked_start..masked_end`.
pub fn compose(base: &str, spans: &[DetectedSpan]) -> Vec<Segment> {
    let chars: Vec<char> = base.chars().collect();
    let len = chars.len();
    let segment = |kind: SegmentKind, start: usize, end: usize, label: Option<String>| Segment {
        kind,
        start,
        end,
        text: chars[start..end].iter().collect(),
        label,
    };

    // Stable: equal keys keep response order
    let mut ordered: Vec<&DetectedSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| (span.masked_start, span.masked_end));

    let mut segments = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut cursor = 0;

    for span in ordered {
        let start = span.masked_start;
        let end = span.masked_end.min(len);
        // empty, inverted, past the end, or overlapping what is already out
        if start >= end || start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(segment(SegmentKind::Plain, cursor, start, None));
        }
        segments.push(segment(
            SegmentKind::Highlighted,
            start,
            end,
            Some(span.label.clone()),
        ));
        cursor = cursor.max(end);
    }

    if cursor < len {
        segments.push(segment(SegmentKind::Plain, cursor, len, None));
    }
    if segments.is_empty() {
        segments.push(segment(SegmentKind::Plain, 0, len, None));
    }
    segments
}

/// `base[start..end]` in characters, clamped to the text
pub fn char_slice(base: &str, start: usize, end: usize) -> String {
    base.chars().skip(start).take(end.saturating_sub(start)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> DetectedSpan {
        labelled("PERSON", start, end)
    }

    fn labelled(label: &str, start: usize, end: usize) -> DetectedSpan {
        DetectedSpan {
            label: label.to_string(),
            text: String::new(),
            start_char: start,
            end_char: end,
            masked_start: start,
            masked_end: end,
        }
    }

    fn shape(segments: &[Segment]) -> Vec<(SegmentKind, &str)> {
        segments.iter().map(|s| (s.kind, s.text.as_str())).collect()
    }

    fn assert_partition(base: &str, segments: &[Segment]) {
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, base);
        assert_eq!(segments.first().map(|s| s.start), Some(0));
        assert_eq!(segments.last().map(|s| s.end), Some(base.chars().count()));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start <= pair[1].start);
            assert!(
                pair[0].is_highlighted() || pair[1].is_highlighted(),
                "adjacent plain segments in {:?}",
                segments
            );
        }
    }

    #[test]
    fn test_empty_spans() {
        let segments = compose("hello", &[]);
        assert_eq!(shape(&segments), vec![(SegmentKind::Plain, "hello")]);
        assert_eq!((segments[0].start, segments[0].end), (0, 5));
    }

    #[test]
    fn test_empty_base() {
        let segments = compose("", &[]);
        assert_eq!(shape(&segments), vec![(SegmentKind::Plain, "")]);

        let segments = compose("", &[span(0, 3)]);
        assert_eq!(shape(&segments), vec![(SegmentKind::Plain, "")]);
    }

    #[test]
    fn test_overlap_skips_later_span() {
        let segments = compose("abcdef", &[span(1, 4), span(2, 3)]);
        assert_eq!(
            shape(&segments),
            vec![
                (SegmentKind::Plain, "a"),
                (SegmentKind::Highlighted, "bcd"),
                (SegmentKind::Plain, "ef"),
            ]
        );
    }

    #[test]
    fn test_same_start_prefers_shorter_span() {
        let segments = compose("abcdef", &[span(1, 5), span(1, 2)]);
        assert_eq!(
            shape(&segments),
            vec![
                (SegmentKind::Plain, "a"),
                (SegmentKind::Highlighted, "b"),
                (SegmentKind::Plain, "cdef"),
            ]
        );
    }

    #[test]
    fn test_duplicate_spans_keep_first_label() {
        let segments = compose("abc", &[labelled("EMAIL", 0, 3), labelled("URL", 0, 3)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label.as_deref(), Some("EMAIL"));
    }

    #[test]
    fn test_unsorted_input() {
        let segments = compose("0123456789", &[span(7, 9), span(0, 2), span(4, 5)]);
        assert_eq!(
            shape(&segments),
            vec![
                (SegmentKind::Highlighted, "01"),
                (SegmentKind::Plain, "23"),
                (SegmentKind::Highlighted, "4"),
                (SegmentKind::Plain, "56"),
                (SegmentKind::Highlighted, "78"),
                (SegmentKind::Plain, "9"),
            ]
        );
    }

    #[test]
    fn test_adjacent_and_boundary_spans() {
        let segments = compose("abcd", &[span(0, 2), span(2, 4)]);
        assert_eq!(
            shape(&segments),
            vec![(SegmentKind::Highlighted, "ab"), (SegmentKind::Highlighted, "cd")]
        );
    }

    #[test]
    fn test_multibyte_offsets_are_characters() {
        let masked = "＊＊のメールは **************** です。";
        let segments = compose(masked, &[span(0, 2), span(8, 24)]);
        assert_eq!(
            shape(&segments),
            vec![
                (SegmentKind::Highlighted, "＊＊"),
                (SegmentKind::Plain, "のメールは "),
                (SegmentKind::Highlighted, "****************"),
                (SegmentKind::Plain, " です。"),
            ]
        );
        assert_partition(masked, &segments);
    }

    #[test]
    fn test_invalid_spans_are_ignored() {
        let segments = compose("abcdef", &[span(3, 3), span(4, 2), span(10, 12)]);
        assert_eq!(shape(&segments), vec![(SegmentKind::Plain, "abcdef")]);
    }

    #[test]
    fn test_span_past_end_is_clamped() {
        let segments = compose("abcdef", &[span(4, 99)]);
        assert_eq!(
            shape(&segments),
            vec![(SegmentKind::Plain, "abcd"), (SegmentKind::Highlighted, "ef")]
        );
    }

    #[test]
    fn test_idempotent() {
        let spans = [span(5, 6), span(1, 4), span(2, 3), span(1, 4)];
        assert_eq!(compose("abcdefgh", &spans), compose("abcdefgh", &spans));
    }

    #[test]
    fn test_partition_over_all_span_pairs() {
        let base = "ab＊de";
        let len = base.chars().count();
        let mut candidates = Vec::new();
        for start in 0..=len + 1 {
            for end in start..=len + 1 {
                candidates.push(span(start, end));
            }
        }
        for first in &candidates {
            for second in &candidates {
                let segments = compose(base, &[first.clone(), second.clone()]);
                assert_partition(base, &segments);
            }
        }
    }

    #[test]
    fn test_partition_over_span_triples() {
        let base = "a＊cd";
        let len = base.chars().count();
        let mut candidates = Vec::new();
        for start in 0..=len + 1 {
            for end in 0..=len + 1 {
                candidates.push(span(start, end));
            }
        }
        for first in &candidates {
            for second in &candidates {
                for third in &candidates {
                    let spans = [first.clone(), second.clone(), third.clone()];
                    assert_partition(base, &compose(base, &spans));
                }
            }
        }
    }

    #[test]
    fn test_char_slice() {
        assert_eq!(char_slice("太郎のメール", 3, 6), "メール");
        assert_eq!(char_slice("abc", 1, 99), "bc");
        assert_eq!(char_slice("abc", 2, 1), "");
    }
}
