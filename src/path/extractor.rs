// src/path/extractor.rs — Parse generator text into step candidates

use super::types::{SkillLevel, StepCandidate};
use crate::util::find_ignore_ascii_case;

/// Duration assigned when the generator omits the field.
const DEFAULT_DURATION: &str = "2-3 weeks";

/// Labels recognized inside a step segment. A field's text runs from its
/// label to the start of the next recognized label or the end of the segment.
const LABELS: [&str; 7] = [
    "Title:",
    "Description:",
    "Difficulty:",
    "Duration:",
    "Key Modules:",
    "Prerequisites:",
    "Learning Outcomes:",
];

/// Parse raw generator text into an ordered list of step candidates.
///
/// Never fails: text with no recognizable `Step <n>:` markers yields an
/// empty vector, and a malformed segment is repaired with defaults or
/// dropped (when it has no title) without affecting its neighbors. Segment
/// order is preserved — it is the generator's intended curricular order
/// until the orderer reorders by progression.
pub fn extract(raw_text: &str) -> Vec<StepCandidate> {
    let mut steps = Vec::new();
    for (index, segment) in split_segments(raw_text).into_iter().enumerate() {
        if let Some(step) = parse_segment(segment, index) {
            steps.push(step);
        }
    }
    steps
}

/// Stage one: split on the recurring `Step <n>:` marker (any ASCII case,
/// mid-line allowed). Text before the first marker is discarded.
fn split_segments(text: &str) -> Vec<&str> {
    let markers = marker_offsets(text);
    let mut segments = Vec::with_capacity(markers.len());
    for (i, &(_, body_start)) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map(|&(start, _)| start).unwrap_or(text.len());
        segments.push(&text[body_start..end]);
    }
    segments
}

/// Byte offsets of each `Step <n>:` marker as (marker start, body start).
fn marker_offsets(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut offsets = Vec::new();
    let mut i = 0;
    while i + 4 <= bytes.len() {
        if bytes[i..i + 4].eq_ignore_ascii_case(b"step") {
            let mut j = i + 4;
            while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
                j += 1;
            }
            let digits = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > digits && j < bytes.len() && bytes[j] == b':' {
                offsets.push((i, j + 1));
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    offsets
}

/// Stage two: labeled-field extraction with defaults. A segment with no
/// extractable title has no identity and is dropped.
fn parse_segment(segment: &str, index: usize) -> Option<StepCandidate> {
    let title = scalar_field(segment, "Title:")?;

    Some(StepCandidate {
        id: format!("step-{}", index + 1),
        title,
        description: scalar_field(segment, "Description:").unwrap_or_default(),
        difficulty: scalar_field(segment, "Difficulty:")
            .as_deref()
            .and_then(|s| s.split_whitespace().next())
            .map(SkillLevel::parse_lenient)
            .unwrap_or_default(),
        duration: scalar_field(segment, "Duration:").unwrap_or_else(|| DEFAULT_DURATION.into()),
        modules: list_field(segment, "Key Modules:"),
        prerequisites: list_field(segment, "Prerequisites:"),
        learning_outcomes: list_field(segment, "Learning Outcomes:"),
    })
}

/// A scalar field's value: the rest of the line following its label.
/// Whitespace directly after the label (including a line break) is skipped.
/// Returns `None` when the label is absent or the value is empty.
fn scalar_field(segment: &str, label: &str) -> Option<String> {
    let at = find_ignore_ascii_case(segment, label)?;
    let rest = segment[at + label.len()..].trim_start();
    let line = rest.lines().next()?.trim_end();
    if line.is_empty() {
        return None;
    }
    Some(line.to_string())
}

/// A list field's entries: one per line from the label to the next
/// recognized label, bullet dashes stripped, blank lines dropped.
fn list_field(segment: &str, label: &str) -> Vec<String> {
    let Some(at) = find_ignore_ascii_case(segment, label) else {
        return Vec::new();
    };
    let start = at + label.len();
    let end = next_label_offset(segment, start);
    segment[start..end]
        .lines()
        .map(|line| line.trim().trim_start_matches('-').trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Earliest offset of any recognized label at or after `from`.
fn next_label_offset(segment: &str, from: usize) -> usize {
    LABELS
        .iter()
        .filter_map(|label| find_ignore_ascii_case(&segment[from..], label).map(|p| from + p))
        .min()
        .unwrap_or(segment.len())
}
