use crate::model::LessonId;

/// Highest number accepted as a section marker when looking for the end of
/// a section. Wider than the lesson range so that appendix units also
/// terminate the last lesson.
pub const MARKER_SCAN_MAX: u16 = 200;

/// How far above the numeric marker the literal "DAY" token may sit.
const TOKEN_LOOKBACK: usize = 4;
/// Section start relative to the numeric marker when no token is found.
const FALLBACK_START: usize = 2;
/// The next marker is never closer than this to the current one.
const END_SCAN_OFFSET: usize = 3;
/// Lines above the next numeric marker that belong to the next lesson's header.
const END_MARGIN: usize = 2;

/// Line range of one lesson inside the full text stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// First line of the section (inclusive).
    pub start: usize,
    /// Index of the zero-padded numeric marker line.
    pub marker: usize,
    /// End of the section (exclusive).
    pub end: usize,
    pub title: String,
}

impl Section {
    pub fn slice<'a, 'b>(&self, lines: &'a [&'b str]) -> &'a [&'b str] {
        &lines[self.start.min(lines.len())..self.end.min(lines.len())]
    }
}

/// True for a trimmed line that is exactly a three-digit number in
/// `1..=MARKER_SCAN_MAX`.
pub fn is_numeric_marker(line: &str) -> bool {
    let t = line.trim();
    t.len() == 3
        && t.bytes().all(|b| b.is_ascii_digit())
        && t.parse::<u16>()
            .is_ok_and(|n| (1..=MARKER_SCAN_MAX).contains(&n))
}

/// Locate the section of `id` in `lines`.
///
/// The first line equal to the padded id ("005") is the marker. The section
/// starts right after a "DAY" token found at most four lines above it, or two
/// lines above the marker when there is no token. It ends two lines before
/// the next numeric marker, or at the end of the text.
pub fn find_section(lines: &[&str], id: LessonId) -> Option<Section> {
    let padded = id.padded();
    let marker = lines.iter().position(|l| l.trim() == padded)?;

    let start = (marker.saturating_sub(TOKEN_LOOKBACK)..marker)
        .find(|&j| lines[j].trim() == LessonId::MARKER_TOKEN)
        .map(|j| j + 1)
        .unwrap_or_else(|| marker.saturating_sub(FALLBACK_START));

    let title = lines[start..marker]
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty() && *l != LessonId::MARKER_TOKEN)
        .unwrap_or_default()
        .to_string();

    let end = (marker + END_SCAN_OFFSET..lines.len())
        .find(|&k| is_numeric_marker(lines[k]))
        .map(|k| k - END_MARGIN)
        .unwrap_or(lines.len());

    Some(Section {
        start,
        marker,
        end,
        title,
    })
}
