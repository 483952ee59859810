use crate::error::DaybookError;
use crate::model::{LessonId, LessonRecord};
use crate::parsing::parse_lesson;
use crate::store::LessonStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Summary of an extraction run or of an existing store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub lesson_count: usize,
    pub dialogue_count: usize,
    pub pattern_count: usize,
    pub practice_count: usize,
    /// Lessons whose section marker was not found in the text.
    pub not_found: Vec<String>,
    /// Lessons with an empty title; includes every `not_found` lesson.
    pub untitled: Vec<String>,
}

impl ExtractionReport {
    pub fn summarize(store: &LessonStore, not_found: &[LessonId]) -> Self {
        ExtractionReport {
            lesson_count: store.len(),
            dialogue_count: store.dialogue_count(),
            pattern_count: store.pattern_count(),
            practice_count: store.practice_count(),
            not_found: not_found.iter().map(|id| id.label()).collect(),
            untitled: store
                .iter()
                .filter(|(_, r)| r.title.is_empty())
                .map(|(k, _)| k.to_string())
                .collect(),
        }
    }

    /// Report for a persisted store, where completely empty records stand in
    /// for sections that were not found.
    pub fn for_store(store: &LessonStore) -> Self {
        let mut report = Self::summarize(store, &[]);
        report.not_found = store
            .iter()
            .filter(|(_, r)| r.is_empty())
            .map(|(k, _)| k.to_string())
            .collect();
        report
    }

    pub fn is_complete(&self) -> bool {
        self.untitled.is_empty()
    }
}

/// Build lesson records for `ids` from the full extracted text.
///
/// Lessons are processed in batches of `batch_size`; `on_batch` receives the
/// accumulated store after each batch (the caller persists it). A lesson
/// whose section is missing is stored as an empty record and listed in the
/// report; only an `on_batch` failure stops the run.
pub fn assemble<F>(
    text: &str,
    ids: &[LessonId],
    batch_size: usize,
    mut on_batch: F,
) -> Result<(LessonStore, ExtractionReport), DaybookError>
where
    F: FnMut(&LessonStore, &[LessonId]) -> Result<(), DaybookError>,
{
    let lines: Vec<&str> = text.lines().collect();
    let mut store = LessonStore::new();
    let mut not_found = Vec::new();

    for batch in ids.chunks(batch_size.max(1)) {
        if let (Some(first), Some(last)) = (batch.first(), batch.last()) {
            info!(first = %first, last = %last, "processing batch");
        }

        for &id in batch {
            let record = match parse_lesson(&lines, id) {
                Some(record) => {
                    debug!(
                        lesson = %id,
                        dialogue = record.dialogue.len(),
                        patterns = record.patterns.len(),
                        practice = record.practice.len(),
                        "lesson parsed"
                    );
                    record
                }
                None => {
                    warn!(lesson = %id, "section not found");
                    not_found.push(id);
                    LessonRecord::default()
                }
            };
            store.insert(id, record);
        }

        on_batch(&store, batch)?;
    }

    let report = ExtractionReport::summarize(&store, &not_found);
    info!(
        lessons = report.lesson_count,
        dialogue = report.dialogue_count,
        patterns = report.pattern_count,
        practice = report.practice_count,
        untitled = report.untitled.len(),
        "assembly complete"
    );
    Ok((store, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<u16>) -> Vec<LessonId> {
        range.filter_map(LessonId::new).collect()
    }

    const TEXT: &str = "\
DAY
Greetings
001
STEP 3 핵심 패턴 익히기
A: Hello there. 안녕하세요
Hello, ~ : 안녕, ~
B: Hi. 안녕
STEP 4
1. Say hello.E

DAY
Thanks
003
STEP 3
A: Thank you. 고마워요.
";

    #[test]
    fn test_missing_lesson_degrades_to_empty_record() {
        let (store, report) = assemble(TEXT, &ids(1..=3), 10, |_, _| Ok(())).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("DAY 002"), Some(&LessonRecord::default()));
        assert_eq!(report.not_found, vec!["DAY 002"]);
        assert_eq!(report.untitled, vec!["DAY 002"]);

        let day1 = store.get("DAY 001").unwrap();
        assert_eq!(day1.title, "Greetings");
        assert_eq!(day1.dialogue.len(), 2);
        assert_eq!(day1.patterns, vec!["Hello, ~ : 안녕, ~"]);
        assert_eq!(day1.practice, vec!["1. Say hello."]);

        let day3 = store.get("DAY 003").unwrap();
        assert_eq!(day3.title, "Thanks");
        assert_eq!(day3.dialogue[0].translation, "고마워요.");
    }

    #[test]
    fn test_report_totals() {
        let (_, report) = assemble(TEXT, &ids(1..=3), 10, |_, _| Ok(())).unwrap();
        assert_eq!(report.lesson_count, 3);
        assert_eq!(report.dialogue_count, 3);
        assert_eq!(report.pattern_count, 1);
        assert_eq!(report.practice_count, 1);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_on_batch_called_per_batch_with_accumulated_store() {
        let mut seen = Vec::new();
        assemble(TEXT, &ids(1..=25), 10, |store, batch| {
            seen.push((store.len(), batch.len()));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![(10, 10), (20, 10), (25, 5)]);
    }

    #[test]
    fn test_on_batch_error_stops_run() {
        let mut calls = 0;
        let result = assemble(TEXT, &ids(1..=30), 10, |_, _| {
            calls += 1;
            Err(DaybookError::Extraction("disk full".into()))
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_empty_text_reports_every_lesson() {
        let all: Vec<LessonId> = LessonId::all().collect();
        let (store, report) = assemble("", &all, 10, |_, _| Ok(())).unwrap();
        assert_eq!(store.len(), 130);
        assert_eq!(report.not_found.len(), 130);
        assert_eq!(report.dialogue_count, 0);
    }

    #[test]
    fn test_for_store_flags_empty_records() {
        let (store, _) = assemble(TEXT, &ids(1..=3), 10, |_, _| Ok(())).unwrap();
        let report = ExtractionReport::for_store(&store);
        assert_eq!(report.not_found, vec!["DAY 002"]);
        assert_eq!(report.lesson_count, 3);
    }
}
