use daybook_core::assemble::ExtractionReport;
use daybook_core::model::LessonRecord;
use daybook_core::store::LessonStore;

pub fn print_report(report: &ExtractionReport) {
    println!("=== Lesson store ===\n");
    println!("  Lessons:   {}", report.lesson_count);
    println!("  Dialogue:  {} line(s)", report.dialogue_count);
    println!("  Patterns:  {}", report.pattern_count);
    println!("  Practice:  {} item(s)", report.practice_count);
    println!();

    if report.not_found.is_empty() {
        println!("  All lesson sections found.");
    } else {
        println!("  Sections not found ({}):", report.not_found.len());
        for chunk in report.not_found.chunks(8) {
            println!("    {}", chunk.join(", "));
        }
    }

    // not_found lessons are untitled too; list only the extra ones
    let untitled_only: Vec<&str> = report
        .untitled
        .iter()
        .filter(|k| !report.not_found.contains(*k))
        .map(String::as_str)
        .collect();
    if !untitled_only.is_empty() {
        println!("  Found without a title: {}", untitled_only.join(", "));
    }
}

pub fn print_list(store: &LessonStore) {
    for (key, record) in store.iter() {
        let title = if record.title.is_empty() {
            "(untitled)"
        } else {
            record.title.as_str()
        };
        println!(
            "{key}  {title}  [{}/{}/{}]",
            record.dialogue.len(),
            record.patterns.len(),
            record.practice.len()
        );
    }
}

/// Viewer rendering of one lesson. Patterns are already in
/// "pattern : translation" form; practice items print as stored.
pub fn format_lesson(key: &str, record: &LessonRecord) -> String {
    let mut lines = Vec::new();
    if record.title.is_empty() {
        lines.push(format!("=== {key} ==="));
    } else {
        lines.push(format!("=== {key}: {} ===", record.title));
    }

    lines.push(String::new());
    lines.push("Dialogue".to_string());
    if record.dialogue.is_empty() {
        lines.push("  (none)".to_string());
    }
    for line in &record.dialogue {
        lines.push(format!("  {}: {}", line.speaker, line.source));
        if !line.translation.is_empty() {
            lines.push(format!("     {}", line.translation));
        }
    }

    lines.push(String::new());
    lines.push("Key patterns".to_string());
    if record.patterns.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(record.patterns.iter().map(|p| format!("  - {p}")));

    lines.push(String::new());
    lines.push("Writing practice".to_string());
    if record.practice.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(record.practice.iter().map(|item| format!("  {item}")));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::model::{DialogueLine, Speaker};

    #[test]
    fn test_format_lesson_sections() {
        let record = LessonRecord {
            title: "Making plans".into(),
            dialogue: vec![DialogueLine {
                speaker: Speaker::B,
                source: "Yes, I am.".into(),
                translation: "네, 있어요.".into(),
            }],
            patterns: vec!["Let's ~ : 우리 ~하자".into()],
            practice: vec![],
        };

        let text = format_lesson("DAY 001", &record);
        assert!(text.starts_with("=== DAY 001: Making plans ==="));
        assert!(text.contains("  B: Yes, I am.\n     네, 있어요."));
        assert!(text.contains("  - Let's ~ : 우리 ~하자"));
        assert!(text.ends_with("Writing practice\n  (none)"));
    }

    #[test]
    fn test_format_untitled_lesson() {
        let text = format_lesson("DAY 002", &LessonRecord::default());
        assert!(text.starts_with("=== DAY 002 ===\n\nDialogue\n  (none)"));
        assert_eq!(text.matches("(none)").count(), 3);
    }
}
