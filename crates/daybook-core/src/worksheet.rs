//! Printable worksheet for one lesson.
//!
//! Rendered as paginated UTF-8 text: pages are separated by form feed, the
//! same convention pdftotext uses on the way in, so the result can be sent
//! to a printer or any Hangul-capable text-to-PDF tool as is.

use crate::model::LessonRecord;

pub const PAGE_BREAK: &str = "\x0c";
const NONE_LINE: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub pages: Vec<Vec<String>>,
}

impl Worksheet {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.join("\n") + "\n")
            .collect::<Vec<_>>()
            .join(PAGE_BREAK)
    }
}

/// Lay out a worksheet with a title, the dialogue transcript, the pattern
/// list and the practice list.
///
/// Each page holds at most `lines_per_page` lines including its footer.
/// A dialogue entry (sentence + translation) is never split across pages.
pub fn render_worksheet(label: &str, record: &LessonRecord, lines_per_page: usize) -> Worksheet {
    let mut blocks: Vec<Vec<String>> = vec![vec![
        format!("{label} Worksheet"),
        record.title.clone(),
        String::new(),
    ]];

    blocks.push(vec!["== Dialogue ==".to_string()]);
    if record.dialogue.is_empty() {
        blocks.push(vec![NONE_LINE.to_string()]);
    }
    for line in &record.dialogue {
        blocks.push(vec![
            format!("{}: {}", line.speaker, line.source),
            format!("   {}", line.translation),
        ]);
    }
    blocks.push(vec![String::new(), "== Key Patterns ==".to_string()]);
    blocks.extend(bulleted(&record.patterns, "•"));
    blocks.push(vec![String::new(), "== Writing Practice ==".to_string()]);
    blocks.extend(bulleted(&record.practice, "□"));

    paginate(label, blocks, lines_per_page)
}

fn bulleted(items: &[String], bullet: &str) -> Vec<Vec<String>> {
    if items.is_empty() {
        return vec![vec![NONE_LINE.to_string()]];
    }
    items
        .iter()
        .map(|item| vec![format!("{bullet} {item}")])
        .collect()
}

fn paginate(label: &str, blocks: Vec<Vec<String>>, lines_per_page: usize) -> Worksheet {
    // one line per page is reserved for the footer
    let capacity = lines_per_page.max(2) - 1;
    let mut pages: Vec<Vec<String>> = vec![Vec::new()];

    for block in blocks {
        let current_len = pages.last().map_or(0, Vec::len);
        if current_len > 0 && current_len + block.len() > capacity {
            pages.push(Vec::new());
        }
        for line in block {
            if pages.last().map_or(0, Vec::len) >= capacity {
                pages.push(Vec::new());
            }
            if let Some(page) = pages.last_mut() {
                page.push(line);
            }
        }
    }

    let total = pages.len();
    for (i, page) in pages.iter_mut().enumerate() {
        page.push(format!("-- {label}, page {}/{total} --", i + 1));
    }
    Worksheet { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DialogueLine, Speaker};

    fn record() -> LessonRecord {
        LessonRecord {
            title: "길 묻기".into(),
            dialogue: vec![
                DialogueLine {
                    speaker: Speaker::A,
                    source: "Where is the bank?".into(),
                    translation: "은행이 어디예요?".into(),
                },
                DialogueLine {
                    speaker: Speaker::B,
                    source: "It's over there.".into(),
                    translation: "저기 있어요.".into(),
                },
            ],
            patterns: vec!["Where is ~? : ~는 어디예요?".into()],
            practice: vec!["1. 역이 어디예요?".into()],
        }
    }

    #[test]
    fn test_single_page_layout() {
        let sheet = render_worksheet("DAY 007", &record(), 48);
        assert_eq!(sheet.page_count(), 1);
        let page = &sheet.pages[0];
        assert_eq!(page[0], "DAY 007 Worksheet");
        assert_eq!(page[1], "길 묻기");
        assert!(page.contains(&"A: Where is the bank?".to_string()));
        assert!(page.contains(&"   은행이 어디예요?".to_string()));
        assert!(page.contains(&"• Where is ~? : ~는 어디예요?".to_string()));
        assert!(page.contains(&"□ 1. 역이 어디예요?".to_string()));
        assert_eq!(page.last().unwrap(), "-- DAY 007, page 1/1 --");
    }

    #[test]
    fn test_empty_sections_render_none() {
        let sheet = render_worksheet("DAY 001", &LessonRecord::default(), 48);
        let none_lines = sheet.pages[0].iter().filter(|l| *l == NONE_LINE).count();
        assert_eq!(none_lines, 3);
    }

    #[test]
    fn test_pagination_respects_page_size_and_keeps_pairs() {
        let mut rec = record();
        for i in 0..20 {
            rec.dialogue.push(DialogueLine {
                speaker: if i % 2 == 0 { Speaker::A } else { Speaker::B },
                source: format!("Line {i}."),
                translation: format!("줄 {i}."),
            });
        }
        let sheet = render_worksheet("DAY 002", &rec, 10);
        assert!(sheet.page_count() > 1);
        for page in &sheet.pages {
            assert!(page.len() <= 10);
            // a translation line never opens a page
            assert!(!page[0].starts_with("   "));
        }
        let text = sheet.to_text();
        assert_eq!(text.matches(PAGE_BREAK).count(), sheet.page_count() - 1);
        assert!(text.contains("Line 19."));
    }
}
