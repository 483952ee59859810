use daybook_core::config::DaybookConfig;
use daybook_core::error::DaybookError;
use daybook_core::store::LessonStore;
use daybook_core::worksheet::render_worksheet;
use std::path::PathBuf;

pub fn run(config: &DaybookConfig, lesson: &str, out: Option<PathBuf>) -> Result<(), DaybookError> {
    let store = LessonStore::load(&config.store_path)?;
    let key = store
        .resolve(lesson)
        .ok_or_else(|| DaybookError::UnknownLesson(lesson.to_string()))?;
    let Some(record) = store.get(&key) else {
        return Err(DaybookError::UnknownLesson(key));
    };

    let worksheet = render_worksheet(&key, record, config.lines_per_page);

    match out {
        Some(path) => {
            std::fs::write(&path, worksheet.to_text())?;
            eprintln!(
                "{key} worksheet ({} page(s)) written to {}",
                worksheet.page_count(),
                path.display()
            );
        }
        None => print!("{}", worksheet.to_text()),
    }
    Ok(())
}
