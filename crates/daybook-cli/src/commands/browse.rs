use daybook_core::audio::find_audio;
use daybook_core::config::DaybookConfig;
use daybook_core::cursor::LessonCursor;
use daybook_core::error::DaybookError;
use daybook_core::model::LessonId;
use daybook_core::store::LessonStore;

use crate::output;

pub fn list(config: &DaybookConfig) -> Result<(), DaybookError> {
    let store = LessonStore::load(&config.store_path)?;
    output::table::print_list(&store);
    Ok(())
}

pub fn show(
    config: &DaybookConfig,
    lesson: &str,
    next: bool,
    prev: bool,
    output_format: &str,
) -> Result<(), DaybookError> {
    let store = LessonStore::load(&config.store_path)?;
    let mut cursor = LessonCursor::new(&store).ok_or_else(|| DaybookError::EmptyStore {
        path: config.store_path.clone(),
    })?;
    if !cursor.select(lesson) {
        return Err(DaybookError::UnknownLesson(lesson.to_string()));
    }

    if next && !cursor.next() {
        eprintln!("{} is the last lesson", cursor.current());
    }
    if prev && !cursor.prev() {
        eprintln!("{} is the first lesson", cursor.current());
    }

    let key = cursor.current();
    let Some(record) = store.get(key) else {
        return Err(DaybookError::UnknownLesson(key.to_string()));
    };

    match output_format {
        "json" => output::json::print(record)?,
        _ => {
            println!("{}", output::table::format_lesson(key, record));
            let audio = LessonId::normalize(key)
                .and_then(|id| find_audio(&config.audio_dir, id, &config.audio_extension));
            if let Some(path) = audio {
                println!("\nAudio: {}", path.display());
            }
        }
    }
    Ok(())
}

pub fn audio(config: &DaybookConfig, lesson: &str) -> Result<(), DaybookError> {
    let id = LessonId::normalize(lesson)
        .ok_or_else(|| DaybookError::UnknownLesson(lesson.to_string()))?;

    match find_audio(&config.audio_dir, id, &config.audio_extension) {
        Some(path) => println!("{}", path.display()),
        None => eprintln!(
            "No audio for {id} in {} (expected {}.*.{})",
            config.audio_dir.display(),
            id.padded(),
            config.audio_extension
        ),
    }
    Ok(())
}
