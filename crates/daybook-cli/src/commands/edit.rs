use daybook_core::config::DaybookConfig;
use daybook_core::editor::{apply_edit, Edit};
use daybook_core::error::DaybookError;
use daybook_core::model::Speaker;
use daybook_core::store::LessonStore;

use crate::EditAction;

pub fn run(config: &DaybookConfig, lesson: &str, action: EditAction) -> Result<(), DaybookError> {
    let edit = to_edit(action)?;

    let mut store = LessonStore::load(&config.store_path)?;
    let (key, summary) = apply_edit(&mut store, lesson, edit)?;
    store.save(&config.store_path)?;

    eprintln!("{key}: {summary}");
    Ok(())
}

fn to_edit(action: EditAction) -> Result<Edit, DaybookError> {
    let edit = match action {
        EditAction::Title { title } => Edit::Title(title),
        EditAction::AddLine => Edit::AddLine,
        EditAction::SetLine {
            index,
            speaker,
            source,
            translation,
        } => {
            let speaker = Speaker::from_str_loose(&speaker).ok_or_else(|| {
                DaybookError::InvalidEdit(format!("speaker must be A or B, got '{speaker}'"))
            })?;
            Edit::SetLine {
                index,
                speaker,
                source,
                translation,
            }
        }
        EditAction::Prune => Edit::PruneBlankLines,
        EditAction::Patterns { file } => Edit::Patterns(std::fs::read_to_string(file)?),
        EditAction::Practice { file } => Edit::Practice(std::fs::read_to_string(file)?),
    };
    Ok(edit)
}
