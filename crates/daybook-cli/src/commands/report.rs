use daybook_core::assemble::ExtractionReport;
use daybook_core::config::DaybookConfig;
use daybook_core::error::DaybookError;
use daybook_core::store::LessonStore;

use crate::output;

pub fn run(config: &DaybookConfig, output_format: &str) -> Result<(), DaybookError> {
    let store = LessonStore::load(&config.store_path)?;
    let report = ExtractionReport::for_store(&store);

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report),
    }
    Ok(())
}

pub fn config(config: &DaybookConfig) -> Result<(), DaybookError> {
    print!("{}", config.to_toml()?);
    Ok(())
}
