//! Visit counting for the binary.

use borboleta::{BorboletaConfig, BorboletaResult, FileVisitCounter, VisitCounter};

/// Count this launch; failures are logged and hide the counter.
pub fn record_launch(config: &BorboletaConfig) -> Option<u64> {
    let counter = FileVisitCounter::new(config.storage().resolved_data_dir());
    match counter.increment() {
        Ok(total) => Some(total),
        Err(e) => {
            tracing::warn!(error = %e, path = %counter.path().display(), "Could not record visit");
            None
        }
    }
}

/// Print the launch count and the time of the latest launch.
pub fn show_visits(config: &BorboletaConfig) -> BorboletaResult<()> {
    let counter = FileVisitCounter::new(config.storage().resolved_data_dir());
    let record = counter.load()?;
    println!("Visitas: {}", record.count());
    if let Some(at) = record.last_visit() {
        println!("Última visita: {}", at.to_rfc3339());
    }
    Ok(())
}
