//! One-shot import of a legacy bot log into the snapshot format.

use std::path::Path;

use pxstats_core::{PxStatsConfig, Result};

/// Result of a legacy import run.
#[derive(Debug)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub target: std::path::PathBuf,
}

/// Read `source` (the legacy `events.json`), convert, and write the
/// snapshot into `data_dir`. The ring bound applies during import, so a
/// reload sees exactly what a long-running process would have kept.
pub fn run_import(source: &Path, data_dir: &Path) -> Result<ImportReport> {
    let config = PxStatsConfig::from_env(data_dir)?;

    let (store, skipped) = pxstats_store::load_legacy(source, config.ring_capacity)?;
    pxstats_store::save(&store, &config.data_paths.events_file)?;

    Ok(ImportReport {
        imported: store.len(),
        skipped,
        target: config.data_paths.events_file,
    })
}

pub fn print_report(report: &ImportReport) {
    println!("Import complete:");
    println!("  imported: {}", report.imported);
    println!("  skipped:  {}", report.skipped);
    println!("  snapshot: {}", report.target.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("legacy.json");
        std::fs::write(
            &source,
            r#"[{"timestamp": "2025-11-13T12:00:00+01:00", "type": "Catch",
                "name": "Larvitar", "iv": [15, 15, 15], "shiny": false}]"#,
        )
        .unwrap();

        let data_dir = dir.path().join("data");
        let report = run_import(&source, &data_dir).unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 0);

        let store = pxstats_store::load(&report.target, 100).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap().name, "Larvitar");
    }
}
