use crate::{
    args::ExportArgs,
    bookmark_writer::{export_to_chrome, WriteChrome},
    bookmarks::{BoundaryReport, KeeperBookmark},
    errors::TriageError,
    json, utils, Config,
};
use log::{debug, info};
use std::{
    io::{self, Write},
    path::Path,
};

/// Export keepers to a Chrome bookmarks file.
pub fn export(config: Config, args: ExportArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    let input_path = args.input.unwrap_or(config.report_path);
    let keepers = read_keepers(&input_path)?;

    match args.output {
        Some(output_path) => {
            let mut file = utils::create_file(&output_path)?;
            file.write_chrome(&keepers)?;
            info!(
                "Exported {} bookmarks to {}",
                keepers.len(),
                output_path.display()
            );
        }
        None => {
            let html = export_to_chrome(&keepers);
            io::stdout()
                .lock()
                .write_all(html.as_bytes())
                .map_err(TriageError::WriteStdout)?;
            info!("Exported {} bookmarks", keepers.len());
        }
    }

    Ok(())
}

/// Read the keepers from an import report, or from a list of bookmarks.
pub fn read_keepers(path: &Path) -> Result<Vec<KeeperBookmark>, anyhow::Error> {
    let buf = utils::read_file(path)?;

    if let Ok(report) = json::deserialize::<BoundaryReport>(&buf) {
        debug!("Read keepers from import report");
        Ok(report.keepers())
    } else if let Ok(keepers) = json::deserialize::<Vec<KeeperBookmark>>(&buf) {
        debug!("Read keepers from list");
        Ok(keepers)
    } else {
        Err(TriageError::InvalidKeepers {
            path: path.display().to_string(),
        }
        .into())
    }
}
