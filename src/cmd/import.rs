use crate::{
    args::ImportArgs,
    bookmark_reader,
    bookmarks::{detect_boundary, BoundaryReport},
    json,
    settings::SettingsArgs,
    utils, Config, Settings,
};
use log::{debug, info, warn};

/// Import a Chrome bookmarks export, split it into keepers and bookmarks to be
/// categorized, and write the import report.
pub fn import(config: Config, args: ImportArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    if args.dry_run {
        println!("Running in dry mode ...")
    }

    // Arguments given in the CLI take precedence over the configured settings.
    let mut settings = config.settings.clone();
    settings.apply(SettingsArgs::new(
        args.set_marker.marker_url,
        args.set_marker.marker_folder,
        args.strategy,
    ))?;

    let html = utils::read_file_to_string(&args.source)?;
    let report = import_bookmarks(&html, &settings);
    log_report(&report, &settings);

    if !args.dry_run {
        let report_path = args.output.unwrap_or(config.report_path);
        let report_json = json::serialize(&report)?;
        utils::write_file(&report_path, &report_json)?;
        info!("Wrote import report to {}", report_path.display());
    }

    Ok(())
}

/// Parse the bookmarks and detect the last keeper.
pub fn import_bookmarks(html: &str, settings: &Settings) -> BoundaryReport {
    let bookmarks = bookmark_reader::parse_with(html, settings.strategy);
    detect_boundary(&bookmarks, &settings.marker)
}

fn log_report(report: &BoundaryReport, settings: &Settings) {
    let total = report.bookmarks.len();
    let tweets = report
        .bookmarks
        .iter()
        .filter(|bookmark| bookmark.bookmark.is_tweet)
        .count();

    if report.boundary_found {
        info!(
            "Imported {} bookmarks: {} keepers, {} to categorize",
            total, report.keeper_count, report.to_categorize_count
        );
    } else {
        warn!(
            "Missing last keeper {} in folder '{}'",
            settings.marker.url, settings.marker.folder
        );
        info!(
            "Imported {} bookmarks: 0 keepers, {} to categorize",
            total, report.to_categorize_count
        );
    }

    debug!("Found {tweets} tweets");
}
