use crate::{args::ConfigArgs, settings::SettingsArgs, Config};
use log::{debug, info};

/// Configure the last keeper and the parse strategy.
pub fn configure(mut config: Config, args: ConfigArgs) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    if args.dry_run {
        println!("Running in dry mode ...")
    }

    let settings_args = SettingsArgs::new(
        args.set_marker.marker_url,
        args.set_marker.marker_folder,
        args.strategy,
    );
    config.settings.apply(settings_args)?;

    if !args.dry_run {
        config.settings.write(&config.settings_path)?;
    }

    info!(
        "Configured last keeper {} in folder '{}' with {} parser",
        config.settings.marker.url, config.settings.marker.folder, config.settings.strategy
    );

    Ok(())
}
