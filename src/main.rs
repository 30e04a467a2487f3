mod config;
mod error;
mod gradle;
mod logging;

use config::Config;
use error::SmartadsError;
use gradle::Invocation;
use log::*;
use std::process;
use structopt::StructOpt;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Where the Gradle build drops the downloaded libraries.
const LIBS: &str = "Assets/DeltaDNAAds/Plugins/Android";

#[derive(Debug, StructOpt)]
#[structopt(
    name = APP_NAME,
    about = "Downloads the Android ad-network libraries the SmartAds SDK needs, as specified in config.json."
)]
struct Opt {
    /// Clean the downloaded libraries only
    #[structopt(short, long)]
    clean: bool,
    /// Show the full stacktrace of a build error
    #[structopt(long)]
    stacktrace: bool,
    /// Show info-level build logging
    #[structopt(long)]
    info: bool,
    /// Show debug-level build logging
    #[structopt(long, conflicts_with = "info")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    logging::setup_logging(if opt.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    })?;

    debug!("{:?}", opt);

    let result = if opt.clean { clean() } else { download(&opt) };
    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn clean() -> Result<i32, SmartadsError> {
    info!("cleaning downloaded libraries in {}", LIBS);

    let code = Invocation::clean().run()?;

    if code == 0 {
        info!("cleaned libraries in {}", LIBS);
    } else {
        error!("failed to clean libraries");
    }
    Ok(code)
}

fn download(opt: &Opt) -> Result<i32, SmartadsError> {
    let config = Config::load()?;

    if config.notifications {
        info!("requesting notifications");
    }
    if config.smartads {
        info!("requesting smartads");
    }
    if !config.networks.is_empty() {
        info!("requesting networks {}", config.networks.join(", "));
    }

    info!("downloading libraries");
    let code = Invocation::download(opt, &config).run()?;

    if code == 0 {
        info!("downloaded libraries to {}", LIBS);
        info!(
            "if using Unity 4 then the libraries in {} need to be moved to 'Assets/Plugins/Android'",
            LIBS
        );
    } else {
        error!("failed to download libraries");
    }
    Ok(code)
}
