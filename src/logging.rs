use fern::Dispatch;
use log::LevelFilter;

// Progress lines go to stderr so Gradle keeps stdout to itself.
pub fn setup_logging(log_level: LevelFilter) -> anyhow::Result<()> {
    Dispatch::new()
        .format(|out, msg, record| out.finish(format_args!("{: >5} {}", record.level(), msg)))
        .level(log_level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
