use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Initialize logging with the given minimum level for this crate.
///
/// The level is an initialization-time parameter, not a compile-time
/// constant: dependencies stay at Warn, our own modules emit everything at
/// or below `level`.
pub fn setup_logging(level: LevelFilter) {
    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let target = record.target().to_string().white();
                    format!(
                        "[{} {} {}] {}",
                        name.cyan(),
                        level_str,
                        target,
                        record.args()
                    )
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
