use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with its defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.url.clone(), cli.test)?;

    println!("⚙️  Initializing lithoview…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🌐 API endpoint: {}", cfg.api_url);

    success("lithoview initialization completed!");
    Ok(())
}
