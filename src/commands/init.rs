use crate::cli::InitArgs;
use crate::config::{self, Config, CONFIG_FILE};
use crate::error::Result;
use crate::utils::print_info;
use std::io::Write;
use std::path::Path;

/// Execute initialization of the config file in the current directory.
pub fn execute(args: &InitArgs) -> Result<()> {
    let config_dir = config::config_dir()?;
    let mut stdout = std::io::stdout();
    init_in(&config_dir, args.force, &mut stdout)
}

/// Writes the default config into `config_dir`, keeping an existing file
/// unless `force` is set.
pub fn init_in<W: Write>(config_dir: &Path, force: bool, out: &mut W) -> Result<()> {
    let config_file = config_dir.join(CONFIG_FILE);
    if config_file.exists() && !force {
        writeln!(
            out,
            "Config file already exists at {}. Use --force to overwrite.",
            config::display_relative_path(&config_file)
        )?;
        return Ok(());
    }

    config::create_config_folder(config_dir)?;
    config::write_config(&Config::default(), &config_file)?;

    writeln!(
        out,
        "Configuration file created successfully at {}",
        config::display_relative_path(&config_file)
    )?;
    print_info(&format!(
        "Set {} / {} / {} or edit the file to point at your database.",
        config::ENV_URI,
        config::ENV_USER,
        config::ENV_PASS
    ));
    Ok(())
}
