use crate::config::{self, CONFIG_FILE};
use crate::error::Result;

/// Shows where connection settings are read from.
pub fn execute() -> Result<()> {
    let config_dir = config::config_dir()?;
    let config_file = config_dir.join(CONFIG_FILE);
    if config_file.exists() {
        println!("config file is located here:\n\t{}", config_file.display());
    } else {
        println!(
            "no config file yet, `socialgraph init` will create:\n\t{}",
            config_file.display()
        );
    }
    Ok(())
}
