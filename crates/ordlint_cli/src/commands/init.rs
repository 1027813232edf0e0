//! Init command implementation

use std::io::Write;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use ordlint_core::LinterConfig;
use tracing::info;

const DEFAULT_CONFIG: &str = r#"{
  // one | ordered | zero | one_or_ordered
  "listStyle": "one_or_ordered",
  "codeBlockIndent": true,
  "include": [],
  "exclude": ["node_modules/**"]
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(LinterConfig::CONFIG_FILES[0]);

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        // Refuse to write through a symlink planted at the config path.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NOFOLLOW);
        }

        match options.open(&config_path) {
            Ok(mut file) => {
                file.write_all(DEFAULT_CONFIG.as_bytes())
                    .into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
