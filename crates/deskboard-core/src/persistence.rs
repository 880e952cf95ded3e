use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::state::ThemePref;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedSettings {
    theme: String,
}

/// On-disk home of the theme preference. Loading is fail-soft: a missing,
/// unreadable or corrupt settings file falls back to the light default so
/// the console always starts.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(SETTINGS_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn load_theme(&self) -> ThemePref {
        let Ok(bytes) = std::fs::read(self.path.as_path()) else {
            return ThemePref::Light;
        };
        let Ok(settings) = serde_json::from_slice::<PersistedSettings>(&bytes) else {
            return ThemePref::Light;
        };
        ThemePref::from_label(settings.theme.as_str()).unwrap_or(ThemePref::Light)
    }

    pub fn save_theme(&self, theme: ThemePref) -> std::io::Result<()> {
        let settings = PersistedSettings {
            theme: theme.label().to_string(),
        };
        let line = serde_json::to_string(&settings)
            .map_err(|err| std::io::Error::other(format!("serialize settings: {err}")))?;
        write_line(self.path.as_path(), line.as_str())
    }
}

fn write_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(())
}
