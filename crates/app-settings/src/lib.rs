use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppSettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings path unavailable")]
    MissingSettingsPath,
}

pub type Result<T> = std::result::Result<T, AppSettingsError>;

/// Recent-files entries kept, most recent first.
const RECENT_IMAGES_CAP: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub last_image: Option<PathBuf>,
    #[serde(default)]
    pub recent_images: Vec<PathBuf>,
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        load_impl()
    }

    pub fn save(&self) -> Result<()> {
        save_impl(self)
    }

    pub fn get_last_image(&self) -> Option<PathBuf> {
        self.last_image.clone()
    }

    pub fn set_last_image(&mut self, path: PathBuf) {
        self.last_image = Some(path);
    }

    /// Front-insert `path` into the recents list, dropping any older entry
    /// for the same path and anything beyond the cap.
    pub fn push_recent(&mut self, path: PathBuf) {
        self.recent_images.retain(|p| p != &path);
        self.recent_images.insert(0, path);
        self.recent_images.truncate(RECENT_IMAGES_CAP);
    }
}

#[cfg(target_os = "windows")]
fn load_impl() -> Result<AppSettings> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};
    use winreg::RegKey;

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let key = hkcu
        .open_subkey_with_flags("Software\\NovaPix", KEY_READ)
        .ok();

    if let Some(key) = key {
        let last_image = key
            .get_value::<String, _>("LastImage")
            .ok()
            .map(PathBuf::from);
        let recent_images = key
            .get_value::<String, _>("RecentImages")
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        return Ok(AppSettings {
            last_image,
            recent_images,
        });
    }

    Ok(AppSettings::default())
}

#[cfg(target_os = "windows")]
fn save_impl(settings: &AppSettings) -> Result<()> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_WRITE};
    use winreg::RegKey;

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    let (key, _) = hkcu.create_subkey_with_flags("Software\\NovaPix", KEY_WRITE)?;

    if let Some(path) = &settings.last_image {
        let value = path.to_string_lossy();
        key.set_value("LastImage", &value.as_ref())?;
    } else {
        let _ = key.delete_value("LastImage");
    }

    let recents = serde_json::to_string(&settings.recent_images)?;
    key.set_value("RecentImages", &recents.as_str())?;

    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn load_impl() -> Result<AppSettings> {
    let path = settings_file_path()?;
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        let settings: AppSettings = serde_json::from_str(&content)?;
        Ok(settings)
    } else {
        Ok(AppSettings::default())
    }
}

#[cfg(not(target_os = "windows"))]
fn save_impl(settings: &AppSettings) -> Result<()> {
    let path = settings_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, payload)?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn settings_file_path() -> Result<PathBuf> {
    let base = directories::BaseDirs::new().ok_or(AppSettingsError::MissingSettingsPath)?;
    let mut path = base.home_dir().to_path_buf();
    path.push("Library");
    path.push("Preferences");
    path.push("com.novapix");
    std::fs::create_dir_all(&path)?;
    path.push("settings.json");
    Ok(path)
}

#[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
fn settings_file_path() -> Result<PathBuf> {
    let base = directories::BaseDirs::new().ok_or(AppSettingsError::MissingSettingsPath)?;
    let mut path = base.config_dir().to_path_buf();
    path.push("novapix");
    std::fs::create_dir_all(&path)?;
    path.push("settings.json");
    Ok(path)
}
