//! # Profile & Settings
//!
//! The profile card and the session-only settings toggles. Defaults come from
//! the config file; toggles are never written back.

use crate::core::config::ResolvedConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub plan: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    DarkMode,
    Notifications,
    AutoDownload,
}

impl Setting {
    pub const ALL: [Setting; 3] = [Setting::DarkMode, Setting::Notifications, Setting::AutoDownload];

    pub fn label(self) -> &'static str {
        match self {
            Setting::DarkMode => "Dark Mode",
            Setting::Notifications => "Notifications",
            Setting::AutoDownload => "Auto Download",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub auto_download: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            auto_download: true,
        }
    }
}

impl Settings {
    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::DarkMode => self.dark_mode,
            Setting::Notifications => self.notifications,
            Setting::AutoDownload => self.auto_download,
        }
    }

    /// Flip one setting and return its new value.
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let value = match setting {
            Setting::DarkMode => &mut self.dark_mode,
            Setting::Notifications => &mut self.notifications,
            Setting::AutoDownload => &mut self.auto_download,
        };
        *value = !*value;
        *value
    }
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub info: ProfileInfo,
    pub settings: Settings,
}

impl Profile {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            info: config.profile.clone(),
            settings: config.settings,
        }
    }
}
