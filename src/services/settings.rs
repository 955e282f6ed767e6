//! Application settings, one independently saved section per tab.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::validation::{FieldErrors, FormCheck};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Ja,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timezone {
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "EST")]
    Est,
    #[serde(rename = "PST")]
    Pst,
    #[serde(rename = "GMT")]
    Gmt,
    #[serde(rename = "CET")]
    Cet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_url: String,
    pub language: Language,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
    pub marketing_emails: bool,
}

/// Session timeout choices in minutes; 0 means never.
pub const SESSION_TIMEOUT_OPTIONS: [u32; 5] = [0, 15, 30, 60, 120];
/// Password expiry choices in days; 0 means never.
pub const PASSWORD_EXPIRY_OPTIONS: [u32; 5] = [0, 30, 60, 90, 180];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub session_timeout_minutes: u32,
    pub password_expiry_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                site_name: "Admin Dashboard".into(),
                site_url: "https://admin.example.com".into(),
                language: Language::En,
                timezone: Timezone::Utc,
            },
            profile: ProfileSettings {
                full_name: "Admin User".into(),
                email: "admin@example.com".into(),
                phone: "+1 234 567 8900".into(),
            },
            notifications: NotificationSettings {
                email_notifications: true,
                push_notifications: false,
                weekly_reports: true,
                marketing_emails: false,
            },
            security: SecuritySettings { two_factor_auth: false, session_timeout_minutes: 30, password_expiry_days: 90 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    General,
    Profile,
    Notifications,
    Security,
}

impl SettingsTab {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "general" => Some(Self::General),
            "profile" => Some(Self::Profile),
            "notifications" => Some(Self::Notifications),
            "security" => Some(Self::Security),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Profile => "Profile",
            Self::Notifications => "Notification",
            Self::Security => "Security",
        }
    }
}

/// A replacement for one tab's section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    General(GeneralSettings),
    Profile(ProfileSettings),
    Notifications(NotificationSettings),
    Security(SecuritySettings),
}

impl SettingsUpdate {
    /// Decode the section payload for `tab`.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the payload does not fit the tab.
    pub fn from_json(tab: SettingsTab, body: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match tab {
            SettingsTab::General => Self::General(serde_json::from_value(body)?),
            SettingsTab::Profile => Self::Profile(serde_json::from_value(body)?),
            SettingsTab::Notifications => Self::Notifications(serde_json::from_value(body)?),
            SettingsTab::Security => Self::Security(serde_json::from_value(body)?),
        })
    }

    #[must_use]
    pub fn tab(&self) -> SettingsTab {
        match self {
            Self::General(_) => SettingsTab::General,
            Self::Profile(_) => SettingsTab::Profile,
            Self::Notifications(_) => SettingsTab::Notifications,
            Self::Security(_) => SettingsTab::Security,
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        match self {
            Self::General(g) => FormCheck::new()
                .required("site_name", &g.site_name, "Site name is required")
                .rule(
                    "site_url",
                    g.site_url.starts_with("https://") || g.site_url.starts_with("http://"),
                    "Site URL must start with http:// or https://",
                )
                .finish(),
            Self::Profile(p) => FormCheck::new()
                .required("full_name", &p.full_name, "Full name is required")
                .email("email", &p.email)
                .finish(),
            Self::Notifications(_) => Ok(()),
            Self::Security(s) => FormCheck::new()
                .rule(
                    "session_timeout_minutes",
                    SESSION_TIMEOUT_OPTIONS.contains(&s.session_timeout_minutes),
                    "Session timeout must be one of the offered options",
                )
                .rule(
                    "password_expiry_days",
                    PASSWORD_EXPIRY_OPTIONS.contains(&s.password_expiry_days),
                    "Password expiry must be one of the offered options",
                )
                .finish(),
        }
    }
}

impl Settings {
    /// Validate and store one tab's section, returning the confirmation text.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages if the section is invalid; the stored
    /// settings are left unchanged.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<String, FieldErrors> {
        update.validate()?;
        let tab = update.tab();
        match update {
            SettingsUpdate::General(g) => self.general = g,
            SettingsUpdate::Profile(p) => self.profile = p,
            SettingsUpdate::Notifications(n) => self.notifications = n,
            SettingsUpdate::Security(s) => self.security = s,
        }
        info!(tab = tab.label(), "settings saved");
        Ok(format!("{} settings saved!", tab.label()))
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
