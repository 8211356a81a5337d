use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

pub const DEFAULT_PRIMARY_COLOR: &str = "#1E3A8A";
pub const DEFAULT_ACCENT_COLOR: &str = "#10B981";
pub const DEFAULT_FOOTER_TEXT: &str =
    "© 2026 ANFAWORD. Powered by MEDAIT LLC. All rights reserved.";

/// Largest accepted logo, measured on the decoded image bytes.
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));

/// Branding shown across the site, stored under `siteSettings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    /// `data:image/...;base64,...` or empty for the text logo.
    pub logo: String,
    #[schema(example = "#1E3A8A")]
    pub primary_color: String,
    #[schema(example = "#10B981")]
    pub accent_color: String,
    pub footer_text: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            logo: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("File size must be less than 2MB")]
    LogoTooLarge,

    #[error("Logo must be an image data URL")]
    InvalidLogo,

    #[error("Primary color must be a hex color like #1E3A8A")]
    InvalidPrimaryColor,

    #[error("Accent color must be a hex color like #10B981")]
    InvalidAccentColor,
}

impl SiteSettings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        validate_logo(&self.logo)?;

        if !HEX_COLOR_RE.is_match(&self.primary_color) {
            return Err(SettingsValidationError::InvalidPrimaryColor);
        }
        if !HEX_COLOR_RE.is_match(&self.accent_color) {
            return Err(SettingsValidationError::InvalidAccentColor);
        }

        Ok(())
    }
}

fn validate_logo(logo: &str) -> Result<(), SettingsValidationError> {
    if logo.is_empty() {
        return Ok(());
    }

    let (header, payload) = logo
        .split_once(',')
        .ok_or(SettingsValidationError::InvalidLogo)?;

    if !header.starts_with("data:image/") || !header.ends_with(";base64") {
        return Err(SettingsValidationError::InvalidLogo);
    }

    // Cheap upper bound before decoding anything.
    if payload.len() / 4 * 3 > MAX_LOGO_BYTES + 2 {
        return Err(SettingsValidationError::LogoTooLarge);
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| SettingsValidationError::InvalidLogo)?;

    if bytes.len() > MAX_LOGO_BYTES {
        return Err(SettingsValidationError::LogoTooLarge);
    }

    Ok(())
}
