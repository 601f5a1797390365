//! Session persistence for the viewer.
//!
//! Captures the little state worth keeping across runs — the open file, the
//! layout mode, the font request — and restores it on the next launch. The
//! engine itself persists nothing (everything is reconstructed from the
//! file on load); this is shell convenience.
//!
//! ## File location
//!
//! `<platform data dir>/folio/session.json`, e.g.
//! `~/.local/share/folio/session.json` on Linux.
//!
//! ## Schema version
//!
//! The session file carries a schema version. On mismatch (or any parse
//! failure) the session is discarded and the viewer starts fresh.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use folio_view::LayoutMode;

use crate::controller::{ViewerController, ViewerError};
use crate::host::{FontRequest, FontSource};

/// Current schema version for the session file.
///
/// Increment on breaking changes to the session format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the data directory.
const APP_NAME: &str = "folio";

/// Session file name.
const SESSION_FILENAME: &str = "session.json";

// =============================================================================
// Serializable Data Types
// =============================================================================

/// Root session data structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Absolute path of the file that was open, if any.
    pub file_path: Option<PathBuf>,
    /// Layout mode in effect at exit.
    pub mode: LayoutModeData,
    /// Font request in effect at exit.
    pub font: FontData,
}

/// Serializable representation of the layout mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LayoutModeData {
    NoWrap,
    FixedWrap,
}

impl From<LayoutMode> for LayoutModeData {
    fn from(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::NoWrap => LayoutModeData::NoWrap,
            LayoutMode::FixedWrap => LayoutModeData::FixedWrap,
        }
    }
}

impl From<LayoutModeData> for LayoutMode {
    fn from(mode: LayoutModeData) -> Self {
        match mode {
            LayoutModeData::NoWrap => LayoutMode::NoWrap,
            LayoutModeData::FixedWrap => LayoutMode::FixedWrap,
        }
    }
}

/// Serializable representation of a font request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontData {
    /// Face name, `None` for the platform default.
    pub name: Option<String>,
    /// Height in pixels.
    pub height_px: u32,
}

impl From<&FontRequest> for FontData {
    fn from(request: &FontRequest) -> Self {
        Self { name: request.name.clone(), height_px: request.height_px }
    }
}

impl From<FontData> for FontRequest {
    fn from(font: FontData) -> Self {
        Self { name: font.name, height_px: font.height_px }
    }
}

// =============================================================================
// Session File Path
// =============================================================================

/// Returns the path to the session file, creating the app directory if
/// needed. `None` if the platform data directory cannot be determined.
pub fn session_file_path() -> Option<PathBuf> {
    let data_dir = dirs::data_dir()?;
    let app_dir = data_dir.join(APP_NAME);

    if !app_dir.exists() {
        if let Err(err) = fs::create_dir_all(&app_dir) {
            log::warn!("failed to create session directory {:?}: {}", app_dir, err);
            return None;
        }
    }

    Some(app_dir.join(SESSION_FILENAME))
}

// =============================================================================
// Capture / Restore
// =============================================================================

impl SessionData {
    /// Captures the serializable state of a live controller.
    pub fn capture(controller: &ViewerController) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            file_path: controller.path().map(Path::to_path_buf),
            mode: controller.view().mode().into(),
            font: controller.font_request().into(),
        }
    }

    /// Applies this session to a fresh controller.
    ///
    /// Mode and font are applied first so the file lays out the way it did
    /// at exit. A session with no file leaves the controller inert.
    ///
    /// # Errors
    ///
    /// [`ViewerError::Load`] if the remembered file is gone; mode and font
    /// are already applied by then, so the caller can keep the controller
    /// and just show the error.
    pub fn restore_into(
        self,
        controller: &mut ViewerController,
        fonts: &dyn FontSource,
    ) -> Result<(), ViewerError> {
        controller.set_mode(self.mode.into())?;
        controller.set_font(fonts, self.font.into())?;

        match self.file_path {
            Some(path) => controller.open(&path, None),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Save / Load
// =============================================================================

/// Serializes a session to the given path.
pub fn save_session_to(controller: &ViewerController, path: &Path) -> io::Result<()> {
    let data = SessionData::capture(controller);
    let json = serde_json::to_string_pretty(&data)?;
    fs::write(path, json)
}

/// Saves the session to the default location. A missing data directory is
/// logged and ignored — losing a session is never an error worth surfacing.
pub fn save_session(controller: &ViewerController) {
    let Some(path) = session_file_path() else {
        return;
    };
    if let Err(err) = save_session_to(controller, &path) {
        log::warn!("failed to save session to {:?}: {}", path, err);
    }
}

/// Reads a session from the given path.
///
/// Returns `None` for a missing file, unreadable JSON, or a schema version
/// other than the current one — all of which mean "start fresh".
pub fn load_session_from(path: &Path) -> Option<SessionData> {
    let json = fs::read_to_string(path).ok()?;
    let data: SessionData = match serde_json::from_str(&json) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("discarding unreadable session {:?}: {}", path, err);
            return None;
        }
    };

    if data.schema_version != SCHEMA_VERSION {
        log::info!(
            "discarding session with schema version {} (current is {})",
            data.schema_version,
            SCHEMA_VERSION,
        );
        return None;
    }

    Some(data)
}

/// Loads the session from the default location, if there is one.
pub fn load_session() -> Option<SessionData> {
    load_session_from(&session_file_path()?)
}
