//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::str::FromStr;

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Generator,
    Scanner,
}

impl FromStr for Screen {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landing" | "home" => Ok(Screen::Landing),
            "generate" | "generator" => Ok(Screen::Generator),
            "scan" | "scanner" => Ok(Screen::Scanner),
            other => anyhow::bail!("Unknown screen '{}' (expected landing, generate or scan)", other),
        }
    }
}

/// A camera reported by the capture backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraDevice {
    /// Backend-specific identifier used to open the device
    pub id: String,
    /// Human-readable name, used for the rear-camera heuristic
    pub label: String,
}

/// Buttons on the landing screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LandingChoice {
    #[default]
    Scan,
    Generate,
}

impl LandingChoice {
    pub fn toggle(self) -> Self {
        match self {
            LandingChoice::Scan => LandingChoice::Generate,
            LandingChoice::Generate => LandingChoice::Scan,
        }
    }

    pub fn target(self) -> Screen {
        match self {
            LandingChoice::Scan => Screen::Scanner,
            LandingChoice::Generate => Screen::Generator,
        }
    }
}

/// Which part of the generator receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GeneratorFocus {
    #[default]
    Editor,
    Actions,
}

/// Actions offered on a generated code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GeneratorAction {
    #[default]
    Copy,
    Download,
    Share,
}

impl GeneratorAction {
    pub const ALL: [GeneratorAction; 3] = [
        GeneratorAction::Copy,
        GeneratorAction::Download,
        GeneratorAction::Share,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GeneratorAction::Copy => "Copy Text",
            GeneratorAction::Download => "Download",
            GeneratorAction::Share => "Share",
        }
    }

    pub fn index(self) -> usize {
        match self {
            GeneratorAction::Copy => 0,
            GeneratorAction::Download => 1,
            GeneratorAction::Share => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[crate::logic::ui::next_index(self.index(), Self::ALL.len())]
    }

    pub fn prev(self) -> Self {
        Self::ALL[crate::logic::ui::prev_index(self.index(), Self::ALL.len())]
    }
}

/// Scanner lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanPhase {
    /// No camera running and no result (camera missing or failed to start)
    #[default]
    Idle,
    /// Camera stream active, decoding frames
    Scanning,
    /// A payload was decoded and is on screen
    Result,
}

/// Actions offered on a scan result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScannerAction {
    #[default]
    Copy,
    Open,
    Rescan,
}

impl ScannerAction {
    pub const ALL: [ScannerAction; 3] = [
        ScannerAction::Copy,
        ScannerAction::Open,
        ScannerAction::Rescan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScannerAction::Copy => "Copy",
            ScannerAction::Open => "Open",
            ScannerAction::Rescan => "Scan Again",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ScannerAction::Copy => 0,
            ScannerAction::Open => 1,
            ScannerAction::Rescan => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[crate::logic::ui::next_index(self.index(), Self::ALL.len())]
    }

    pub fn prev(self) -> Self {
        Self::ALL[crate::logic::ui::prev_index(self.index(), Self::ALL.len())]
    }
}

/// Image path prompt (the terminal stand-in for a file picker)
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PathPromptState {
    pub input: String,
    pub cursor: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_from_str() {
        assert_eq!("scan".parse::<Screen>().unwrap(), Screen::Scanner);
        assert_eq!("Generate".parse::<Screen>().unwrap(), Screen::Generator);
        assert!("history".parse::<Screen>().is_err());
    }

    #[test]
    fn test_action_cycling_wraps() {
        assert_eq!(GeneratorAction::Share.next(), GeneratorAction::Copy);
        assert_eq!(GeneratorAction::Copy.prev(), GeneratorAction::Share);
        assert_eq!(ScannerAction::Open.next(), ScannerAction::Rescan);
    }

    #[test]
    fn test_landing_targets() {
        assert_eq!(LandingChoice::Scan.target(), Screen::Scanner);
        assert_eq!(LandingChoice::Scan.toggle(), LandingChoice::Generate);
    }
}
