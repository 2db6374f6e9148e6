//! Light/dark theme mode and the palette the painter draws with.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use luterm::{Color, Rgb};
use serde::{Deserialize, Serialize};

use crate::BadgeVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        Palette::for_mode(self)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Shared, explicitly updated theme mode.
///
/// Cheap to clone; all clones see the same value. The dirty flag tells the
/// owner that the mode changed since it last persisted or redrew.
#[derive(Debug, Clone, Default)]
pub struct ThemeHandle {
    inner: Arc<RwLock<ThemeMode>>,
    dirty: Arc<AtomicBool>,
}

impl ThemeHandle {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            inner: Arc::new(RwLock::new(mode)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.inner
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    pub fn set(&self, mode: ThemeMode) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *guard != mode {
            *guard = mode;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

/// Resolved colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub border: Rgb,
    pub header: Rgb,
    pub stripe: Rgb,
    pub hover: Rgb,
    pub overlay: Rgb,
    success: Rgb,
    warning: Rgb,
    error: Rgb,
    info: Rgb,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        let surface = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        let foreground = Color::oklch(0.25, 0.02, 265.0).to_rgb();
        let primary = Color::oklch(0.55, 0.15, 255.0).to_rgb();
        Self {
            background: Color::oklch(0.97, 0.005, 265.0).to_rgb(),
            surface,
            foreground,
            muted: Color::oklch(0.55, 0.02, 265.0).to_rgb(),
            primary,
            border: Color::oklch(0.88, 0.01, 265.0).to_rgb(),
            header: Color::oklch(0.95, 0.01, 265.0).to_rgb(),
            stripe: surface.mix(foreground, 0.04),
            hover: surface.mix(primary, 0.08),
            overlay: Color::oklch(0.93, 0.01, 265.0).to_rgb(),
            success: Color::oklch(0.6, 0.15, 150.0).to_rgb(),
            warning: Color::oklch(0.7, 0.15, 75.0).to_rgb(),
            error: Color::oklch(0.58, 0.2, 25.0).to_rgb(),
            info: Color::oklch(0.62, 0.12, 230.0).to_rgb(),
        }
    }

    pub fn dark() -> Self {
        let surface = Color::oklch(0.22, 0.01, 265.0).to_rgb();
        let foreground = Color::oklch(0.93, 0.01, 265.0).to_rgb();
        let primary = Color::oklch(0.7, 0.14, 255.0).to_rgb();
        Self {
            background: Color::oklch(0.17, 0.01, 265.0).to_rgb(),
            surface,
            foreground,
            muted: Color::oklch(0.65, 0.02, 265.0).to_rgb(),
            primary,
            border: Color::oklch(0.35, 0.01, 265.0).to_rgb(),
            header: Color::oklch(0.26, 0.01, 265.0).to_rgb(),
            stripe: surface.mix(foreground, 0.05),
            hover: surface.mix(primary, 0.12),
            overlay: Color::oklch(0.3, 0.01, 265.0).to_rgb(),
            success: Color::oklch(0.72, 0.15, 150.0).to_rgb(),
            warning: Color::oklch(0.8, 0.14, 75.0).to_rgb(),
            error: Color::oklch(0.68, 0.19, 25.0).to_rgb(),
            info: Color::oklch(0.74, 0.11, 230.0).to_rgb(),
        }
    }

    /// Foreground and background of a badge.
    pub fn badge(&self, variant: BadgeVariant) -> (Rgb, Rgb) {
        let accent = match variant {
            BadgeVariant::Default => self.muted,
            BadgeVariant::Primary => self.primary,
            BadgeVariant::Success => self.success,
            BadgeVariant::Warning => self.warning,
            BadgeVariant::Error => self.error,
            BadgeVariant::Info => self.info,
        };
        (accent, self.surface.mix(accent, 0.15))
    }
}
