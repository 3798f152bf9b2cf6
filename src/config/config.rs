//! # Conversion Configuration
//!
//! Configuration structures and validation for the two conversion variants.
//! These are the common interface between the CLI and the conversion library.
//!
//! ## Variants
//!
//! | Variant | Output canvas | Background |
//! |---------|---------------|------------|
//! | Blurred | 4:5 bounds derived from the photo | darkened, blurred copy of the photo |
//! | Bordered | fixed `width` × `height` | WhiteSmoke fill plus an optional white border |
//!
//! ## Examples
//!
//! ```rust
//! use igframe::config::{BorderConfig, Job};
//!
//! let config = BorderConfig {
//!     padding: 40,
//!     ..BorderConfig::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let job = Job::Bordered(config);
//! assert_eq!(job.suffix(), "_IG");
//! ```

use ig_layout::rect::{ScaleRule, Size};

use crate::error::{ConvertError, ConvertResult};

/// Default JPEG quality for every variant.
pub const DEFAULT_QUALITY: u8 = 80;

/// Settings for the blurred-background variant.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurConfig {
    /// Multiplier applied to the background before blurring.
    ///
    /// `0.0` renders the background black, `1.0` leaves it unchanged.
    pub lightness: f32,

    /// JPEG quality, 1-100.
    pub quality: u8,

    /// Inserted between the file stem and the extension of the output.
    pub suffix: String,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            lightness: 0.0,
            quality: DEFAULT_QUALITY,
            suffix: "_4_3".to_string(),
        }
    }
}

impl BlurConfig {
    pub fn validate(&self) -> ConvertResult<()> {
        if !self.lightness.is_finite() || self.lightness < 0.0 {
            return Err(ConvertError::config(
                "lightness",
                self.lightness.to_string(),
                "must be a finite value of at least 0",
            ));
        }
        validate_quality(self.quality)?;
        validate_suffix(&self.suffix)
    }
}

/// Settings for the fixed-canvas bordered variant.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderConfig {
    /// Target canvas width in pixels.
    pub width: u32,

    /// Target canvas height in pixels.
    pub height: u32,

    /// Shrinks the interior the photo is scaled into.
    ///
    /// Only bounds the scale: the photo is still centered on the full canvas.
    pub padding: u32,

    /// Width of the white frame drawn around the photo. `0` disables it.
    pub border: u32,

    /// Fixed `num:den` ratio for the derived dimension instead of the
    /// photo's own aspect ratio.
    pub ratio: Option<(u32, u32)>,

    /// JPEG quality, 1-100.
    pub quality: u8,

    /// Inserted between the file stem and the extension of the output.
    pub suffix: String,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1350,
            padding: 30,
            border: 10,
            ratio: None,
            quality: DEFAULT_QUALITY,
            suffix: "_IG".to_string(),
        }
    }
}

impl BorderConfig {
    pub fn canvas(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn scale_rule(&self) -> ScaleRule<'static> {
        match self.ratio {
            Some((num, den)) => ScaleRule::Ratio {
                num: num as i32,
                den: den as i32,
            },
            None => ScaleRule::Proportional,
        }
    }

    /// Range checks on the canvas and encoder settings.
    ///
    /// A padding that leaves no interior is accepted here; it surfaces per
    /// file as a degenerate placement.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.width == 0 {
            return Err(ConvertError::config("width", "0", "must be greater than 0"));
        }
        if self.height == 0 {
            return Err(ConvertError::config("height", "0", "must be greater than 0"));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(ConvertError::config(
                "width/height",
                format!("{}x{}", self.width, self.height),
                "canvas is too large",
            ));
        }
        if self.padding > i32::MAX as u32 / 2 || self.border > i32::MAX as u32 / 2 {
            return Err(ConvertError::config(
                "padding/border",
                format!("{}/{}", self.padding, self.border),
                "value is too large",
            ));
        }
        if let Some((num, den)) = self.ratio {
            if num == 0 || den == 0 || num > i32::MAX as u32 || den > i32::MAX as u32 {
                return Err(ConvertError::config(
                    "ratio",
                    format!("{num}:{den}"),
                    "both sides must be positive",
                ));
            }
        }
        validate_quality(self.quality)?;
        validate_suffix(&self.suffix)
    }
}

/// Which variant to produce, with its settings.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    Blurred(BlurConfig),
    Bordered(BorderConfig),
}

impl Job {
    pub fn quality(&self) -> u8 {
        match self {
            Job::Blurred(c) => c.quality,
            Job::Bordered(c) => c.quality,
        }
    }

    pub fn suffix(&self) -> &str {
        match self {
            Job::Blurred(c) => &c.suffix,
            Job::Bordered(c) => &c.suffix,
        }
    }

    pub fn validate(&self) -> ConvertResult<()> {
        match self {
            Job::Blurred(c) => c.validate(),
            Job::Bordered(c) => c.validate(),
        }
    }
}

/// Parse a `num:den` ratio such as `3:4`.
pub fn parse_ratio(s: &str) -> Result<(u32, u32), String> {
    let (num, den) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid ratio '{}': expected N:D, e.g. 3:4", s))?;
    let num: u32 = num
        .trim()
        .parse()
        .map_err(|_| format!("Invalid ratio numerator: {}", num))?;
    let den: u32 = den
        .trim()
        .parse()
        .map_err(|_| format!("Invalid ratio denominator: {}", den))?;
    if num == 0 || den == 0 {
        return Err(format!("Invalid ratio '{}': both sides must be positive", s));
    }
    Ok((num, den))
}

fn validate_quality(quality: u8) -> ConvertResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(ConvertError::config(
            "quality",
            quality.to_string(),
            "must be between 1 and 100",
        ));
    }
    Ok(())
}

fn validate_suffix(suffix: &str) -> ConvertResult<()> {
    if suffix.contains(['/', '\\']) {
        return Err(ConvertError::config(
            "suffix",
            suffix,
            "must not contain path separators",
        ));
    }
    Ok(())
}
