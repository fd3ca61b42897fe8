//! Border settings and the textual option grammar that fills them.
//!
//! Options are independent `key` or `key=value` strings, applied in order:
//!
//! | Option | Effect |
//! |---|---|
//! | `animated_gradient`, `animated_gradient=on`, `animated_gradient=off` | toggle animation |
//! | `animated_gradient_colors=<c1>,<c2>,...` | palette of 6 or 8 digit hex colors |
//! | `animated_gradient_steps=<int>` | steps per transition, at least 1 |
//! | `animated_gradient_duration=<seconds>` | transition length, default 1 s per step |
//! | `active_color=<style>`, `inactive_color=<style>` | static border styles |
//! | `background_color=<style>` | background drawn behind the border, hidden when transparent |
//! | `width=<float>` | border width in points |
//! | `order=a`, `order=b` | border above or below its window |
//! | `style=r`, `style=s`, `style=u` | round, square or uniform corners |
//! | `hidpi=on`, `hidpi=off` | render at backing scale |
//! | `ax_focus=on`, `ax_focus=off` | track focus through accessibility events |
//! | `apply-to=<int>` | restrict the batch to one window id |
//!
//! A static style is `0xAARRGGBB`, `glow(0xAARRGGBB)`,
//! `gradient(top_left=0x..,bottom_right=0x..)` or `gradient(top_right=0x..,bottom_left=0x..)`.
//!
//! Bad input never aborts: each problem is logged, collected into the [`ParseReport`], and the
//! affected option is skipped.

use thiserror::Error;

use crate::color::{Color, ColorError};
use crate::selector::{MAX_PALETTE_COLORS, Palette};
use crate::style::{BorderOrder, BorderStyle, CornerStyle, GradientDirection};

/// Settings for the animated gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    /// Whether the animation should run.
    pub enabled: bool,

    /// Palette to draw pairs from; `None` until a colors option yields at least one color.
    pub colors: Option<Palette>,

    /// Discrete steps per transition.
    pub steps: u32,

    /// Length of one transition in seconds; `None` falls back to one second per step.
    pub duration_secs: Option<f64>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            colors: None,
            steps: 1,
            duration_secs: None,
        }
    }
}

impl GradientConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the animation
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the palette, keeping at most [`MAX_PALETTE_COLORS`] entries
    #[must_use]
    pub fn with_colors(mut self, colors: &[Color]) -> Self {
        self.colors = Some(colors.iter().copied().take(MAX_PALETTE_COLORS).collect());
        self
    }

    /// Set the number of steps per transition (at least 1)
    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps.max(1);
        self
    }

    /// Set the transition duration; non-positive values clear it
    #[must_use]
    pub fn with_duration_secs(mut self, secs: f64) -> Self {
        self.duration_secs = positive(secs);
        self
    }

    /// Number of colors currently in the palette.
    pub fn palette_len(&self) -> usize {
        self.colors.as_ref().map_or(0, |colors| colors.len())
    }
}

/// Default border width in points.
pub const DEFAULT_BORDER_WIDTH: f32 = 5.0;

/// Everything a border renderer needs to know, passed by reference into the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSettings {
    pub active: BorderStyle,
    pub inactive: BorderStyle,
    pub background: BorderStyle,
    /// Set whenever a background style that is not fully transparent is applied.
    pub show_background: bool,
    pub width: f32,
    pub order: BorderOrder,
    pub corners: CornerStyle,
    pub hidpi: bool,
    pub ax_focus: bool,
    /// Window id the current batch of options targets; `None` means every window.
    pub apply_to: Option<i32>,
    pub gradient: GradientConfig,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            active: BorderStyle::default(),
            inactive: BorderStyle::default(),
            background: BorderStyle::Solid(Color(0x0000_0000)),
            show_background: false,
            width: DEFAULT_BORDER_WIDTH,
            order: BorderOrder::default(),
            corners: CornerStyle::default(),
            hidpi: false,
            ax_focus: false,
            apply_to: None,
            gradient: GradientConfig::default(),
        }
    }
}

/// Which parts of the settings an [`BorderSettings::apply_args`] call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateMask(pub u32);

impl UpdateMask {
    pub const NONE: UpdateMask = UpdateMask(0);
    /// Active window style or animation settings changed.
    pub const ACTIVE: UpdateMask = UpdateMask(1 << 0);
    /// Inactive window style changed.
    pub const INACTIVE: UpdateMask = UpdateMask(1 << 1);
    /// Every border must be redrawn.
    pub const ALL: UpdateMask = UpdateMask(Self::ACTIVE.0 | Self::INACTIVE.0);
    /// Every border must be torn down and created again.
    pub const RECREATE_ALL: UpdateMask = UpdateMask(1 << 2);
    /// A behavioral setting changed; nothing needs repainting.
    pub const SETTING: UpdateMask = UpdateMask(1 << 3);

    #[inline]
    pub fn contains(self, other: UpdateMask) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOrAssign for UpdateMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Non-fatal configuration problems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid hex color string '{entry}': {source}")]
    InvalidColor { entry: String, source: ColorError },

    #[error("invalid argument '{0}'")]
    InvalidOption(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("palette exceeds {capacity} colors")]
    AllocationFailure { capacity: usize },

    #[error("palette needs at least 2 colors, got {len}")]
    InsufficientPalette { len: usize },
}

/// Outcome of applying a batch of options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub updated: UpdateMask,
    pub errors: Vec<ConfigError>,
}

impl ParseReport {
    fn reject(&mut self, error: ConfigError) {
        tracing::warn!(%error, "ignoring border option");
        self.errors.push(error);
    }
}

const ANIMATED_GRADIENT: &str = "animated_gradient";
const ANIMATED_GRADIENT_COLORS: &str = "animated_gradient_colors=";
const ANIMATED_GRADIENT_STEPS: &str = "animated_gradient_steps=";
const ANIMATED_GRADIENT_DURATION: &str = "animated_gradient_duration=";
const ACTIVE_COLOR: &str = "active_color=";
const INACTIVE_COLOR: &str = "inactive_color=";
const BACKGROUND_COLOR: &str = "background_color=";
const WIDTH: &str = "width=";
const ORDER: &str = "order=";
const STYLE: &str = "style=";
const HIDPI: &str = "hidpi=";
const AX_FOCUS: &str = "ax_focus=";
const APPLY_TO: &str = "apply-to=";

impl BorderSettings {
    /// Applies options in order, returning what changed and every problem encountered.
    pub fn apply_args<I, A>(&mut self, args: I) -> ParseReport
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut report = ParseReport::default();
        for arg in args {
            self.apply_arg(arg.as_ref(), &mut report);
        }

        let len = self.gradient.palette_len();
        if self.gradient.enabled && len < 2 {
            report.reject(ConfigError::InsufficientPalette { len });
        }
        report
    }

    fn apply_arg(&mut self, arg: &str, report: &mut ParseReport) {
        if let Some(list) = arg.strip_prefix(ANIMATED_GRADIENT_COLORS) {
            if self.parse_palette(list, report) {
                report.updated |= UpdateMask::ACTIVE;
            }
        } else if let Some(value) = arg.strip_prefix(ANIMATED_GRADIENT_STEPS) {
            match value.trim().parse::<i64>() {
                Ok(steps) => {
                    self.gradient.steps = steps.clamp(1, i64::from(u32::MAX)) as u32;
                    report.updated |= UpdateMask::ACTIVE;
                }
                Err(_) => report.reject(invalid("animated_gradient_steps", value)),
            }
        } else if let Some(value) = arg.strip_prefix(ANIMATED_GRADIENT_DURATION) {
            match value.trim().parse::<f64>() {
                Ok(secs) => {
                    self.gradient.duration_secs = positive(secs);
                    report.updated |= UpdateMask::ACTIVE;
                }
                Err(_) => report.reject(invalid("animated_gradient_duration", value)),
            }
        } else if let Some(rest) = arg
            .strip_prefix(ANIMATED_GRADIENT)
            .filter(|rest| rest.is_empty() || rest.starts_with('='))
        {
            let value = rest.strip_prefix('=').unwrap_or(rest);
            match value {
                "" | "on" => {
                    self.gradient.enabled = true;
                    report.updated |= UpdateMask::ACTIVE;
                }
                "off" => {
                    self.gradient.enabled = false;
                    report.updated |= UpdateMask::ACTIVE;
                }
                _ => report.reject(invalid("animated_gradient", value)),
            }
        } else if let Some(value) = arg.strip_prefix(ACTIVE_COLOR) {
            match parse_style(value) {
                Some(style) => {
                    self.active = style;
                    report.updated |= UpdateMask::ACTIVE;
                }
                None => report.reject(invalid("active_color", value)),
            }
        } else if let Some(value) = arg.strip_prefix(INACTIVE_COLOR) {
            match parse_style(value) {
                Some(style) => {
                    self.inactive = style;
                    report.updated |= UpdateMask::INACTIVE;
                }
                None => report.reject(invalid("inactive_color", value)),
            }
        } else if let Some(value) = arg.strip_prefix(BACKGROUND_COLOR) {
            match parse_style(value) {
                Some(style) => {
                    self.background = style;
                    self.show_background = !style.is_transparent();
                    report.updated |= UpdateMask::ALL;
                }
                None => report.reject(invalid("background_color", value)),
            }
        } else if let Some(value) = arg.strip_prefix(WIDTH) {
            match value.trim().parse::<f32>() {
                Ok(width) if width.is_finite() && width >= 0.0 => {
                    self.width = width;
                    report.updated |= UpdateMask::ALL;
                }
                _ => report.reject(invalid("width", value)),
            }
        } else if let Some(value) = arg.strip_prefix(ORDER) {
            let order = match value.chars().next() {
                Some('a') => Some(BorderOrder::Above),
                Some('b') => Some(BorderOrder::Below),
                _ => None,
            };
            match order {
                Some(order) => {
                    self.order = order;
                    report.updated |= UpdateMask::ALL;
                }
                None => report.reject(invalid("order", value)),
            }
        } else if let Some(value) = arg.strip_prefix(STYLE) {
            let corners = match value.chars().next() {
                Some('r') => Some(CornerStyle::Round),
                Some('s') => Some(CornerStyle::Square),
                Some('u') => Some(CornerStyle::Uniform),
                _ => None,
            };
            match corners {
                Some(corners) => {
                    self.corners = corners;
                    report.updated |= UpdateMask::ALL;
                }
                None => report.reject(invalid("style", value)),
            }
        } else if let Some(value) = arg.strip_prefix(HIDPI) {
            match parse_switch(value) {
                Some(hidpi) => {
                    self.hidpi = hidpi;
                    report.updated |= UpdateMask::RECREATE_ALL;
                }
                None => report.reject(invalid("hidpi", value)),
            }
        } else if let Some(value) = arg.strip_prefix(AX_FOCUS) {
            match parse_switch(value) {
                Some(ax_focus) => {
                    self.ax_focus = ax_focus;
                    report.updated |= UpdateMask::SETTING;
                }
                None => report.reject(invalid("ax_focus", value)),
            }
        } else if let Some(value) = arg.strip_prefix(APPLY_TO) {
            match value.trim().parse::<i32>() {
                Ok(window) => {
                    self.apply_to = Some(window);
                    report.updated |= UpdateMask::SETTING;
                }
                Err(_) => report.reject(invalid("apply-to", value)),
            }
        } else {
            report.reject(ConfigError::InvalidOption(arg.to_owned()));
        }
    }

    /// Replaces the palette with the valid entries of a comma separated list.
    ///
    /// Invalid entries are skipped individually. On overflow the palette is left unset.
    fn parse_palette(&mut self, list: &str, report: &mut ParseReport) -> bool {
        self.gradient.colors = None;

        let mut palette = Palette::new();
        for entry in list.split(',').filter(|entry| !entry.is_empty()) {
            match Color::from_hex(entry) {
                Ok(color) => {
                    if palette.push(color).is_err() {
                        report.reject(ConfigError::AllocationFailure {
                            capacity: MAX_PALETTE_COLORS,
                        });
                        return false;
                    }
                }
                Err(source) => report.reject(ConfigError::InvalidColor {
                    entry: entry.to_owned(),
                    source,
                }),
            }
        }

        if palette.is_empty() {
            return false;
        }
        tracing::debug!(colors = palette.len(), "parsed gradient palette");
        self.gradient.colors = Some(palette);
        true
    }
}

/// Parses a static border style such as `0xffe1e3e4` or `glow(0xffe1e3e4)`.
pub fn parse_style(value: &str) -> Option<BorderStyle> {
    if let Some(inner) = value
        .strip_prefix("glow(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Color::from_prefixed_hex(inner).ok().map(BorderStyle::Glow);
    }

    if let Some(inner) = value
        .strip_prefix("gradient(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let (first, second) = inner.split_once(',')?;
        let (direction, color1, color2) = if let (Some(c1), Some(c2)) = (
            first.strip_prefix("top_left="),
            second.strip_prefix("bottom_right="),
        ) {
            (GradientDirection::TopLeftToBottomRight, c1, c2)
        } else if let (Some(c1), Some(c2)) = (
            first.strip_prefix("top_right="),
            second.strip_prefix("bottom_left="),
        ) {
            (GradientDirection::TopRightToBottomLeft, c1, c2)
        } else {
            return None;
        };

        return Some(BorderStyle::Gradient {
            color1: Color::from_prefixed_hex(color1).ok()?,
            color2: Color::from_prefixed_hex(color2).ok()?,
            direction,
        });
    }

    Color::from_prefixed_hex(value).ok().map(BorderStyle::Solid)
}

fn positive(secs: f64) -> Option<f64> {
    (secs.is_finite() && secs > 0.0).then_some(secs)
}

fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

fn invalid(option: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        option,
        value: value.to_owned(),
    }
}
