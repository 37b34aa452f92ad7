//! Logo loop configuration
//!
//! Everything here is fixed at construction time. Configs are plain serde
//! structs so they can be written inline in Rust or loaded from TOML:
//!
//! ```toml
//! speed = 80
//! direction = "up"
//! pause_on_hover = true
//! gap = 40
//! width = "fill"
//!
//! [[items]]
//! src = "/logos/acme.svg"
//! alt = "Acme"
//! ```

use std::fmt;

use alkmy_core::{Axis, CoreError, Direction};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::item::LoopItem;

/// Default scroll speed in pixels per second
pub const DEFAULT_SPEED: f32 = 120.0;
/// Default spacing between items in pixels
pub const DEFAULT_GAP: f32 = 32.0;
/// Default item height in pixels
pub const DEFAULT_ITEM_HEIGHT: f32 = 28.0;
/// Default accessible label for the loop region
pub const DEFAULT_ARIA_LABEL: &str = "Partner logos";

/// Width of the loop container
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WidthRepr", into = "WidthRepr")]
pub enum ContainerWidth {
    /// Fill the available width
    #[default]
    Fill,
    /// Fixed width in pixels
    Pixels(f32),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<WidthRepr> for ContainerWidth {
    type Error = ConfigError;

    fn try_from(repr: WidthRepr) -> Result<Self> {
        match repr {
            WidthRepr::Number(px) => Ok(ContainerWidth::Pixels(px)),
            WidthRepr::Text(text) => {
                let trimmed = text.trim();
                match trimmed {
                    "fill" | "100%" => Ok(ContainerWidth::Fill),
                    _ => trimmed
                        .strip_suffix("px")
                        .unwrap_or(trimmed)
                        .trim()
                        .parse::<f32>()
                        .map(ContainerWidth::Pixels)
                        .map_err(|_| ConfigError::UnknownWidth(text)),
                }
            }
        }
    }
}

impl From<ContainerWidth> for WidthRepr {
    fn from(width: ContainerWidth) -> Self {
        match width {
            ContainerWidth::Fill => WidthRepr::Text("fill".to_string()),
            ContainerWidth::Pixels(px) => WidthRepr::Number(px),
        }
    }
}

impl fmt::Display for ContainerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerWidth::Fill => f.write_str("fill"),
            ContainerWidth::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Configuration for a logo loop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoLoopConfig {
    /// Items shown once per copy, in order
    pub items: Vec<LoopItem>,
    /// Pixels per second; the sign flips the direction
    pub speed: f32,
    pub direction: Direction,
    /// Speed while hovered; takes precedence over `pause_on_hover`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_speed: Option<f32>,
    /// `Some(false)` disables hover handling when no hover speed is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    /// Spacing between items in pixels
    pub gap: f32,
    /// Item height in pixels
    pub item_height: f32,
    pub width: ContainerWidth,
    /// Fade the leading and trailing edges (visual only)
    pub fade_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_out_color: Option<String>,
    /// Scale items up under the pointer (visual only)
    pub scale_on_hover: bool,
    pub aria_label: String,
}

impl Default for LogoLoopConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            speed: DEFAULT_SPEED,
            direction: Direction::Left,
            hover_speed: None,
            pause_on_hover: None,
            gap: DEFAULT_GAP,
            item_height: DEFAULT_ITEM_HEIGHT,
            width: ContainerWidth::Fill,
            fade_out: false,
            fade_out_color: None,
            scale_on_hover: false,
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
        }
    }
}

impl LogoLoopConfig {
    pub fn new(items: Vec<LoopItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_hover_speed(mut self, speed: f32) -> Self {
        self.hover_speed = Some(speed);
        self
    }

    pub fn with_pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = Some(pause);
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_item_height(mut self, height: f32) -> Self {
        self.item_height = height;
        self
    }

    pub fn with_width(mut self, width: ContainerWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_fade_out(mut self, fade: bool) -> Self {
        self.fade_out = fade;
        self
    }

    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }

    /// Signed velocity the loop settles at when not hovered
    ///
    /// Magnitude comes from `speed`; the direction contributes +1 for
    /// left/up and -1 for right/down; a negative speed flips it again.
    pub fn target_velocity(&self) -> f32 {
        let speed_sign = if self.speed < 0.0 { -1.0 } else { 1.0 };
        self.speed.abs() * self.direction.sign() * speed_sign
    }

    /// Velocity override while hovered, or None if hovering changes nothing
    ///
    /// An explicit `hover_speed` wins; otherwise `pause_on_hover` decides,
    /// and leaving both unset pauses on hover.
    pub fn effective_hover_speed(&self) -> Option<f32> {
        match (self.hover_speed, self.pause_on_hover) {
            (Some(speed), _) => Some(speed),
            (None, Some(true)) => Some(0.0),
            (None, Some(false)) => None,
            (None, None) => Some(0.0),
        }
    }

    /// Number of image items in one sequence
    pub fn image_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_image()).count()
    }

    /// Check whether a change from `other` requires re-measuring the sequence
    pub fn layout_differs(&self, other: &LogoLoopConfig) -> bool {
        self.items != other.items
            || self.gap != other.gap
            || self.item_height != other.item_height
            || self.width != other.width
            || self.axis() != other.axis()
    }

    /// Reject configurations that cannot describe a sensible loop
    ///
    /// The animator itself never validates; invalid inputs simply hold the
    /// loop at rest.
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() {
            return Err(CoreError::NonFinite("speed").into());
        }
        if let Some(hover) = self.hover_speed {
            if !hover.is_finite() {
                return Err(CoreError::NonFinite("hover_speed").into());
            }
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(ConfigError::InvalidGap(self.gap));
        }
        if !(self.item_height.is_finite() && self.item_height >= 0.0) {
            return Err(ConfigError::InvalidItemHeight(self.item_height));
        }
        if let ContainerWidth::Pixels(px) = self.width {
            if !(px.is_finite() && px > 0.0) {
                return Err(ConfigError::InvalidWidth(px));
            }
        }
        if let Some(index) = self.items.iter().position(|item| item.source().is_empty()) {
            return Err(ConfigError::EmptySource(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogoLoopConfig::default();
        assert_eq!(config.speed, 120.0);
        assert_eq!(config.direction, Direction::Left);
        assert_eq!(config.gap, 32.0);
        assert_eq!(config.item_height, 28.0);
        assert_eq!(config.width, ContainerWidth::Fill);
        assert_eq!(config.aria_label, "Partner logos");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_target_velocity_signs() {
        let cases = [
            (120.0, Direction::Left, 120.0),
            (120.0, Direction::Right, -120.0),
            (120.0, Direction::Up, 120.0),
            (120.0, Direction::Down, -120.0),
            (-120.0, Direction::Left, -120.0),
            (-120.0, Direction::Right, 120.0),
            (0.0, Direction::Down, 0.0),
        ];
        for (speed, direction, expected) in cases {
            let config = LogoLoopConfig::default()
                .with_speed(speed)
                .with_direction(direction);
            assert_eq!(
                config.target_velocity(),
                expected,
                "speed={speed} direction={direction}"
            );
        }
    }

    #[test]
    fn test_hover_precedence() {
        let base = LogoLoopConfig::default();
        assert_eq!(base.effective_hover_speed(), Some(0.0));

        assert_eq!(
            base.clone().with_pause_on_hover(true).effective_hover_speed(),
            Some(0.0)
        );
        assert_eq!(
            base.clone().with_pause_on_hover(false).effective_hover_speed(),
            None
        );

        // Explicit hover speed wins over either pause setting
        assert_eq!(
            base.clone()
                .with_pause_on_hover(false)
                .with_hover_speed(30.0)
                .effective_hover_speed(),
            Some(30.0)
        );
        assert_eq!(
            base.with_pause_on_hover(true)
                .with_hover_speed(-10.0)
                .effective_hover_speed(),
            Some(-10.0)
        );
    }

    #[test]
    fn test_width_parsing() {
        #[derive(Deserialize)]
        struct W {
            width: ContainerWidth,
        }
        let parse = |s: &str| toml::from_str::<W>(s).map(|w| w.width);

        assert_eq!(parse("width = \"fill\"").unwrap(), ContainerWidth::Fill);
        assert_eq!(parse("width = \"100%\"").unwrap(), ContainerWidth::Fill);
        assert_eq!(parse("width = 640").unwrap(), ContainerWidth::Pixels(640.0));
        assert_eq!(
            parse("width = \"480px\"").unwrap(),
            ContainerWidth::Pixels(480.0)
        );
        assert!(parse("width = \"wide\"").is_err());
    }

    #[test]
    fn test_from_toml() {
        let config = LogoLoopConfig::from_toml_str(
            r#"
            speed = 80
            direction = "down"
            hover_speed = 20
            gap = 40

            [[items]]
            src = "/logos/acme.svg"
            alt = "Acme"

            [[items]]
            node = "reddit"
            "#,
        )
        .unwrap();

        assert_eq!(config.speed, 80.0);
        assert_eq!(config.direction, Direction::Down);
        assert_eq!(config.effective_hover_speed(), Some(20.0));
        assert_eq!(config.gap, 40.0);
        assert_eq!(config.item_height, DEFAULT_ITEM_HEIGHT);
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.image_count(), 1);
        assert_eq!(config.target_velocity(), -80.0);
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = LogoLoopConfig::default().with_fade_out(true);
        let text = toml::to_string(&config).unwrap();
        let back = LogoLoopConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validation_failures() {
        let base = LogoLoopConfig::default();

        assert!(matches!(
            base.clone().with_speed(f32::NAN).validate(),
            Err(ConfigError::Core(CoreError::NonFinite("speed")))
        ));
        assert!(matches!(
            base.clone().with_hover_speed(f32::INFINITY).validate(),
            Err(ConfigError::Core(CoreError::NonFinite("hover_speed")))
        ));
        assert!(matches!(
            base.clone().with_gap(-1.0).validate(),
            Err(ConfigError::InvalidGap(_))
        ));
        assert!(matches!(
            base.clone().with_item_height(-4.0).validate(),
            Err(ConfigError::InvalidItemHeight(_))
        ));
        assert!(matches!(
            base.clone()
                .with_width(ContainerWidth::Pixels(0.0))
                .validate(),
            Err(ConfigError::InvalidWidth(_))
        ));

        let empty_source = LogoLoopConfig::new(vec![LoopItem::image("/a.svg"), LoopItem::image("")]);
        assert!(matches!(
            empty_source.validate(),
            Err(ConfigError::EmptySource(1))
        ));
    }

    #[test]
    fn test_layout_differs() {
        let a = LogoLoopConfig::new(vec![LoopItem::image("/a.svg")]);
        assert!(!a.layout_differs(&a.clone().with_speed(10.0)));
        assert!(a.layout_differs(&a.clone().with_gap(8.0)));
        assert!(a.layout_differs(&a.clone().with_width(ContainerWidth::Pixels(640.0))));
        assert!(a.layout_differs(&a.clone().with_direction(Direction::Up)));
        assert!(!a.layout_differs(&a.clone().with_direction(Direction::Right)));
    }
}
