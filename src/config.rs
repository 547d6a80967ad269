//! Startup configuration for the jumping text row.
//!
//! Built once before the stage starts and only ever read afterwards. Everything
//! that needs a value (drawing, the sequence step, the timer interval) gets it
//! from a `&JumpingConfig`.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a configuration is refused at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("node count must be at least 1")]
    NoNodes,
    #[error("text to animate must not be empty")]
    EmptyText,
    #[error("step must be finite and within (0, 1], got {0}")]
    InvalidStep(f64),
    #[error("tick interval must be at least 1ms")]
    ZeroDelay,
    #[error("font size factor must be finite and positive, got {0}")]
    InvalidFontSizeFactor(f64),
    #[error("surface size must be positive, got {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },
    #[cfg(feature = "serde_json")]
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JumpingConfig {
    pub width: f64,
    pub height: f64,
    /// Number of text rows (nodes) stacked vertically.
    pub nodes: usize,
    pub text: String,
    /// Scale advanced per tick while a node animates.
    pub step: f64,
    pub delay_ms: u32,
    /// The font size is the row gap divided by this.
    pub font_size_factor: f64,
    pub fore_color: String,
    pub back_color: String,
}

impl Default for JumpingConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
            nodes: 1,
            text: "hello".to_string(),
            step: 0.005,
            delay_ms: 30,
            font_size_factor: 5.0,
            fore_color: "teal".to_string(),
            back_color: "#bdbdbd".to_string(),
        }
    }
}

impl JumpingConfig {
    /// Default configuration filling a surface of the given size.
    pub fn sized(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nodes == 0 {
            return Err(ConfigError::NoNodes);
        }
        if self.text.is_empty() {
            return Err(ConfigError::EmptyText);
        }
        if !self.step.is_finite() || self.step <= 0.0 || self.step > 1.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        if !self.font_size_factor.is_finite() || self.font_size_factor <= 0.0 {
            return Err(ConfigError::InvalidFontSizeFactor(self.font_size_factor));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::InvalidSurface { width: self.width, height: self.height });
        }
        Ok(())
    }

    /// Vertical distance between rows; also the lift amplitude of a jumping glyph.
    pub fn gap(&self) -> f64 {
        self.height / (self.nodes as f64 + 1.0)
    }

    pub fn font_size(&self) -> f64 {
        self.gap() / self.font_size_factor
    }

    /// Parse a JSON config. A missing `width`/`height` takes the given surface
    /// size; every other absent field falls back to the defaults above.
    #[cfg(feature = "serde_json")]
    pub fn from_json_sized(json: &str, width: f64, height: f64) -> Result<Self, ConfigError> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(obj) = value.as_object_mut() {
            obj.entry("width").or_insert_with(|| width.into());
            obj.entry("height").or_insert_with(|| height.into());
        }
        let cfg: Self = serde_json::from_value(value)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = JumpingConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.text, "hello");
        assert_eq!(cfg.delay_ms, 30);
    }

    #[test]
    fn gap_and_font_size_follow_node_count() {
        let cfg = JumpingConfig { nodes: 3, ..JumpingConfig::sized(800.0, 400.0) };
        assert!((cfg.gap() - 100.0).abs() < 1e-9);
        assert!((cfg.font_size() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        let base = JumpingConfig::default();
        let cases = [
            (JumpingConfig { nodes: 0, ..base.clone() }, "node count"),
            (JumpingConfig { text: String::new(), ..base.clone() }, "text"),
            (JumpingConfig { step: 0.0, ..base.clone() }, "step"),
            (JumpingConfig { step: f64::NAN, ..base.clone() }, "step"),
            (JumpingConfig { step: 1.5, ..base.clone() }, "step"),
            (JumpingConfig { delay_ms: 0, ..base.clone() }, "interval"),
            (JumpingConfig { font_size_factor: -2.0, ..base.clone() }, "font size"),
            (JumpingConfig { width: 0.0, ..base.clone() }, "surface"),
        ];
        for (cfg, needle) in cases {
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().contains(needle), "'{}' should mention '{}'", err, needle);
        }
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_config_fills_missing_fields_with_defaults() {
        let cfg = JumpingConfig::from_json_sized(r#"{"nodes": 4, "text": "bounce"}"#, 1024.0, 768.0).unwrap();
        assert_eq!(cfg.nodes, 4);
        assert_eq!(cfg.text, "bounce");
        assert_eq!(cfg.fore_color, "teal");
        assert_eq!((cfg.width, cfg.height), (1024.0, 768.0));
        let explicit = JumpingConfig::from_json_sized(r#"{"width": 300}"#, 1024.0, 768.0).unwrap();
        assert_eq!((explicit.width, explicit.height), (300.0, 768.0));
        assert!(matches!(
            JumpingConfig::from_json_sized(r#"{"nodes": 0}"#, 10.0, 10.0),
            Err(ConfigError::NoNodes)
        ));
        assert!(matches!(JumpingConfig::from_json_sized("{", 10.0, 10.0), Err(ConfigError::Json(_))));
    }
}
