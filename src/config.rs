use crate::{ConfigError, Viewport};

/// Fixed configuration for a [`NavigationController`](crate::NavigationController).
///
/// With the `serde` feature, missing fields fall back to their defaults, so
/// a partial document such as `max_zoom = 8.0` is valid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Lower bound for the zoom factor
    pub min_zoom: f64,
    /// Upper bound for the zoom factor
    pub max_zoom: f64,
    /// Multiplicative factor applied by one zoom in/out step
    pub zoom_step: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            min_zoom: 0.1,
            max_zoom: 5.0,
            zoom_step: 1.25,
        }
    }
}

impl ViewerConfig {
    /// Parse a TOML string into a `ViewerConfig` and validate it.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Check that every value is usable.
    ///
    /// The zoom range must contain 1.0, since every load resets the zoom
    /// factor to exactly that value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.viewport_width) || !positive(self.viewport_height) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !positive(self.min_zoom)
            || !positive(self.max_zoom)
            || self.min_zoom > 1.0
            || self.max_zoom < 1.0
        {
            return Err(ConfigError::InvalidZoomLimits {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        Ok(())
    }
}
