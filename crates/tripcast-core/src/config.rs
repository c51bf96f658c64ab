use crate::selection::GeoPoint;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub map: MapConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            variant: Variant::default(),
            map: MapConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Overlays `TRIPCAST_BASE_URL` and `TRIPCAST_VARIANT` on the defaults.
    /// An unparseable variant is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TRIPCAST_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(raw) = std::env::var("TRIPCAST_VARIANT") {
            match raw.parse() {
                Ok(v) => config.variant = v,
                Err(e) => tracing::warn!("Ignoring TRIPCAST_VARIANT: {}", e),
            }
        }

        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub center: GeoPoint,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            center: GeoPoint::new(40.7128, -74.006),
            zoom: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/");
        assert_eq!(config.variant, Variant::Form);
        assert_eq!(config.map.center, GeoPoint::new(40.7128, -74.006));
        assert_eq!(config.map.zoom, 12);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.2:8080/", "variant": "map"}"#)
                .unwrap();
        assert_eq!(config.variant, Variant::Map);
        assert_eq!(config.map.tile_url, OSM_TILE_URL);
    }
}
