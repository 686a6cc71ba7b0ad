use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use egui::{Color32, Stroke};
use serde::Deserialize;

use crate::geometry::{DEFAULT_CIRCLE_SEGMENTS, Tangency};

const CONFIG_FILE_NAME: &str = "secant.toml";

fn alpha_to_u8(alpha: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

fn rgba(color: [u8; 3], alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color[0], color[1], color[2], alpha_to_u8(alpha))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: [u8; 3],
    pub alpha: f32,
    pub thickness: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [128, 128, 255],
            alpha: 1.0,
            thickness: 2.0,
        }
    }
}

impl StrokeStyle {
    const fn with_color(color: [u8; 3]) -> Self {
        Self {
            color,
            alpha: 1.0,
            thickness: 2.0,
        }
    }

    pub fn color32(&self) -> Color32 {
        rgba(self.color, self.alpha)
    }

    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: self.thickness.max(0.1),
            color: self.color32(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub color: [u8; 3],
    pub alpha: f32,
    pub radius: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: [255, 255, 0],
            alpha: 1.0,
            radius: 4.0,
        }
    }
}

impl PointStyle {
    pub fn color32(&self) -> Color32 {
        rgba(self.color, self.alpha)
    }

    pub const fn radius(&self) -> f32 {
        self.radius.max(0.1)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesStyle {
    /// Half-length of each axis in normalized units.
    pub extent: f64,
    pub x_color: [u8; 3],
    pub y_color: [u8; 3],
    pub thickness: f32,
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            extent: 0.85,
            x_color: [255, 0, 0],
            y_color: [0, 255, 0],
            thickness: 1.0,
        }
    }
}

impl AxesStyle {
    pub fn x_stroke(&self) -> Stroke {
        Stroke::new(self.thickness.max(0.1), rgba(self.x_color, 1.0))
    }

    pub fn y_stroke(&self) -> Stroke {
        Stroke::new(self.thickness.max(0.1), rgba(self.y_color, 1.0))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side length of the square drawing surface, in points.
    pub canvas_size: f32,
    pub background: [u8; 3],
    pub circle: StrokeStyle,
    pub segment: StrokeStyle,
    pub preview: StrokeStyle,
    pub intersections: PointStyle,
    pub axes: AxesStyle,
    pub circle_segments: usize,
    /// Relative discriminant band for tangency; zero or less means exact.
    pub tangent_tolerance: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: 700.0,
            background: [26, 51, 77],
            circle: StrokeStyle::with_color([255, 0, 255]),
            segment: StrokeStyle::with_color([128, 128, 255]),
            preview: StrokeStyle::with_color([128, 128, 128]),
            intersections: PointStyle::default(),
            axes: AxesStyle::default(),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            tangent_tolerance: crate::geometry::DEFAULT_TANGENT_TOLERANCE,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::parse(&contents) {
                    Ok(cfg) => {
                        log::info!("loaded config from {}", path.display());
                        return cfg;
                    }
                    Err(err) => {
                        log::warn!("failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(contents)
    }

    pub fn tangency(&self) -> Tangency {
        Tangency::from_tolerance(self.tangent_tolerance)
    }

    pub fn background_color(&self) -> Color32 {
        rgba(self.background, 1.0)
    }

    pub const fn canvas_side(&self) -> f32 {
        self.canvas_size.clamp(100.0, 4000.0)
    }

    pub fn outline_segments(&self) -> usize {
        self.circle_segments.clamp(8, 4096)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Secant", "Secant") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("secant").join(CONFIG_FILE_NAME));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::parse("").expect("empty config");
        assert_eq!(cfg.circle_segments, DEFAULT_CIRCLE_SEGMENTS);
        assert_eq!(cfg.circle.color, [255, 0, 255]);
        assert_eq!(cfg.tangency(), Tangency::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg = AppConfig::parse(
            r"
tangent_tolerance = 0.0
circle_segments = 3

[intersections]
radius = 6.5
",
        )
        .expect("valid config");
        assert_eq!(cfg.tangency(), Tangency::Exact);
        assert_eq!(cfg.outline_segments(), 8);
        assert!((cfg.intersections.radius() - 6.5).abs() < f32::EPSILON);
        assert_eq!(cfg.intersections.color, [255, 255, 0]);
        assert!((cfg.axes.extent - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(AppConfig::parse("canvas_size = \"wide\"").is_err());
    }
}
