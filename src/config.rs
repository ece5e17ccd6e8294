use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::math::{self, Matrix4, Vector3, IDENTITY};

/// Top-level settings. Every section uses `#[serde(default)]` so partial files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub clear_color: ClearColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cool shaders idk".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Distance travelled per frame while a movement key is held
    pub move_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse motion
    pub mouse_sensitivity: f32,
    pub position: Vector3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 80.0,
            z_near: 0.1,
            z_far: 1000.0,
            move_speed: 0.01,
            mouse_sensitivity: 0.1,
            position: [0.0, 0.0, 0.0],
            // Facing -z, towards the quad
            yaw: 180.0,
            pitch: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Default for ClearColor {
    fn default() -> Self {
        Self { r: 0.1, g: 0.1, b: 0.2 }
    }
}

impl From<ClearColor> for wgpu::Color {
    fn from(color: ClearColor) -> Self {
        wgpu::Color {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 1.0,
        }
    }
}

/// Perspective parameters; the aspect ratio is supplied per viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Matrix4 {
        let mut out = IDENTITY;
        math::perspective(&mut out, self.fovy, aspect, self.z_near, self.z_far);
        out
    }
}

impl From<&CameraConfig> for Projection {
    fn from(config: &CameraConfig) -> Self {
        Self {
            fovy: config.fov_degrees.to_radians(),
            z_near: config.z_near,
            z_far: config.z_far,
        }
    }
}

/// Drawable area in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height (minimized window) is treated as one pixel
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Config file named on the command line (or defaults), then flag overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if cli.fullscreen {
            self.window.fullscreen = true;
        }
        if let Some(fov) = cli.fov {
            self.camera.fov_degrees = fov;
        }
        if let Some(speed) = cli.speed {
            self.camera.move_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.camera.mouse_sensitivity = sensitivity;
        }
    }

    pub fn projection(&self) -> Projection {
        Projection::from(&self.camera)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width, self.window.height)
    }
}
