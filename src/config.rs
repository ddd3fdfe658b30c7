// Presentation configuration, loaded from a TOML file in the user's
// config directory. Physics is fixed by design and deliberately not
// configurable from here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Player paddle and score color (RGB values 0-255)
    pub player_color: [u8; 3],

    // AI paddle and score color
    pub ai_color: [u8; 3],

    // Ghost ball color
    pub ball_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            player_color: [255, 255, 0],  // Yellow
            ai_color: [255, 105, 180],    // Hot pink
            ball_color: [255, 255, 0],    // Yellow, like the original ghost
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsConfig {
    // Start/reset toggle
    pub start_reset: String,

    // Quit keys are fixed (Q / Esc); these nudge the virtual pointer on
    // terminals without mouse reporting
    pub pointer_up: String,
    pub pointer_down: String,

    // Arena units moved per pointer nudge
    pub pointer_nudge: f32,

    // Terminal bell on audio cues
    pub bell: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            start_reset: "Space".to_string(),
            pointer_up: "Up".to_string(),
            pointer_down: "Down".to_string(),
            pointer_nudge: 20.0,
            bell: true,
        }
    }
}

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ghost-pong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# Ghost Pong Configuration File\n\
         # Edit this file to customize display and controls\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Space\", \"Enter\"\n\
         #                     or single characters like \"W\", \"S\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Should round-trip cleanly - parsed values must match the original defaults
        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.display.player_color, config.display.player_color);
        assert_eq!(parsed.controls.start_reset, config.controls.start_reset);
        assert_eq!(parsed.controls.pointer_nudge, config.controls.pointer_nudge);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        // Should be able to parse partial config with #[serde(default)]
        let partial_toml = r#"
            [display]
            target_fps = 30
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        // Custom value
        assert_eq!(config.display.target_fps, 30);

        // Default values should still be there
        assert_eq!(config.display.ai_color, [255, 105, 180]);
        assert_eq!(config.controls.start_reset, "Space");
    }
}
