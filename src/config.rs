use clap::ValueEnum;

/// Height of the fixed navigation bar above the scrolling page.
pub const NAV_HEIGHT: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: ThemeChoice,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

impl Config {
    /// Viewport height to assume until the window reports its real size.
    pub fn initial_viewport_height(&self) -> f32 {
        (self.window_height - NAV_HEIGHT).max(0.0)
    }
}
