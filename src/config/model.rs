// src/config/model.rs

use serde::Deserialize;

use crate::types::DependencyFormat;

/// Top-level configuration as read from a TOML file, before validation.
///
/// This is a direct mapping of the expected file shape:
///
/// ```toml
/// [inputs]
/// sprints = "doc/Sprints.csv"
/// dependencies = "doc/Isblockedby.csv"
/// format = "rows"
/// sprint_prefix = "SP"
///
/// [render]
/// output = "sprintgraph.svg"
/// width = 1500
/// height = 800
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Input file locations and parsing options from `[inputs]`.
    #[serde(default)]
    pub inputs: InputsSection,

    /// Figure output options from `[render]`.
    #[serde(default)]
    pub render: RenderSection,
}

/// Validated configuration.
///
/// Construct via `TryFrom<RawConfigFile>` (see `validate.rs`) so that every
/// instance in the rest of the program has passed the semantic checks.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub inputs: InputsSection,
    pub render: RenderSection,
}

impl ConfigFile {
    /// Construct without validation. Only `validate.rs` should call this.
    pub(crate) fn new_unchecked(inputs: InputsSection, render: RenderSection) -> Self {
        Self { inputs, render }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        // Section defaults satisfy every validation rule.
        Self::new_unchecked(InputsSection::default(), RenderSection::default())
    }
}

/// `[inputs]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InputsSection {
    /// Sprint-assignment CSV: `task_id,SP<integer>` per row.
    #[serde(default = "default_sprints_path")]
    pub sprints: String,

    /// Dependency CSV; its layout is selected by `format`.
    #[serde(default = "default_dependencies_path")]
    pub dependencies: String,

    /// `"rows"` or `"matrix"`.
    ///
    /// - `"rows"` (default): each row is `blocked_task, blocking_task, ...`
    /// - `"matrix"`: columns play that role instead of rows.
    #[serde(default)]
    pub format: DependencyFormat,

    /// Literal prefix stripped from sprint labels to obtain the sprint
    /// number, e.g. `"SP"` in `"SP3"`.
    #[serde(default = "default_sprint_prefix")]
    pub sprint_prefix: String,
}

fn default_sprints_path() -> String {
    "doc/Sprints.csv".to_string()
}

fn default_dependencies_path() -> String {
    "doc/Isblockedby.csv".to_string()
}

fn default_sprint_prefix() -> String {
    "SP".to_string()
}

impl Default for InputsSection {
    fn default() -> Self {
        Self {
            sprints: default_sprints_path(),
            dependencies: default_dependencies_path(),
            format: DependencyFormat::default(),
            sprint_prefix: default_sprint_prefix(),
        }
    }
}

/// `[render]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSection {
    /// Where the SVG figure is written.
    #[serde(default = "default_output_path")]
    pub output: String,

    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_output_path() -> String {
    "sprintgraph.svg".to_string()
}

fn default_width() -> u32 {
    1500
}

fn default_height() -> u32 {
    800
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            output: default_output_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}
