use serde::Deserialize;

/// Top-level workday configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkdayConfig {
    /// Daily working window.
    #[serde(default)]
    pub workday: WindowToml,

    /// Non-working dates.
    #[serde(default)]
    pub holidays: HolidaysToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_stop")]
    pub stop: String,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            stop: default_stop(),
        }
    }
}

fn default_start() -> String {
    "08:00".to_string()
}
fn default_stop() -> String {
    "16:00".to_string()
}

/// Holiday lists: `fixed` holds `YYYY-MM-DD` dates, `recurring` holds
/// `MM-DD` month-days (a full date is also accepted; its year is ignored).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    #[serde(default)]
    pub fixed: Vec<String>,
    #[serde(default)]
    pub recurring: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "%d-%m-%Y %H:%M".to_string()
}
