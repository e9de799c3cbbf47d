use serde::{Deserialize, Serialize};

fn default_shimmer_rows() -> u32 {
    3
}

fn default_window_title() -> String {
    "MyDictionary".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Placeholder rows drawn while a lookup is in flight
    #[serde(default = "default_shimmer_rows")]
    pub shimmer_rows: u32,
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            shimmer_rows: default_shimmer_rows(),
            window_title: default_window_title(),
        }
    }
}
