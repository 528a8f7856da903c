/// Configurations for Casement
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directives used when no `CASEMENT_LOG` is set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info,winit=warn".to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Profiling scopes are recorded, but nothing is served
    On,
    /// Profiling is enabled, and can be viewed using external tools such as 'puffin_viewer'
    WithWebServer,
}
