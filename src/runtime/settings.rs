use medialib::config;

/// Load settings, falling back to defaults when the config is unreadable or
/// invalid. The second value explains why defaults were used; it is returned
/// rather than logged because logging is configured from these settings.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {msg}")),
                )
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the catalog from loading.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
