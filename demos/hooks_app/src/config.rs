use web_time::Duration;

/// Environment variable overriding [`AppConfig::title_delay`], in milliseconds.
pub const TITLE_DELAY_ENV: &str = "HOOKBOX_TITLE_DELAY_MS";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub initial_count: i32,
    pub name_default: String,
    /// Names containing this character are rejected by the input.
    pub forbidden: char,
    pub initial_title: String,
    pub settled_title: String,
    pub title_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_count: 1,
            name_default: "Mr.".into(),
            forbidden: '@',
            initial_title: "Loading...".into(),
            settled_title: "Home".into(),
            title_delay: Duration::from_secs(5),
        }
    }
}

impl AppConfig {
    /// Defaults, with the title delay taken from the environment if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(TITLE_DELAY_ENV) {
            match parse_delay(&raw) {
                Some(delay) => config.title_delay = delay,
                None => log::warn!("ignoring {TITLE_DELAY_ENV}={raw:?}: not a number of milliseconds"),
            }
        }
        config
    }
}

fn parse_delay(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}
