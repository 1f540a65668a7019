/// Base URL of the Omni-Assistant app that hosts login and sign up.
/// Set `OMNI_APP_URL` at build time; empty means the same origin.
pub fn get_app_url() -> &'static str {
    option_env!("OMNI_APP_URL").unwrap_or("")
}

pub fn login_url() -> String {
    format!("{}/auth/login", get_app_url().trim_end_matches('/'))
}

pub fn signup_url() -> String {
    format!("{}/auth/signup", get_app_url().trim_end_matches('/'))
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Tuning for the scroll animations.
pub mod animation {
    /// Vertical offset of hidden "how it works" steps.
    pub const STEP_OFFSET_PX: f64 = 20.0;
    /// Horizontal offset of hidden channels.
    pub const CHANNEL_OFFSET_PX: f64 = -20.0;
    pub const SWAP_DURATION_MS: u32 = 500;

    /// Pin lengths in viewport heights.
    pub const STEPS_PIN_VIEWPORTS: f64 = 1.5;
    pub const CHANNELS_PIN_VIEWPORTS: f64 = 1.5;
    pub const INTEGRATIONS_PIN_VIEWPORTS: f64 = 1.0;

    /// Hero decorations and how far each travels over the hero region.
    pub const PARALLAX_LAYERS: [(&str, f64); 3] = [
        ("#phone-element", -50.0),
        ("#cloud-element", -30.0),
        ("#calendar-element", -10.0),
    ];
    pub const PARALLAX_SCRUB_MS: u32 = 1000;

    pub const REVEAL_SCALE_GAIN: f64 = 0.2;
    pub const REVEAL_DURATION_MS: u32 = 300;

    /// Scroll offset after which the navbar turns opaque.
    pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
    pub const RESIZE_DEBOUNCE_MS: u32 = 200;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_links_point_at_app() {
        assert!(login_url().ends_with("/auth/login"));
        assert!(signup_url().ends_with("/auth/signup"));
        assert!(!signup_url().contains("//auth"));
    }
}
