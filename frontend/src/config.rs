/// Scheduling page the booking form hands off to.
pub const SCHEDULING_URL: &str = "https://cal.com/jay-starvico/secret";

pub const CAL_EMBED_SCRIPT_URL: &str = "https://app.cal.com/embed/embed.js";
pub const CAL_ORIGIN: &str = "https://app.cal.com";

/// Minimum length of the free-text description required when "Other" is picked.
pub const OTHER_SERVICE_MIN_CHARS: usize = 10;

pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;

// Delay before hiding 404 suggestions on blur, so a click on one still lands.
pub const SUGGESTION_HIDE_DELAY_MS: u32 = 200;

#[cfg(debug_assertions)]
const FALLBACK_ORIGIN: &str = "http://localhost:8080"; // trunk serve

#[cfg(not(debug_assertions))]
const FALLBACK_ORIGIN: &str = "";

/// Origin used to build canonical links.
pub fn get_site_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}
