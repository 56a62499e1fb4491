#[cfg(debug_assertions)]
pub fn get_intake_url() -> &'static str {
    "http://localhost:3001/intake"  // Local stub when running the form against a dev server
}

#[cfg(not(debug_assertions))]
pub fn get_intake_url() -> &'static str {
    "https://formspree.io/f/xpqablle"  // Production intake endpoint
}
