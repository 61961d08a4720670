// ==========================================
// Internationalization (i18n) Module
// ==========================================
// Uses the rust-i18n crate.
// Spanish is the default (upstream product language); English is
// available for integrations.
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs.
// ==========================================

/// Current locale.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch locale ("es" or "en").
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message without arguments.
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with `%{name}` placeholders.
///
/// # Example
/// ```no_run
/// use fefo_core::i18n::t_with_args;
/// let msg = t_with_args("alerts.near_expiry", &[("batch", "LOT-1"), ("days", "5")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
