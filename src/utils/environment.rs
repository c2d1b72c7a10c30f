use std::env;

use crate::formatter::Locale;

/// Environment variables consulted for the viewer's locale, highest priority first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Detect the viewer's locale from `LC_ALL`, `LC_TIME` or `LANG`
///
/// Unset or empty variables are skipped. The first set variable decides; if its value
/// is not a supported locale, falls back to [`Locale::EnUs`] with a warning.
pub fn detect_locale() -> Locale {
    detect_locale_from(|name| env::var(name).ok())
}

pub(crate) fn detect_locale_from(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    let Some((var, value)) = LOCALE_VARS
        .iter()
        .find_map(|var| lookup(*var).filter(|v| !v.trim().is_empty()).map(|v| (*var, v)))
    else {
        return Locale::default();
    };

    match value.parse::<Locale>() {
        Ok(locale) => locale,
        Err(e) => {
            tracing::warn!(var, value = %value, error = %e, "falling back to en-US");
            Locale::default()
        }
    }
}
