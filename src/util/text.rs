//! String helpers.

/// Characters stripped by [`trim_blank`].
const BLANK: [char; 4] = ['\n', '\t', ' ', '\r'];

/// Trims newlines, tabs, spaces and carriage returns from both ends.
///
/// Other Unicode whitespace is left alone.
///
/// ```
/// assert_eq!(splitrs::util::text::trim_blank("\r\n  value\t\n"), "value");
/// ```
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(&BLANK[..])
}

/// Returns true if `host` is a strict subdomain of any of `parents`.
///
/// `"api.example.com"` is a subdomain of `"example.com"`; `"example.com"`
/// itself and `"badexample.com"` are not.
pub fn is_subdomain_of<S: AsRef<str>>(parents: &[S], host: &str) -> bool {
    parents.iter().any(|parent| {
        host.strip_suffix(parent.as_ref())
            .is_some_and(|head| head.ends_with('.'))
    })
}
