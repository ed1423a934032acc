//! Identifier to path segment conversion.
//!
//! Route keys are written as identifiers (`aboutUs`, `userSettings`) while the
//! path segments derived from them are kebab-case (`about-us`,
//! `user-settings`).

/// Convert an identifier to kebab-case.
///
/// A hyphen is inserted between an ASCII lowercase letter and a following
/// ASCII uppercase letter, every run of whitespace becomes a single hyphen,
/// and the result is lowercased. Input that is already kebab-case is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use routetree::to_kebab_case;
///
/// assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
/// assert_eq!(to_kebab_case("aboutUs"), "about-us");
/// assert_eq!(to_kebab_case("user  settings"), "user-settings");
/// assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
/// ```
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.next_if(|next| next.is_whitespace()).is_some() {}
            out.push('-');
            continue;
        }

        out.push(c);
        if c.is_ascii_lowercase() && chars.peek().is_some_and(char::is_ascii_uppercase) {
            out.push('-');
        }
    }

    out.to_lowercase()
}
