//! Shell quoting for values spliced into command text
//!
//! Values made only of characters the shell never interprets pass through
//! unchanged, so ordinary hostnames, users and paths keep their literal form.
//! Anything else is wrapped in single quotes.

use std::borrow::Cow;

/// Returns true if `c` never needs quoting in a POSIX shell word
pub fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-'
        )
}

/// Quote `s` as a single shell word
pub fn shell_quote(s: &str) -> Cow<'_, str> {
    if !s.is_empty() && s.chars().all(is_shell_safe) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("'{}'", s.replace('\'', "'\\''")))
    }
}

/// Quote a path as a shell word, leaving a leading `~` or `~/` bare so the
/// shell running the command still expands it to the home directory.
pub fn shell_quote_path(path: &str) -> Cow<'_, str> {
    if path == "~" {
        return Cow::Borrowed(path);
    }
    match path.strip_prefix("~/") {
        Some("") => Cow::Borrowed(path),
        Some(rest) => match shell_quote(rest) {
            Cow::Borrowed(_) => Cow::Borrowed(path),
            Cow::Owned(quoted) => Cow::Owned(format!("~/{}", quoted)),
        },
        None => shell_quote(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(shell_quote("alice"), "alice");
        assert_eq!(shell_quote("/tmp/mysql.sock"), "/tmp/mysql.sock");
        assert_eq!(shell_quote("db1.internal:5432"), "db1.internal:5432");
    }

    #[test]
    fn spaces_are_quoted() {
        assert_eq!(shell_quote("my app"), "'my app'");
    }

    #[test]
    fn metacharacters_are_quoted() {
        assert_eq!(shell_quote("app; rm -rf /"), "'app; rm -rf /'");
        assert_eq!(shell_quote("$(whoami)"), "'$(whoami)'");
    }

    #[test]
    fn single_quotes_are_escaped() {
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn empty_string_is_quoted() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn home_prefix_stays_expandable() {
        assert_eq!(shell_quote_path("~"), "~");
        assert_eq!(shell_quote_path("~/"), "~/");
        assert_eq!(shell_quote_path("~/apps/shop"), "~/apps/shop");
        assert_eq!(shell_quote_path("~/my apps/shop"), "~/'my apps/shop'");
    }

    #[test]
    fn other_tildes_are_quoted() {
        assert_eq!(shell_quote_path("~deploy/apps"), "'~deploy/apps'");
        assert_eq!(shell_quote_path("/srv/a~b"), "'/srv/a~b'");
        assert_eq!(shell_quote_path("/srv/app"), "/srv/app");
    }
}
