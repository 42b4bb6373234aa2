//! POSIX shell quoting for displaying command lines.

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c)
}

/// Quote `raw` so a POSIX shell reads it back as a single word.
///
/// Words made only of safe characters are left bare. Anything else is
/// wrapped in single quotes, with embedded single quotes spelled `'"'"'`.
pub fn shell_quote(raw: &str) -> String {
    if raw.is_empty() {
        return "''".to_string();
    }

    if raw.chars().all(is_safe) {
        return raw.to_string();
    }

    format!("'{}'", raw.replace('\'', r#"'"'"'"#))
}

/// Quote each word and join them with spaces
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| shell_quote(word.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
