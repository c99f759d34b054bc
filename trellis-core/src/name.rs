//! npm package-name validation and coercion.

/// Whether `name` is a valid npm package name, with or without an
/// `@scope/` prefix.
pub fn is_valid_package_name(name: &str) -> bool {
    match name.strip_prefix('@') {
        Some(rest) => match rest.split_once('/') {
            Some((scope, part)) => is_scope(scope) && is_bare_name(part),
            None => false,
        },
        None => is_bare_name(name),
    }
}

fn is_bare_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '~') => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~'))
}

fn is_scope(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '*' | '~') => {}
        _ => return false,
    }
    chars.all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '*' | '.' | '_' | '~')
    })
}

/// Coerce an arbitrary directory name into a valid package name:
/// lowercase, whitespace to hyphens, a leading `.` or `_` stripped,
/// every other illegal run squashed to a single hyphen.
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(&hyphenated);

    let mut out = String::with_capacity(stripped.len());
    let mut squashing = false;
    for c in stripped.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '~') {
            out.push(c);
            squashing = false;
        } else if !squashing {
            out.push('-');
            squashing = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_package_name("my-project"));
        assert!(is_valid_package_name("project2"));
        assert!(is_valid_package_name("~escaped"));
        assert!(is_valid_package_name("@scope/pkg"));
        assert!(is_valid_package_name("@my-org/my.pkg"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("My-Project"));
        assert!(!is_valid_package_name(".hidden"));
        assert!(!is_valid_package_name("_private"));
        assert!(!is_valid_package_name("has space"));
        assert!(!is_valid_package_name("@scope"));
        assert!(!is_valid_package_name("@/pkg"));
    }

    #[test]
    fn test_to_valid_package_name() {
        assert_eq!(to_valid_package_name("My Project"), "my-project");
        assert_eq!(to_valid_package_name("  Vue App  "), "vue-app");
        assert_eq!(to_valid_package_name(".hidden"), "hidden");
        assert_eq!(to_valid_package_name("_private"), "private");
        assert_eq!(to_valid_package_name("hello!world"), "hello-world");
    }

    #[test]
    fn test_coerced_names_are_valid() {
        for raw in ["My Project", ".config dir", "Ünicode Name", "a!!b"] {
            let coerced = to_valid_package_name(raw);
            assert!(
                is_valid_package_name(&coerced),
                "{raw:?} coerced to invalid {coerced:?}"
            );
        }
    }
}
