use smol_str::SmolStr;

/// The enum member for a pattern name: the name with any symbol that can't
/// appear in a C identifier mapped to `_`.
pub fn enum_name(name: &str) -> SmolStr {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// The handler function for a pattern name: the configured prefix plus the
/// lowercased sanitized name.
pub fn handler_name(prefix: &str, name: &str) -> SmolStr {
    let mut out = String::from(prefix);
    out.extend(enum_name(name).chars().map(|c| c.to_ascii_lowercase()));
    SmolStr::new(out)
}
