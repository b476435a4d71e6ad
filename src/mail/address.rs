//! Address shape checks backing the compose validator.
//!
//! This is a UX gate, not an RFC 5322 validator: we accept anything shaped
//! like `local@domain.tld` with no whitespace, and reject everything else.

/// Returns true if `s` has the `local@domain.tld` shape: a non-empty local
/// part, exactly one `@`, and a dot inside the domain that is neither its
/// first nor its last character.
pub fn is_valid_address(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates a comma-separated address list. An empty or whitespace-only
/// list is valid (the field is optional). Every token is trimmed and checked
/// individually; a trailing or doubled comma produces an empty token, which
/// is rejected.
pub fn is_valid_address_list(s: &str) -> bool {
    if s.trim().is_empty() {
        return true;
    }
    s.split(',').map(str::trim).all(is_valid_address)
}
