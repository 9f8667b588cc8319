//! Canonical-name to camel-name derivation.

/// Derive the lower-camel-case form of a hyphen-separated dictionary name.
///
/// The first token is lower-cased whole; every later token is lower-cased
/// and then has its first character upper-cased; the tokens join with no
/// separator: `"CC-Request-Type"` becomes `"ccRequestType"`. Empty tokens
/// (doubled or edge hyphens) contribute nothing.
pub fn camelize(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    for (index, token) in name.split('-').enumerate() {
        let token = token.to_lowercase();
        if index == 0 {
            camel.push_str(&token);
            continue;
        }
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}
