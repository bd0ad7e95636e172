//! Commit the bundle was built from, injected by `build.rs`.

pub fn git_commit_hash() -> &'static str {
    match option_env!("PAYFEE_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// First seven characters of the commit, or `unknown`.
pub fn short_commit_hash() -> &'static str {
    shorten(git_commit_hash())
}

fn shorten(hash: &str) -> &str {
    hash.get(0..7).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::shorten;

    #[test]
    fn shorten_keeps_seven_characters() {
        assert_eq!(shorten("0123456789abcdef"), "0123456");
        assert_eq!(shorten("unknown"), "unknown");
        assert_eq!(shorten("abc"), "abc");
    }
}
