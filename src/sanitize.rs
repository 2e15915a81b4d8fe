//! Filesystem-safe tokens for identifier segments.

/// Maps a raw identifier segment onto a token usable as one path component.
///
/// `: ; = < > | * ?` become `_`, quotes and whitespace are dropped, and every
/// other character passes through untouched. The output never contains a
/// character this function rewrites, so it is idempotent.
pub fn sanitize(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            ':' | ';' | '=' | '<' | '>' | '|' | '*' | '?' => out.push('_'),
            '"' | '\'' => {}
            c if c.is_whitespace() => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn cts_params_become_underscored() {
        assert_eq!(
            sanitize("inputSource=\"const\";vectorize=2"),
            "inputSource_const_vectorize_2"
        );
    }

    #[test]
    fn unlisted_characters_pass_through() {
        assert_eq!(sanitize("a,b.c-d/e(f)"), "a,b.c-d/e(f)");
    }
}
