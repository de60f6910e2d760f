//! CSRF Token Lookup
//!
//! The meta tag wins when it has content, then the cookie, then nothing.

use percent_encoding::percent_decode_str;

/// Pick the token from the meta tag content or the raw `document.cookie` string
pub fn resolve_token(meta_content: Option<&str>, cookie: &str, cookie_name: &str) -> String {
    if let Some(content) = meta_content.filter(|c| !c.is_empty()) {
        return content.to_string();
    }
    token_from_cookie(cookie, cookie_name).unwrap_or_default()
}

/// Find `name=value` in a `document.cookie` string
pub fn token_from_cookie(cookie: &str, name: &str) -> Option<String> {
    cookie
        .split(';')
        .map(str::trim)
        .find(|pair| pair.strip_prefix(name).is_some_and(|rest| rest.starts_with('=')))
        .and_then(|pair| pair.split('=').nth(1))
        .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wins() {
        let token = resolve_token(Some("from-meta"), "csrftoken=from-cookie", "csrftoken");
        assert_eq!(token, "from-meta");
    }

    #[test]
    fn test_empty_meta_falls_back_to_cookie() {
        let token = resolve_token(Some(""), "sessionid=abc; csrftoken=xyz123; theme=dark", "csrftoken");
        assert_eq!(token, "xyz123");
    }

    #[test]
    fn test_missing_everywhere() {
        assert_eq!(resolve_token(None, "sessionid=abc", "csrftoken"), "");
        assert_eq!(resolve_token(None, "", "csrftoken"), "");
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(token_from_cookie("csrftokenx=nope", "csrftoken"), None);
        assert_eq!(token_from_cookie("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_value_is_decoded() {
        assert_eq!(token_from_cookie("csrftoken=a%2Bb", "csrftoken").as_deref(), Some("a+b"));
    }
}
