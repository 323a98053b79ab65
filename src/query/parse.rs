//! Query-component parsing.

use super::QueryParams;

/// Parses a raw query component (no leading `?`) into ordered parameters.
///
/// Form-urlencoded rules apply: percent-decoding, `+` as space, the first
/// `=` splits key from value, a pair without `=` parses as an empty value.
/// Empty fragments (`a&&b=1`) are skipped. Never fails.
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params.append(key.into_owned(), value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pairs_in_order() {
        let params = parse_query("foo=bar&baz=qux");
        assert_eq!(params.get("foo"), Some("bar"));
        assert_eq!(params.get("baz"), Some("qux"));
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("foo", "bar"), ("baz", "qux")]
        );
    }

    #[test]
    fn percent_decoding_and_plus() {
        let params = parse_query("q=hello+world&path=a%2Fb&sign=%2B1");
        assert_eq!(params.get("q"), Some("hello world"));
        assert_eq!(params.get("path"), Some("a/b"));
        assert_eq!(params.get("sign"), Some("+1"));
    }

    #[test]
    fn empty_and_garbage_fragments_tolerated() {
        assert!(parse_query("").is_empty());
        let params = parse_query("&&a=1&&");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn pair_without_equals_parses_as_empty_value() {
        let params = parse_query("flag&x=1");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("x"), Some("1"));
    }

    #[test]
    fn value_with_embedded_equals() {
        let params = parse_query("next=/page?a=b");
        assert_eq!(params.get("next"), Some("/page?a=b"));
    }
}
