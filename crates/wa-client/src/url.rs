//! Request URL construction.

/// Extra query parameters forwarded to the API, in insertion order.
///
/// Keys and values are percent-encoded but otherwise passed through
/// unchanged, e.g. `format=image`, `assumption=*C.pi-_*Movie-`, `podstate=...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Join `base` and `path`, then append `fixed` followed by `extra` as an
/// escaped query string.
pub(crate) fn build(base: &str, path: &str, fixed: &[(&str, &str)], extra: &Params) -> String {
    let mut url = format!("{}{path}", base.trim_end_matches('/'));
    let mut separator = '?';
    for (key, value) in fixed.iter().copied().chain(extra.iter()) {
        url.push(separator);
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        separator = '&';
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_spaces_and_reserved_characters() {
        let url = build(
            "https://api.wolframalpha.com",
            "/v2/query",
            &[("input", "what is 2+2 & 3/4?"), ("appid", "DEMO-123")],
            &Params::new(),
        );
        assert_eq!(
            url,
            "https://api.wolframalpha.com/v2/query?input=what%20is%202%2B2%20%26%203%2F4%3F&appid=DEMO-123"
        );
    }

    #[test]
    fn escapes_non_ascii_input() {
        let url = build("http://h", "/p", &[("i", "π ≈ 3.14")], &Params::new());
        assert_eq!(url, "http://h/p?i=%CF%80%20%E2%89%88%203.14");
    }

    #[test]
    fn extra_params_follow_fixed_ones_in_order() {
        let extra = Params::new()
            .with("format", "image,plaintext")
            .with("podstate", "Result__More digits");
        let url = build("http://h/", "/v2/query", &[("input", "pi")], &extra);
        assert_eq!(
            url,
            "http://h/v2/query?input=pi&format=image%2Cplaintext&podstate=Result__More%20digits"
        );
    }

    #[test]
    fn params_collect_from_pairs() {
        let params: Params = [("units", "metric"), ("timeout", "5")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("units", "metric"), ("timeout", "5")]
        );
    }
}
