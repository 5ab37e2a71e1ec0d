/// Ordered HTML attribute mapping.
///
/// Iteration and serialization follow insertion order. Re-inserting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes as ` name="value"` pairs with no separator.
    ///
    /// Values are written verbatim; no escaping is applied.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_attributes_render_nothing() {
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn renders_in_insertion_order() {
        let attrs = Attributes::new()
            .with("href", "https://www.google.com")
            .with("target", "_blank");
        assert_eq!(
            attrs.to_html(),
            r#" href="https://www.google.com" target="_blank""#
        );
    }

    #[test]
    fn reinsert_keeps_original_position() {
        let mut attrs: Attributes = [("src", "a.png"), ("alt", "a")].into_iter().collect();
        attrs.insert("src", "b.png");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(attrs.to_html(), r#" src="b.png" alt="a""#);
    }

    #[test]
    fn get_missing_name() {
        let attrs = Attributes::new().with("class", "x");
        assert_eq!(attrs.get("id"), None);
    }
}
