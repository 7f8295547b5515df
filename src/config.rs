use serde_json::Value as RawValue;

use crate::builder::Loader;
use crate::document::Document;
use crate::normalize::normalize;
use crate::value::Value;

/// Lookup handle over a parsed config document.
///
/// A `Config` either owns a [`Document`] or, when loading failed to parse,
/// owns nothing and answers every lookup with the caller's default. Lookups
/// never fail in either case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    document: Option<Document>,
}

impl Config {
    /// Start configuring a [`Loader`].
    pub fn loader() -> Loader {
        Loader::new()
    }

    /// Bind an already-built tree.
    pub fn from_value(root: RawValue) -> Self {
        Self::from_document(Document::new(root))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// A config with no document. Every lookup returns the normalized default.
    pub fn fallback() -> Self {
        Self { document: None }
    }

    pub fn is_fallback(&self) -> bool {
        self.document.is_none()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Whether the document has a value (possibly `null`) at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.document.as_ref().is_some_and(|doc| doc.exists(path))
    }

    /// Look up `path`, falling back to `default` when it is absent.
    ///
    /// Whichever value is chosen goes through [`normalize`], so
    /// `get("port", 80)` is a [`Value::Int`] whether the document wrote
    /// `8080`, `8080.0`, or nothing at all.
    pub fn get(&self, path: &str, default: impl Into<RawValue>) -> Value {
        match self.document.as_ref().and_then(|doc| doc.get(path)) {
            Some(raw) => normalize(raw.clone()),
            None => normalize(default.into()),
        }
    }

    /// Integer at `path`, or `default` if absent or not a number.
    pub fn int(&self, path: &str, default: i64) -> i64 {
        self.get(path, default).as_int().unwrap_or(default)
    }

    /// String at `path`, or `default` if absent or not a string.
    pub fn string(&self, path: &str, default: &str) -> String {
        self.get(path, default)
            .into_string()
            .unwrap_or_else(|| default.to_string())
    }

    /// String list at `path`, or `default` if absent or not a list of strings.
    pub fn strings(&self, path: &str, default: &[&str]) -> Vec<String> {
        self.get(path, default.to_vec())
            .into_str_list()
            .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    }

    /// Integer list at `path`, or `default` if absent or not a list of numbers.
    pub fn ints(&self, path: &str, default: &[i64]) -> Vec<i64> {
        self.get(path, default.to_vec())
            .into_int_list()
            .unwrap_or_else(|| default.to_vec())
    }

    /// Boolean at `path`, or `default` if absent or not a boolean.
    pub fn flag(&self, path: &str, default: bool) -> bool {
        self.get(path, default).as_bool().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::SAMPLE_JSON;
    use crate::types::Format;
    use serde_json::json;

    fn sample() -> Config {
        Config::from_document(Document::parse(SAMPLE_JSON.as_bytes(), Format::Json).unwrap())
    }

    #[test]
    fn present_value_overrides_default() {
        assert_eq!(sample().get("int", 999), Value::Int(10));
    }

    #[test]
    fn float_in_document_folds_to_int() {
        assert_eq!(sample().get("float", 0), Value::Int(10));
        assert_eq!(sample().get("negative_float", 0), Value::Int(-3));
    }

    #[test]
    fn nested_path_resolves() {
        let config = sample();
        assert_eq!(config.get("nested.int", 0), Value::Int(11));
        assert_eq!(config.get("nested.str", ""), Value::Str("tvelwe".into()));
        assert_eq!(config.get("nested.deeper.port", 80), Value::Int(8080));
    }

    #[test]
    fn absent_path_returns_normalized_default() {
        let config = sample();
        assert_eq!(config.get("missing.path", 42), Value::Int(42));
        assert_eq!(config.get("missing.path", "x"), Value::Str("x".into()));
        assert_eq!(config.get("missing.path", 2.9), Value::Int(2));
    }

    #[test]
    fn string_list_typed_by_first_element() {
        let value = sample().get("str_array", Vec::<String>::new());
        let items = value.as_str_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], "three");
    }

    #[test]
    fn int_list_typed_by_first_element() {
        let value = sample().get("int_array", vec![100i64, 101]);
        assert_eq!(value, Value::IntList(vec![0, 1, 2, 3]));
    }

    #[test]
    fn list_default_keeps_its_shape() {
        let value = sample().get("no_such_array", vec!["foo", "bar"]);
        assert_eq!(value, Value::StrList(vec!["foo".into(), "bar".into()]));
        let value = sample().get("no_such_array", vec![7i64, 8]);
        assert_eq!(value, Value::IntList(vec![7, 8]));
    }

    #[test]
    fn present_null_is_returned_not_defaulted() {
        assert_eq!(sample().get("nothing", 5), Value::Raw(RawValue::Null));
    }

    #[test]
    fn passthrough_shapes() {
        let config = sample();
        assert_eq!(config.get("flag", false), Value::Raw(json!(true)));
        assert_eq!(config.get("empty_array", vec!["x"]), Value::Raw(json!([])));
        assert_eq!(config.get("mixed_array", 0), Value::Raw(json!([1, "two"])));
        assert!(config.get("nested", 0).as_raw().unwrap().is_object());
    }

    #[test]
    fn normalized_value_accepted_as_default() {
        let previous = sample().get("str_array", 0);
        let again = Config::fallback().get("anything", previous.clone());
        assert_eq!(again, previous);
    }

    #[test]
    fn repeated_lookups_are_equal() {
        let config = sample();
        assert_eq!(config.get("str_array", 0), config.get("str_array", 0));
        assert_eq!(config.get("missing", "d"), config.get("missing", "d"));
    }

    #[test]
    fn fallback_ignores_path() {
        let config = Config::fallback();
        assert!(config.is_fallback());
        assert!(!config.contains("int"));
        assert_eq!(config.get("anything", "bar"), Value::Str("bar".into()));
        assert_eq!(config.get("x.y", 10), Value::Int(10));
    }

    #[test]
    fn contains_reports_presence() {
        let config = sample();
        assert!(config.contains("nested.int"));
        assert!(config.contains("nothing"));
        assert!(!config.contains("nested.nope"));
    }

    #[test]
    fn from_value_binds_tree() {
        let config = Config::from_value(json!({"server": {"port": 9000}}));
        assert!(!config.is_fallback());
        assert_eq!(config.int("server.port", 80), 9000);
        assert_eq!(config.document().unwrap().root()["server"]["port"], json!(9000));
    }

    #[test]
    fn typed_getters_fall_back_on_shape_mismatch() {
        let config = sample();
        assert_eq!(config.int("int", 1), 10);
        assert_eq!(config.int("str", 1), 1);
        assert_eq!(config.string("str", "d"), "hello");
        assert_eq!(config.string("int", "d"), "d");
        assert_eq!(config.strings("str_array", &["d"]), vec!["one", "two", "three"]);
        assert_eq!(config.strings("int_array", &["d"]), vec!["d"]);
        assert_eq!(config.strings("missing", &[]), Vec::<String>::new());
        assert_eq!(config.ints("int_array", &[9]), vec![0, 1, 2, 3]);
        assert_eq!(config.ints("str_array", &[9]), vec![9]);
        assert!(config.flag("flag", false));
        assert!(config.flag("int", true));
        assert!(!config.flag("missing", false));
    }

    #[test]
    fn config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();

        let config = std::sync::Arc::new(sample());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = config.clone();
                std::thread::spawn(move || config.int("nested.int", 0))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 11);
        }
    }
}
