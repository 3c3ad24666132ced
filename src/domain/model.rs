use chrono::{DateTime, NaiveDate, Utc};

/// A caller-supplied argument, before it is turned into query-string text.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Flag(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    List(Vec<Arg>),
}

impl Arg {
    /// Query-string form of the argument.
    ///
    /// Lists become comma-joined (order kept, nesting flattened), booleans
    /// become `true`/`false`, everything else keeps its plain text form.
    pub fn normalize(&self) -> String {
        match self {
            Arg::List(items) => items
                .iter()
                .map(Arg::normalize)
                .collect::<Vec<_>>()
                .join(","),
            Arg::Flag(true) => "true".to_string(),
            Arg::Flag(false) => "false".to_string(),
            Arg::Int(n) => n.to_string(),
            Arg::Uint(n) => n.to_string(),
            Arg::Float(n) => n.to_string(),
            Arg::Text(s) => s.clone(),
        }
    }
}

pub fn normalize(arg: impl Into<Arg>) -> String {
    arg.into().normalize()
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Flag(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

macro_rules! arg_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! arg_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Uint(u64::from(value))
            }
        })*
    };
}

arg_from_signed!(i8, i16, i32, i64);
arg_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::Uint(value as u64)
    }
}

/// Upstream expects history dates as `dd-mm-yyyy`.
impl From<NaiveDate> for Arg {
    fn from(value: NaiveDate) -> Self {
        Arg::Text(value.format("%d-%m-%Y").to_string())
    }
}

/// Range endpoints take UNIX seconds.
impl From<DateTime<Utc>> for Arg {
    fn from(value: DateTime<Utc>) -> Self {
        Arg::Int(value.timestamp())
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg> + Clone> From<&[T]> for Arg {
    fn from(values: &[T]) -> Self {
        Arg::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(values: [T; N]) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

/// Optional query parameters, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Arg)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Arg>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Arg> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Applies every entry of `other` on top of `self`.
    pub fn merge(&mut self, other: Params) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arg)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Normalized `(key, value)` pairs in order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.normalize()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Arg>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_normalizes_to_comma_joined_in_order() {
        assert_eq!(normalize(vec!["bitcoin", "ethereum"]), "bitcoin,ethereum");
        assert_eq!(normalize(["usd", "eur", "btc"]), "usd,eur,btc");
        let ids = vec!["b".to_string(), "a".to_string()];
        assert_eq!(normalize(ids.as_slice()), "b,a");
    }

    #[test]
    fn test_bool_normalizes_to_lowercase() {
        assert_eq!(normalize(true), "true");
        assert_eq!(normalize(false), "false");
        assert_eq!(normalize(vec![true, false]), "true,false");
    }

    #[test]
    fn test_other_values_pass_through() {
        assert_eq!(normalize("usd"), "usd");
        assert_eq!(normalize(1), "1");
        assert_eq!(normalize(250u32), "250");
        assert_eq!(normalize(-3i64), "-3");
        assert_eq!(normalize(0.5), "0.5");
        assert_eq!(normalize("max"), "max");
    }

    #[test]
    fn test_empty_and_nested_lists() {
        assert_eq!(normalize(Vec::<String>::new()), "");
        let nested = Arg::List(vec![Arg::from(vec!["a", "b"]), Arg::from("c")]);
        assert_eq!(nested.normalize(), "a,b,c");
    }

    #[test]
    fn test_dates_use_upstream_formats() {
        let date = NaiveDate::from_ymd_opt(2018, 8, 27).unwrap();
        assert_eq!(normalize(date), "27-08-2018");

        let instant = DateTime::from_timestamp(1_392_577_232, 0).unwrap();
        assert_eq!(normalize(instant), "1392577232");
    }

    #[test]
    fn test_params_replace_in_place() {
        let mut params = Params::new()
            .with("vs_currency", "usd")
            .with("order", "market_cap_desc")
            .with("sparkline", false);
        params.set("vs_currency", "eur");

        assert_eq!(
            params.to_pairs(),
            vec![
                ("vs_currency".to_string(), "eur".to_string()),
                ("order".to_string(), "market_cap_desc".to_string()),
                ("sparkline".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_merge() {
        let mut base = Params::new()
            .with("ids", "bitcoin")
            .with("vs_currencies", "usd");
        base.merge(
            Params::new()
                .with("include_market_cap", true)
                .with("vs_currencies", vec!["usd", "eur"]),
        );

        assert_eq!(base.len(), 3);
        assert_eq!(
            base.get("vs_currencies"),
            Some(&Arg::from(vec!["usd", "eur"]))
        );
        assert_eq!(base.get("include_market_cap"), Some(&Arg::Flag(true)));
    }

    #[test]
    fn test_params_from_iterator() {
        let params: Params = vec![("per_page", "10"), ("page", "2")]
            .into_iter()
            .collect();
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["per_page", "page"]);
    }
}
