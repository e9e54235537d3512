//! Core value types and conversion from decoded YAML.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Value represents any decoded YAML/JSON document node.
///
/// Mappings are keyed by strings and kept sorted, so two values that differ
/// only in key order are equal. Lists compare positionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`, kept exact instead of widening to a float.
    Uint(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

/// Map represents a key-value map where keys are strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Map {
    pub fields: BTreeMap<String, Value>,
}

/// ValueError describes why a YAML document could not become a [`Value`].
#[derive(Debug, Error)]
pub enum ValueError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("duplicate mapping key {key:?} after key stringification")]
    DuplicateKey { key: String },
}

impl Value {
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Follows a chain of mapping keys, returning the value at the end.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(self, |current, key| current.as_map()?.get(key))
    }

    /// Converts a decoded YAML node into a Value.
    ///
    /// Tags are dropped in favour of the tagged value. Non-string mapping
    /// keys are stringified: scalars by their plain text, complex keys by
    /// their JSON encoding. Two keys of one mapping that stringify alike
    /// (`1` and `"1"`) are rejected rather than silently merged.
    pub fn from_yaml_value(yaml: serde_yaml::Value) -> Result<Value, ValueError> {
        use serde_yaml::Value as Yaml;

        let value = match yaml {
            Yaml::Null => Value::Null,
            Yaml::Bool(b) => Value::Bool(b),
            Yaml::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            Yaml::String(s) => Value::String(s),
            Yaml::Sequence(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::from_yaml_value)
                    .collect::<Result<_, _>>()?,
            ),
            Yaml::Mapping(mapping) => {
                let mut map = Map::new();
                for (key, value) in mapping {
                    let key = key_to_string(key)?;
                    if map.has(&key) {
                        return Err(ValueError::DuplicateKey { key });
                    }
                    map.set(key, Value::from_yaml_value(value)?);
                }
                Value::Map(map)
            }
            Yaml::Tagged(tagged) => Value::from_yaml_value(tagged.value)?,
        };
        Ok(value)
    }
}

fn key_to_string(key: serde_yaml::Value) -> Result<String, ValueError> {
    use serde_yaml::Value as Yaml;

    let key = match key {
        Yaml::String(s) => s,
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Tagged(tagged) => return key_to_string(tagged.value),
        complex => {
            serde_json::to_string(&Value::from_yaml_value(complex)?).unwrap_or_default()
        }
    };
    Ok(key)
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: String, value: Value) {
        self.fields.insert(key, value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Map {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parse a YAML document into a Value, resolving `<<` merge keys first.
pub fn from_yaml(yaml: &str) -> Result<Value, ValueError> {
    let mut decoded: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    decoded.apply_merge()?;
    Value::from_yaml_value(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Bool(true), Value::Bool(true));
        assert_ne!(Value::Bool(true), Value::Bool(false));
        assert_eq!(Value::Int(42), Value::Int(42));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::String("hello".into()), Value::String("hello".into()));
    }

    #[test]
    fn test_map_key_order_is_irrelevant() {
        let a = from_yaml("a: 1\nb: 2\n").unwrap();
        let b = from_yaml("b: 2\na: 1\n").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_order_matters() {
        let a = from_yaml("[1, 2, 3]").unwrap();
        let b = from_yaml("[3, 2, 1]").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_map_operations() {
        let mut map = Map::new();
        assert!(map.is_empty());

        map.set("key".into(), Value::String("value".into()));
        assert!(!map.is_empty());
        assert!(map.has("key"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key"), Some(&Value::String("value".into())));

        let collected: Map = [("key".to_string(), Value::String("value".into()))]
            .into_iter()
            .collect();
        assert_eq!(collected, map);
    }

    #[test]
    fn test_from_yaml_scalars() {
        let value = from_yaml("s: text\ni: -3\nf: 1.5\nb: false\nn: ~\n").unwrap();
        assert_eq!(value.lookup(&["s"]), Some(&Value::String("text".into())));
        assert_eq!(value.lookup(&["i"]), Some(&Value::Int(-3)));
        assert_eq!(value.lookup(&["f"]), Some(&Value::Float(1.5)));
        assert_eq!(value.lookup(&["b"]), Some(&Value::Bool(false)));
        assert_eq!(value.lookup(&["n"]), Some(&Value::Null));
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let value = from_yaml("1: one\ntrue: yes\n~: nothing\n").unwrap();
        let map = value.as_map().unwrap();
        assert!(map.has("1"));
        assert!(map.has("true"));
        assert!(map.has("null"));
    }

    #[test]
    fn test_tags_are_dropped() {
        let value = from_yaml("secret: !vault abc\n").unwrap();
        assert_eq!(value.lookup(&["secret"]), Some(&Value::String("abc".into())));
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let yaml = r#"
base: &base
  image: nginx
  port: 80
derived:
  <<: *base
  port: 8080
"#;
        let value = from_yaml(yaml).unwrap();
        assert_eq!(
            value.lookup(&["derived", "image"]),
            Some(&Value::String("nginx".into()))
        );
        assert_eq!(value.lookup(&["derived", "port"]), Some(&Value::Int(8080)));
        assert!(!value.lookup(&["derived"]).unwrap().as_map().unwrap().has("<<"));
    }

    #[test]
    fn test_lookup_misses() {
        let value = from_yaml("metadata:\n  name: a\n").unwrap();
        assert_eq!(value.lookup(&["metadata", "namespace"]), None);
        assert_eq!(value.lookup(&["metadata", "name", "deeper"]), None);
        assert_eq!(value.lookup(&[]), Some(&value));
    }

    #[test]
    fn test_large_unsigned_integers_stay_exact() {
        let value = from_yaml("max: 18446744073709551615
next: 18446744073709551614
").unwrap();
        assert_eq!(value.lookup(&["max"]), Some(&Value::Uint(u64::MAX)));
        assert_eq!(value.lookup(&["next"]), Some(&Value::Uint(u64::MAX - 1)));
        assert_ne!(value.lookup(&["max"]), value.lookup(&["next"]));

        let small = from_yaml("v: 9223372036854775807
").unwrap();
        assert_eq!(small.lookup(&["v"]), Some(&Value::Int(i64::MAX)));
    }

    #[test]
    fn test_colliding_keys_are_rejected() {
        let err = from_yaml("data:\n  \"1\": old\n  1: same\n").unwrap_err();
        assert!(matches!(err, ValueError::DuplicateKey { ref key } if key == "1"));

        let err = from_yaml("true: a\n\"true\": b\n").unwrap_err();
        assert!(matches!(err, ValueError::DuplicateKey { .. }));
    }

    #[test]
    fn test_distinct_keys_of_different_types_are_kept() {
        let value = from_yaml("1: a\n\"2\": b\n").unwrap();
        assert_eq!(value.as_map().unwrap().len(), 2);
    }
}
