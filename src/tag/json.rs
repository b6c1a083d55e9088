//! Lossy projection of a tag tree into `serde_json::Value`.
//!
//! Meant for debugging and display only. Kind information is dropped, so the
//! projection cannot be turned back into the original tree.

use serde_json::{Map, Number, Value};

use super::{Compound, List, Tag};

impl Tag {
    pub fn to_json(&self) -> Value {
        match self {
            Tag::End => Value::Null,
            Tag::Byte(v) => Value::from(*v),
            Tag::Short(v) => Value::from(*v),
            Tag::Int(v) => Value::from(*v),
            Tag::Long(v) => Value::from(*v),
            Tag::Float(v) => float_to_json(f64::from(*v)),
            Tag::Double(v) => float_to_json(*v),
            Tag::ByteArray(v) => Value::Array(v.iter().map(|b| Value::from(*b)).collect()),
            Tag::String(s) => Value::String(s.clone()),
            Tag::List(l) => l.to_json(),
            Tag::Compound(c) => c.to_json(),
            Tag::IntArray(v) => Value::Array(v.iter().map(|i| Value::from(*i)).collect()),
            Tag::LongArray(v) => Value::Array(v.iter().map(|i| Value::from(*i)).collect()),
        }
    }
}

impl List {
    pub fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Tag::to_json).collect())
    }
}

impl Compound {
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.len());
        for (k, v) in self {
            map.insert(k.clone(), v.to_json());
        }
        Value::Object(map)
    }
}

// JSON has no NaN or infinities.
fn float_to_json(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{compound, TagKind};

    #[test]
    fn test_projection_shape() {
        let list = List::from_tags(TagKind::String, vec!["a".into(), "b".into()]).unwrap();
        let c = compound! {
            "byte" => 5i8,
            "long" => -9i64,
            "double" => 0.5f64,
            "bytes" => vec![1i8, -1],
            "longs" => vec![1i64, 2],
            "names" => list,
            "nested" => compound! { "ok" => true },
        };
        assert_eq!(
            c.to_json(),
            json!({
                "byte": 5,
                "long": -9,
                "double": 0.5,
                "bytes": [1, -1],
                "longs": [1, 2],
                "names": ["a", "b"],
                "nested": { "ok": 1 },
            })
        );
    }

    #[test]
    fn test_projection_keeps_insertion_order() {
        let c = compound! { "z" => 1i8, "a" => 2i8 };
        assert_eq!(c.to_json().to_string(), r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_non_finite_and_end_become_null() {
        assert_eq!(Tag::Double(f64::NAN).to_json(), Value::Null);
        assert_eq!(Tag::Float(f32::INFINITY).to_json(), Value::Null);
        assert_eq!(Tag::End.to_json(), Value::Null);
    }
}
