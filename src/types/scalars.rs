//! Scalars defined by the GraphQL specification.
//!
//! Each of them is a process-wide singleton, so every schema referencing
//! `Int` refers to the very same [`ScalarType`] instance.

use std::sync::{Arc, LazyLock};

use arcstr::literal;

use crate::{
    schema::{config::ScalarConfig, meta::{NamedType, ScalarType}},
    value::{Callable, CoercionResult, ParseLiteralFn, ParseValueFn, SerializeFn, Value},
};

fn specified(
    name: arcstr::ArcStr,
    description: arcstr::ArcStr,
    serialize: fn(&Value) -> CoercionResult,
    parse_value: fn(&Value) -> CoercionResult,
    parse_literal: fn(&Value) -> CoercionResult,
) -> ScalarType {
    ScalarType::new(ScalarConfig {
        name,
        description: Some(description),
        serialize: Some(Callable::<SerializeFn>::from_arc(Arc::new(serialize))),
        parse_value: Some(Callable::<ParseValueFn>::from_arc(Arc::new(parse_value))),
        parse_literal: Some(Callable::<ParseLiteralFn>::from_arc(Arc::new(parse_literal))),
        ast_node: None,
        extension_ast_nodes: vec![],
    })
}

static INT: LazyLock<ScalarType> = LazyLock::new(|| {
    specified(
        literal!("Int"),
        literal!(
            "The `Int` scalar type represents non-fractional signed whole numeric values. \
             Int can represent values between -(2^31) and 2^31 - 1."
        ),
        impl_int_scalar::serialize,
        impl_int_scalar::parse_value,
        impl_int_scalar::parse_value,
    )
});

static FLOAT: LazyLock<ScalarType> = LazyLock::new(|| {
    specified(
        literal!("Float"),
        literal!(
            "The `Float` scalar type represents signed double-precision fractional values \
             as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point)."
        ),
        impl_float_scalar::serialize,
        impl_float_scalar::parse_value,
        impl_float_scalar::parse_value,
    )
});

static STRING: LazyLock<ScalarType> = LazyLock::new(|| {
    specified(
        literal!("String"),
        literal!(
            "The `String` scalar type represents textual data, represented as UTF-8 \
             character sequences. The String type is most often used by GraphQL to \
             represent free-form human-readable text."
        ),
        impl_string_scalar::serialize,
        impl_string_scalar::parse_value,
        impl_string_scalar::parse_value,
    )
});

static BOOLEAN: LazyLock<ScalarType> = LazyLock::new(|| {
    specified(
        literal!("Boolean"),
        literal!("The `Boolean` scalar type represents `true` or `false`."),
        impl_boolean_scalar::serialize,
        impl_boolean_scalar::parse_value,
        impl_boolean_scalar::parse_value,
    )
});

static ID: LazyLock<ScalarType> = LazyLock::new(|| {
    specified(
        literal!("ID"),
        literal!(
            "The `ID` scalar type represents a unique identifier, often used to refetch \
             an object or as key for a cache. The ID type appears in a JSON response as a \
             String; however, it is not intended to be human-readable. When expected as an \
             input type, any string (such as `\"4\"`) or integer (such as `4`) input value \
             will be accepted as an ID."
        ),
        impl_id_scalar::serialize,
        impl_id_scalar::parse_value,
        impl_id_scalar::parse_value,
    )
});

impl ScalarType {
    /// The built-in `Int` scalar: a signed 32-bit integer.
    pub fn int() -> Self {
        INT.clone()
    }

    /// The built-in `Float` scalar: a double-precision number.
    pub fn float() -> Self {
        FLOAT.clone()
    }

    /// The built-in `String` scalar: UTF-8 text.
    pub fn string() -> Self {
        STRING.clone()
    }

    /// The built-in `Boolean` scalar.
    pub fn boolean() -> Self {
        BOOLEAN.clone()
    }

    /// The built-in `ID` scalar: a unique identifier serialized as a string.
    pub fn id() -> Self {
        ID.clone()
    }
}

/// Returns every scalar defined by the GraphQL specification.
pub fn specified_scalar_types() -> [ScalarType; 5] {
    [
        ScalarType::string(),
        ScalarType::int(),
        ScalarType::float(),
        ScalarType::boolean(),
        ScalarType::id(),
    ]
}

/// Checks whether the provided type is one of the specified scalars.
pub fn is_specified_scalar_type(ty: &NamedType) -> bool {
    match ty {
        NamedType::Scalar(s) => specified_scalar_types().iter().any(|t| t.ptr_eq(s)),
        _ => false,
    }
}

mod impl_int_scalar {
    use super::{CoercionResult, Value};

    fn in_range(n: f64) -> bool {
        n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX)
    }

    pub(super) fn serialize(v: &Value) -> CoercionResult {
        let num = match v {
            Value::Bool(b) => return Ok(Value::from(i32::from(*b))),
            Value::Number(n) => n.as_f64(),
            Value::String(s) if !s.is_empty() => s.parse::<f64>().ok(),
            _ => None,
        };
        match num {
            Some(n) if in_range(n) => Ok(Value::from(n as i32)),
            Some(n) if n.fract() == 0.0 => Err(format!(
                "Int cannot represent non 32-bit signed integer value: {v}",
            )),
            _ => Err(format!("Int cannot represent non-integer value: {v}")),
        }
    }

    pub(super) fn parse_value(v: &Value) -> CoercionResult {
        match v.as_i64() {
            Some(n) if i32::try_from(n).is_ok() => Ok(Value::from(n)),
            Some(_) => Err(format!(
                "Int cannot represent non 32-bit signed integer value: {v}",
            )),
            None => Err(format!("Int cannot represent non-integer value: {v}")),
        }
    }
}

mod impl_float_scalar {
    use super::{CoercionResult, Value};

    pub(super) fn serialize(v: &Value) -> CoercionResult {
        let num = match v {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => n.as_f64(),
            Value::String(s) if !s.is_empty() => s.parse::<f64>().ok(),
            _ => None,
        };
        num.filter(|n| n.is_finite())
            .map(Value::from)
            .ok_or_else(|| format!("Float cannot represent non numeric value: {v}"))
    }

    pub(super) fn parse_value(v: &Value) -> CoercionResult {
        v.as_f64()
            .filter(|n| n.is_finite())
            .map(Value::from)
            .ok_or_else(|| format!("Float cannot represent non numeric value: {v}"))
    }
}

mod impl_string_scalar {
    use super::{CoercionResult, Value};

    pub(super) fn serialize(v: &Value) -> CoercionResult {
        match v {
            Value::String(_) => Ok(v.clone()),
            Value::Bool(b) => Ok(Value::from(b.to_string())),
            Value::Number(n) => Ok(Value::from(n.to_string())),
            _ => Err(format!("String cannot represent value: {v}")),
        }
    }

    pub(super) fn parse_value(v: &Value) -> CoercionResult {
        match v {
            Value::String(_) => Ok(v.clone()),
            _ => Err(format!("String cannot represent a non string value: {v}")),
        }
    }
}

mod impl_boolean_scalar {
    use super::{CoercionResult, Value};

    pub(super) fn serialize(v: &Value) -> CoercionResult {
        match v {
            Value::Bool(_) => Ok(v.clone()),
            Value::Number(n) => n
                .as_f64()
                .map(|n| Value::from(n != 0.0))
                .ok_or_else(|| format!("Boolean cannot represent a non boolean value: {v}")),
            _ => Err(format!("Boolean cannot represent a non boolean value: {v}")),
        }
    }

    pub(super) fn parse_value(v: &Value) -> CoercionResult {
        match v {
            Value::Bool(_) => Ok(v.clone()),
            _ => Err(format!("Boolean cannot represent a non boolean value: {v}")),
        }
    }
}

mod impl_id_scalar {
    use super::{CoercionResult, Value};

    pub(super) fn serialize(v: &Value) -> CoercionResult {
        match v {
            Value::String(_) => Ok(v.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Value::from(n.to_string())),
            _ => Err(format!("ID cannot represent value: {v}")),
        }
    }

    pub(super) fn parse_value(v: &Value) -> CoercionResult {
        match v {
            Value::String(_) => Ok(v.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Value::from(n.to_string())),
            _ => Err(format!("ID cannot represent value: {v}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::schema::meta::{NamedType, ScalarType};

    use super::{is_specified_scalar_type, specified_scalar_types};

    #[test]
    fn are_singletons() {
        assert!(ScalarType::int().ptr_eq(&ScalarType::int()));
        assert!(!ScalarType::int().ptr_eq(&ScalarType::float()));
        assert!(is_specified_scalar_type(&NamedType::from(ScalarType::id())));
        assert_eq!(
            specified_scalar_types().map(|t| t.name().to_string()),
            ["String", "Int", "Float", "Boolean", "ID"],
        );
    }

    #[test]
    fn serializes_int() {
        let int = ScalarType::int();
        let int = int.coercion().unwrap();

        assert_eq!(int.serialize(&json!(1)), Ok(json!(1)));
        assert_eq!(int.serialize(&json!(1.0)), Ok(json!(1)));
        assert_eq!(int.serialize(&json!("-12")), Ok(json!(-12)));
        assert_eq!(int.serialize(&json!(true)), Ok(json!(1)));
        assert_eq!(
            int.serialize(&json!(1.5)),
            Err("Int cannot represent non-integer value: 1.5".into()),
        );
        assert_eq!(
            int.serialize(&json!(2_147_483_648_i64)),
            Err("Int cannot represent non 32-bit signed integer value: 2147483648".into()),
        );
        assert!(int.serialize(&json!(null)).is_err());
        assert!(int.parse_value(&json!("1")).is_err());
        assert_eq!(int.parse_literal(&json!(7)), Ok(json!(7)));
    }

    #[test]
    fn serializes_float() {
        let float = ScalarType::float();
        let float = float.coercion().unwrap();

        assert_eq!(float.serialize(&json!(1)), Ok(json!(1.0)));
        assert_eq!(float.serialize(&json!("-1.5")), Ok(json!(-1.5)));
        assert_eq!(float.serialize(&json!(false)), Ok(json!(0.0)));
        assert!(float.serialize(&json!("one")).is_err());
        assert!(float.parse_value(&json!(true)).is_err());
    }

    #[test]
    fn serializes_string_and_boolean() {
        let string = ScalarType::string();
        let string = string.coercion().unwrap();
        let boolean = ScalarType::boolean();
        let boolean = boolean.coercion().unwrap();

        assert_eq!(string.serialize(&json!(true)), Ok(json!("true")));
        assert_eq!(string.serialize(&json!(-1.5)), Ok(json!("-1.5")));
        assert!(string.serialize(&json!([])).is_err());
        assert!(string.parse_value(&json!(1)).is_err());

        assert_eq!(boolean.serialize(&json!(0)), Ok(json!(false)));
        assert!(boolean.serialize(&json!("true")).is_err());
        assert_eq!(boolean.parse_literal(&json!(true)), Ok(json!(true)));
    }

    #[test]
    fn serializes_id() {
        let id = ScalarType::id();
        let id = id.coercion().unwrap();

        assert_eq!(id.serialize(&json!("abc")), Ok(json!("abc")));
        assert_eq!(id.serialize(&json!(123)), Ok(json!("123")));
        assert!(id.serialize(&json!(1.5)).is_err());
        assert_eq!(id.parse_value(&json!(4)), Ok(json!("4")));
    }
}
