//! 公共类型（对外暴露）
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// 单条规则记录：只关心 `rule` 字段，其余键忽略
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleRecord {
    #[serde(deserialize_with = "string_only")]
    pub rule: String,
}

/// 只接受 YAML 字符串；数字、布尔、null、序列等一律报错，而不是被转成文本
fn string_only<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Err(D::Error::invalid_type(Unexpected::Unit, &"a string")),
        Value::Bool(b) => Err(D::Error::invalid_type(Unexpected::Bool(b), &"a string")),
        Value::Number(_) => Err(D::Error::invalid_type(Unexpected::Other("number"), &"a string")),
        Value::Sequence(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a string")),
        Value::Mapping(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a string")),
        Value::Tagged(_) => Err(D::Error::invalid_type(Unexpected::Other("tagged value"), &"a string")),
    }
}
