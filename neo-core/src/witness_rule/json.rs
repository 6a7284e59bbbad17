use neo_crypto::PublicKey;
use neo_primitives::UInt160;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::error::WitnessRuleError;

use super::{
    condition::TreeBudget, RuleLimits, WitnessCondition, WitnessConditionType, WitnessRule,
};

impl WitnessCondition {
    pub fn to_json(&self) -> Value {
        let kind = self.condition_type().name();
        match self {
            Self::Boolean(value) => json!({ "type": kind, "expression": value }),
            Self::Not(inner) => json!({ "type": kind, "expression": inner.to_json() }),
            Self::And(items) | Self::Or(items) => json!({
                "type": kind,
                "expressions": items.iter().map(Self::to_json).collect::<Vec<_>>(),
            }),
            Self::ScriptHash(hash) | Self::CalledByContract(hash) => {
                json!({ "type": kind, "hash": hash.to_string() })
            }
            Self::Group(key) | Self::CalledByGroup(key) => {
                json!({ "type": kind, "group": key.to_hex() })
            }
            Self::CalledByEntry => json!({ "type": kind }),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, WitnessRuleError> {
        Self::from_json_with(value, &RuleLimits::default())
    }

    pub fn from_json_with(value: &Value, limits: &RuleLimits) -> Result<Self, WitnessRuleError> {
        let mut budget = TreeBudget::new(limits);
        parse_condition(value, &mut budget, 1)
    }
}

fn parse_condition(
    value: &Value,
    budget: &mut TreeBudget,
    depth: usize,
) -> Result<WitnessCondition, WitnessRuleError> {
    budget.enter(depth)?;

    let object = value
        .as_object()
        .ok_or_else(|| WitnessRuleError::invalid_field("condition", "expected an object"))?;
    let name = string_field(object, "type")?;
    let kind = WitnessConditionType::from_name(name)
        .ok_or_else(|| WitnessRuleError::UnknownConditionType(name.to_string()))?;

    let condition = match kind {
        WitnessConditionType::Boolean => WitnessCondition::Boolean(boolean_field(object)?),
        WitnessConditionType::Not => {
            let inner = field(object, "expression")?;
            WitnessCondition::not(parse_condition(inner, budget, depth + 1)?)
        }
        WitnessConditionType::And | WitnessConditionType::Or => {
            let items = field(object, "expressions")?
                .as_array()
                .ok_or_else(|| WitnessRuleError::invalid_field("expressions", "expected an array"))?;
            budget.check_subitems(kind, items.len() as u64)?;

            let items = items
                .iter()
                .map(|item| parse_condition(item, budget, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            if kind == WitnessConditionType::And {
                WitnessCondition::And(items)
            } else {
                WitnessCondition::Or(items)
            }
        }
        WitnessConditionType::ScriptHash => WitnessCondition::ScriptHash(hash_field(object)?),
        WitnessConditionType::Group => WitnessCondition::Group(group_field(object)?),
        WitnessConditionType::CalledByEntry => WitnessCondition::CalledByEntry,
        WitnessConditionType::CalledByContract => {
            WitnessCondition::CalledByContract(hash_field(object)?)
        }
        WitnessConditionType::CalledByGroup => WitnessCondition::CalledByGroup(group_field(object)?),
    };
    Ok(condition)
}

fn field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, WitnessRuleError> {
    object.get(name).ok_or(WitnessRuleError::MissingField(name))
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, WitnessRuleError> {
    field(object, name)?
        .as_str()
        .ok_or_else(|| WitnessRuleError::invalid_field(name, "expected a string"))
}

// Older nodes wrote the expression as a string.
fn boolean_field(object: &Map<String, Value>) -> Result<bool, WitnessRuleError> {
    match field(object, "expression")? {
        Value::Bool(value) => Ok(*value),
        Value::String(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(WitnessRuleError::invalid_field(
            "expression",
            format!("expected a boolean, got {other}"),
        )),
    }
}

fn hash_field(object: &Map<String, Value>) -> Result<UInt160, WitnessRuleError> {
    let text = string_field(object, "hash")?;
    UInt160::parse(text).map_err(|err| WitnessRuleError::invalid_field("hash", err.to_string()))
}

fn group_field(object: &Map<String, Value>) -> Result<PublicKey, WitnessRuleError> {
    let text = string_field(object, "group")?;
    let text = text.strip_prefix("0x").unwrap_or(text);
    text.parse::<PublicKey>()
        .map_err(|err| WitnessRuleError::invalid_field("group", err.to_string()))
}

impl WitnessRule {
    /// `{"action": "allow" | "deny", "condition": {...}}`.
    pub fn to_json(&self) -> Value {
        json!({
            "action": self.action.as_str(),
            "condition": self.condition.to_json(),
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, WitnessRuleError> {
        Self::from_json_with(value, &RuleLimits::default())
    }

    pub fn from_json_with(value: &Value, limits: &RuleLimits) -> Result<Self, WitnessRuleError> {
        let object = value
            .as_object()
            .ok_or_else(|| WitnessRuleError::invalid_field("rule", "expected an object"))?;
        let action = string_field(object, "action")?.parse()?;
        let condition = WitnessCondition::from_json_with(field(object, "condition")?, limits)?;
        Ok(Self { action, condition })
    }
}

impl Serialize for WitnessCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WitnessCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        WitnessCondition::from_json(&value).map_err(de::Error::custom)
    }
}

impl Serialize for WitnessRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WitnessRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        WitnessRule::from_json(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::witness_rule::WitnessRuleAction;
    use neo_io::ErrorKind;

    const GROUP: &str = "03b209fd4f53a7170ea4444e0cb0a6bb6a53c2bd016926989cf85f9b0fba17a70c";

    #[test]
    fn test_boolean_condition_json() {
        let condition = WitnessCondition::Boolean(true);
        let json = condition.to_json();
        assert_eq!(json, json!({ "type": "Boolean", "expression": true }));
        assert_eq!(WitnessCondition::from_json(&json).unwrap(), condition);

        let legacy = json!({ "type": "Boolean", "expression": "False" });
        assert_eq!(
            WitnessCondition::from_json(&legacy).unwrap(),
            WitnessCondition::Boolean(false)
        );
    }

    #[test]
    fn test_group_condition_json() {
        let key: PublicKey = GROUP.parse().unwrap();
        let condition = WitnessCondition::CalledByGroup(key);
        let json = condition.to_json();
        assert_eq!(json["type"], "CalledByGroup");
        assert_eq!(json["group"], GROUP);
        assert_eq!(WitnessCondition::from_json(&json).unwrap(), condition);
    }

    #[test]
    fn test_action_is_case_insensitive() {
        for action in ["allow", "Allow", "ALLOW"] {
            let rule = WitnessRule::from_json(&json!({
                "action": action,
                "condition": { "type": "CalledByEntry" }
            }))
            .unwrap();
            assert_eq!(rule.action, WitnessRuleAction::Allow);
        }
        assert_eq!(
            WitnessRule::allow(WitnessCondition::CalledByEntry).to_json()["action"],
            "allow"
        );
    }

    #[test]
    fn test_named_errors() {
        let err = WitnessCondition::from_json(&json!({ "type": "Maybe" })).unwrap_err();
        assert_eq!(err, WitnessRuleError::UnknownConditionType("Maybe".into()));
        assert_eq!(err.kind(), ErrorKind::MalformedRule);

        let err = WitnessCondition::from_json(&json!({ "expression": true })).unwrap_err();
        assert_eq!(err, WitnessRuleError::MissingField("type"));

        let err = WitnessCondition::from_json(&json!({ "type": "ScriptHash" })).unwrap_err();
        assert_eq!(err, WitnessRuleError::MissingField("hash"));

        let err = WitnessCondition::from_json(&json!({ "type": "Not", "expression": 5 })).unwrap_err();
        assert!(matches!(err, WitnessRuleError::InvalidField { field: "condition", .. }));

        let err = WitnessCondition::from_json(&json!({ "type": "Group", "group": "02ff" })).unwrap_err();
        assert!(matches!(err, WitnessRuleError::InvalidField { field: "group", .. }));

        let err = WitnessRule::from_json(&json!({
            "action": "maybe",
            "condition": { "type": "CalledByEntry" }
        }))
        .unwrap_err();
        assert_eq!(err, WitnessRuleError::InvalidAction("maybe".into()));
    }

    #[test]
    fn test_json_depth_limit() {
        let mut value = json!({ "type": "Boolean", "expression": true });
        for _ in 0..3 {
            value = json!({ "type": "Not", "expression": value });
        }
        assert!(WitnessCondition::from_json(&value).is_ok());
        assert_eq!(
            WitnessCondition::from_json_with(&value, &RuleLimits::consensus()).unwrap_err(),
            WitnessRuleError::DepthExceeded { max: 3 }
        );
    }
}
