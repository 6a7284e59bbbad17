use neo_crypto::PublicKey;
use neo_io::{IoError, IoResult, MemoryReader, NeoDecode, NeoEncode, NeoRead, NeoWrite};
use neo_primitives::UInt160;
use tracing::debug;

use crate::error::WitnessRuleError;

use super::{
    condition::TreeBudget, RuleLimits, WitnessCondition, WitnessConditionType, WitnessRule,
    WitnessRuleAction,
};

impl NeoEncode for WitnessCondition {
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_u8(self.condition_type().to_byte());
        match self {
            Self::Boolean(value) => writer.write_bool(*value),
            Self::Not(inner) => inner.neo_encode(writer),
            Self::And(items) | Self::Or(items) => neo_io::encode_array(items, writer),
            Self::ScriptHash(hash) | Self::CalledByContract(hash) => hash.neo_encode(writer),
            Self::Group(key) | Self::CalledByGroup(key) => key.neo_encode(writer),
            Self::CalledByEntry => {}
        }
    }

    fn size(&self) -> usize {
        WitnessCondition::size(self)
    }
}

impl NeoEncode for WitnessRule {
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_u8(self.action.to_byte());
        self.condition.neo_encode(writer);
    }

    fn size(&self) -> usize {
        WitnessRule::size(self)
    }
}

impl WitnessCondition {
    /// Reads one condition tree, enforcing `limits` while descending.
    pub fn read_from<R: NeoRead>(
        reader: &mut R,
        limits: &RuleLimits,
    ) -> Result<Self, WitnessRuleError> {
        let mut budget = TreeBudget::new(limits);
        read_condition(reader, &mut budget, 1)
    }
}

fn read_condition<R: NeoRead>(
    reader: &mut R,
    budget: &mut TreeBudget,
    depth: usize,
) -> Result<WitnessCondition, WitnessRuleError> {
    budget.enter(depth)?;

    let tag = reader.read_u8()?;
    let kind =
        WitnessConditionType::from_byte(tag).ok_or(WitnessRuleError::InvalidConditionType(tag))?;
    let condition = match kind {
        WitnessConditionType::Boolean => WitnessCondition::Boolean(reader.read_bool()?),
        WitnessConditionType::Not => {
            WitnessCondition::not(read_condition(reader, budget, depth + 1)?)
        }
        WitnessConditionType::And | WitnessConditionType::Or => {
            let count = reader.read_varint(u64::MAX)?;
            budget.check_subitems(kind, count)?;

            let mut items = Vec::with_capacity(count as usize);
            for _ in 0..count {
                items.push(read_condition(reader, budget, depth + 1)?);
            }
            if kind == WitnessConditionType::And {
                WitnessCondition::And(items)
            } else {
                WitnessCondition::Or(items)
            }
        }
        WitnessConditionType::ScriptHash => WitnessCondition::ScriptHash(UInt160::neo_decode(reader)?),
        WitnessConditionType::Group => WitnessCondition::Group(PublicKey::neo_decode(reader)?),
        WitnessConditionType::CalledByEntry => WitnessCondition::CalledByEntry,
        WitnessConditionType::CalledByContract => {
            WitnessCondition::CalledByContract(UInt160::neo_decode(reader)?)
        }
        WitnessConditionType::CalledByGroup => {
            WitnessCondition::CalledByGroup(PublicKey::neo_decode(reader)?)
        }
    };
    Ok(condition)
}

impl WitnessRule {
    /// Decodes a rule that must occupy the whole of `bytes`, using default limits.
    pub fn decode(bytes: &[u8]) -> Result<Self, WitnessRuleError> {
        Self::decode_with(bytes, &RuleLimits::default())
    }

    pub fn decode_with(bytes: &[u8], limits: &RuleLimits) -> Result<Self, WitnessRuleError> {
        let mut reader = MemoryReader::new(bytes);
        let rule = Self::read_from(&mut reader, limits).map_err(|err| {
            debug!(%err, len = bytes.len(), "rejected witness rule");
            err
        })?;
        if !reader.is_empty() {
            return Err(IoError::TrailingBytes(reader.remaining()).into());
        }
        Ok(rule)
    }

    pub fn read_from<R: NeoRead>(
        reader: &mut R,
        limits: &RuleLimits,
    ) -> Result<Self, WitnessRuleError> {
        let byte = reader.read_u8()?;
        let action =
            WitnessRuleAction::from_byte(byte).ok_or(WitnessRuleError::InvalidActionByte(byte))?;
        let condition = WitnessCondition::read_from(reader, limits)?;
        Ok(Self { action, condition })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_array()
    }
}

impl NeoDecode for WitnessRule {
    /// Uses [`RuleLimits::default`].
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        Self::read_from(reader, &RuleLimits::default()).map_err(|err| match err {
            WitnessRuleError::Io(err) => err,
            _ => IoError::InvalidValue("WitnessRule"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo_io::ErrorKind;

    #[test]
    fn test_boolean_rule_bytes() {
        let rule = WitnessRule::allow(WitnessCondition::Boolean(true));
        assert_eq!(rule.to_bytes(), hex!("010001"));
        assert_eq!(rule.size(), 3);
        assert_eq!(WitnessRule::decode(&hex!("010001")).unwrap(), rule);
    }

    #[test]
    fn test_composite_bytes() {
        let rule = WitnessRule::deny(WitnessCondition::And(vec![
            WitnessCondition::Boolean(false),
            WitnessCondition::CalledByEntry,
        ]));
        assert_eq!(rule.to_bytes(), hex!("00 02 02 0000 20"));
        assert_eq!(WitnessRule::decode(&rule.to_bytes()).unwrap(), rule);
    }

    #[test]
    fn test_script_hash_layout() {
        let hash = UInt160::from([0x5a; 20]);
        let rule = WitnessRule::allow(WitnessCondition::CalledByContract(hash));
        let bytes = rule.to_bytes();
        assert_eq!(bytes.len(), 22);
        assert_eq!(bytes[1], 0x28);
        assert_eq!(&bytes[2..], hash.as_bytes());
    }

    #[test]
    fn test_bad_tags() {
        let err = WitnessRule::decode(&hex!("020001")).unwrap_err();
        assert_eq!(err, WitnessRuleError::InvalidActionByte(2));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = WitnessRule::decode(&hex!("0104")).unwrap_err();
        assert_eq!(err, WitnessRuleError::InvalidConditionType(4));

        let err = WitnessRule::decode(&hex!("010002")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_truncated_and_trailing() {
        assert_eq!(WitnessRule::decode(&hex!("01")).unwrap_err().kind(), ErrorKind::Truncated);
        assert_eq!(WitnessRule::decode(&hex!("0118aabb")).unwrap_err().kind(), ErrorKind::Truncated);
        assert_eq!(
            WitnessRule::decode(&hex!("01000100")).unwrap_err(),
            WitnessRuleError::Io(IoError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_composite_count_limits() {
        let err = WitnessRule::decode(&hex!("010200")).unwrap_err();
        assert_eq!(err, WitnessRuleError::EmptyComposite(WitnessConditionType::And));
        assert_eq!(err.kind(), ErrorKind::MalformedRule);

        // count 17 is rejected before any child is read
        let err = WitnessRule::decode(&hex!("010311")).unwrap_err();
        assert!(matches!(err, WitnessRuleError::TooManySubitems { count: 17, .. }));

        let err = WitnessRule::decode(&hex!("0103ffffffffffffffffff")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRule);
    }

    #[test]
    fn test_group_must_be_on_curve() {
        let mut bytes = vec![0x01, 0x19, 0x02];
        bytes.extend_from_slice(&[0xff; 32]);
        let err = WitnessRule::decode(&bytes).unwrap_err();
        assert_eq!(err, WitnessRuleError::Io(IoError::InvalidValue("PublicKey")));
    }
}
