#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AxisDirection, CaseNumber, EulerCase, Frame};

impl Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.basis().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let basis = <[AxisDirection; 3]>::deserialize(deserializer)?;
        Frame::try_from(basis).map_err(serde::de::Error::custom)
    }
}

impl Serialize for CaseNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.index().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CaseNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CaseNumber::try_from(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl Serialize for EulerCase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.index().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EulerCase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        EulerCase::try_from(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
