use crate::Error;

/// Advisory key size label.  No key of this size is ever generated.  Serializes as the number of
/// bits (e.g. `2048`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KeySize {
    #[cfg_attr(feature = "clap", value(name = "1024"))]
    Bits1024,
    #[default]
    #[cfg_attr(feature = "clap", value(name = "2048"))]
    Bits2048,
    #[cfg_attr(feature = "clap", value(name = "4096"))]
    Bits4096,
}

impl KeySize {
    pub const VARIANTS: [KeySize; 3] = [KeySize::Bits1024, KeySize::Bits2048, KeySize::Bits4096];
    pub const fn bits(self) -> u32 {
        match self {
            KeySize::Bits1024 => 1024,
            KeySize::Bits2048 => 2048,
            KeySize::Bits4096 => 4096,
        }
    }
}

impl std::fmt::Display for KeySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u32> for KeySize {
    type Error = Error;
    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            1024 => Ok(KeySize::Bits1024),
            2048 => Ok(KeySize::Bits2048),
            4096 => Ok(KeySize::Bits4096),
            _ => Err(Error::Invalid("key size must be one of 1024, 2048, 4096 bits")),
        }
    }
}

impl std::str::FromStr for KeySize {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::Invalid("key size must be a number of bits"))?;
        Self::try_from(bits)
    }
}

impl serde::Serialize for KeySize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> serde::Deserialize<'de> for KeySize {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        let bits = u32::deserialize(deserializer)?;
        Self::try_from(bits).map_err(D::Error::custom)
    }
}

/// Key algorithm label.  There is exactly one, and it is only a label.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum KeyType {
    #[default]
    #[serde(rename = "RSA")]
    Rsa,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Rsa => "RSA",
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
