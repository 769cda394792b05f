use crate::Error;

/// The enumerated validity periods a certificate can be issued with.  Serializes as the number
/// of days (e.g. `365`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValidityPeriod {
    #[cfg_attr(feature = "clap", value(name = "30"))]
    Days30,
    #[cfg_attr(feature = "clap", value(name = "90"))]
    Days90,
    #[default]
    #[cfg_attr(feature = "clap", value(name = "365"))]
    OneYear,
    #[cfg_attr(feature = "clap", value(name = "730"))]
    TwoYears,
    #[cfg_attr(feature = "clap", value(name = "1095"))]
    ThreeYears,
}

impl ValidityPeriod {
    /// All the variants, in increasing order of duration.
    pub const VARIANTS: [ValidityPeriod; 5] = [
        ValidityPeriod::Days30,
        ValidityPeriod::Days90,
        ValidityPeriod::OneYear,
        ValidityPeriod::TwoYears,
        ValidityPeriod::ThreeYears,
    ];
    pub const fn days(self) -> u32 {
        match self {
            ValidityPeriod::Days30 => 30,
            ValidityPeriod::Days90 => 90,
            ValidityPeriod::OneYear => 365,
            ValidityPeriod::TwoYears => 730,
            ValidityPeriod::ThreeYears => 1095,
        }
    }
    pub fn duration(self) -> time::Duration {
        time::Duration::days(self.days() as i64)
    }
    /// Human-readable label, e.g. "1 Year".
    pub fn label(self) -> &'static str {
        match self {
            ValidityPeriod::Days30 => "30 Days",
            ValidityPeriod::Days90 => "90 Days",
            ValidityPeriod::OneYear => "1 Year",
            ValidityPeriod::TwoYears => "2 Years",
            ValidityPeriod::ThreeYears => "3 Years",
        }
    }
}

impl std::fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl TryFrom<u32> for ValidityPeriod {
    type Error = Error;
    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::VARIANTS
            .into_iter()
            .find(|validity_period| validity_period.days() == days)
            .ok_or(Error::Invalid(
                "validity period must be one of 30, 90, 365, 730, 1095 days",
            ))
    }
}

impl std::str::FromStr for ValidityPeriod {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::Invalid("validity period must be a number of days"))?;
        Self::try_from(days)
    }
}

impl serde::Serialize for ValidityPeriod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.days())
    }
}

impl<'de> serde::Deserialize<'de> for ValidityPeriod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        let days = u32::deserialize(deserializer)?;
        Self::try_from(days).map_err(D::Error::custom)
    }
}
