use std::{fmt::{self, Formatter, Display}, str::FromStr, convert::Infallible};

/// Sex of an individual, following PLINK's `.fam` coding: `1` = male, `2` = female, anything else = unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown
}

impl FromStr for Sex {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1" => Self::Male,
            "2" => Self::Female,
            _   => Self::Unknown,
        })
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Female  => "female",
            Self::Male    => "male",
            Self::Unknown => "unknown"
        })
    }
}
