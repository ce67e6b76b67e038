use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of entity a category taxonomy applies to.
///
/// Festivals and groups are classified with distinct tables, so the same slug
/// may land in different groups depending on the subject type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Festivals,
    Groups,
}

impl SubjectType {
    pub const ALL: [SubjectType; 2] = [SubjectType::Festivals, SubjectType::Groups];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Festivals => "festivals",
            Self::Groups => "groups",
        }
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid subject type '{0}', expected 'festivals' or 'groups'")]
pub struct InvalidSubjectType(pub String);

impl FromStr for SubjectType {
    type Err = InvalidSubjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "festivals" => Ok(Self::Festivals),
            "groups" => Ok(Self::Groups),
            _ => Err(InvalidSubjectType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_subject_type() {
        assert_eq!("festivals".parse::<SubjectType>(), Ok(SubjectType::Festivals));
        assert_eq!("groups".parse::<SubjectType>(), Ok(SubjectType::Groups));
    }

    #[test]
    fn test_parse_invalid_subject_type() {
        assert_eq!(
            "invalid".parse::<SubjectType>(),
            Err(InvalidSubjectType("invalid".to_string()))
        );

        // Tags are matched exactly.
        assert!("Festivals".parse::<SubjectType>().is_err());
        assert!("festival".parse::<SubjectType>().is_err());
    }

    #[test]
    fn test_round_trips_through_display() {
        for subject in SubjectType::ALL {
            assert_eq!(subject.to_string().parse::<SubjectType>(), Ok(subject));
        }
    }

    #[test]
    fn test_invalid_subject_type_message() {
        assert_eq!(
            InvalidSubjectType("venues".to_string()).to_string(),
            "invalid subject type 'venues', expected 'festivals' or 'groups'"
        );
    }
}
