use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// What stands at the focus distance. Silhouettes are in inches, standing on the focus line
/// (x = 0), y = 0 is the top of the scene.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    #[default]
    Human,
    Dog,
}

impl Subject {
    pub const ALL: [Self; 2] = [Self::Human, Self::Dog];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Dog => "Dog",
        }
    }

    /// Height of the scene, which is also the height of the drawing.
    pub const fn height(self) -> f64 {
        match self {
            Self::Human => 72.0,
            Self::Dog => 30.0,
        }
    }

    pub const fn silhouette(self) -> &'static str {
        match self {
            Self::Human => concat!(
                "M-5,5 a5,5 0 1,0 10,0 a5,5 0 1,0 -10,0 Z ",
                "M-8,11 L8,11 L10,40 L6,40 L5,72 L1,72 L0,44 L-1,72 L-5,72 L-6,40 L-10,40 Z",
            ),
            Self::Dog => concat!(
                "M-18,6 L-12,6 L-10,12 L12,12 L16,8 L17,12 L14,16 L14,30 L10,30 ",
                "L10,20 L-8,20 L-8,30 L-12,30 L-12,16 L-18,12 Z",
            ),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subject {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|subject| subject.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SetupError::UnknownSubject(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("dog".parse(), Ok(Subject::Dog));
        assert_eq!("Human".parse(), Ok(Subject::Human));
        assert_eq!(
            "cat".parse::<Subject>(),
            Err(SetupError::UnknownSubject("cat".to_owned()))
        );
    }

    #[test]
    fn silhouettes_are_closed() {
        for subject in Subject::ALL {
            let path = subject.silhouette();
            assert!(path.starts_with('M'));
            assert!(path.trim_end().ends_with('Z'));
        }
    }
}
