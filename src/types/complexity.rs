use std::fmt;
use std::str::FromStr;

/// Selects the style of an MCQ explanation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Complexity {
    /// Short explanation calling the answer a simple response.
    Easy,
    /// Long explanation praising the answer's detail.
    Hard,
    /// Plain "the correct answer is" explanation.
    #[default]
    Normal,
}

impl Complexity {
    /// The flag as it is spelled on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Hard => "hard",
            Complexity::Normal => "normal",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Complexity {
    /// Any value other than "easy" or "hard" selects [`Complexity::Normal`].
    fn from(s: &str) -> Self {
        match s {
            "easy" => Complexity::Easy,
            "hard" => Complexity::Hard,
            _ => Complexity::Normal,
        }
    }
}

impl FromStr for Complexity {
    type Err = String;

    /// Strict parse used for command-line validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Complexity::Easy),
            "hard" => Ok(Complexity::Hard),
            "normal" => Ok(Complexity::Normal),
            _ => Err(format!(
                "Invalid complexity: {}. Valid options: easy, hard, normal",
                s
            )),
        }
    }
}
