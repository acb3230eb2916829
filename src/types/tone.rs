use std::fmt;
use std::str::FromStr;

/// Selects the phrase substitution applied to a generated article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// "I think" becomes "It is believed".
    Formal,
    /// "In recent discussions" becomes a chatty opener.
    Casual,
    /// The article is left as summarized.
    #[default]
    Neutral,
}

impl Tone {
    /// The flag as it is spelled on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Tone {
    /// Any value other than "formal" or "casual" selects [`Tone::Neutral`].
    fn from(s: &str) -> Self {
        match s {
            "formal" => Tone::Formal,
            "casual" => Tone::Casual,
            _ => Tone::Neutral,
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "neutral" => Ok(Tone::Neutral),
            _ => Err(format!(
                "Invalid tone: {}. Valid options: formal, casual, neutral",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_conversion_defaults_to_neutral() {
        assert_eq!(Tone::from("formal"), Tone::Formal);
        assert_eq!(Tone::from("casual"), Tone::Casual);
        assert_eq!(Tone::from("pirate"), Tone::Neutral);
    }

    #[test]
    fn strict_parse_and_display() {
        assert_eq!("CASUAL".parse::<Tone>(), Ok(Tone::Casual));
        assert!("loud".parse::<Tone>().is_err());
        assert_eq!(Tone::Formal.to_string(), "formal");
    }
}
