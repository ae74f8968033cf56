//! Responsive breakpoints
//!
//! Mirrors the stylesheet's screen table so the controller and the utility classes agree
//! on where "mobile" ends.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Sm, Screen::Md, Screen::Lg, Screen::Xl];

    /// Minimum viewport width in logical pixels
    pub fn min_width(&self) -> u32 {
        match self {
            Screen::Sm => 480,
            Screen::Md => 768,
            Screen::Lg => 1020,
            Screen::Xl => 1440,
        }
    }

    /// True when a viewport of `width` pixels is at or above this screen
    pub fn contains(&self, width: u32) -> bool {
        width >= self.min_width()
    }

    /// Largest screen a viewport of `width` pixels reaches, `None` below `sm`
    pub fn for_width(width: u32) -> Option<Screen> {
        Self::ALL.into_iter().rev().find(|s| s.contains(width))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Sm => "sm",
            Screen::Md => "md",
            Screen::Lg => "lg",
            Screen::Xl => "xl",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sm" => Ok(Screen::Sm),
            "md" => Ok(Screen::Md),
            "lg" => Ok(Screen::Lg),
            "xl" => Ok(Screen::Xl),
            _ => Err(format!("Unknown screen: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md_boundary() {
        assert!(!Screen::Md.contains(767));
        assert!(Screen::Md.contains(768));
        assert!(Screen::Md.contains(900));
    }

    #[test]
    fn test_for_width() {
        assert_eq!(Screen::for_width(320), None);
        assert_eq!(Screen::for_width(500), Some(Screen::Sm));
        assert_eq!(Screen::for_width(768), Some(Screen::Md));
        assert_eq!(Screen::for_width(1019), Some(Screen::Md));
        assert_eq!(Screen::for_width(2560), Some(Screen::Xl));
    }

    #[test]
    fn test_parse() {
        assert_eq!("LG".parse::<Screen>().unwrap(), Screen::Lg);
        assert!("2xl".parse::<Screen>().is_err());
    }
}
