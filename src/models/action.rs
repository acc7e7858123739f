use std::fmt;

/// The two labels the shell writes. The store itself keeps `action` as
/// free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Sleep,
    Wake,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Sleep => "sleep",
            Action::Wake => "wake",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sleep" => Some(Action::Sleep),
            "wake" => Some(Action::Wake),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
