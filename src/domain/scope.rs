use serde::{Deserialize, Serialize};

/// An independent interactive flow with its own progress and voice state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Design,
    Enroll,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Design => "design",
            Scope::Enroll => "enroll",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-triggerable action; each one has its own enable/disable control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    DesignCreate,
    DesignSynthesize,
    EnrollCreate,
    EnrollSynthesize,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::DesignCreate => "design_create",
            Action::DesignSynthesize => "design_synthesize",
            Action::EnrollCreate => "enroll_create",
            Action::EnrollSynthesize => "enroll_synthesize",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Action::DesignCreate | Action::DesignSynthesize => Scope::Design,
            Action::EnrollCreate | Action::EnrollSynthesize => Scope::Enroll,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio outputs the flows can load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    DesignPreview,
    DesignSpeech,
    EnrollSpeech,
}

impl Player {
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::DesignPreview => "design-preview",
            Player::DesignSpeech => "design-speech",
            Player::EnrollSpeech => "enroll-speech",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
