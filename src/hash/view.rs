use std::fmt;

use serde::Serialize;

/// Initial layout for a loaded profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewMode {
    #[serde(rename = "time-ordered")]
    ChronoFlameChart,
    #[serde(rename = "left-heavy")]
    LeftHeavyFlameGraph,
    #[serde(rename = "sandwich")]
    SandwichView,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [
        ViewMode::ChronoFlameChart,
        ViewMode::LeftHeavyFlameGraph,
        ViewMode::SandwichView,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "time-ordered" => Some(Self::ChronoFlameChart),
            "left-heavy" => Some(Self::LeftHeavyFlameGraph),
            "sandwich" => Some(Self::SandwichView),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::ChronoFlameChart => "time-ordered",
            Self::LeftHeavyFlameGraph => "left-heavy",
            Self::SandwichView => "sandwich",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
