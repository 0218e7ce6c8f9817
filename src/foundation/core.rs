#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
/// Presentation position of a shot; always `>= 1` once registered.
pub struct ShotIndex(pub u32);

impl std::fmt::Display for ShotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Ordinal difficulty of executing a camera setup.
pub enum Difficulty {
    /// Locked-off or handheld setups any crew can shoot.
    Easy,
    /// Needs rehearsal or a dedicated rig.
    Medium,
    /// Needs precise blocking, mirrors, or specialty gear.
    Hard,
}

impl Difficulty {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
