use crate::shots::model::Location;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Names of the built-in visual worlds.
pub enum MoodProfileName {
    /// Neon-lit K-pop bedroom.
    KpopBedroom,
    /// Warm colonial Salta.
    SaltaColonial,
    /// The stylized 3D render look shared by the whole piece.
    Graphic3d,
}

impl MoodProfileName {
    /// Snake-case label.
    pub fn label(self) -> &'static str {
        match self {
            Self::KpopBedroom => "kpop_bedroom",
            Self::SaltaColonial => "salta_colonial",
            Self::Graphic3d => "graphic_3d",
        }
    }

    /// The static profile behind this name.
    pub fn profile(self) -> &'static MoodProfile {
        match self {
            Self::KpopBedroom => &KPOP_BEDROOM,
            Self::SaltaColonial => &SALTA_COLONIAL,
            Self::Graphic3d => &GRAPHIC_3D,
        }
    }
}

impl std::fmt::Display for MoodProfileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
/// A named bundle of palette, lighting and references for one visual world.
pub struct MoodProfile {
    /// Color tokens, most characteristic first.
    pub color_palette: &'static [&'static str],
    /// Lighting description.
    pub lighting_style: &'static str,
    /// Overall feel.
    pub ambiance: &'static str,
    /// Reference material.
    pub visual_references: &'static [&'static str],
}

static KPOP_BEDROOM: MoodProfile = MoodProfile {
    color_palette: &["#FF69B4", "#00FFFF", "#FFD700", "#FF1493", "#8A2BE2"],
    lighting_style: "Colorful neon lighting, LED strips, dynamic light",
    ambiance: "Energetic, pop, modern, urban",
    visual_references: &[
        "K-pop dance studios",
        "Colorful music videos",
        "Social-media teen bedrooms",
    ],
};

static SALTA_COLONIAL: MoodProfile = MoodProfile {
    color_palette: &["#D2691E", "#CD853F", "#F4A460", "#DEB887", "#BC8F8F"],
    lighting_style: "Golden light, warm shadows, strong contrast",
    ambiance: "Warm, authentic, familial",
    visual_references: &[
        "Colonial architecture",
        "Terracotta colors",
        "South American daylight",
    ],
};

static GRAPHIC_3D: MoodProfile = MoodProfile {
    color_palette: &["Saturated palettes", "Strong contrasts", "Pure colors"],
    lighting_style: "Dramatic 3D lighting with graphic shadow play",
    ambiance: "Stylized, modern, cinematic",
    visual_references: &[
        "Stylized Pixar look",
        "Spider-Verse",
        "Modern 3D animation",
    ],
};

/// Profile appended to every mood board as the shared render look.
pub const HOUSE_STYLE: MoodProfileName = MoodProfileName::Graphic3d;

/// Visual worlds a location belongs to, in priority order.
pub fn profiles_for(location: &Location) -> &'static [MoodProfileName] {
    match location {
        Location::SaltaBedroom | Location::SaltaBedroomDoor => &[
            MoodProfileName::KpopBedroom,
            MoodProfileName::SaltaColonial,
        ],
        Location::SaltaStreet => &[MoodProfileName::SaltaColonial],
        Location::DanceStudio => &[MoodProfileName::KpopBedroom],
        Location::Unknown(_) => &[],
    }
}

/// Hand-authored lines describing how two worlds play against each other.
pub struct CrossReference {
    /// First world of the pair.
    pub a: MoodProfileName,
    /// Second world of the pair.
    pub b: MoodProfileName,
    /// Ambiance lines contributed by the pair.
    pub ambiances: &'static [&'static str],
    /// Visual references contributed by the pair.
    pub visual_references: &'static [&'static str],
}

const CROSS_REFERENCES: &[CrossReference] = &[
    CrossReference {
        a: MoodProfileName::KpopBedroom,
        b: MoodProfileName::SaltaColonial,
        ambiances: &[
            "Cultural contrast: modern K-pop against Argentine tradition",
            "Youthful energy inside a warm family home",
        ],
        visual_references: &[
            "Teen bedroom covered in colorful K-pop posters",
            "Salta architecture in the background",
            "Pink and blue neon contrasting with warm tones",
        ],
    },
    CrossReference {
        a: MoodProfileName::KpopBedroom,
        b: MoodProfileName::Graphic3d,
        ambiances: &["Graphic 3D style with personality"],
        visual_references: &[
            "Modern Pixar and DreamWorks animation style",
            "Exaggerated facial expressions in the 3D animation tradition",
        ],
    },
];

/// Cross reference for an unordered pair, if one was authored.
pub fn cross_reference(a: MoodProfileName, b: MoodProfileName) -> Option<&'static CrossReference> {
    CROSS_REFERENCES
        .iter()
        .find(|x| (x.a == a && x.b == b) || (x.a == b && x.b == a))
}
