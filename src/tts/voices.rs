//! Voice catalog
//!
//! Static registries of the voices each provider accepts.

use rand::seq::SliceRandom;

/// A provider voice identifier with a human-readable label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub id: &'static str,
    pub label: &'static str,
}

const fn voice(id: &'static str, label: &'static str) -> Voice {
    Voice { id, label }
}

/// Non-English voices sharing a region
#[derive(Debug, Clone, Copy)]
pub struct VoiceGroup {
    pub region: &'static str,
    pub voices: &'static [Voice],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCategory {
    Themed,
    English,
    NonEnglish,
    Vocal,
}

impl VoiceCategory {
    pub const ALL: [VoiceCategory; 4] = [
        VoiceCategory::Themed,
        VoiceCategory::English,
        VoiceCategory::NonEnglish,
        VoiceCategory::Vocal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VoiceCategory::Themed => "themed",
            VoiceCategory::English => "english",
            VoiceCategory::NonEnglish => "non-english",
            VoiceCategory::Vocal => "vocal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

pub const THEMED_VOICES: &[Voice] = &[
    voice("en_us_ghostface", "Ghost Face"),
    voice("en_us_chewbacca", "Chewbacca"),
    voice("en_us_c3po", "C3PO"),
    voice("en_us_stitch", "Stitch"),
    voice("en_us_stormtrooper", "Stormtrooper"),
    voice("en_us_rocket", "Rocket"),
    voice("en_female_madam_leota", "Madame Leota"),
    voice("en_male_ghosthost", "Ghost Host"),
    voice("en_male_pirate", "Pirate"),
];

pub const ENGLISH_VOICES: &[Voice] = &[
    voice("en_au_001", "English AU - Female"),
    voice("en_au_002", "English AU - Male"),
    voice("en_uk_001", "English UK - Male 1"),
    voice("en_uk_003", "English UK - Male 2"),
    voice("en_us_001", "English US - Female (Int. 1)"),
    voice("en_us_002", "English US - Female (Int. 2)"),
    voice("en_us_006", "English US - Male 1"),
    voice("en_us_007", "English US - Male 2"),
    voice("en_us_009", "English US - Male 3"),
    voice("en_us_010", "English US - Male 4"),
    voice("en_male_narration", "Narrator"),
    voice("en_male_funny", "Funny"),
    voice("en_female_emotional", "Peaceful"),
    voice("en_male_cody", "Serious"),
];

pub const NON_ENGLISH_VOICES: &[VoiceGroup] = &[
    VoiceGroup {
        region: "Western European",
        voices: &[
            voice("fr_001", "French - Male 1"),
            voice("fr_002", "French - Male 2"),
            voice("de_001", "German - Female"),
            voice("de_002", "German - Male"),
            voice("es_002", "Spanish - Male"),
            voice("it_male_m18", "Italian - Male"),
        ],
    },
    VoiceGroup {
        region: "South American",
        voices: &[
            voice("es_mx_002", "Spanish MX - Male"),
            voice("br_001", "Portuguese BR - Female 1"),
            voice("br_003", "Portuguese BR - Female 2"),
            voice("br_004", "Portuguese BR - Female 3"),
            voice("br_005", "Portuguese BR - Male"),
        ],
    },
    VoiceGroup {
        region: "Asian",
        voices: &[
            voice("id_001", "Indonesian - Female"),
            voice("jp_001", "Japanese - Female 1"),
            voice("jp_003", "Japanese - Female 2"),
            voice("jp_005", "Japanese - Female 3"),
            voice("jp_006", "Japanese - Male"),
            voice("kr_002", "Korean - Male 1"),
            voice("kr_003", "Korean - Female"),
            voice("kr_004", "Korean - Male 2"),
        ],
    },
];

pub const VOCAL_VOICES: &[Voice] = &[
    voice("en_female_f08_salut_damour", "Alto"),
    voice("en_male_m03_lobby", "Tenor"),
    voice("en_male_m03_sunshine_soon", "Sunshine Soon"),
    voice("en_female_f08_warmy_breeze", "Warmy Breeze"),
    voice("en_female_ht_f08_glorious", "Glorious"),
    voice("en_male_sing_funny_it_goes_up", "It Goes Up"),
    voice("en_male_m2_xhxs_m03_silly", "Chipmunk"),
    voice("en_female_ht_f08_wonderful_world", "Dramatic"),
];

/// Voices accepted by the OpenAI speech endpoint
pub const OPENAI_VOICES: &[&str] = &["alloy", "echo", "fable", "onyx", "nova", "shimmer"];

/// Every TikTok voice in a category
pub fn voices_in(category: VoiceCategory) -> Vec<Voice> {
    match category {
        VoiceCategory::Themed => THEMED_VOICES.to_vec(),
        VoiceCategory::English => ENGLISH_VOICES.to_vec(),
        VoiceCategory::NonEnglish => NON_ENGLISH_VOICES
            .iter()
            .flat_map(|g| g.voices.iter().copied())
            .collect(),
        VoiceCategory::Vocal => VOCAL_VOICES.to_vec(),
    }
}

/// All TikTok voices with their category
pub fn tiktok_voices() -> impl Iterator<Item = (VoiceCategory, Voice)> {
    VoiceCategory::ALL
        .into_iter()
        .flat_map(|c| voices_in(c).into_iter().map(move |v| (c, v)))
}

pub fn category_of(id: &str) -> Option<VoiceCategory> {
    tiktok_voices().find(|(_, v)| v.id == id).map(|(c, _)| c)
}

pub fn is_tiktok_voice(id: &str) -> bool {
    category_of(id).is_some()
}

pub fn is_openai_voice(id: &str) -> bool {
    OPENAI_VOICES.contains(&id)
}

/// Uniform pick from the general English set
pub fn random_english_voice() -> &'static str {
    let mut rng = rand::thread_rng();
    ENGLISH_VOICES
        .choose(&mut rng)
        .map(|v| v.id)
        .unwrap_or(ENGLISH_VOICES[0].id)
}
