//! 認識するexiftoolのタグ名

/// レシピに関係するタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownTag {
    FilmMode,
    GrainEffectRoughness,
    GrainEffectSize,
    ColorChromeEffect,
    ColorChromeFxBlue,
    WhiteBalance,
    WhiteBalanceFineTune,
    DevelopmentDynamicRange,
    DRangePriority,
    DRangePriorityAuto,
    DRangePriorityFixed,
    HighlightTone,
    ShadowTone,
    Saturation,
    Sharpness,
    NoiseReduction,
    Clarity,
}

/// 中身に関わらず無視するタグ（キーワードのリストが入る）
pub const IGNORED_TAG: &str = "Subject";

/// タグ名 → KnownTag
///
/// "GrainEffect" は古いexiftoolでの粒状（強さ）の名前。
const TAG_NAMES: [(&str, KnownTag); 18] = [
    ("FilmMode", KnownTag::FilmMode),
    ("GrainEffectRoughness", KnownTag::GrainEffectRoughness),
    ("GrainEffect", KnownTag::GrainEffectRoughness),
    ("GrainEffectSize", KnownTag::GrainEffectSize),
    ("ColorChromeEffect", KnownTag::ColorChromeEffect),
    ("ColorChromeFXBlue", KnownTag::ColorChromeFxBlue),
    ("WhiteBalance", KnownTag::WhiteBalance),
    ("WhiteBalanceFineTune", KnownTag::WhiteBalanceFineTune),
    ("DevelopmentDynamicRange", KnownTag::DevelopmentDynamicRange),
    ("DRangePriority", KnownTag::DRangePriority),
    ("DRangePriorityAuto", KnownTag::DRangePriorityAuto),
    ("DRangePriorityFixed", KnownTag::DRangePriorityFixed),
    ("HighlightTone", KnownTag::HighlightTone),
    ("ShadowTone", KnownTag::ShadowTone),
    ("Saturation", KnownTag::Saturation),
    ("Sharpness", KnownTag::Sharpness),
    ("NoiseReduction", KnownTag::NoiseReduction),
    ("Clarity", KnownTag::Clarity),
];

impl KnownTag {
    pub fn from_name(name: &str) -> Option<Self> {
        TAG_NAMES
            .iter()
            .find(|(tag_name, _)| *tag_name == name)
            .map(|(_, tag)| *tag)
    }
}

/// exiftoolに要求するタグ名
pub fn tag_names() -> impl Iterator<Item = &'static str> {
    TAG_NAMES.iter().map(|(name, _)| *name)
}
