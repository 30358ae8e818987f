//! Output target vocabulary.
//!
//! This registry defines the closed set of target tags the generator accepts and, for each one, which renderer
//! variant produces it. Callers should use [`TargetLanguage`] for identity instead of hard-coding spellings.
//!
//! ## Notes
//! - Matching is **case-insensitive** (`Java`, `java` and `JAVA` all resolve).
//! - [`TargetLanguage::NoGeneration`] is part of the set so configuration files can say "no target"; it maps to no
//!   renderer and the generator rejects it.

/// Stable identifier for an output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    NoGeneration,
    Java,
    CSharp,
    JavaScript,
    Mql4,
    NinjaScript,
}

/// Which emission strategy produces a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererVariant {
    /// Walks the program tree and synthesizes every construct.
    Program,
    /// Substitutes configuration values into a fixed template.
    Template,
}

impl std::fmt::Display for RendererVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RendererVariant::Program => write!(f, "program"),
            RendererVariant::Template => write!(f, "template"),
        }
    }
}

/// Metadata for a target.
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub id: TargetLanguage,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    /// File extension of generated sources (without the dot).
    pub extension: Option<&'static str>,
    pub variant: Option<RendererVariant>,
    pub description: &'static str,
}

/// Registry of every target tag.
pub const TARGETS: &[TargetInfo] = &[
    TargetInfo {
        id: TargetLanguage::NoGeneration,
        canonical: "none",
        aliases: &["nogeneration"],
        extension: None,
        variant: None,
        description: "No code generation.",
    },
    TargetInfo {
        id: TargetLanguage::Java,
        canonical: "java",
        aliases: &[],
        extension: Some("java"),
        variant: Some(RendererVariant::Program),
        description: "Java class with a static main method.",
    },
    TargetInfo {
        id: TargetLanguage::CSharp,
        canonical: "csharp",
        aliases: &["cs", "c#"],
        extension: Some("cs"),
        variant: Some(RendererVariant::Program),
        description: "C# class with a static Main method.",
    },
    TargetInfo {
        id: TargetLanguage::JavaScript,
        canonical: "javascript",
        aliases: &["js"],
        extension: Some("js"),
        variant: Some(RendererVariant::Program),
        description: "Browser JavaScript object with an entry function.",
    },
    TargetInfo {
        id: TargetLanguage::Mql4,
        canonical: "mql4",
        aliases: &["mq4"],
        extension: Some("mq4"),
        variant: Some(RendererVariant::Template),
        description: "MetaTrader 4 indicator from a canned template.",
    },
    TargetInfo {
        id: TargetLanguage::NinjaScript,
        canonical: "ninjascript",
        aliases: &["ninja"],
        extension: Some("cs"),
        variant: Some(RendererVariant::Template),
        description: "NinjaTrader indicator from a canned template.",
    },
];

/// Resolve a spelling (canonical or alias) to a target.
pub fn from_str(name: &str) -> Option<TargetLanguage> {
    let lowered = name.to_ascii_lowercase();
    TARGETS
        .iter()
        .find(|t| t.canonical == lowered || t.aliases.contains(&lowered.as_str()))
        .map(|t| t.id)
}

/// Canonical spelling of a target.
pub fn as_str(id: TargetLanguage) -> &'static str {
    info_for(id).canonical
}

/// Registry entry of a target.
pub fn info_for(id: TargetLanguage) -> &'static TargetInfo {
    match id {
        TargetLanguage::NoGeneration => &TARGETS[0],
        TargetLanguage::Java => &TARGETS[1],
        TargetLanguage::CSharp => &TARGETS[2],
        TargetLanguage::JavaScript => &TARGETS[3],
        TargetLanguage::Mql4 => &TARGETS[4],
        TargetLanguage::NinjaScript => &TARGETS[5],
    }
}

impl TargetLanguage {
    /// Renderer variant producing this target, `None` for [`TargetLanguage::NoGeneration`].
    pub fn variant(self) -> Option<RendererVariant> {
        info_for(self).variant
    }

    /// File extension for generated sources.
    pub fn extension(self) -> Option<&'static str> {
        info_for(self).extension
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", as_str(*self))
    }
}
