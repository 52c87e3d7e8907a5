//! Archetype definitions - static faction data.
//!
//! An archetype carries the visual identity copied onto every card it
//! produces and the `stat_bias` steering how a cost budget is split.

use serde::{Deserialize, Serialize};

/// Immutable archetype record.
///
/// ## Example
///
/// ```
/// use archetype_ccg::cards::Archetype;
///
/// let golem = Archetype::new("golem", "Golem", 0.3)
///     .with_description("Slow stone giants")
///     .with_colors("#777777", "#555555", "#999999");
///
/// assert_eq!(golem.attack_share(), 0.3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    /// Unique registry key, also the `type` label of its cards.
    pub key: String,

    /// Display name, prefix of generated card names.
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub icon: String,

    /// Primary color.
    #[serde(default)]
    pub color: String,

    /// Color used when the card is on the board.
    #[serde(default)]
    pub unit_color: String,

    /// Color used when the card is highlighted.
    #[serde(default)]
    pub highlight_color: String,

    /// Fraction of the stat budget allocated to attack.
    pub stat_bias: f64,
}

impl Archetype {
    /// Create an archetype with empty visual fields.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, stat_bias: f64) -> Self {
        let key = key.into();
        Self {
            icon: format!("/images/{key}.png"),
            key,
            name: name.into(),
            description: String::new(),
            color: String::new(),
            unit_color: String::new(),
            highlight_color: String::new(),
            stat_bias,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set primary, unit and highlight colors.
    #[must_use]
    pub fn with_colors(
        mut self,
        color: impl Into<String>,
        unit_color: impl Into<String>,
        highlight_color: impl Into<String>,
    ) -> Self {
        self.color = color.into();
        self.unit_color = unit_color.into();
        self.highlight_color = highlight_color.into();
        self
    }

    /// `stat_bias` clamped to `[0, 1]`.
    #[must_use]
    pub fn attack_share(&self) -> f64 {
        if self.stat_bias.is_nan() {
            return 0.5;
        }
        self.stat_bias.clamp(0.0, 1.0)
    }
}

/// The shipped archetypes, in listing order.
#[must_use]
pub fn builtin_archetypes() -> Vec<Archetype> {
    vec![
        Archetype::new("orc", "Orc", 0.55)
            .with_description("Brutal warriors that overwhelm with raw strength")
            .with_colors("#006400", "#228B22", "#7CFC00"),
        Archetype::new("minotaur", "Minotaur", 0.45)
            .with_description("Hulking beasts that shrug off punishment")
            .with_colors("#8B4513", "#A0522D", "#DEB887"),
        Archetype::new("human", "Human", 0.5)
            .with_description("Disciplined soldiers with balanced stats")
            .with_colors("#00008B", "#4169E1", "#87CEFA"),
        Archetype::new("demon", "Demon", 0.65)
            .with_description("Fiends that trade their lives for damage")
            .with_colors("#8B0000", "#B22222", "#FF6347"),
        Archetype::new("ninja", "Ninja", 0.6)
            .with_description("Precise assassins that strike first")
            .with_colors("#000000", "#2F4F4F", "#A9A9A9"),
        Archetype::new("runner", "Runner", 0.6)
            .with_description("Swift raiders built for early pressure")
            .with_colors("#FFD700", "#DAA520", "#FFFACD"),
        Archetype::new("druid", "Druid", 0.35)
            .with_description("Nature keepers that outlast their foes")
            .with_colors("#4B0082", "#6A5ACD", "#D8BFD8"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let arch = Archetype::new("golem", "Golem", 0.3)
            .with_description("Stone")
            .with_icon("/images/golem.svg")
            .with_colors("#1", "#2", "#3");

        assert_eq!(arch.key, "golem");
        assert_eq!(arch.icon, "/images/golem.svg");
        assert_eq!(arch.unit_color, "#2");
        assert_eq!(arch.highlight_color, "#3");
    }

    #[test]
    fn test_attack_share_clamped() {
        assert_eq!(Archetype::new("a", "A", 1.5).attack_share(), 1.0);
        assert_eq!(Archetype::new("a", "A", -0.5).attack_share(), 0.0);
        assert_eq!(Archetype::new("a", "A", f64::NAN).attack_share(), 0.5);
    }

    #[test]
    fn test_builtin_archetypes_fully_populated() {
        let all = builtin_archetypes();
        assert_eq!(all.len(), 7);
        for arch in &all {
            assert!(!arch.name.is_empty());
            assert!(!arch.description.is_empty());
            assert!(!arch.color.is_empty());
            assert!(!arch.unit_color.is_empty());
            assert!(!arch.highlight_color.is_empty());
            assert!(arch.icon.ends_with(".png"));
        }
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let arch = Archetype::new("orc", "Orc", 0.55).with_colors("#a", "#b", "#c");
        let json = serde_json::to_string(&arch).unwrap();
        assert!(json.contains("\"unitColor\":\"#b\""));
        assert!(json.contains("\"statBias\":0.55"));
    }
}
