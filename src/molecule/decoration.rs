use serde::Serialize;

/// Phosphate decorations layered onto a base molecule. At most one set
/// applies to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationSet {
    /// Nothing to add.
    #[default]
    None,
    /// One phosphate with four radial oxygens.
    SinglePhosphate,
    /// Two mirrored phosphates.
    DoublePhosphate,
    /// Two hand-placed phosphates specific to 1,3-bisphosphoglycerate.
    BisphosphoglycerateDual,
}

/// Ordered `(needle, decoration)` rules; the first lowercase-substring hit
/// wins.
const RULES: &[(&str, DecorationSet)] = &[
    ("1,3-bisphosphoglycerate", DecorationSet::BisphosphoglycerateDual),
    ("bisphosphate", DecorationSet::DoublePhosphate),
    ("phosphate", DecorationSet::SinglePhosphate),
];

impl DecorationSet {
    /// Resolve the decorations for a label. Independent of the molecule
    /// variant.
    #[must_use]
    pub fn resolve(label: &str) -> Self {
        let lower = label.to_lowercase();
        RULES
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map_or(Self::None, |&(_, set)| set)
    }

    /// Number of phosphate groups drawn.
    #[must_use]
    pub fn phosphate_count(self) -> usize {
        match self {
            Self::None => 0,
            Self::SinglePhosphate => 1,
            Self::DoublePhosphate | Self::BisphosphoglycerateDual => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_rule() {
        assert_eq!(
            DecorationSet::resolve("Glucose-6-phosphate"),
            DecorationSet::SinglePhosphate
        );
        assert_eq!(
            DecorationSet::resolve("Fructose-1,6-bisphosphate"),
            DecorationSet::DoublePhosphate
        );
        assert_eq!(
            DecorationSet::resolve("1,3-Bisphosphoglycerate (1,3-BPG)"),
            DecorationSet::BisphosphoglycerateDual
        );
        assert_eq!(DecorationSet::resolve("Glucose"), DecorationSet::None);
        assert_eq!(DecorationSet::resolve("Pyruvate"), DecorationSet::None);
    }

    #[test]
    fn special_case_never_doubles_up() {
        // A label carrying both markers resolves to the special case only.
        let set =
            DecorationSet::resolve("1,3-bisphosphoglycerate bisphosphate");
        assert_eq!(set, DecorationSet::BisphosphoglycerateDual);
        assert_eq!(set.phosphate_count(), 2);
    }

    #[test]
    fn phosphoglycerate_labels_are_undecorated() {
        // "phosphoglycerate" does not contain "phosphate".
        assert_eq!(
            DecorationSet::resolve("3-Phosphoglycerate (3PG)"),
            DecorationSet::None
        );
        assert_eq!(
            DecorationSet::resolve("Dihydroxyacetone phosphate (DHAP)"),
            DecorationSet::SinglePhosphate
        );
    }
}
