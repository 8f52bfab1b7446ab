use serde::Serialize;

/// Canonical shape classification of a chemical-species label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoleculeVariant {
    /// Six-membered sugar ring.
    Glucose,
    /// Five-membered sugar ring.
    Fructose,
    /// Keto acid end product.
    Pyruvate,
    /// Glyceraldehyde-3-phosphate.
    TrioseAldehyde,
    /// 3- and 2-phosphoglycerate.
    Phosphoglycerate,
    /// Phosphoenolpyruvate.
    Phosphoenolpyruvate,
    /// Dihydroxyacetone phosphate.
    DihydroxyacetonePhosphate,
    /// 1,3-bisphosphoglycerate, which gets hand-placed phosphates.
    BisphosphoglycerateSpecial,
    /// Anything else.
    Generic,
}

/// Ordered `(needle, variant)` rules; the first lowercase-substring hit
/// wins. Needles that contain an earlier-listed needle must come first
/// ("phosphoenolpyruvate" before "pyruvate", "1,3-bisphosphoglycerate"
/// before "phosphoglycerate").
const RULES: &[(&str, MoleculeVariant)] = &[
    ("glucose", MoleculeVariant::Glucose),
    ("fructose", MoleculeVariant::Fructose),
    ("phosphoenolpyruvate", MoleculeVariant::Phosphoenolpyruvate),
    ("pyruvate", MoleculeVariant::Pyruvate),
    ("glyceraldehyde", MoleculeVariant::TrioseAldehyde),
    (
        "1,3-bisphosphoglycerate",
        MoleculeVariant::BisphosphoglycerateSpecial,
    ),
    ("phosphoglycerate", MoleculeVariant::Phosphoglycerate),
    ("dihydroxyacetone", MoleculeVariant::DihydroxyacetonePhosphate),
];

impl MoleculeVariant {
    /// Classify a label. Total: unrecognized labels (including empty ones)
    /// map to [`Generic`](Self::Generic).
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        RULES
            .iter()
            .find(|(needle, _)| lower.contains(needle))
            .map_or(Self::Generic, |&(_, variant)| variant)
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Glucose => "glucose",
            Self::Fructose => "fructose",
            Self::Pyruvate => "pyruvate",
            Self::TrioseAldehyde => "glyceraldehyde-3-phosphate",
            Self::Phosphoglycerate => "phosphoglycerate",
            Self::Phosphoenolpyruvate => "phosphoenolpyruvate",
            Self::DihydroxyacetonePhosphate => "dihydroxyacetone phosphate",
            Self::BisphosphoglycerateSpecial => "1,3-bisphosphoglycerate",
            Self::Generic => "generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathway;

    #[test]
    fn canonical_labels() {
        let cases = [
            ("Glucose", MoleculeVariant::Glucose),
            ("Glucose-6-phosphate", MoleculeVariant::Glucose),
            ("Fructose-6-phosphate", MoleculeVariant::Fructose),
            ("Fructose-1,6-bisphosphate", MoleculeVariant::Fructose),
            (
                "Dihydroxyacetone phosphate (DHAP)",
                MoleculeVariant::DihydroxyacetonePhosphate,
            ),
            (
                "Glyceraldehyde-3-phosphate (G3P)",
                MoleculeVariant::TrioseAldehyde,
            ),
            (
                "1,3-Bisphosphoglycerate (1,3-BPG)",
                MoleculeVariant::BisphosphoglycerateSpecial,
            ),
            ("3-Phosphoglycerate (3PG)", MoleculeVariant::Phosphoglycerate),
            ("2-Phosphoglycerate (2PG)", MoleculeVariant::Phosphoglycerate),
            (
                "Phosphoenolpyruvate (PEP)",
                MoleculeVariant::Phosphoenolpyruvate,
            ),
            ("Pyruvate", MoleculeVariant::Pyruvate),
        ];
        for (label, expected) in cases {
            assert_eq!(MoleculeVariant::classify(label), expected, "{label}");
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_generic() {
        assert_eq!(MoleculeVariant::classify("Xylulose"), MoleculeVariant::Generic);
        assert_eq!(MoleculeVariant::classify(""), MoleculeVariant::Generic);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            MoleculeVariant::classify("PHOSPHOENOLPYRUVATE"),
            MoleculeVariant::Phosphoenolpyruvate
        );
    }

    #[test]
    fn earliest_rule_wins_on_compound_labels() {
        // Cleavage product names both trioses; the aldehyde rule comes first.
        assert_eq!(
            MoleculeVariant::classify(pathway::step(4).unwrap().product),
            MoleculeVariant::TrioseAldehyde
        );
        assert_eq!(
            MoleculeVariant::classify("glucose fructose"),
            MoleculeVariant::Glucose
        );
    }

    #[test]
    fn every_pathway_label_is_recognized() {
        for step in pathway::steps() {
            for label in [step.substrate, step.product] {
                assert_ne!(
                    MoleculeVariant::classify(label),
                    MoleculeVariant::Generic,
                    "{label}"
                );
            }
        }
    }
}
