use serde::{Deserialize, Serialize};

/// Reported bodywork condition, ordered by severity (worst first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCondition {
    Changed,
    Painted,
    LocalPainted,
}

impl PartCondition {
    pub const fn label(self) -> &'static str {
        match self {
            PartCondition::Changed => "changed",
            PartCondition::Painted => "painted",
            PartCondition::LocalPainted => "locally painted",
        }
    }
}

/// Part groups the deduction table is keyed on. Listings name individual
/// panels ("left rear door"); deductions are defined per structural group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartGroup {
    Roof,
    Hood,
    TrunkLid,
    RearFender,
    SidePanel,
    Bumper,
}

impl PartGroup {
    pub const fn display_name(self) -> &'static str {
        match self {
            PartGroup::Roof => "Roof",
            PartGroup::Hood => "Hood",
            PartGroup::TrunkLid => "Trunk lid",
            PartGroup::RearFender => "Rear fender",
            PartGroup::SidePanel => "Doors and front fenders",
            PartGroup::Bumper => "Bumpers",
        }
    }

    /// Point deduction for this group in the given condition. Structural
    /// parts (roof, hood) dominate; bolt-on plastics barely register.
    pub const fn deduction(self, condition: PartCondition) -> u32 {
        use PartCondition::*;
        match (self, condition) {
            (PartGroup::Roof, Changed) => 60,
            (PartGroup::Roof, Painted) => 30,
            (PartGroup::Roof, LocalPainted) => 15,
            (PartGroup::Hood, Changed) => 35,
            (PartGroup::Hood, Painted) => 15,
            (PartGroup::Hood, LocalPainted) => 8,
            (PartGroup::TrunkLid, Changed) => 20,
            (PartGroup::TrunkLid, Painted) => 10,
            (PartGroup::TrunkLid, LocalPainted) => 5,
            (PartGroup::RearFender, Changed) => 20,
            (PartGroup::RearFender, Painted) => 10,
            (PartGroup::RearFender, LocalPainted) => 5,
            (PartGroup::SidePanel, Changed) => 12,
            (PartGroup::SidePanel, Painted) => 6,
            (PartGroup::SidePanel, LocalPainted) => 3,
            (PartGroup::Bumper, Changed) => 5,
            (PartGroup::Bumper, Painted) => 2,
            (PartGroup::Bumper, LocalPainted) => 1,
        }
    }

    pub const fn advice(self, condition: PartCondition) -> &'static str {
        use PartCondition::*;
        match (self, condition) {
            (PartGroup::Roof, Changed) => {
                "Critical structural risk. High likelihood of a rollover or severe accident. \
                 Strongly advised against buying."
            }
            (PartGroup::Roof, Painted) => {
                "High risk. Possible rollover or heavy object impact. Check filler thickness \
                 and inner pillar damage."
            }
            (PartGroup::Roof, LocalPainted) => {
                "Suspect. May be cosmetic (bird droppings, antenna repair) but warrants close \
                 inspection."
            }
            (PartGroup::Hood, Changed) => {
                "High likelihood of a major frontal collision. Inspect chassis rails and \
                 airbags carefully. Not advised unless the accident history checks out."
            }
            (PartGroup::Hood, Painted) => {
                "Likely front impact or stone chip repair. Check factory labels on the front \
                 panel and radiator support."
            }
            (PartGroup::Hood, LocalPainted) => {
                "Minor cosmetic touch-up. Usually acceptable; verify the color match."
            }
            (PartGroup::TrunkLid, Changed) => {
                "Indicates a significant rear collision. Check the trunk floor and rear \
                 chassis panel for weld marks."
            }
            (PartGroup::TrunkLid, Painted) => {
                "Moderate rear impact. Usually acceptable if the inner structure is sound."
            }
            (PartGroup::TrunkLid, LocalPainted) => {
                "Small cosmetic repair. Low impact on vehicle value."
            }
            (PartGroup::RearFender, Changed) => {
                "Structural intervention requiring cutting and welding. Heavy value loss; \
                 inspect the inner wheel arch carefully."
            }
            (PartGroup::RearFender, Painted) => {
                "Commonly scuffed area. Acceptable unless deep filler was used."
            }
            (PartGroup::RearFender, LocalPainted) => {
                "Small scuff repair. Very common and usually acceptable."
            }
            (PartGroup::SidePanel, Changed) => {
                "Bolt-on parts, but replacement implies a hard side impact. Check pillars \
                 and hinges."
            }
            (PartGroup::SidePanel, Painted) => {
                "Cosmetic scratch or dent repair. Common in city traffic; minimal effect \
                 on mechanical health."
            }
            (PartGroup::SidePanel, LocalPainted) => {
                "Very small touch-up. Negligible effect on value."
            }
            (PartGroup::Bumper, Changed) => {
                "Plastic part. Replacement is common and gives a cleaner look. Check \
                 parking sensors and fog lights."
            }
            (PartGroup::Bumper, Painted) => {
                "Plastic part, painted for aesthetics. No negative effect on value."
            }
            (PartGroup::Bumper, LocalPainted) => "Plastic part. Insignificant cosmetic repair.",
        }
    }
}

/// Deduction applied when a part name cannot be matched to any group.
pub const fn unknown_part_deduction(condition: PartCondition) -> u32 {
    match condition {
        PartCondition::Changed => 15,
        PartCondition::Painted => 8,
        PartCondition::LocalPainted => 4,
    }
}

pub fn unknown_part_advice(part_name: &str, condition: PartCondition) -> String {
    match condition {
        PartCondition::Changed => {
            format!("Unknown part replacement: {part_name}. Detailed inspection recommended.")
        }
        PartCondition::Painted => {
            format!("Unknown painted part: {part_name}. Investigate the repair history.")
        }
        PartCondition::LocalPainted => {
            format!("Unknown locally painted part: {part_name}. Likely a cosmetic repair.")
        }
    }
}

/// Alias table covering the Turkish names used by the source listings and
/// their English equivalents. More specific aliases come first so that the
/// substring fallback prefers "rear fender" over plain "fender".
const PART_ALIASES: &[(&str, PartGroup)] = &[
    // Roof
    ("tavan", PartGroup::Roof),
    ("roof", PartGroup::Roof),
    // Hood
    ("motor kaputu", PartGroup::Hood),
    ("kaput", PartGroup::Hood),
    ("hood", PartGroup::Hood),
    ("bonnet", PartGroup::Hood),
    // Trunk lid
    ("bagaj kapagi", PartGroup::TrunkLid),
    ("bagaj", PartGroup::TrunkLid),
    ("trunk lid", PartGroup::TrunkLid),
    ("trunk", PartGroup::TrunkLid),
    ("tailgate", PartGroup::TrunkLid),
    // Rear fenders
    ("arka camurluk sol", PartGroup::RearFender),
    ("arka camurluk sag", PartGroup::RearFender),
    ("sol arka camurluk", PartGroup::RearFender),
    ("sag arka camurluk", PartGroup::RearFender),
    ("arka camurluk", PartGroup::RearFender),
    ("rear quarter panel", PartGroup::RearFender),
    ("left rear fender", PartGroup::RearFender),
    ("right rear fender", PartGroup::RearFender),
    ("rear fender", PartGroup::RearFender),
    // Front fenders and doors
    ("on camurluk sol", PartGroup::SidePanel),
    ("on camurluk sag", PartGroup::SidePanel),
    ("sol on camurluk", PartGroup::SidePanel),
    ("sag on camurluk", PartGroup::SidePanel),
    ("on camurluk", PartGroup::SidePanel),
    ("sol on kapi", PartGroup::SidePanel),
    ("sag on kapi", PartGroup::SidePanel),
    ("sol arka kapi", PartGroup::SidePanel),
    ("sag arka kapi", PartGroup::SidePanel),
    ("on kapi sol", PartGroup::SidePanel),
    ("on kapi sag", PartGroup::SidePanel),
    ("arka kapi sol", PartGroup::SidePanel),
    ("arka kapi sag", PartGroup::SidePanel),
    ("kapi", PartGroup::SidePanel),
    ("front fender", PartGroup::SidePanel),
    ("front door", PartGroup::SidePanel),
    ("rear door", PartGroup::SidePanel),
    ("door", PartGroup::SidePanel),
    ("fender", PartGroup::SidePanel),
    // Bumpers
    ("on tampon", PartGroup::Bumper),
    ("arka tampon", PartGroup::Bumper),
    ("tampon", PartGroup::Bumper),
    ("front bumper", PartGroup::Bumper),
    ("rear bumper", PartGroup::Bumper),
    ("bumper", PartGroup::Bumper),
];

/// Lowercase, trim, and fold Turkish diacritics so listing part names can be
/// matched against the alias table.
pub fn normalize_part_name(part_name: &str) -> String {
    part_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ı' | 'i' => 'i',
            'ğ' => 'g',
            'ü' => 'u',
            'ş' => 's',
            'ö' => 'o',
            'ç' => 'c',
            other => other,
        })
        // Lowercasing 'İ' leaves a combining dot behind; drop it.
        .filter(|c| *c != '\u{0307}')
        .collect()
}

/// Resolve a free-text part name to a deduction group.
///
/// Exact alias matches win; otherwise a substring match in either direction
/// is accepted, mirroring the tolerant matching the source listings need.
pub fn resolve_part_group(part_name: &str) -> Option<PartGroup> {
    let normalized = normalize_part_name(part_name);
    if normalized.is_empty() {
        return None;
    }

    if let Some((_, group)) = PART_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return Some(*group);
    }

    PART_ALIASES
        .iter()
        .find(|(alias, _)| normalized.contains(alias) || alias.contains(normalized.as_str()))
        .map(|(_, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_turkish_diacritics() {
        assert_eq!(normalize_part_name("  Motor Kaputu "), "motor kaputu");
        assert_eq!(normalize_part_name("Bağaj Kapağı"), "bagaj kapagi");
        assert_eq!(normalize_part_name("ÖN TAMPON"), "on tampon");
    }

    #[test]
    fn resolves_turkish_and_english_aliases() {
        assert_eq!(resolve_part_group("Tavan"), Some(PartGroup::Roof));
        assert_eq!(resolve_part_group("hood"), Some(PartGroup::Hood));
        assert_eq!(resolve_part_group("Sol Arka Çamurluk"), Some(PartGroup::RearFender));
        assert_eq!(resolve_part_group("front bumper"), Some(PartGroup::Bumper));
        assert_eq!(resolve_part_group("left front door"), Some(PartGroup::SidePanel));
    }

    #[test]
    fn prefers_specific_aliases_over_generic_ones() {
        assert_eq!(resolve_part_group("rear fender"), Some(PartGroup::RearFender));
        assert_eq!(resolve_part_group("left rear fender"), Some(PartGroup::RearFender));
        assert_eq!(resolve_part_group("left fender"), Some(PartGroup::SidePanel));
    }

    #[test]
    fn unknown_parts_do_not_resolve() {
        assert_eq!(resolve_part_group("cup holder"), None);
        assert_eq!(resolve_part_group(""), None);
    }

    #[test]
    fn structural_parts_outweigh_plastics() {
        assert!(
            PartGroup::Roof.deduction(PartCondition::Changed)
                > PartGroup::Bumper.deduction(PartCondition::Changed)
        );
        assert_eq!(PartGroup::Roof.deduction(PartCondition::Changed), 60);
        assert_eq!(PartGroup::Bumper.deduction(PartCondition::LocalPainted), 1);
    }
}
