// src/taxon/label.rs
//! Splitting raw taxon labels into scientific and common names.
//!
//! The site renders taxa with compound labels such as
//! `"Trichocnemis spiculatus (Ponderous Borer)"`, `"fusca group subsericea
//! (Formica subsericea)"` or, on classification pages, `"Bee Flies
//! (Bombyliidae)"` and `"Asiloidea - Bee Flies and kin"`. There is no markup
//! separating the parts, so each shape is recognized by a rule and the first
//! rule that matches decides the split.
//!
//! Two rule tables exist:
//! - [`PRIMARY_RULES`] for labels coming from search results and titles
//!   (scientific name first);
//! - [`LINEAGE_RULES`] for classification rows, which list the common name
//!   first. They fall back to the primary table when neither matches.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::non_blank;

/// Characters a name part may contain. Excludes parentheses on purpose.
const NAME: &str = r"[\w\s\-'.]+";

static RE_SUBGENUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)subgenus").expect("invalid regex: subgenus"));

static RE_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)group .*?\(({NAME})\)")).expect("invalid regex: group")
});

static RE_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME}) \(({NAME})\)")).expect("invalid regex: parens")
});

static RE_LINEAGE_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME})\s+\(({NAME})\)")).expect("invalid regex: lineage parens")
});

static RE_LINEAGE_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME})\s+-\s+({NAME})")).expect("invalid regex: lineage dash")
});

/// Result of splitting one label. Parts are trimmed; blanks are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSplit {
    pub scientific: Option<String>,
    pub common: Option<String>,
}

impl NameSplit {
    fn new(scientific: Option<&str>, common: Option<&str>) -> Self {
        Self {
            scientific: scientific.and_then(non_blank),
            common: common.and_then(non_blank),
        }
    }
}

/// One entry of a rule table: returns `Some` when the label has its shape.
pub struct LabelRule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<NameSplit>,
}

pub const PRIMARY_RULES: &[LabelRule] = &[
    LabelRule { name: "subgenus", apply: subgenus_rule },
    LabelRule { name: "group", apply: group_rule },
    LabelRule { name: "parens", apply: parens_rule },
    LabelRule { name: "prefix", apply: prefix_rule },
];

pub const LINEAGE_RULES: &[LabelRule] = &[
    LabelRule { name: "lineage-parens", apply: lineage_parens_rule },
    LabelRule { name: "lineage-dash", apply: lineage_dash_rule },
];

/// First matching rule of `rules`, with its name.
pub fn apply_rules(rules: &[LabelRule], label: &str) -> Option<(&'static str, NameSplit)> {
    rules.iter().find_map(|r| (r.apply)(label).map(|split| (r.name, split)))
}

/// Split a search/title label. Never fails: the prefix rule matches anything.
pub fn split_label(label: &str) -> NameSplit {
    apply_rules(PRIMARY_RULES, label)
        .map(|(_, split)| split)
        .unwrap_or_default()
}

/// Split a classification row label (common name first), falling back to
/// [`split_label`].
pub fn lineage_split(label: &str) -> NameSplit {
    match apply_rules(LINEAGE_RULES, label) {
        Some((_, split)) => split,
        None => split_label(label),
    }
}

/// Infer names from `raw`, keeping whatever is already set.
///
/// A blank `raw` changes nothing.
pub fn parse_name(
    raw: &str,
    existing_scientific: Option<&str>,
    existing_common: Option<&str>,
) -> (Option<String>, Option<String>) {
    let keep = (existing_scientific.map(str::to_string), existing_common.map(str::to_string));
    if raw.trim().is_empty() {
        return keep;
    }
    let split = split_label(raw);
    (keep.0.or(split.scientific), keep.1.or(split.common))
}

/// Lower-cased rank, or `None` for blank input and the site's "no taxon".
pub fn normalize_rank(raw: &str) -> Option<String> {
    let rank = raw.trim().to_lowercase();
    if rank.is_empty() || rank == "no taxon" { None } else { Some(rank) }
}

/* ---------- rules ---------- */

fn before_paren(s: &str) -> &str {
    s.split('(').next().unwrap_or("")
}

fn subgenus_rule(label: &str) -> Option<NameSplit> {
    if !RE_SUBGENUS.is_match(label) {
        return None;
    }
    let stripped = RE_SUBGENUS.replace_all(label, "");
    let prefix = before_paren(&stripped).trim();
    let scientific = if prefix.is_empty() { stripped.trim() } else { prefix };
    Some(NameSplit::new(Some(scientific), None))
}

fn group_rule(label: &str) -> Option<NameSplit> {
    let caps = RE_GROUP.captures(label)?;
    Some(NameSplit::new(caps.get(1).map(|m| m.as_str()), None))
}

fn parens_rule(label: &str) -> Option<NameSplit> {
    let caps = RE_PARENS.captures(label)?;
    Some(NameSplit::new(
        caps.get(1).map(|m| m.as_str()),
        caps.get(2).map(|m| m.as_str()),
    ))
}

fn prefix_rule(label: &str) -> Option<NameSplit> {
    let prefix = before_paren(label).trim();
    let scientific = if prefix.is_empty() { label.trim() } else { prefix };
    Some(NameSplit::new(Some(scientific), None))
}

fn lineage_parens_rule(label: &str) -> Option<NameSplit> {
    let caps = RE_LINEAGE_PARENS.captures(label)?;
    Some(NameSplit::new(
        caps.get(2).map(|m| m.as_str()),
        caps.get(1).map(|m| m.as_str()),
    ))
}

fn lineage_dash_rule(label: &str) -> Option<NameSplit> {
    let caps = RE_LINEAGE_DASH.captures(label)?;
    Some(NameSplit::new(
        caps.get(1).map(|m| m.as_str()),
        caps.get(2).map(|m| m.as_str()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(label: &str) -> (Option<String>, Option<String>) {
        parse_name(label, None, None)
    }

    fn rule_name(rules: &[LabelRule], label: &str) -> &'static str {
        apply_rules(rules, label).map(|(n, _)| n).unwrap_or("none")
    }

    #[test]
    fn plain_name_is_scientific() {
        assert_eq!(split("Trichocnemis spiculatus"), (Some("Trichocnemis spiculatus".into()), None));
    }

    #[test]
    fn parens_split_scientific_then_common() {
        assert_eq!(
            split("Trichocnemis spiculatus (Ponderous Borer)"),
            (Some("Trichocnemis spiculatus".into()), Some("Ponderous Borer".into()))
        );
    }

    #[test]
    fn hyphenated_common_name() {
        assert_eq!(
            split("Trichocnemis (Big-headed Borers)"),
            (Some("Trichocnemis".into()), Some("Big-headed Borers".into()))
        );
    }

    #[test]
    fn apostrophes_and_periods_are_name_chars() {
        assert_eq!(
            split("Papaipema sp. (O'Brien's Borer)"),
            (Some("Papaipema sp.".into()), Some("O'Brien's Borer".into()))
        );
    }

    #[test]
    fn group_takes_parenthesized_name() {
        assert_eq!(
            split("fusca group subsericea (Formica subsericea)"),
            (Some("Formica subsericea".into()), None)
        );
        assert_eq!(rule_name(PRIMARY_RULES, "Fusca Group x (Formica x)"), "group");
    }

    #[test]
    fn group_uses_first_parenthesized_group() {
        assert_eq!(
            split("fusca group a (Formica a) (Silky Ants)"),
            (Some("Formica a".into()), None)
        );
    }

    #[test]
    fn subgenus_word_is_removed() {
        let (sci, common) = split("subgenus Prionus lecontei (Prionus lecontei)");
        assert_eq!(sci.as_deref(), Some("Prionus lecontei"));
        assert_eq!(common, None);
        assert_ne!(common.as_deref(), Some("Prionus lecontei"));
    }

    #[test]
    fn subgenus_is_case_insensitive() {
        let (sci, common) = split("Subgenus Bombus (Humble Bees)");
        assert_eq!(sci.as_deref(), Some("Bombus"));
        assert_eq!(common, None);
    }

    #[test]
    fn bare_subgenus_keeps_parenthesized_text() {
        assert_eq!(split("Subgenus (Pyrobombus)"), (Some("(Pyrobombus)".into()), None));
    }

    #[test]
    fn subgenus_wins_over_group() {
        assert_eq!(rule_name(PRIMARY_RULES, "subgenus x group y (Z)"), "subgenus");
    }

    #[test]
    fn only_first_parens_group_counts() {
        assert_eq!(
            split("Aus bus (Cee) (Dee)"),
            (Some("Aus bus".into()), Some("Cee".into()))
        );
    }

    #[test]
    fn unbalanced_parens_fall_back_to_prefix() {
        assert_eq!(split("Aus bus (unclosed"), (Some("Aus bus".into()), None));
        assert_eq!(rule_name(PRIMARY_RULES, "Aus bus (unclosed"), "prefix");
    }

    #[test]
    fn leading_paren_keeps_whole_label() {
        assert_eq!(split("(Odd)"), (Some("(Odd)".into()), None));
    }

    #[test]
    fn existing_values_are_kept() {
        assert_eq!(
            parse_name("Aus bus (Cee)", Some("Explicit"), None),
            (Some("Explicit".into()), Some("Cee".into()))
        );
        assert_eq!(
            parse_name("Aus bus (Cee)", None, Some("Given")),
            (Some("Aus bus".into()), Some("Given".into()))
        );
    }

    #[test]
    fn blank_label_is_noop() {
        assert_eq!(parse_name("   ", None, None), (None, None));
        assert_eq!(
            parse_name(" \t", Some("Keep"), Some("Me")),
            (Some("Keep".into()), Some("Me".into()))
        );
    }

    #[test]
    fn rank_normalization() {
        assert_eq!(normalize_rank("Species").as_deref(), Some("species"));
        assert_eq!(normalize_rank("No Taxon"), None);
        assert_eq!(normalize_rank("no taxon"), None);
        assert_eq!(normalize_rank(""), None);
        assert_eq!(normalize_rank("  Family "), Some("family".into()));
    }

    #[test]
    fn lineage_parens_are_common_first() {
        assert_eq!(
            lineage_split("Bee Flies (Bombyliidae)"),
            NameSplit { scientific: Some("Bombyliidae".into()), common: Some("Bee Flies".into()) }
        );
    }

    #[test]
    fn lineage_dash_is_scientific_first() {
        assert_eq!(
            lineage_split("Asiloidea - Bee Flies and kin"),
            NameSplit { scientific: Some("Asiloidea".into()), common: Some("Bee Flies and kin".into()) }
        );
    }

    #[test]
    fn lineage_falls_back_to_primary() {
        assert_eq!(rule_name(LINEAGE_RULES, "Brachycera"), "none");
        assert_eq!(
            lineage_split("Brachycera"),
            NameSplit { scientific: Some("Brachycera".into()), common: None }
        );
    }

    #[test]
    fn primary_and_lineage_disagree_on_parens() {
        let label = "Arthropods (Arthropoda)";
        assert_eq!(split_label(label).scientific.as_deref(), Some("Arthropods"));
        assert_eq!(lineage_split(label).scientific.as_deref(), Some("Arthropoda"));
    }
}
