//! Dirty Tracking
//!
//! Whether the draft differs from the last persisted snapshot. Comparison is
//! structural and un-normalized: an absent optional field is not the same as
//! an explicit `false`, `""` or `0`.

use crate::domain::{ConfigDocument, SectionKey};

/// True unless the two documents are equal at every field
pub fn is_dirty(draft: &ConfigDocument, snapshot: &ConfigDocument) -> bool {
    draft != snapshot
}

/// Sections whose values differ, in document order
pub fn changed_sections(draft: &ConfigDocument, snapshot: &ConfigDocument) -> Vec<SectionKey> {
    SectionKey::ALL
        .into_iter()
        .filter(|key| draft.section_differs(snapshot, *key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory_document;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ConfigDocument {
        serde_json::from_value(value).expect("valid document")
    }

    #[test]
    fn document_is_never_dirty_against_itself() {
        for doc in [ConfigDocument::default(), factory_document()] {
            assert!(!is_dirty(&doc, &doc));
            assert!(!is_dirty(&doc.clone(), &doc));
            assert!(changed_sections(&doc, &doc).is_empty());
        }
    }

    #[test]
    fn key_order_does_not_matter() {
        let a = parse(json!({
            "language": "en-us",
            "channel": "foo",
            "shop": {"poke_ball": {"buy_one": 300, "buy_ten": 3000}, "great_ball": {"buy_one": 600}}
        }));
        let b = parse(json!({
            "shop": {"great_ball": {"buy_one": 600}, "poke_ball": {"buy_ten": 3000, "buy_one": 300}},
            "channel": "foo",
            "language": "en-us"
        }));
        assert!(!is_dirty(&a, &b));
    }

    #[test]
    fn absent_and_explicit_false_differ() {
        let absent = parse(json!({"discord": {"enabled": true}}));
        let explicit = parse(json!({"discord": {"enabled": true, "ping_user": false}}));
        assert!(is_dirty(&absent, &explicit));
        assert_eq!(changed_sections(&absent, &explicit), [SectionKey::Discord]);
    }

    #[test]
    fn tier_order_is_a_value() {
        let a = parse(json!({"catch": {"S": ["ultra_ball", "great_ball"]}}));
        let b = parse(json!({"catch": {"S": ["great_ball", "ultra_ball"]}}));
        assert!(is_dirty(&a, &b));
    }

    #[test]
    fn changed_sections_lists_each_difference() {
        let snapshot = factory_document();
        let mut draft = snapshot.clone();
        draft.general.channel = "other".to_string();
        draft.stats_balls.feather_ball = Some(10);

        assert_eq!(
            changed_sections(&draft, &snapshot),
            [SectionKey::General, SectionKey::StatsBalls]
        );
    }
}
