//! Team directory records.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::collate::{TextCollator, fold_case};
use crate::ids::RecordId;
use crate::record::{FieldValue, Record};

/// Position shown for members without a title.
pub const DEFAULT_POSITION: &str = "Team Member";

/// Location shown when a member's location id is not in the location list.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: RecordId,
    pub name: String,
}

impl Record for Location {
    const KIND: &'static str = "locations";
    const DIMENSIONS: &'static [&'static str] = &[];
    const SORT_FIELDS: &'static [&'static str] = &["id", "name"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::id(self.id),
            "name" => FieldValue::text(&self.name),
            _ => FieldValue::Missing,
        }
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

/// A member of the team directory, flattened out of its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: RecordId,
    /// Display name, `"Last, First"`.
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub location: String,
    pub image: String,
    pub bio: String,
    /// Name of the directory category the member was listed under.
    pub category: String,
    pub practice_areas: Vec<String>,
    pub sequence: Option<i64>,
    pub slug: String,
}

impl Record for TeamMember {
    const KIND: &'static str = "team members";
    const DIMENSIONS: &'static [&'static str] =
        &["practiceArea", "position", "location", "category"];
    const SORT_FIELDS: &'static [&'static str] =
        &["name", "lastName", "position", "location", "sequence"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::id(self.id),
            "name" => FieldValue::text(&self.name),
            "firstName" => FieldValue::text(&self.first_name),
            "lastName" => FieldValue::text(&self.last_name),
            "position" => FieldValue::text(&self.position),
            "location" => FieldValue::text(&self.location),
            "category" => FieldValue::text(&self.category),
            "practiceArea" => FieldValue::List(self.practice_areas.clone()),
            "sequence" => FieldValue::number(self.sequence),
            _ => FieldValue::Missing,
        }
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

/// Directory order: members with a sequence number first (ascending), then
/// everyone else alphabetically by last name.
pub fn roster_order(members: &mut [TeamMember]) {
    let mut collator = TextCollator::new();
    members.sort_by(|left, right| match (left.sequence, right.sequence) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collator.compare(&surname_key(left), &surname_key(right)),
    });
}

fn surname_key(member: &TeamMember) -> String {
    if member.last_name.is_empty() {
        fold_case(&member.name)
    } else {
        fold_case(&member.last_name)
    }
}

impl TeamMember {
    /// Matches a profile reference: the member's slug or numeric id.
    pub fn matches_reference(&self, reference: &str) -> bool {
        let reference = reference.trim();
        self.slug.eq_ignore_ascii_case(reference)
            || reference
                .parse::<RecordId>()
                .is_ok_and(|id| id == self.id)
    }
}

/// Profile URL slug, `first-last`, lowercase with punctuation removed.
pub fn slugify(first: &str, last: &str) -> String {
    format!("{}-{}", slug_part(first), slug_part(last))
}

fn slug_part(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;
    for ch in value.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-') {
            continue;
        }
        if pending_space {
            out.push('-');
            pending_space = false;
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u64, last: &str, sequence: Option<i64>) -> TeamMember {
        TeamMember {
            id: RecordId::new(id),
            name: format!("{last}, Pat"),
            first_name: "Pat".to_string(),
            last_name: last.to_string(),
            position: DEFAULT_POSITION.to_string(),
            location: UNKNOWN_LOCATION.to_string(),
            image: String::new(),
            bio: String::new(),
            category: "Attorneys".to_string(),
            practice_areas: vec!["Tax".to_string()],
            sequence,
            slug: slugify("Pat", last),
        }
    }

    #[test]
    fn slugify_strips_periods_and_punctuation() {
        assert_eq!(slugify("J.R.", "O'Neil"), "jr-oneil");
        assert_eq!(slugify("  Mary Ann ", "Smith-Jones"), "mary-ann-smith-jones");
        assert_eq!(slugify("Zoë", "Lee"), "zo-lee");
    }

    #[test]
    fn roster_puts_sequenced_members_first() {
        let mut members = vec![
            member(1, "zimmer", None),
            member(2, "Adams", None),
            member(3, "Young", Some(2)),
            member(4, "Baker", Some(1)),
        ];
        roster_order(&mut members);
        let ids: Vec<u64> = members.iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn roster_sorts_accented_surnames_with_their_base_letter() {
        let mut members = vec![
            member(1, "Zoe", None),
            member(2, "Ölberg", None),
            member(3, "Otto", None),
            member(4, "Émile", None),
            member(5, "Eva", None),
        ];
        roster_order(&mut members);
        let surnames: Vec<&str> = members.iter().map(|m| m.last_name.as_str()).collect();
        assert_eq!(surnames, vec!["Émile", "Eva", "Ölberg", "Otto", "Zoe"]);
    }

    #[test]
    fn profile_reference_accepts_slug_or_id() {
        let m = member(14, "Adams", None);
        assert!(m.matches_reference("pat-adams"));
        assert!(m.matches_reference(" Pat-Adams "));
        assert!(m.matches_reference("14"));
        assert!(!m.matches_reference("15"));
        assert!(!m.matches_reference("pat-baker"));
    }

    #[test]
    fn ids_beyond_i64_stay_positive() {
        let m = TeamMember {
            id: RecordId::new(u64::MAX),
            ..member(1, "Adams", None)
        };
        assert_eq!(m.field("id"), FieldValue::Number(i128::from(u64::MAX)));
    }

    #[test]
    fn practice_areas_are_list_values() {
        let m = member(1, "Adams", None);
        assert_eq!(m.field("practiceArea").filter_values(), vec!["Tax"]);
    }
}
