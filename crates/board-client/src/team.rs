//! Team directory wire format and its normalization into [`TeamMember`]s.

use std::collections::HashMap;

use board_model::team::{DEFAULT_POSITION, UNKNOWN_LOCATION};
use board_model::{Location, RecordId, TeamMember, roster_order, slugify};
use board_query::dedupe_by_id;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One category of the `team` endpoint, with its members nested inside.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamCategory {
    pub name: String,
    #[serde(default)]
    pub team: Vec<RawMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

/// A member exactly as the `team` endpoint sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub title: Option<Named>,
    /// Sent as a number or a string depending on the record.
    #[serde(default)]
    pub location_id: Option<Value>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub practice_areas: Vec<Named>,
    #[serde(default)]
    pub sequence: Option<i64>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl RawMember {
    /// Whether the member's end date lies before `now`. Unparseable dates
    /// count as not ended.
    pub fn has_left(&self, now: DateTime<Utc>) -> bool {
        self.end_date
            .as_deref()
            .and_then(parse_end_date)
            .is_some_and(|end| end < now)
    }

    fn location_key(&self) -> Option<String> {
        match self.location_id.as_ref()? {
            Value::Number(number) => Some(number.to_string()),
            Value::String(text) => Some(text.trim().to_string()),
            _ => None,
        }
    }
}

fn parse_end_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(timestamp.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|timestamp| timestamp.and_utc())
}

/// Flattens the categories into directory entries.
///
/// Members whose end date has passed are dropped, location ids are resolved
/// against `locations`, and the result is put in roster order. A member
/// listed under several categories keeps the last listing.
pub fn normalize(
    categories: Vec<TeamCategory>,
    locations: &[Location],
    now: DateTime<Utc>,
) -> Vec<TeamMember> {
    let location_names: HashMap<String, &str> = locations
        .iter()
        .map(|location| (location.id.to_string(), location.name.as_str()))
        .collect();

    let members = categories
        .into_iter()
        .flat_map(|category| {
            let category_name = category.name;
            category
                .team
                .into_iter()
                .filter(|member| !member.has_left(now))
                .map(|member| to_member(member, &category_name, &location_names))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut members = dedupe_by_id(members);
    roster_order(&mut members);
    members
}

fn to_member(
    raw: RawMember,
    category: &str,
    location_names: &HashMap<String, &str>,
) -> TeamMember {
    let location = raw
        .location_key()
        .and_then(|key| location_names.get(&key).copied())
        .unwrap_or(UNKNOWN_LOCATION)
        .to_string();
    let image = raw.image.unwrap_or_default();
    TeamMember {
        id: raw.id,
        name: format!("{}, {}", raw.last_name, raw.first_name),
        slug: slugify(&raw.first_name, &raw.last_name),
        position: raw
            .title
            .map_or_else(|| DEFAULT_POSITION.to_string(), |title| title.name),
        location,
        image: image.strip_prefix("team/").unwrap_or(image.as_str()).to_string(),
        bio: raw.bio.unwrap_or_default(),
        category: category.to_string(),
        practice_areas: raw.practice_areas.into_iter().map(|area| area.name).collect(),
        sequence: raw.sequence,
        first_name: raw.first_name,
        last_name: raw.last_name,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn categories() -> Vec<TeamCategory> {
        serde_json::from_str(
            r#"[
                {"name": "Partners", "team": [
                    {"id": 1, "first_name": "Ada", "last_name": "Zeller",
                     "title": {"name": "Partner"}, "location_id": 7,
                     "image": "team/ada.jpg", "bio": "Bio",
                     "practice_areas": [{"name": "Tax"}], "sequence": 2},
                    {"id": 2, "first_name": "Bo", "last_name": "Adams",
                     "location_id": "9", "image": "bo.jpg",
                     "practice_areas": [], "end_date": "2024-01-31"}
                ]},
                {"name": "Associates", "team": [
                    {"id": 3, "first_name": "Cy", "last_name": "baker",
                     "location_id": 8, "practice_areas": [{"name": "Estates"}]},
                    {"id": 4, "first_name": "Di", "last_name": "Abel",
                     "practice_areas": [], "end_date": "2030-01-01"},
                    {"id": 5, "first_name": "Ed", "last_name": "Young",
                     "practice_areas": [], "sequence": 1}
                ]}
            ]"#,
        )
        .unwrap()
    }

    fn locations() -> Vec<Location> {
        vec![
            Location {
                id: RecordId::new(7),
                name: "Calgary".to_string(),
            },
            Location {
                id: RecordId::new(9),
                name: "Cochrane".to_string(),
            },
        ]
    }

    #[test]
    fn normalizes_and_orders_the_roster() {
        let members = normalize(categories(), &locations(), now());
        let ids: Vec<u64> = members.iter().map(|m| m.id.get()).collect();
        // sequenced 5 then 1, then Abel, baker by last name; 2 has left
        assert_eq!(ids, vec![5, 1, 4, 3]);

        let ada = &members[1];
        assert_eq!(ada.name, "Zeller, Ada");
        assert_eq!(ada.position, "Partner");
        assert_eq!(ada.location, "Calgary");
        assert_eq!(ada.image, "ada.jpg");
        assert_eq!(ada.category, "Partners");
        assert_eq!(ada.practice_areas, vec!["Tax".to_string()]);
        assert_eq!(ada.slug, "ada-zeller");

        let cy = &members[3];
        assert_eq!(cy.position, DEFAULT_POSITION);
        assert_eq!(cy.location, UNKNOWN_LOCATION);
        assert_eq!(cy.bio, "");
    }

    #[test]
    fn end_dates() {
        let member = |end: &str| RawMember {
            id: RecordId::new(1),
            first_name: String::new(),
            last_name: String::new(),
            title: None,
            location_id: None,
            image: None,
            bio: None,
            practice_areas: Vec::new(),
            sequence: None,
            end_date: Some(end.to_string()),
        };
        assert!(member("2024-05-31").has_left(now()));
        assert!(member("2024-06-01T11:00:00Z").has_left(now()));
        assert!(!member("2024-06-01 13:00:00").has_left(now()));
        assert!(!member("not a date").has_left(now()));
        assert!(!member("").has_left(now()));
    }

    #[test]
    fn string_location_ids_resolve() {
        let categories: Vec<TeamCategory> = serde_json::from_str(
            r#"[{"name": "Staff", "team": [
                {"id": 1, "first_name": "A", "last_name": "B", "location_id": "9"}
            ]}]"#,
        )
        .unwrap();
        let members = normalize(categories, &locations(), now());
        assert_eq!(members[0].location, "Cochrane");
    }
}
