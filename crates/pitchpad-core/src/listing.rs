//! Saved-design listing derivation.
//!
//! Pure helpers shared by every surface that renders the listing. The fetch
//! itself and the loading states around it live with the callers.

use std::cmp::Reverse;

use crate::models::{CreatedAt, PitchIdea};

/// Order pitches newest-first by resolved creation time.
///
/// Records without a `createdAt` field are dropped rather than sorted last,
/// so the derived count can be smaller than the fetched count. The sort is
/// stable, so equal timestamps keep their fetched order.
#[must_use]
pub fn sorted_pitches(pitches: &[PitchIdea]) -> Vec<PitchIdea> {
    let mut sorted: Vec<PitchIdea> = pitches
        .iter()
        .filter(|pitch| pitch.created_at.is_some())
        .cloned()
        .collect();
    sorted.sort_by_key(|pitch| {
        Reverse(
            pitch
                .created_at
                .as_ref()
                .map_or(0, CreatedAt::sort_seconds),
        )
    });
    sorted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pitch(id: &str, created_at: Option<&str>) -> PitchIdea {
        let created_at = created_at
            .map(|raw| serde_json::from_str::<CreatedAt>(raw).unwrap());
        PitchIdea {
            id: id.to_string(),
            idea_description: String::new(),
            generated_website: None,
            created_at,
        }
    }

    fn ids(pitches: &[PitchIdea]) -> Vec<&str> {
        pitches.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn drops_records_without_created_at() {
        let fetched = vec![
            pitch("1", Some(r#"{"seconds":100}"#)),
            pitch("2", Some(r#"{"_seconds":200}"#)),
            pitch("3", None),
        ];

        let sorted = sorted_pitches(&fetched);
        assert_eq!(ids(&sorted), vec!["2", "1"]);
    }

    #[test]
    fn output_never_longer_than_input() {
        let fetched = vec![pitch("1", None), pitch("2", None)];
        assert!(sorted_pitches(&fetched).is_empty());

        let fetched = vec![
            pitch("1", Some(r#"{"seconds":1}"#)),
            pitch("2", Some(r#"{"seconds":2}"#)),
        ];
        assert_eq!(sorted_pitches(&fetched).len(), fetched.len());
    }

    #[test]
    fn orders_newest_first_across_both_shapes() {
        let fetched = vec![
            pitch("old", Some(r#"{"seconds":100}"#)),
            pitch("new", Some(r#"{"_seconds":300}"#)),
            pitch("mid", Some(r#"{"seconds":200}"#)),
        ];

        let sorted = sorted_pitches(&fetched);
        assert_eq!(ids(&sorted), vec!["new", "mid", "old"]);

        let mut previous = i64::MAX;
        for entry in &sorted {
            let seconds = entry.created_at.as_ref().unwrap().sort_seconds();
            assert!(seconds <= previous);
            previous = seconds;
        }
    }

    #[test]
    fn unresolved_timestamps_sort_last_but_stay_listed() {
        let fetched = vec![
            pitch("junk", Some(r#""yesterday""#)),
            pitch("real", Some(r#"{"seconds":50}"#)),
        ];

        let sorted = sorted_pitches(&fetched);
        assert_eq!(ids(&sorted), vec!["real", "junk"]);
    }

    #[test]
    fn equal_timestamps_keep_fetched_order() {
        let fetched = vec![
            pitch("a", Some(r#"{"seconds":100}"#)),
            pitch("b", Some(r#"{"seconds":100}"#)),
            pitch("c", Some(r#"{"seconds":100}"#)),
        ];

        assert_eq!(ids(&sorted_pitches(&fetched)), vec!["a", "b", "c"]);
    }

    #[test]
    fn deriving_twice_is_idempotent() {
        let fetched = vec![
            pitch("1", Some(r#"{"seconds":100}"#)),
            pitch("2", Some(r#"{"_seconds":200}"#)),
            pitch("3", None),
        ];

        let first = sorted_pitches(&fetched);
        let second = sorted_pitches(&fetched);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_derives_empty_output() {
        assert!(sorted_pitches(&[]).is_empty());
    }
}
