//! Grouping of search results into genre sections

use std::collections::HashMap;

use super::types::SongRecord;

/// Label used for records without a genre
pub const FALLBACK_GENRE: &str = "Other";

/// One genre bucket, ready to render under a heading
#[derive(Clone, Debug, PartialEq)]
pub struct GenreSection {
    pub genre: String,
    pub records: Vec<SongRecord>,
}

/// Genre label → records, in the order each genre first appears
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenreGrouping {
    sections: Vec<GenreSection>,
}

impl GenreGrouping {
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, genre: &str) -> Option<&[SongRecord]> {
        self.sections
            .iter()
            .find(|s| s.genre == genre)
            .map(|s| s.records.as_slice())
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.genre.as_str())
    }

    pub fn into_sections(self) -> Vec<GenreSection> {
        self.sections
    }
}

fn genre_label(record: &SongRecord) -> &str {
    match record.primary_genre_name.as_deref().map(str::trim) {
        Some(genre) if !genre.is_empty() => genre,
        _ => FALLBACK_GENRE,
    }
}

/// Bucket records by `primaryGenreName`.
///
/// Every record lands in exactly one bucket. Records keep their relative
/// order inside a bucket.
pub fn group_by_genre(records: &[SongRecord]) -> GenreGrouping {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sections: Vec<GenreSection> = Vec::new();

    for record in records {
        let label = genre_label(record);
        let slot = *index.entry(label).or_insert_with(|| {
            sections.push(GenreSection {
                genre: label.to_string(),
                records: Vec::new(),
            });
            sections.len() - 1
        });
        sections[slot].records.push(record.clone());
    }

    GenreGrouping { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, genre: Option<&str>) -> SongRecord {
        SongRecord {
            track_id: Some(id),
            track_name: Some(format!("Track {id}")),
            primary_genre_name: genre.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn partitions_every_record_exactly_once() {
        let records = vec![
            song(1, Some("Jazz")),
            song(2, Some("Pop")),
            song(3, None),
            song(4, Some("Jazz")),
            song(5, Some("")),
            song(6, Some("Pop")),
        ];

        let grouping = group_by_genre(&records);
        let mut seen: Vec<i64> = grouping
            .clone()
            .into_sections()
            .into_iter()
            .flat_map(|s| s.records)
            .filter_map(|r| r.track_id)
            .collect();
        seen.sort_unstable();

        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(grouping.get(FALLBACK_GENRE).map(|r| r.len()), Some(2));
        assert_eq!(grouping.get("Jazz").map(|r| r.len()), Some(2));
    }

    #[test]
    fn genre_order_follows_first_occurrence() {
        let records = vec![
            song(1, Some("Rock")),
            song(2, None),
            song(3, Some("Blues")),
            song(4, Some("Rock")),
        ];

        let grouping = group_by_genre(&records);
        let genres: Vec<&str> = grouping.genres().collect();
        assert_eq!(genres, vec!["Rock", FALLBACK_GENRE, "Blues"]);
    }

    #[test]
    fn records_keep_their_order_inside_a_bucket() {
        let records = vec![song(3, Some("Pop")), song(1, Some("Rock")), song(2, Some("Pop"))];
        let grouping = group_by_genre(&records);
        let ids: Vec<i64> = grouping
            .get("Pop")
            .unwrap()
            .iter()
            .filter_map(|r| r.track_id)
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn grouping_is_deterministic() {
        let records = vec![song(1, Some("A")), song(2, Some("B")), song(3, Some("A"))];
        assert_eq!(group_by_genre(&records), group_by_genre(&records));
    }

    #[test]
    fn whitespace_genre_uses_fallback() {
        let grouping = group_by_genre(&[song(1, Some("   "))]);
        assert_eq!(grouping.genres().collect::<Vec<_>>(), vec![FALLBACK_GENRE]);
    }

    #[test]
    fn empty_input_has_no_sections() {
        assert!(group_by_genre(&[]).is_empty());
    }
}
