// Pure filtering over collection snapshots. Selectors are compiled from raw
// UI inputs once, then applied to any number of records; nothing in here
// touches the store.

use crate::models::{Activity, JobListing, OwnerProfile, Pet};

/// Compiled form of one user-supplied filter value. Terms are lowercased at
/// construction so matching never re-normalizes per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Matches every record. Blank inputs and the `all` sentinel land here.
    Any,
    /// Case-insensitive substring match.
    Contains(String),
    /// Case-insensitive exact match.
    Equals(String),
}

impl Selector {
    /// Free-text search boxes: blank means no constraint.
    pub fn search(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Selector::Any
        } else {
            Selector::Contains(trimmed.to_lowercase())
        }
    }

    /// Categorical pickers: blank and the `all` sentinel mean no
    /// constraint, anything else must match exactly.
    pub fn choice(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selector::Any
        } else {
            Selector::Equals(trimmed.to_lowercase())
        }
    }

    /// Location pickers: the `all` sentinel clears the constraint, but a
    /// chosen area matches by substring, so "Downtown" finds
    /// "Downtown East" too.
    pub fn location(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selector::Any
        } else {
            Selector::Contains(trimmed.to_lowercase())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Contains(term) => value.to_lowercase().contains(term),
            Selector::Equals(term) => value.to_lowercase() == *term,
        }
    }

    /// OR across a field group: true when any of the values matches.
    pub fn matches_any<'a>(&self, values: impl IntoIterator<Item = &'a str>) -> bool {
        match self {
            Selector::Any => true,
            _ => values.into_iter().any(|value| self.matches(value)),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

/// A predicate over one record type. Fields combine with AND; a search
/// selector spans its field group with OR.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Search spans name OR breed; the type picker must match exactly.
#[derive(Debug, Clone, Default)]
pub struct PetFilter {
    pub search: Selector,
    pub pet_type: Selector,
}

impl PetFilter {
    pub fn new(search: &str, pet_type: &str) -> Self {
        Self {
            search: Selector::search(search),
            pet_type: Selector::choice(pet_type),
        }
    }
}

impl RecordFilter<Pet> for PetFilter {
    fn matches(&self, pet: &Pet) -> bool {
        self.search.matches_any([pet.name.as_str(), pet.breed.as_str()])
            && self.pet_type.matches(pet.pet_type.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    pub kind: Selector,
}

impl ActivityFilter {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: Selector::choice(kind),
        }
    }
}

impl RecordFilter<Activity> for ActivityFilter {
    fn matches(&self, activity: &Activity) -> bool {
        self.kind.matches(activity.kind().as_str())
    }
}

/// Search spans the owner's name OR any of their pets' breeds; the type
/// picker passes when any owned pet is of that type.
#[derive(Debug, Clone, Default)]
pub struct OwnerFilter {
    pub search: Selector,
    pub location: Selector,
    pub pet_type: Selector,
}

impl OwnerFilter {
    pub fn new(search: &str, location: &str, pet_type: &str) -> Self {
        Self {
            search: Selector::search(search),
            location: Selector::location(location),
            pet_type: Selector::choice(pet_type),
        }
    }
}

impl RecordFilter<OwnerProfile> for OwnerFilter {
    fn matches(&self, owner: &OwnerProfile) -> bool {
        let search_hit = self.search.matches_any(
            std::iter::once(owner.name.as_str())
                .chain(owner.pets.iter().map(|pet| pet.breed.as_str())),
        );
        let type_hit = self
            .pet_type
            .matches_any(owner.pets.iter().map(|pet| pet.pet_type.as_str()));

        search_hit && self.location.matches(&owner.location) && type_hit
    }
}

/// Search spans title OR company OR description.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: Selector,
    pub location: Selector,
    pub category: Selector,
    pub job_type: Selector,
}

impl JobFilter {
    pub fn new(search: &str, location: &str, category: &str, job_type: &str) -> Self {
        Self {
            search: Selector::search(search),
            location: Selector::search(location),
            category: Selector::choice(category),
            job_type: Selector::choice(job_type),
        }
    }
}

impl RecordFilter<JobListing> for JobFilter {
    fn matches(&self, job: &JobListing) -> bool {
        self.search.matches_any([
            job.title.as_str(),
            job.company.as_str(),
            job.description.as_str(),
        ]) && self.location.matches(&job.location)
            && self.category.matches(job.category.as_str())
            && self.job_type.matches(job.job_type.as_str())
    }
}

pub struct FilterEngine;

impl FilterEngine {
    /// Keep the records the filter accepts, in their original order.
    pub fn apply<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
        records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityDetail, PetStatus, PetType};

    fn pet(name: &str, pet_type: PetType, breed: &str) -> Pet {
        Pet {
            id: 0,
            name: name.to_string(),
            pet_type,
            breed: breed.to_string(),
            age: String::new(),
            gender: None,
            weight: String::new(),
            microchip: String::new(),
            image: String::new(),
            notes: String::new(),
            status: PetStatus::Healthy,
        }
    }

    #[test]
    fn blank_and_all_compile_to_any() {
        assert!(Selector::search("").is_any());
        assert!(Selector::search("   ").is_any());
        assert!(Selector::choice("all").is_any());
        assert!(Selector::choice("ALL").is_any());
        assert!(Selector::location("all").is_any());
        assert!(!Selector::search("max").is_any());
    }

    #[test]
    fn contains_is_case_insensitive_substring() {
        let selector = Selector::search("RETRIEVER");
        assert!(selector.matches("Golden Retriever"));
        assert!(!selector.matches("Beagle"));
    }

    #[test]
    fn equals_requires_exact_value() {
        let selector = Selector::choice("Dog");
        assert!(selector.matches("dog"));
        assert!(!selector.matches("dogfish"));
    }

    #[test]
    fn location_choice_matches_by_substring() {
        let selector = Selector::location("Downtown");
        assert!(selector.matches("Downtown East"));
        assert!(!selector.matches("Riverside"));
    }

    #[test]
    fn search_group_is_or_across_fields() {
        let pets = vec![
            pet("Buddy", PetType::Dog, "Golden Retriever"),
            pet("Whiskers", PetType::Cat, "Persian"),
            pet("Charlie", PetType::Dog, "Beagle"),
        ];

        // "golden" hits Buddy by breed, not by name
        let filter = PetFilter::new("golden", "all");
        let matched = FilterEngine::apply(&pets, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Buddy");

        // "char" hits Charlie by name
        let filter = PetFilter::new("char", "all");
        let matched = FilterEngine::apply(&pets, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Charlie");
    }

    #[test]
    fn fields_combine_with_and() {
        let pets = vec![
            pet("Buddy", PetType::Dog, "Golden Retriever"),
            pet("Goldie", PetType::Fish, "Goldfish"),
        ];

        // Both match "gold" in the search group, only one is a dog
        let filter = PetFilter::new("gold", "dog");
        let matched = FilterEngine::apply(&pets, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Buddy");
    }

    #[test]
    fn same_name_pets_are_told_apart_by_type() {
        let pets = vec![
            pet("Luna", PetType::Cat, "Siamese"),
            pet("Luna", PetType::Dog, "Husky"),
        ];

        let filter = PetFilter::new("luna", "cat");
        let matched = FilterEngine::apply(&pets, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].pet_type, PetType::Cat);
    }

    #[test]
    fn activity_kind_picker_narrows_the_log() {
        let entry = |title: &str, detail: ActivityDetail| Activity {
            id: 0,
            pet_name: "Buddy".to_string(),
            title: title.to_string(),
            detail,
            date: None,
            time: None,
            notes: String::new(),
        };
        let log = vec![
            entry(
                "Morning Walk",
                ActivityDetail::Walk {
                    duration: "30 minutes".to_string(),
                },
            ),
            entry(
                "Breakfast",
                ActivityDetail::Feeding {
                    amount: "1 cup".to_string(),
                },
            ),
            entry("Checkup", ActivityDetail::Vet),
        ];

        let matched = FilterEngine::apply(&log, &ActivityFilter::new("walk"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Morning Walk");

        let everything = FilterEngine::apply(&log, &ActivityFilter::new("all"));
        assert_eq!(everything.len(), 3);
    }

    #[test]
    fn all_any_filter_is_identity() {
        let pets = vec![
            pet("Buddy", PetType::Dog, "Golden Retriever"),
            pet("Whiskers", PetType::Cat, "Persian"),
        ];

        let filter = PetFilter::default();
        let matched = FilterEngine::apply(&pets, &filter);
        assert_eq!(matched, pets);
    }

    #[test]
    fn apply_preserves_order_and_is_idempotent() {
        let pets = vec![
            pet("Buddy", PetType::Dog, "Golden Retriever"),
            pet("Charlie", PetType::Dog, "Beagle"),
            pet("Whiskers", PetType::Cat, "Persian"),
            pet("Rex", PetType::Dog, "Labrador"),
        ];

        let filter = PetFilter::new("", "dog");
        let once = FilterEngine::apply(&pets, &filter);
        let names: Vec<_> = once.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Buddy", "Charlie", "Rex"]);

        let twice = FilterEngine::apply(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_returns_empty() {
        let pets = vec![pet("Buddy", PetType::Dog, "Golden Retriever")];
        let filter = PetFilter::new("zebra", "all");
        assert!(FilterEngine::apply(&pets, &filter).is_empty());
    }
}
