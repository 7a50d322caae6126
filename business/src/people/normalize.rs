//! Turns relation lists into display scalars.

use crate::people::{Person, RawPerson, SpeciesCount};

/// Length of a relation list; an empty list counts as `0`.
pub fn relation_count(refs: &[String]) -> u32 {
    u32::try_from(refs.len()).unwrap_or(u32::MAX)
}

/// Species are the exception: an empty list means "not available", not zero.
pub fn species_count(refs: &[String]) -> SpeciesCount {
    if refs.is_empty() {
        SpeciesCount::NotAvailable
    } else {
        SpeciesCount::Count(relation_count(refs))
    }
}

/// Build the display record from a raw person and its resolved homeworld name.
///
/// The raw homeworld URL is dropped here; only `url` survives as a reference.
pub fn normalize_person(raw: RawPerson, homeworld: String) -> Person {
    let films = relation_count(&raw.films);
    let species = species_count(&raw.species);
    let vehicles = relation_count(&raw.vehicles);
    let starships = relation_count(&raw.starships);

    Person {
        name: raw.name,
        height: raw.height,
        mass: raw.mass,
        hair_color: raw.hair_color,
        skin_color: raw.skin_color,
        eye_color: raw.eye_color,
        birth_year: raw.birth_year,
        gender: raw.gender,
        homeworld,
        films,
        species,
        vehicles,
        starships,
        created: raw.created,
        edited: raw.edited,
        url: raw.url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(n: usize) -> Vec<String> {
        (1..=n)
            .map(|i| format!("https://swapi.dev/api/things/{i}/"))
            .collect()
    }

    fn raw(species: usize, vehicles: usize, starships: usize) -> RawPerson {
        RawPerson {
            name: "R2-D2".to_owned(),
            height: "96".to_owned(),
            mass: "32".to_owned(),
            hair_color: "n/a".to_owned(),
            skin_color: "white, blue".to_owned(),
            eye_color: "red".to_owned(),
            birth_year: "33BBY".to_owned(),
            gender: "n/a".to_owned(),
            homeworld: "https://swapi.dev/api/planets/8/".to_owned(),
            films: refs(6),
            species: refs(species),
            vehicles: refs(vehicles),
            starships: refs(starships),
            created: "2014-12-10T15:11:50.376000Z".to_owned(),
            edited: "2014-12-20T21:17:50.311000Z".to_owned(),
            url: "https://swapi.dev/api/people/3/".to_owned(),
        }
    }

    #[test]
    fn test_empty_species_becomes_sentinel() {
        assert_eq!(species_count(&[]), SpeciesCount::NotAvailable);
        assert_eq!(species_count(&refs(2)), SpeciesCount::Count(2));
    }

    #[test]
    fn test_empty_vehicles_and_starships_become_zero() {
        let person = normalize_person(raw(0, 0, 0), "Naboo".to_owned());

        assert_eq!(person.vehicles, 0);
        assert_eq!(person.starships, 0);
        assert_eq!(person.species, SpeciesCount::NotAvailable);
    }

    #[test]
    fn test_counts_replace_lists() {
        let person = normalize_person(raw(1, 2, 3), "Naboo".to_owned());

        assert_eq!(person.films, 6);
        assert_eq!(person.species, SpeciesCount::Count(1));
        assert_eq!(person.vehicles, 2);
        assert_eq!(person.starships, 3);
    }

    #[test]
    fn test_homeworld_name_replaces_reference() {
        let person = normalize_person(raw(1, 0, 0), "Naboo".to_owned());

        assert_eq!(person.homeworld, "Naboo");
        assert_eq!(person.url, "https://swapi.dev/api/people/3/");
        assert_eq!(person.name, "R2-D2");
        assert_eq!(person.mass, "32");
    }
}
