use serde::{Deserialize, Deserializer};

use crate::entities::{actor, director, movie, oscar};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Shared by actors and directors.
#[derive(Clone, Debug, Deserialize)]
pub struct PersonPayload {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PersonPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub birth_year: Option<Option<i32>>,
}

impl PersonPatch {
    fn merge(self, name: String, birth_year: Option<i32>) -> PersonPayload {
        PersonPayload {
            name: self.name.unwrap_or(name),
            birth_year: self.birth_year.unwrap_or(birth_year),
        }
    }

    pub fn merge_actor(self, current: actor::Model) -> PersonPayload {
        self.merge(current.name, current.birth_year)
    }

    pub fn merge_director(self, current: director::Model) -> PersonPayload {
        self.merge(current.name, current.birth_year)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MoviePayload {
    pub name: String,
    pub description: String,
    pub duration_in_min: f64,
    pub release_year: i32,
    #[serde(default)]
    pub pic_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MoviePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_in_min: Option<f64>,
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub pic_url: Option<Option<String>>,
}

impl MoviePatch {
    pub fn merge(self, current: movie::Model) -> MoviePayload {
        MoviePayload {
            name: self.name.unwrap_or(current.name),
            description: self.description.unwrap_or(current.description),
            duration_in_min: self.duration_in_min.unwrap_or(current.duration_in_min),
            release_year: self.release_year.unwrap_or(current.release_year),
            pic_url: self.pic_url.unwrap_or(current.pic_url),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RatingPayload {
    pub rating: i64,
}

/// Body of `POST /movies/{id}/actor`.
#[derive(Clone, Debug, Deserialize)]
pub struct CastPayload {
    pub actor_name: String,
    pub salary: i32,
    pub main_role: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OscarPayload {
    pub nomination: String,
    #[serde(default)]
    pub ceremony_year: Option<i32>,
    pub movie_id: i32,
    #[serde(default)]
    pub actor_id: Option<i32>,
    #[serde(default)]
    pub director_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OscarPatch {
    pub nomination: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub ceremony_year: Option<Option<i32>>,
    pub movie_id: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub actor_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub director_id: Option<Option<i32>>,
}

impl OscarPatch {
    pub fn merge(self, current: oscar::Model) -> OscarPayload {
        OscarPayload {
            nomination: self.nomination.unwrap_or(current.nomination),
            ceremony_year: self.ceremony_year.unwrap_or(current.ceremony_year),
            movie_id: self.movie_id.unwrap_or(current.movie_id),
            actor_id: self.actor_id.unwrap_or(current.actor_id),
            director_id: self.director_id.unwrap_or(current.director_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_oscar() -> oscar::Model {
        oscar::Model {
            id: 1,
            nomination: "ACTOR IN A LEADING ROLE".into(),
            ceremony_year: Some(2011),
            movie_id: 3,
            actor_id: Some(7),
            director_id: None,
        }
    }

    #[test]
    fn patch_keeps_absent_fields_and_clears_explicit_nulls() {
        let patch: OscarPatch =
            serde_json::from_str(r#"{"nomination": "best picture", "actor_id": null}"#).unwrap();
        let merged = patch.merge(stored_oscar());

        assert_eq!(merged.nomination, "best picture");
        assert_eq!(merged.actor_id, None);
        assert_eq!(merged.ceremony_year, Some(2011));
        assert_eq!(merged.movie_id, 3);
    }

    #[test]
    fn empty_patch_reproduces_the_stored_row() {
        let patch: MoviePatch = serde_json::from_str("{}").unwrap();
        let merged = patch.merge(movie::Model {
            id: 9,
            name: "Heat".into(),
            description: "Crime".into(),
            duration_in_min: 170.0,
            release_year: 1995,
            pic_url: Some("https://img.example/heat.jpg".into()),
        });

        assert_eq!(merged.name, "Heat");
        assert_eq!(merged.pic_url.as_deref(), Some("https://img.example/heat.jpg"));
    }

    #[test]
    fn person_patch_can_set_birth_year() {
        let patch: PersonPatch = serde_json::from_str(r#"{"birth_year": 1974}"#).unwrap();
        let merged =
            patch.merge_actor(actor::Model { id: 1, name: "Leo".into(), birth_year: None });
        assert_eq!(merged.birth_year, Some(1974));
        assert_eq!(merged.name, "Leo");
    }
}
