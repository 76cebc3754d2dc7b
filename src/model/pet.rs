use serde::{Deserialize, Serialize};

use crate::transport::QueryParams;

/// A pet as served by the adoption API.
///
/// Field names follow the server's camelCase JSON (`petId`, `petSize`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub pet_id: u32,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub age: u32,
    pub pet_size: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    pub is_adopted: bool,
}

/// Filters for listing pets.
///
/// Every field is optional; unset fields are simply left out of the query
/// string. The server applies its own defaults for missing filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetQuery {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub pet_size: Option<String>,
}

impl PetQuery {
    /// Lowers the filters into wire-level query parameters.
    pub fn into_params(self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(min_age) = self.min_age {
            params.insert("minAge", min_age);
        }
        if let Some(max_age) = self.max_age {
            params.insert("maxAge", max_age);
        }
        if let Some(species) = self.species {
            params.insert("species", species);
        }
        if let Some(gender) = self.gender {
            params.insert("gender", gender);
        }
        if let Some(pet_size) = self.pet_size {
            params.insert("petSize", pet_size);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lowers_to_empty_params() {
        assert!(PetQuery::default().into_params().is_empty());
    }

    #[test]
    fn set_filters_appear_with_wire_names() {
        let query = PetQuery {
            min_age: Some(1),
            species: Some("dog".into()),
            ..Default::default()
        };
        let pairs = query.into_params().pairs();
        assert_eq!(
            pairs,
            vec![
                ("minAge".to_string(), "1".to_string()),
                ("species".to_string(), "dog".to_string()),
            ]
        );
    }

    #[test]
    fn pet_decodes_from_camel_case_json() {
        let json = r#"{
            "petId": 7,
            "name": "Mochi",
            "species": "cat",
            "breed": "Shorthair",
            "gender": "female",
            "age": 3,
            "petSize": "small",
            "color": "gray",
            "description": "Sleeps all day",
            "profilePic": "https://cdn.example.com/mochi.jpg",
            "isAdopted": false
        }"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.pet_id, 7);
        assert_eq!(pet.name, "Mochi");
        assert_eq!(pet.pet_size, "small");
        assert!(!pet.is_adopted);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"{
            "petId": 8,
            "name": "Rex",
            "species": "dog",
            "breed": "Mix",
            "gender": "male",
            "age": 5,
            "petSize": "large",
            "color": "brown",
            "isAdopted": true
        }"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.description, None);
        assert_eq!(pet.profile_pic, None);
    }
}
