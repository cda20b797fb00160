use std::fmt;

use serde::Serialize;

/// Closed set of speaker variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Generic,
    Cat,
    Dog,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Generic, Species::Cat, Species::Dog];

    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Species::Generic => "generic",
            Species::Cat => "cat",
            Species::Dog => "dog",
        }
    }

    #[inline]
    pub fn sound(self) -> &'static str {
        match self {
            Species::Generic => "Generic animal sound",
            Species::Cat => "Miau!",
            Species::Dog => "Au au!",
        }
    }

    /// Inverse of `tag`.
    pub fn from_tag(tag: &str) -> Option<Species> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An animal; immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Animal {
    name: String,
    age: u32,
    species: Species,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32, species: Species) -> Self {
        Self {
            name: name.into(),
            age,
            species,
        }
    }

    pub fn cat(name: impl Into<String>, age: u32) -> Self {
        Self::new(name, age, Species::Cat)
    }

    pub fn dog(name: impl Into<String>, age: u32) -> Self {
        Self::new(name, age, Species::Dog)
    }

    pub fn generic(name: impl Into<String>, age: u32) -> Self {
        Self::new(name, age, Species::Generic)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }
    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn vocalize(&self) -> &'static str {
        self.species.sound()
    }

    pub fn describe(&self) -> String {
        format!("I am {} and I am {} years old.", self.name, self.age)
    }
}
