use super::types::{Animal, Species};

/// Insertion-ordered collection of animals.
#[derive(Clone, Debug, Default)]
pub struct Zoo {
    animals: Vec<Animal>,
}

impl Zoo {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// One line per animal, in insertion order.
    pub fn list_all(&self) -> Vec<String> {
        self.animals
            .iter()
            .map(|a| format!("{} Says: {}", a.describe(), a.vocalize()))
            .collect()
    }

    /// Animals of the given species, in insertion order.
    pub fn filter_by_species(&self, species: Species) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| a.species() == species)
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.animals.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }
}

impl Extend<Animal> for Zoo {
    fn extend<T: IntoIterator<Item = Animal>>(&mut self, iter: T) {
        self.animals.extend(iter);
    }
}

impl FromIterator<Animal> for Zoo {
    fn from_iter<T: IntoIterator<Item = Animal>>(iter: T) -> Self {
        Self {
            animals: iter.into_iter().collect(),
        }
    }
}
