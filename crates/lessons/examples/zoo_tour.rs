//! Walk through the zoo: list every animal, then only the cats.

use lessons::zoo::{Animal, Species, Zoo};

fn main() {
    let mut zoo = Zoo::new();
    zoo.add(Animal::cat("Mimi", 3));
    zoo.add(Animal::dog("Rex", 5));
    zoo.add(Animal::generic("Bicho", 1));

    for line in zoo.list_all() {
        println!("{line}");
    }
    for species in Species::ALL {
        let names: Vec<&str> = zoo
            .filter_by_species(species)
            .iter()
            .map(|a| a.name())
            .collect();
        println!("{species}: {names:?}");
    }
}
