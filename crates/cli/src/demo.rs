//! Console walkthrough of every unit.
//!
//! Results go to stdout; diagnostics from the sentinel drills go through
//! `tracing` (stderr), so a failed exercise never stops the run.

use anyhow::{Context, Result};
use lessons::cfg::AgeCfg;
use lessons::drills::{self, samples, AgeOutcome};
use lessons::geometry as geom;
use lessons::zoo::{Animal, Species, Zoo};
use lessons::Loose;

pub(crate) fn sample_zoo() -> Zoo {
    let mut zoo = Zoo::new();
    zoo.add(Animal::cat("Mimi", 3));
    zoo.add(Animal::dog("Rex", 5));
    zoo.add(Animal::generic("Bicho", 1));
    zoo
}

pub fn run_all() {
    println!("\n=== Level 1 ===");
    println!("{}", drills::greeting());
    println!("{}", drills::name_message(samples::SAMPLE_NAME));

    println!("\n=== Level 2 ===");
    match drills::robust_sum(&Loose::from(10), &Loose::from("5")) {
        Ok(s) => println!("Robust sum: {s}"),
        Err(err) => tracing::warn!(%err, "robust sum"),
    }
    let indices = samples::index_attempts();
    println!("Index access over {:?}:", samples::SAMPLE_SEQUENCE);
    for idx in &indices {
        let got = drills::element_at(&samples::SAMPLE_SEQUENCE, idx);
        println!("  [{idx}] -> {}", show(got));
    }
    println!("Division cases:");
    for (a, b) in samples::DIVIDE_CASES {
        divide(a, b);
    }

    println!("\n=== Level 3 ===");
    let record = samples::person_record();
    for key in samples::LOOKUP_KEYS {
        let got = drills::lookup(&record, key);
        println!("  {key} -> {}", show(got));
    }
    let fallback = Loose::from("address not found");
    println!(
        "  address (with default) -> {}",
        drills::lookup_or(&record, "address", &fallback)
    );
    let cfg = AgeCfg::default();
    for batch in samples::age_attempt_batches() {
        let shown: Vec<String> = batch.iter().map(|v| v.to_string()).collect();
        println!("Age attempts: [{}]", shown.join(", "));
        print_age(&drills::request_valid_age(batch, &cfg));
    }

    println!("\n=== Extra challenge ===");
    if let Err(err) = grades_from_raw() {
        tracing::warn!(%err, "grades");
    }
    if let Err(err) = grades(samples::GRADE_INPUT) {
        tracing::warn!(%err, "grades");
    }

    println!("\n=== Geometry ===");
    if let Err(err) = geometry(6.25, 2.0, 3.0, 4.0, 3.0, 4.0) {
        tracing::warn!(%err, "geometry");
    }

    println!("\n=== Zoo ===");
    zoo();
}

fn show<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map_or_else(|| "none".to_string(), |x| x.to_string())
}

fn grades_from_raw() -> Result<()> {
    let avg = drills::average_grades(&samples::raw_grades())?;
    println!("Average: {avg:.2}");
    Ok(())
}

pub fn geometry(value: f64, radius: f64, base: f64, height: f64, a: f64, b: f64) -> Result<()> {
    let root = geom::sqrt(value).with_context(|| format!("square root of {value}"))?;
    let r = geom::roundings(value);
    println!("sqrt({value}) = {root}");
    println!(
        "roundings({}) = floor {} / ceil {} / nearest {}",
        value, r.floor, r.ceil, r.nearest
    );
    println!("circle area (r={radius}) = {:.4}", geom::circle_area(radius));
    println!(
        "triangle area (b={base}, h={height}) = {}",
        geom::triangle_area(base, height)
    );
    println!("hypotenuse ({a}, {b}) = {}", geom::hypotenuse(a, b));
    Ok(())
}

pub fn zoo() {
    let zoo = sample_zoo();
    for line in zoo.list_all() {
        println!("{line}");
    }
    let cats: Vec<&str> = zoo
        .filter_by_species(Species::Cat)
        .iter()
        .map(|a| a.name())
        .collect();
    println!("cats: {}", cats.join(", "));
}

pub fn sum(a: &str, b: &str) -> Result<()> {
    let s = drills::robust_sum(&Loose::parse_token(a), &Loose::parse_token(b))?;
    println!("{s}");
    Ok(())
}

pub fn divide(dividend: &str, divisor: &str) {
    let q = drills::divide(dividend, divisor);
    println!("  {dividend} / {divisor} -> {}", show(q));
}

pub fn age(attempts: &[String]) {
    let cfg = AgeCfg::default();
    let outcome = drills::request_valid_age(attempts.iter().map(|a| Loose::parse_token(a)), &cfg);
    print_age(&outcome);
}

fn print_age(outcome: &AgeOutcome) {
    match outcome {
        AgeOutcome::Accepted {
            message, attempt, ..
        } => println!("  {message} (attempt {attempt})"),
        AgeOutcome::Exhausted { attempts, .. } => {
            println!("  no valid age in {attempts} attempt(s)")
        }
    }
}

pub fn grades(input: &str) -> Result<()> {
    let parsed = drills::parse_grades(input)?;
    let avg = drills::mean(&parsed)?;
    println!("Grades {parsed:?} average: {avg:.2}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_zoo_has_one_of_each() {
        let zoo = sample_zoo();
        assert_eq!(zoo.len(), 3);
        for species in Species::ALL {
            assert_eq!(zoo.filter_by_species(species).len(), 1);
        }
    }

    #[test]
    fn propagating_commands_surface_errors() {
        assert!(sum("10", "5").is_ok());
        assert!(sum("object", "1").is_err());
        assert!(grades("  ").is_err());
        assert!(geometry(-1.0, 1.0, 1.0, 1.0, 3.0, 4.0).is_err());
    }
}
