use anyhow::{Context, Result};
use lessons::cfg::AgeCfg;
use lessons::drills::{self, samples};
use lessons::geometry as geom;
use lessons::zoo::Species;
use lessons::{DrillError, Loose};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::demo::sample_zoo;

/// Print the summary, or write it to `out`.
pub fn run(out: Option<&str>) -> Result<()> {
    let doc = summary()?;
    match out {
        Some(path) => {
            let written = write_summary(path, &doc)?;
            tracing::info!(path = %written.display(), "report written");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn outcome<T: serde::Serialize>(r: Result<T, DrillError>) -> Value {
    match r {
        Ok(v) => json!({ "ok": v }),
        Err(e) => json!({ "error": e.kind(), "message": e.to_string() }),
    }
}

/// Every drill on the demo inputs, as one JSON document.
pub fn summary() -> Result<Value> {
    let cfg = AgeCfg::default();
    let record = samples::person_record();
    let zoo = sample_zoo();
    let cats: Vec<&str> = zoo
        .filter_by_species(Species::Cat)
        .iter()
        .map(|a| a.name())
        .collect();

    let index: Vec<Value> = samples::index_attempts()
        .iter()
        .map(|idx| {
            json!({
                "index": idx,
                "result": outcome(drills::try_element_at(&samples::SAMPLE_SEQUENCE, idx)),
            })
        })
        .collect();
    let divide: Vec<Value> = samples::DIVIDE_CASES
        .iter()
        .map(|(a, b)| {
            json!({
                "dividend": a,
                "divisor": b,
                "result": outcome(drills::try_divide(a, b)),
            })
        })
        .collect();
    let lookup: Vec<Value> = samples::LOOKUP_KEYS
        .iter()
        .map(|k| json!({ "key": k, "value": drills::lookup(&record, k) }))
        .collect();
    let age: Vec<Value> = samples::age_attempt_batches()
        .into_iter()
        .map(|batch| -> Result<Value, serde_json::Error> {
            let attempts = serde_json::to_value(&batch)?;
            let result = serde_json::to_value(drills::request_valid_age(batch, &cfg))?;
            Ok(json!({ "attempts": attempts, "result": result }))
        })
        .collect::<Result<_, _>>()?;

    Ok(json!({
        "version": lessons::VERSION,
        "basics": {
            "greeting": drills::greeting(),
            "name": drills::name_message(samples::SAMPLE_NAME),
        },
        "robust_sum": outcome(drills::robust_sum(&Loose::from(10), &Loose::from("5"))),
        "index": index,
        "divide": divide,
        "lookup": lookup,
        "age": age,
        "grades": {
            "raw_average": outcome(drills::average_grades(&samples::raw_grades())),
            "parsed": outcome(drills::parse_grades(samples::GRADE_INPUT)),
            "parsed_average": outcome(
                drills::parse_grades(samples::GRADE_INPUT).and_then(|g| drills::mean(&g))
            ),
        },
        "geometry": {
            "sqrt": geom::sqrt(6.25).ok(),
            "roundings": geom::roundings(6.25),
            "circle_area": geom::circle_area(2.0),
            "triangle_area": geom::triangle_area(3.0, 4.0),
            "hypotenuse": geom::hypotenuse(3.0, 4.0),
        },
        "zoo": {
            "animals": zoo.list_all(),
            "cats": cats,
        },
    }))
}

/// Write `doc` as pretty JSON to `path`, creating parent directories.
pub fn write_summary<P: AsRef<Path>>(path: P, doc: &Value) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}
