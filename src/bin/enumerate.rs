//! Enumerate canonical presentations up to the given limits.
//!
//! Usage: enumerate <max-generators> <max-total-length> [--json] [--profile]

use presatlas::{
    enumerate_presentations, EnumerationJson, Presentation, PresentationJson, SearchConfig,
};
use std::env;
use std::process;

fn usage() -> ! {
    eprintln!("Usage: enumerate <max-generators> <max-total-length> [--json] [--profile]");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut limits = Vec::new();
    let mut json = false;
    let mut profiling = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            "--profile" => profiling = true,
            other => match other.parse::<usize>() {
                Ok(value) => limits.push(value),
                Err(_) => usage(),
            },
        }
    }
    if limits.len() != 2 {
        usage();
    }

    let config = SearchConfig {
        max_generators: limits[0],
        max_total_length: limits[1],
        enable_profiling: profiling,
    };
    let mut enumerator = enumerate_presentations(config);
    let presentations: Vec<Presentation> = enumerator.by_ref().collect();

    if json {
        let dump = EnumerationJson {
            presentations: presentations.iter().map(PresentationJson::from).collect(),
            profile: enumerator.profile().cloned(),
        };
        match serde_json::to_string_pretty(&dump) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to serialize results: {e}");
                process::exit(1);
            }
        }
        return;
    }

    for (i, presentation) in presentations.iter().enumerate() {
        println!(
            "{:4}  k={} n={}  {}",
            i,
            presentation.generator_count(),
            presentation.total_relation_length(),
            presentation
        );
    }
    println!("\n{} presentations", presentations.len());
    if let Some(profile) = enumerator.profile() {
        println!(
            "cells: {}, compositions: {} (+{} skipped), prefixes pruned: {}, \
             candidates completed: {}, relators accepted: {}",
            profile.cells_visited,
            profile.compositions_visited,
            profile.compositions_skipped,
            profile.prefixes_pruned,
            profile.candidates_completed,
            profile.relators_accepted,
        );
    }
}
