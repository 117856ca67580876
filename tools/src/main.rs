// Generate ../src/ramps.rs from the palettes in data/.  Run from tools/.
//
// data/tailwind.hjson maps each ramp to an object `{ shade: color }`,
// data/radix.hjson maps each ramp to an array of colors (steps 1, 2,...).
// Both list their gray-like ramps under `neutrals`.

use std::{string::String,
          collections::BTreeSet,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value::{self, *};
use ditto_tones::{parse_color, Oklch};

const NAME: &str = env!("CARGO_PKG_NAME");

struct RampSet {
    ident: &'static str,
    file: &'static str,
    title: &'static str,
}

const SETS: [RampSet; 2] = [
    RampSet { ident: "TAILWIND", file: "data/tailwind.hjson",
              title: "Tailwind CSS v4 default palette" },
    RampSet { ident: "RADIX", file: "data/radix.hjson",
              title: "Radix Colors light scales" },
];

#[derive(Debug)]
struct Ramp {
    name: String,
    shades: Vec<(String, Oklch)>,
}

fn color(file: &str, v: &Value) -> Oklch {
    match v {
        String(s) => match parse_color(s) {
            Ok(c) => c,
            Err(e) => panic!("{NAME}: {file}: {e}") },
        _ => panic!("{NAME}: {file}: {v:?} is not a color"),
    }
}

fn ramp_of_json(file: &str, name: &str, json: &Value) -> Ramp {
    let shades: Vec<_> = match json {
        Object(m) => m.iter()
            .map(|(shade, c)| (shade.clone(), color(file, c)))
            .collect(),
        Array(a) => a.iter().enumerate()
            .map(|(i, c)| ((i + 1).to_string(), color(file, c)))
            .collect(),
        _ => panic!("{NAME}: {file}: ramp {name:?} is neither an object \
                     nor an array"),
    };
    if shades.is_empty() {
        panic!("{NAME}: {file}: ramp {name:?} is empty")
    }
    Ramp { name: name.to_string(), shades }
}

fn read_set(file: &str) -> Result<(Vec<String>, Vec<Ramp>), Box<dyn Error>> {
    let json: Value = serde_hjson::from_reader(File::open(file)?)?;
    let neutrals = match json.find("neutrals") {
        Some(Array(a)) => a.iter()
            .map(|v| match v {
                String(n) => n.clone(),
                _ => panic!("{NAME}: {file}: {v:?} is not a ramp name") })
            .collect(),
        None => vec![],
        Some(v) => panic!("{NAME}: {file}: neutrals = {v:?}"),
    };
    let ramps: Vec<_> = match json.find("ramps") {
        Some(Object(m)) => m.iter()
            .map(|(name, r)| ramp_of_json(file, name, r))
            .collect(),
        _ => panic!("{NAME}: {file}: no \"ramps\" object"),
    };
    let keys: Vec<_> = ramps[0].shades.iter().map(|(s, _)| s).collect();
    for r in &ramps {
        if !r.shades.iter().map(|(s, _)| s).eq(keys.iter().copied()) {
            panic!("{NAME}: {file}: ramp {:?} does not have the shades {keys:?}",
                   r.name)
        }
    }
    let names: BTreeSet<_> = ramps.iter().map(|r| r.name.as_str()).collect();
    for n in &neutrals {
        if !names.contains(n.as_str()) {
            panic!("{NAME}: {file}: unknown neutral ramp {n:?}")
        }
    }
    Ok((neutrals, ramps))
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut fh = BufWriter::new(File::create("../src/ramps.rs")?);
    let files: Vec<_> = SETS.iter().map(|s| s.file).collect();
    writeln!(fh, "// Written by {NAME} from {}\n\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;",
             files.join(" and "))?;

    for set in &SETS {
        let (neutrals, ramps) = read_set(set.file)?;
        let neutrals: Vec<_> = neutrals.iter().map(|n| format!("{n:?}")).collect();
        writeln!(fh, "\n// {}, number of ramps: {}", set.title, ramps.len())?;
        writeln!(fh, "lazy_static! {{\n  \
                      pub(crate) static ref {}: RampSetData = RampSetData {{\n    \
                      neutrals: vec![{}],\n    \
                      ramps: vec![",
                 set.ident, neutrals.join(", "))?;
        for r in &ramps {
            writeln!(fh, "      RampData {{ name: {:?}, shades: vec![", r.name)?;
            for (shade, c) in &r.shades {
                writeln!(fh, "        ({shade:?}, Oklch {{ l: {:.6}, c: {:.6}, \
                              h: {:>10.6} }}),", c.l, c.c, c.h)?;
            }
            writeln!(fh, "      ]}},")?;
        }
        writeln!(fh, "    ]\n  }};\n}}")?;
    }
    Ok(())
}
