use std::env;
use std::fs;
use std::path::Path;

/// Compiles `data/airports.csv` into a static Rust array at build time,
/// generating a `&[(&str, RawAirport)]` literal into `OUT_DIR` rather than
/// carrying a long static table literal in source.
fn main() {
    println!("cargo:rerun-if-changed=data/airports.csv");

    let mut reader = csv::Reader::from_path("data/airports.csv")
        .expect("failed to open data/airports.csv");

    let mut entries = String::new();
    for record in reader.records() {
        let record = record.expect("malformed row in data/airports.csv");
        let code = &record[0];
        let name = &record[1];
        let city = &record[2];
        let country = &record[3];
        let lat: f64 = record[4].parse().expect("invalid latitude");
        let lon: f64 = record[5].parse().expect("invalid longitude");
        let timezone = &record[6];

        entries.push_str(&format!(
            "    (\"{code}\", RawAirport {{ code: \"{code}\", name: {name:?}, city: {city:?}, country: \"{country}\", lat: {lat}_f64, lon: {lon}_f64, timezone: \"{timezone}\" }}),\n",
        ));
    }

    let generated = format!(
        "/// Generated from `data/airports.csv` by build.rs. Do not edit by hand.\npub static RAW_AIRPORTS: &[(&str, RawAirport)] = &[\n{entries}];\n"
    );

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("airports_generated.rs");
    fs::write(&dest, generated).expect("failed to write generated airport table");
}
