use mergington_activities::database::seed;

// Prints the built-in catalog in the format ACTIVITIES_FILE accepts.
fn main() {
    match serde_json::to_string_pretty(&seed::default_catalog()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("catalog export failed: {}", e);
            std::process::exit(1);
        }
    }
}
