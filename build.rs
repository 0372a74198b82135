use std::{env, error::Error, fs, path::Path};

#[path = "build/render.rs"]
mod render;

use render::{CONFIG_ENV, CONFIG_FILE, EXAMPLE_CONFIG_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either toml, the override or the generator changes
    println!("cargo:rerun-if-changed={}", CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", EXAMPLE_CONFIG_FILE);
    println!("cargo:rerun-if-changed=build/render.rs");
    println!("cargo:rerun-if-env-changed={}", CONFIG_ENV);

    let override_path = env::var(CONFIG_ENV).ok();
    let selected = render::select_source(override_path.as_deref(), |path| Path::new(path).exists())?;

    if selected.placeholder {
        println!(
            "cargo:warning={} not found, building with placeholder values from {}",
            CONFIG_FILE, EXAMPLE_CONFIG_FILE
        );
    } else {
        println!("cargo:rerun-if-changed={}", selected.path);
    }

    // Read and parse
    let toml_str = fs::read_to_string(&selected.path)?;
    let raw = render::parse(&toml_str)?;

    // Generate Rust code
    let code = render::render(&raw, &selected.path);

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
