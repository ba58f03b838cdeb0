//! Generates the node model into `OUT_DIR` from the Lox grammar schema.

use std::env;
use std::error::Error;
use std::path::PathBuf;

use config::constants::GENERATED_FILE_NAME;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let source = lox_astgen::generate_lox_ast()?;
    let out = PathBuf::from(env::var("OUT_DIR")?).join(GENERATED_FILE_NAME);
    lox_astgen::write_generated(&out, &source)?;
    Ok(())
}
