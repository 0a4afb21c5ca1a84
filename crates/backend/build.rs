use std::env;
use std::fs;
use std::path::Path;

// Place config.toml next to the produced binary so the runtime loader
// finds it without extra deployment steps.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR sits under target/<profile>/build/<crate>-<hash>/out;
    // walk back up to target/<profile>.
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("could not locate target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("could not locate workspace root");

    let source = workspace_root.join("config.toml");
    let dest = target_dir.join("config.toml");

    if source.exists() {
        fs::copy(&source, &dest)
            .unwrap_or_else(|e| panic!("failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source
        );
    }
}
