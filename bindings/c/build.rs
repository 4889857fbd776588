use std::env;
use std::path::PathBuf;

const HEADER_NAME: &str = "boxinterp.h";

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let include_dir = crate_dir.join("include");
    std::fs::create_dir_all(&include_dir).unwrap();

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml")).unwrap();
    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("Unable to generate boxinterp.h")
        .write_to_file(include_dir.join(HEADER_NAME));

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
