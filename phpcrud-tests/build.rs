fn main() {
    // Generate classes for integration tests
    // The generated PHP is only read by tests (via include_str!)
    phpcrud_codegen::generate_from_cargo_metadata().expect("codegen failed");

    let out_dir = std::env::var("OUT_DIR").unwrap();
    phpcrud_codegen::CodegenBuilder::new("stubs/feature.php")
        .output_dir(std::path::Path::new(&out_dir).join("renamed"))
        .rename_get_if_exists()
        .generate()
        .expect("codegen failed");

    println!("cargo:rerun-if-changed=stubs/feature.php");
}
