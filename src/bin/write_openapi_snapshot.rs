// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use techtest_api::presentation::http::openapi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = openapi::snapshot_path();
    openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
