//! OpenAPI command - prints the API document to stdout

use crate::api::doc::openapi_json;

pub fn run() -> anyhow::Result<()> {
    println!("{}", openapi_json()?);
    Ok(())
}
