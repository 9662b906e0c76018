use crate::cli::opt;
use schemars::{JsonSchema, schema_for};
use std::path::Path;

pub(crate) fn exec(schema: opt::Schema) -> Result<(), anyhow::Error> {
    let opt::Schema { output_folder } = schema;

    if !output_folder.exists() {
        std::fs::create_dir_all(&output_folder)?;
    }

    generate_and_store_schema::<ampere_config::page::VersionConfig>("Ampere Page", &output_folder.join("page.json"))?;
    generate_and_store_schema::<ampere_config::bank::VersionConfig>(
        "Ampere Question Bank",
        &output_folder.join("bank.json"),
    )?;

    println!("Generated schemas in {}", output_folder.display());
    Ok(())
}

fn rename_schema(schema: serde_json::Value, title: &str) -> serde_json::Value {
    if let serde_json::Value::Object(mut object) = schema {
        object.insert("title".to_string(), serde_json::Value::String(title.to_string()));
        serde_json::Value::Object(object)
    } else {
        schema
    }
}

fn generate_and_store_schema<T: JsonSchema>(title: &str, output_path: &Path) -> Result<(), anyhow::Error> {
    let schema = schema_for!(T);
    let schema = rename_schema(schema.to_value(), title);
    let schema_json = serde_json::to_string_pretty(&schema)?;
    std::fs::write(output_path, schema_json)?;
    Ok(())
}
