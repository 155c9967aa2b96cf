use quarry_build::generate;
use quarry_schema::{config::Config, node::Model, types::FieldType};
use std::{env, fs, path::PathBuf};

fn fixtures() -> Vec<(Model, Config)> {
    let user = Model::new("User", "users")
        .field("id", FieldType::Int)
        .field("name", FieldType::String)
        .field("active", FieldType::Bool)
        .field("created_at", FieldType::DateTime)
        .field("score", FieldType::Double);

    let audit_event = Model::new("AuditEvent", "audit_events")
        .field("eventName", FieldType::String)
        .field("payloadSize", FieldType::Int);

    vec![
        (user, Config::default()),
        (
            audit_event,
            Config::new().with_snake_case_names().with_id_and_date_fields(),
        ),
    ]
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let mut source = String::new();
    for (model, config) in fixtures() {
        let artifact = generate(&model, &config).expect("fixture model must generate");
        source.push_str(&artifact.render());
        source.push('\n');
    }

    fs::write(out_dir.join("generated.rs"), source).expect("write generated fixtures");

    println!("cargo::rerun-if-changed=build.rs");
}
