// Infrastructure layer: adapters, file I/O, serde, eventing
pub mod event_ndjson;
pub mod graph_json_adapter;
pub mod schema_validator;
