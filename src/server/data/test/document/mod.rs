use crate::server::data::document::DocumentRepository;
use sea_orm::DbErr;
use serde_json::{json, Map, Value};
use test_utils::{builder::TestBuilder, factory, fixture};

mod delete_one;
mod find_all;
mod find_one;
mod insert_one;
mod update_one;

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}
