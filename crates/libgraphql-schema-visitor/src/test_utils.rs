use crate::schema::Schema;
use crate::schema::SchemaBuilder;

pub(crate) fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .expect("schema parses")
        .build()
        .expect("schema builds")
}
