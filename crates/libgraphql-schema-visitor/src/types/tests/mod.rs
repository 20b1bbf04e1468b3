mod graphql_type_tests;
mod type_annotation_tests;
