mod schema_directive_visitors_tests;
