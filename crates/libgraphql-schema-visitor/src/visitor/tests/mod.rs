mod named_type_visitor_map_tests;
