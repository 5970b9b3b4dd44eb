mod fields_tests;
