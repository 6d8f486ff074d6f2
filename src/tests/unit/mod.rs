mod seed_selector_tests;
