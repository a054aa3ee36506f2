// Test modules for Stakeclock
// Each module covers the public behavior of the corresponding source file

mod settings_tests;
