mod import_tests;
mod report_tests;
