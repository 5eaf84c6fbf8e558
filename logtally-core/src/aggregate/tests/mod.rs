mod source_tests;
mod summary_tests;
