mod extract_tests;
mod ip_tests;
