mod catalog_client_tests;
mod support;
