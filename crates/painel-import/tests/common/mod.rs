pub mod xlsx_fixture_builder;
