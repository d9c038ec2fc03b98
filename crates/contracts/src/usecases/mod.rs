pub mod u101_load_catalog;
