pub mod ops_find;
