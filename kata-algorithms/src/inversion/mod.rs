pub mod merge_count;
