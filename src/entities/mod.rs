pub mod storage_entry;
