pub mod history_store_error;
