pub mod db;
pub mod processed_text {
    pub mod disabled;
    pub mod entity;
    pub mod repository;
}
