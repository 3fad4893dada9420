pub mod db;
pub mod expense {
    pub mod entity;
    pub mod repository;
}
pub mod income {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
