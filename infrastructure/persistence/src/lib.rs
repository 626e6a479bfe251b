pub mod client;
pub mod product {
    pub mod document;
    pub mod query;
    pub mod repository;
}
