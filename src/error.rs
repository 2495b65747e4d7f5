pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid date \"{value}\" on posting {slug}")]
    InvalidDate { slug: String, value: String },

    #[error("Invalid posting {slug}: {source}")]
    Validation {
        slug: String,
        #[source]
        source: validator::ValidationErrors,
    },
}
