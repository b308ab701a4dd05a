use std::env;
use std::path::PathBuf;

/// Runtime configuration, resolved once in `main` from environment variables
/// and injected into the Actix application as `web::Data`.
///
/// The two directory roots are explicit here so every file operation resolves
/// against injected paths instead of ambient process-wide conventions.
#[derive(Clone, Debug)]
pub struct Config {
    /// Private storage root. Uploaded files land under
    /// `<storage_root>/uploads/books` until they are associated with a book.
    pub storage_root: PathBuf,
    /// Publicly served root. Promoted images live here, named by their
    /// identifiers, and are served directly by `actix-files`.
    pub public_root: PathBuf,
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

/// The staging and public directory roots the image reconciler operates on.
#[derive(Clone, Debug)]
pub struct ImageRoots {
    pub staging: PathBuf,
    pub public: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            storage_root: env_path("BOOKS_STORAGE_ROOT", "storage"),
            public_root: env_path("BOOKS_PUBLIC_ROOT", "public"),
            db_path: env_path("BOOKS_DB", "books.sqlite"),
            host: env::var("BOOKS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("BOOKS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Where uploaded files wait before being associated with a book.
    pub fn staging_dir(&self) -> PathBuf {
        self.storage_root.join("uploads").join("books")
    }

    pub fn image_roots(&self) -> ImageRoots {
        ImageRoots {
            staging: self.staging_dir(),
            public: self.public_root.clone(),
        }
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
