//! Users source backed by a users document on disk.
//!
//! The document uses the same wire shape the users API serves, so an export
//! of `GET /api/users` can be fed straight back in. Links are ignored.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::info;

use crate::domain::ports::UsersQuery;
use crate::domain::representation::{
    DefaultUsersRepresenter, UserRepresenter, UsersRepresentationError,
};
use crate::domain::{Error, LoginName, User};

/// Errors raised while loading a users document.
#[derive(Debug, thiserror::Error)]
pub enum UsersDocumentError {
    /// The file could not be read.
    #[error("failed to read users document at {path}: {source}")]
    Read {
        /// Location of the document.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file content is not a valid users document.
    #[error("failed to parse users document: {0}")]
    Parse(#[from] UsersRepresentationError),
}

/// In-memory users source populated from a users document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentUsersQuery {
    users: Vec<User>,
}

impl DocumentUsersQuery {
    /// Serve exactly `users`, in order.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Parse a users document from JSON text.
    ///
    /// # Examples
    /// ```
    /// use users_api::outbound::users_document::DocumentUsersQuery;
    ///
    /// let query = DocumentUsersQuery::from_json(r#"{"users":[{"login_name":"jdoe"}]}"#)
    ///     .expect("valid users document");
    /// assert_eq!(query.users().len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, UsersDocumentError> {
        let users = DefaultUsersRepresenter::new(UserRepresenter).parse_str(json)?;
        Ok(Self::new(users))
    }

    /// Read and parse the users document at `path`.
    pub fn load(path: &Path) -> Result<Self, UsersDocumentError> {
        let json = read_to_string(path).map_err(|source| UsersDocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let query = Self::from_json(&json)?;
        info!(path = %path.display(), count = query.users.len(), "loaded users document");
        Ok(query)
    }

    /// Users served by this source.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

fn read_to_string(path: &Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path must include a file name")
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.read_to_string(Path::new(file_name))
}

#[async_trait]
impl UsersQuery for DocumentUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.users.clone())
    }

    async fn find_user(&self, login_name: &LoginName) -> Result<Option<User>, Error> {
        Ok(self
            .users
            .iter()
            .find(|user| user.login_name() == login_name)
            .cloned())
    }
}
