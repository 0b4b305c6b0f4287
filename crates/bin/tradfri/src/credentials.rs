//! `psk.key` — the credential file written by `tradfri authenticate`.
//!
//! A single line `clientId=token`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tradfri_domain::credentials::Credentials;

/// Looked up in the working directory unless configured otherwise.
pub const DEFAULT_PATH: &str = "psk.key";

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("failed to access credential file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid credential file {path}, expected a single `clientId=token` line")]
    Malformed { path: PathBuf },
}

/// Read credentials from `path`. A missing file yields `None`.
///
/// # Errors
///
/// Returns [`CredentialsError::Malformed`] when the file does not hold exactly
/// one `clientId=token` pair.
pub fn read(path: &Path) -> Result<Option<Credentials>, CredentialsError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(CredentialsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse(&content)
        .map(Some)
        .ok_or_else(|| CredentialsError::Malformed {
            path: path.to_path_buf(),
        })
}

/// Persist `credentials` to `path`, readable by the owner only on Unix.
///
/// # Errors
///
/// Returns [`CredentialsError::Io`] when the file cannot be written.
pub fn write(path: &Path, credentials: &Credentials) -> Result<(), CredentialsError> {
    let io_error = |source| CredentialsError::Io {
        path: path.to_path_buf(),
        source,
    };
    let content = format!("{}={}", credentials.client_id, credentials.token);

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path).map_err(io_error)?;
    std::io::Write::write_all(&mut file, content.as_bytes()).map_err(io_error)
}

fn parse(content: &str) -> Option<Credentials> {
    let (client_id, token) = content.trim().split_once('=')?;
    let valid = |part: &str| !part.is_empty() && !part.contains(['=', '\n']);
    (valid(client_id) && valid(token)).then(|| Credentials::new(client_id, token))
}
