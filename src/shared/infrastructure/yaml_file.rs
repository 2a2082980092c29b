// YAML file helpers shared by the aggregate store and the configuration loader.
//
// - read_or_default: a missing or blank file reads as T::default().
// - write_atomic: serialize, write a hidden sibling, sync, rename over the target.
//   A failed write or rename removes the sibling again.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum YamlFileError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub async fn read_or_default<T>(path: &Path) -> Result<T, YamlFileError>
where
    T: DeserializeOwned + Default,
{
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(YamlFileError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if text.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&text).map_err(|source| YamlFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn write_atomic<T>(path: &Path, value: &T) -> Result<(), YamlFileError>
where
    T: Serialize + ?Sized,
{
    let io_error = |source: std::io::Error| YamlFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = serde_yaml::to_string(value).map_err(|source| YamlFileError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!(".{file_name}.tmp"));

    let result = match write_staging(&staging, text.as_bytes()).await {
        Ok(()) => tokio::fs::rename(&staging, path).await,
        Err(err) => Err(err),
    };
    if let Err(err) = result {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            if cleanup.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %staging.display(), error = %cleanup, "failed to remove staging file");
            }
        }
        return Err(io_error(err));
    }
    Ok(())
}

async fn write_staging(staging: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(staging).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}
