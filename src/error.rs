use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Could not determine the current working directory: {}", .0)]
    CurrentDirectory(std::io::Error),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_display_names_file_and_path() {
        let err = Error::io_error(
            "bookmarks".to_string(),
            "/home/user/.bookmarks".to_string(),
            std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );

        let message = err.to_string();
        assert!(message.contains("bookmarks file"));
        assert!(message.contains("`/home/user/.bookmarks`"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_terminal_error_from_io() {
        let err: Error = std::io::Error::new(ErrorKind::Other, "no tty").into();
        assert!(matches!(err, Error::Terminal(_)));
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }
}
