//! Reading and writing the bookmarks list and the result file.
//!
//! Both are plain text. The bookmarks file holds one path per line in
//! insertion order; the result file holds a single path.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};

use log::{debug, warn};

use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<Option<File>> {
    match File::open(path) {
        Ok(reader) => Ok(Some(reader)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_writer(file_description: &str, path: &str) -> Result<BufWriter<File>> {
    match File::create(path) {
        Ok(f) => Ok(BufWriter::new(f)),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Bookmarks as read from disk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BookmarksFile {
    pub bookmarks: Vec<String>,
    /// Lines that were not valid UTF-8 and had bytes replaced
    pub replaced_lines: usize,
}

/// Reads the bookmarks list from disk.
///
/// Every line becomes one entry, in file order. Lines that are not valid
/// UTF-8 are kept with the offending bytes replaced and counted in
/// [`BookmarksFile::replaced_lines`]. A missing file is not an error and
/// yields an empty list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or read.
pub fn get_bookmarks(bookmarks_path: &str) -> Result<BookmarksFile> {
    let Some(reader) = get_reader("bookmarks", bookmarks_path)? else {
        debug!("No bookmarks file at `{bookmarks_path}`, starting empty");
        return Ok(BookmarksFile::default());
    };

    let mut bookmarks_file = BookmarksFile::default();

    for (line_number, line) in BufReader::new(reader).split(b'\n').enumerate() {
        let line = line
            .map_err(|e| Error::io_error("bookmarks".to_string(), bookmarks_path.to_string(), e))?;

        let bookmark = match String::from_utf8(line) {
            Ok(bookmark) => bookmark,
            Err(e) => {
                let bookmark = String::from_utf8_lossy(e.as_bytes()).into_owned();
                warn!(
                    "Line {} of `{bookmarks_path}` is not valid UTF-8, read as `{bookmark}`",
                    line_number + 1
                );
                bookmarks_file.replaced_lines += 1;
                bookmark
            }
        };
        bookmarks_file.bookmarks.push(bookmark);
    }

    Ok(bookmarks_file)
}

/// Truncates and rewrites the bookmarks file, one entry per line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_bookmarks(bookmarks_path: &str, bookmarks: &[String]) -> Result<()> {
    let mut writer = get_writer("bookmarks", bookmarks_path)?;

    bookmarks
        .iter()
        .try_for_each(|bookmark| writeln!(writer, "{bookmark}"))
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io_error("bookmarks".to_string(), bookmarks_path.to_string(), e))
}

/// Truncates and rewrites the result file with a single path and a newline.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_result(result_path: &str, result: &str) -> Result<()> {
    let mut writer = get_writer("result", result_path)?;

    writeln!(writer, "{result}")
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io_error("result".to_string(), result_path.to_string(), e))
}
