// 📚 Book Printer - one line per book on stdout

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub published_year: i64,
    pub is_available: bool,
}

/// `Title: <t>, Author: <a>, Published: <y>, Available: Yes|No`
pub fn format_book_details(book: &Book) -> String {
    format!(
        "Title: {}, Author: {}, Published: {}, Available: {}",
        book.title,
        book.author,
        book.published_year,
        if book.is_available { "Yes" } else { "No" }
    )
}

pub fn write_book_details<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(out, "{}", format_book_details(book))
}

/// Print the details line to stdout. A failed write is logged, not returned.
pub fn print_book_details(book: &Book) {
    let stdout = io::stdout();
    if let Err(e) = write_book_details(&mut stdout.lock(), book) {
        warn!(error = %e, title = %book.title, "failed to print book details");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_book(is_available: bool) -> Book {
        Book {
            title: "T".to_string(),
            author: "A".to_string(),
            published_year: 2020,
            is_available,
        }
    }

    #[test]
    fn test_available_book() {
        assert_eq!(
            format_book_details(&create_test_book(true)),
            "Title: T, Author: A, Published: 2020, Available: Yes"
        );
    }

    #[test]
    fn test_unavailable_book() {
        assert_eq!(
            format_book_details(&create_test_book(false)),
            "Title: T, Author: A, Published: 2020, Available: No"
        );
    }

    #[test]
    fn test_writes_single_line() {
        let mut out = Vec::new();
        write_book_details(&mut out, &create_test_book(true)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Title: T, Author: A, Published: 2020, Available: Yes\n"
        );
    }

    #[test]
    fn test_print_book_details_to_stdout() {
        // Goes through the same writer path as test_writes_single_line
        print_book_details(&create_test_book(false));
    }

    #[test]
    fn test_writes_to_failing_sink() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_book_details(&mut BrokenPipe, &create_test_book(true)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_book_json_field_names() {
        let book: Book = serde_json::from_str(
            r#"{"title": "T", "author": "A", "publishedYear": 2020, "isAvailable": false}"#,
        )
        .unwrap();
        assert_eq!(book, create_test_book(false));
    }
}
