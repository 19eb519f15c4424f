//! Sort verb dictionaries by reading
//!
//! A verb document is a JSON array of objects. Each object may carry a
//! `kanaStart` and a `kanaEnd` string; the document is ordered by their
//! concatenation, with ties kept in input order. All other fields pass
//! through untouched.
//!
//! ```
//! use std::path::Path;
//! use verb_sort::sorter::{parse_records, render_records, sort_in_place};
//!
//! let input = r#"[{"kanaStart":"た","kanaEnd":"べる"},{"kanaStart":"あ","kanaEnd":"う"}]"#;
//! let mut verbs = parse_records(input.as_bytes(), Path::new("inline")).unwrap();
//! sort_in_place(&mut verbs);
//! assert_eq!(verbs[0].sort_key(), "あう");
//!
//! let output = render_records(&verbs, 2).unwrap();
//! assert!(String::from_utf8(output).unwrap().contains("べる"));
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod sorter;

pub use config::{ConfigError, SortConfig};
pub use error::{Result, SortError};
pub use output::OutputFormat;
pub use record::VerbRecord;
pub use sorter::{
    CheckSummary, SortOptions, SortSummary, check_records, sort_records, sort_records_with,
};
