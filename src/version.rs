use crate::error::Error;
use crate::result::Result;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scan `file` line by line for a declaration of the form
/// `<key> <- <digits>` and return the captured digit run. The first
/// matching line wins; later matches are ignored.
///
/// No match anywhere in the file is a configuration error reported with
/// the product name, before any filesystem mutation has happened.
pub fn extract(file: &Path, key: &str, product: &str) -> Result<String> {
    let pattern = Regex::new(&format!(r"{}\s+<-\s+([0-9]+)", regex::escape(key)))?;

    let reader = BufReader::new(File::open(file)?);
    for line in reader.lines() {
        let line = line?;
        if let Some(captures) = pattern.captures(&line) {
            return Ok(captures[1].to_string());
        }
    }

    Err(Error::VersionNotFound {
        product: product.to_string(),
        file: file.display().to_string(),
    })
}
