//! Text layout of the output files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};

/// One space per nesting level.
pub static INDENT: &[u8] = b" ";

/// The global the script file assigns the table to.
pub static GLOBAL_NAME: &str = "window.UNICODE_DATA";

/// Pretty-print `value` as JSON with [`INDENT`]. No trailing newline.
pub fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let mut ser = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(())
}

/// Write `<name> = <json>;`.
pub fn write_assignment<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    name: &str,
    value: &T,
) -> Result<()> {
    write!(out, "{} = ", name)?;
    write_json(out, value)?;
    out.write_all(b";")?;
    Ok(())
}

/// The literal on the right hand side of a `<name> = <literal>;`
/// statement.
pub fn assignment_literal<'a>(text: &'a str, name: &str) -> Result<&'a str> {
    let text = text.trim();
    let rest = text
        .strip_prefix(name)
        .map(str::trim_start)
        .and_then(|t| t.strip_prefix('='))
        .ok_or_else(|| Error::InvalidScript(format!("expected `{} = `", name)))?;
    rest.strip_suffix(';')
        .map(str::trim)
        .ok_or_else(|| Error::InvalidScript("missing trailing `;`".to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Run `f` against a buffered writer for a temporary sibling of
/// `path`, and move the result into place only once it has all been
/// written. On failure the temporary file is removed and `path` is
/// left untouched.
pub fn write_file_atomically<P, F>(path: P, f: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let path = path.as_ref();
    let tmp = tmp_path(path);
    debug!("writing {} via {}", path.display(), tmp.display());

    let written = File::create(&tmp).map_err(Error::from).and_then(|file| {
        let mut out = BufWriter::new(file);
        f(&mut out)?;
        out.flush()?;
        Ok(())
    });
    match written {
        Ok(()) => {
            fs::rename(&tmp, path)?;
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_layout() {
        let mut out = vec![];
        write_json(&mut out, &vec![(32, "SPACE"), (65, "LATIN CAPITAL LETTER A")]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n [\n  32,\n  \"SPACE\"\n ],\n [\n  65,\n  \"LATIN CAPITAL LETTER A\"\n ]\n]"
        );
    }

    #[test]
    fn empty_json() {
        let mut out = vec![];
        write_json(&mut out, &Vec::<(u32, String)>::new()).unwrap();
        assert_eq!(out, b"[]");
    }

    #[test]
    fn assignment() {
        let mut out = vec![];
        write_assignment(&mut out, GLOBAL_NAME, &vec![(33, "EXCLAMATION MARK")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "window.UNICODE_DATA = [\n [\n  33,\n  \"EXCLAMATION MARK\"\n ]\n];"
        );
        assert_eq!(
            assignment_literal(&text, GLOBAL_NAME).unwrap(),
            "[\n [\n  33,\n  \"EXCLAMATION MARK\"\n ]\n]"
        );
    }

    #[test]
    fn bad_assignments() {
        assert!(assignment_literal("[]", GLOBAL_NAME).is_err());
        assert!(assignment_literal("window.UNICODE_DATA = []", GLOBAL_NAME).is_err());
        assert!(assignment_literal("window.OTHER = [];", GLOBAL_NAME).is_err());
        assert_eq!(assignment_literal("window.UNICODE_DATA=[];\n", GLOBAL_NAME).unwrap(), "[]");
    }

    #[test]
    fn atomic_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_file_atomically(&path, |out| {
            out.write_all(b"hello")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let res = write_file_atomically(&path, |out| {
            out.write_all(b"partial")?;
            Err(Error::InvalidScript("boom".to_string()))
        });
        assert!(res.is_err());
        assert!(!path.exists());
        assert!(!tmp_path(&path).exists());
    }
}
