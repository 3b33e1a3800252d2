// File Operations for RSA Encryption/Decryption
// Reads keys and messages, prompts for keys, and writes results next to the input

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::RsaError;
use crate::rsa::crack::crack_key;
use crate::rsa::keys::{parse_integer, CrackedKey, KeyParseError, RsaKey};
use crate::rsa::{RsaBigInt, RsaCipher};

/// Errors that can occur during file operations
#[derive(Debug, Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid file type! Make sure {} is in .{} format.", path.display(), expected)]
    InvalidFileType { path: PathBuf, expected: String },
    #[error("Invalid key: {0}")]
    Key(#[from] KeyParseError),
    #[error("Crypto error: {0}")]
    Crypto(#[from] RsaError),
    #[error("no input while reading {0}")]
    MissingInput(String),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// File extensions for each stage of the pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileConfig {
    pub plaintext_extension: String,
    pub ciphertext_extension: String,
    pub decrypted_extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            plaintext_extension: "txt".to_string(),
            ciphertext_extension: "rsa".to_string(),
            decrypted_extension: "dec".to_string(),
        }
    }
}

impl FileConfig {
    pub fn with_ciphertext_extension(mut self, extension: impl Into<String>) -> Self {
        self.ciphertext_extension = extension.into();
        self
    }

    pub fn with_decrypted_extension(mut self, extension: impl Into<String>) -> Self {
        self.decrypted_extension = extension.into();
        self
    }
}

/// What one file operation read and produced
#[derive(Clone, Debug)]
pub struct Transcript {
    pub key: RsaKey,
    pub input: String,
    pub output: String,
    pub output_path: PathBuf,
    /// Set by `crack_file`
    pub cracked: Option<CrackedKey>,
}

/// Read entire file into memory
pub fn read_file(path: &Path) -> FileResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write data to file, replacing any previous contents
pub fn write_file(path: &Path, data: &str) -> FileResult<()> {
    fs::write(path, data)?;
    Ok(())
}

/// Fail unless `path` ends in `.extension`
pub fn check_extension(path: &Path, extension: &str) -> FileResult<()> {
    match path.extension() {
        Some(ext) if ext == extension => Ok(()),
        _ => Err(FileError::InvalidFileType {
            path: path.to_path_buf(),
            expected: extension.to_string(),
        }),
    }
}

/// Same base name with a different extension
pub fn output_path(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// Split a message file into its key and message.
///
/// The first line holds `e n`. Every following line is kept with its
/// newline, then surrounding whitespace is trimmed off the whole message.
pub fn parse_message(contents: &str) -> FileResult<(RsaKey, String)> {
    let mut lines = contents.lines();
    let key: RsaKey = lines.next().unwrap_or_default().parse()?;

    let mut message = String::with_capacity(contents.len());
    for line in lines {
        message.push_str(line);
        message.push('\n');
    }

    let message = message.trim_matches(|c: char| c <= ' ').to_string();
    Ok((key, message))
}

/// The ciphertext is the first line of a ciphertext file
pub fn parse_ciphertext(contents: &str) -> String {
    contents.lines().next().unwrap_or_default().to_string()
}

/// Print `Enter the value of <name>: ` and read one integer
pub fn prompt_value<R: BufRead, W: Write>(
    name: &str,
    input: &mut R,
    output: &mut W,
) -> FileResult<RsaBigInt> {
    write!(output, "Enter the value of {}: ", name)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(FileError::MissingInput(name.to_string()));
    }

    Ok(parse_integer(&line)?)
}

/// Prompt for an exponent (named `exponent_name`) and then `n`
pub fn prompt_key<R: BufRead, W: Write>(
    exponent_name: &str,
    input: &mut R,
    output: &mut W,
) -> FileResult<RsaKey> {
    let exponent = prompt_value(exponent_name, input, output)?;
    let modulus = prompt_value("n", input, output)?;
    Ok(RsaKey::new(exponent, modulus))
}

/// Encrypt a message file (`e n` on the first line) into a ciphertext file
pub fn encrypt_file(cipher: &RsaCipher<'_>, path: &Path, config: &FileConfig) -> FileResult<Transcript> {
    check_extension(path, &config.plaintext_extension)?;

    log::info!("reading {}", path.display());
    let (key, message) = parse_message(&read_file(path)?)?;

    let ciphertext = cipher.encrypt(&key, &message)?;
    let out_path = output_path(path, &config.ciphertext_extension);
    write_file(&out_path, &ciphertext)?;
    log::info!("wrote {}", out_path.display());

    Ok(Transcript {
        key,
        input: message,
        output: ciphertext,
        output_path: out_path,
        cracked: None,
    })
}

/// Decrypt a ciphertext file with the private key `(d, n)`
pub fn decrypt_file(
    cipher: &RsaCipher<'_>,
    path: &Path,
    key: RsaKey,
    config: &FileConfig,
) -> FileResult<Transcript> {
    check_extension(path, &config.ciphertext_extension)?;

    log::info!("reading {}", path.display());
    let ciphertext = parse_ciphertext(&read_file(path)?);

    let plaintext = cipher.decrypt(&key, &ciphertext)?;
    let out_path = output_path(path, &config.decrypted_extension);
    write_file(&out_path, &plaintext)?;
    log::info!("wrote {}", out_path.display());

    Ok(Transcript {
        key,
        input: ciphertext,
        output: plaintext,
        output_path: out_path,
        cracked: None,
    })
}

/// Recover d from the public key `(e, n)` and decrypt a ciphertext file
pub fn crack_file(
    cipher: &RsaCipher<'_>,
    path: &Path,
    public_key: RsaKey,
    config: &FileConfig,
) -> FileResult<Transcript> {
    check_extension(path, &config.ciphertext_extension)?;

    log::info!("reading {}", path.display());
    let ciphertext = parse_ciphertext(&read_file(path)?);

    let cracked = crack_key(&public_key.exponent, &public_key.modulus)?;
    let plaintext = cipher.decrypt(&cracked.private_key(), &ciphertext)?;
    let out_path = output_path(path, &config.decrypted_extension);
    write_file(&out_path, &plaintext)?;
    log::info!("wrote {}", out_path.display());

    Ok(Transcript {
        key: public_key,
        input: ciphertext,
        output: plaintext,
        output_path: out_path,
        cracked: Some(cracked),
    })
}
