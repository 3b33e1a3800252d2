// Command-line interface
// Subcommands, the interactive menu and logging setup around the file pipeline

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::rsa::keys::{parse_integer, RsaKey};
use crate::rsa::{CipherConfig, Mode, RsaBigInt, RsaCipher};
use crate::util::file_ops::{crack_file, decrypt_file, encrypt_file, prompt_value, FileConfig};

#[derive(Parser, Debug)]
#[command(name = "alphabet-rsa")]
#[command(version)]
#[command(
    about = "RSA Encryption/Decryption and Cracking",
    long_about = "RSA Encryption/Decryption and Cracking\n\nEncrypts .txt files whose first line holds `e n`, decrypts .rsa files with (d, n),\nand cracks .rsa files from (e, n) by factoring a weak modulus.\nRun without a subcommand for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Size blocks against the largest code and pad to whole blocks
    /// instead of the reference arithmetic
    #[arg(long, global = true)]
    pub corrected: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encrypt a .txt file into a .rsa file
    Encrypt {
        file: PathBuf,
    },
    /// Decrypt a .rsa file into a .dec file with the private key
    Decrypt {
        file: PathBuf,
        /// Private exponent (prompted when omitted)
        #[arg(short = 'd', long = "d", value_parser = parse_integer)]
        d: Option<RsaBigInt>,
        /// Modulus (prompted when omitted)
        #[arg(short = 'n', long = "n", value_parser = parse_integer)]
        n: Option<RsaBigInt>,
    },
    /// Factor n, recover d and decrypt a .rsa file into a .dec file
    Crack {
        file: PathBuf,
        /// Public exponent (prompted when omitted)
        #[arg(short = 'e', long = "e", value_parser = parse_integer)]
        e: Option<RsaBigInt>,
        /// Modulus (prompted when omitted)
        #[arg(short = 'n', long = "n", value_parser = parse_integer)]
        n: Option<RsaBigInt>,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = if cli.corrected {
        Mode::Corrected
    } else {
        Mode::Reference
    };
    let cipher = RsaCipher::new().with_config(CipherConfig::default().with_mode(mode));
    let config = FileConfig::default();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let command = match cli.command {
        Some(command) => command,
        None => match choose_command(&mut input, &mut output)? {
            Some(command) => command,
            None => return Ok(()),
        },
    };

    execute(command, &cipher, &config, &mut input, &mut output)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Interactive menu: read `e`, `d` or `c`, then a file path.
///
/// Returns `None` (after telling the user) for an unknown option.
pub fn choose_command<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<Command>> {
    write!(
        output,
        "##- RSA Encryption/Decryption -##\nPlease enter encrypt, decrypt or crack (e/d/c): "
    )?;
    output.flush()?;
    let option = read_line(input)?.chars().next();

    write!(output, "Enter the path to the file: ")?;
    output.flush()?;
    let file = PathBuf::from(read_line(input)?);

    let command = match option {
        Some('e') => Command::Encrypt { file },
        Some('d') => Command::Decrypt {
            file,
            d: None,
            n: None,
        },
        Some('c') => Command::Crack {
            file,
            e: None,
            n: None,
        },
        _ => {
            writeln!(
                output,
                "Invalid option! Options are: encrypt, decrypt, and crack (e/d/c)."
            )?;
            return Ok(None);
        }
    };

    Ok(Some(command))
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("reading from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Run one command, prompting on `input` for any key part not given
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    cipher: &RsaCipher<'_>,
    config: &FileConfig,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Encrypt { file } => {
            let transcript = encrypt_file(cipher, &file, config)
                .with_context(|| format!("encrypting {}", file.display()))?;

            writeln!(output, "e={}", transcript.key.exponent)?;
            writeln!(output, "n={}", transcript.key.modulus)?;
            writeln!(output, "Plain text:\n{}", transcript.input)?;
            writeln!(output, "Cipher text:\n{}", transcript.output)?;
            writeln!(output, "Wrote {}", transcript.output_path.display())?;
        }
        Command::Decrypt { file, d, n } => {
            let key = resolve_key("d", d, n, input, output)?;
            let transcript = decrypt_file(cipher, &file, key, config)
                .with_context(|| format!("decrypting {}", file.display()))?;

            writeln!(output, "Cipher text:\n{}", transcript.input)?;
            writeln!(output, "Plain text:\n{}", transcript.output)?;
            writeln!(output, "Wrote {}", transcript.output_path.display())?;
        }
        Command::Crack { file, e, n } => {
            let key = resolve_key("e", e, n, input, output)?;
            let transcript = crack_file(cipher, &file, key, config)
                .with_context(|| format!("cracking {}", file.display()))?;

            if let Some(cracked) = &transcript.cracked {
                writeln!(output, "p={}", cracked.p)?;
                writeln!(output, "q={}", cracked.q)?;
                writeln!(output, "d={}", cracked.d)?;
            }
            writeln!(output, "Plain text:\n{}", transcript.output)?;
            writeln!(output, "Wrote {}", transcript.output_path.display())?;
        }
    }

    Ok(())
}

fn resolve_key<R: BufRead, W: Write>(
    exponent_name: &str,
    exponent: Option<RsaBigInt>,
    modulus: Option<RsaBigInt>,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<RsaKey> {
    let exponent = match exponent {
        Some(value) => value,
        None => prompt_value(exponent_name, input, output)?,
    };
    let modulus = match modulus {
        Some(value) => value,
        None => prompt_value("n", input, output)?,
    };
    Ok(RsaKey::new(exponent, modulus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["alphabet-rsa", "encrypt", "msg.txt"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Encrypt {
                file: PathBuf::from("msg.txt")
            })
        );
        assert!(!cli.corrected);

        let cli =
            Cli::try_parse_from(["alphabet-rsa", "decrypt", "msg.rsa", "-d", "2753", "--n", "3233"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Decrypt {
                file: PathBuf::from("msg.rsa"),
                d: Some(RsaBigInt::from(2753u32)),
                n: Some(RsaBigInt::from(3233u32)),
            })
        );

        let cli = Cli::try_parse_from(["alphabet-rsa", "crack", "msg.rsa", "--corrected", "-vv"])
            .unwrap();
        assert!(cli.corrected);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Crack { e: None, n: None, .. })));
    }

    #[test]
    fn test_parse_rejects_bad_integer() {
        assert!(Cli::try_parse_from(["alphabet-rsa", "crack", "m.rsa", "-e", "x"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["alphabet-rsa"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_choose_command() {
        let mut input = Cursor::new("d\nsecret.rsa\n");
        let mut output = Vec::new();

        let command = choose_command(&mut input, &mut output).unwrap();
        assert_eq!(
            command,
            Some(Command::Decrypt {
                file: PathBuf::from("secret.rsa"),
                d: None,
                n: None,
            })
        );
    }

    #[test]
    fn test_choose_command_invalid_option() {
        let mut input = Cursor::new("x\nsecret.rsa\n");
        let mut output = Vec::new();

        assert_eq!(choose_command(&mut input, &mut output).unwrap(), None);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.ends_with("Invalid option! Options are: encrypt, decrypt, and crack (e/d/c).\n"));
    }

    #[test]
    fn test_execute_rejects_wrong_extension() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let result = execute(
            Command::Encrypt {
                file: PathBuf::from("message.rsa"),
            },
            &RsaCipher::new(),
            &FileConfig::default(),
            &mut input,
            &mut output,
        );

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Invalid file type"), "{}", message);
    }
}
