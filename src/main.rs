use anyhow::Result;
use clap::{Parser, Subcommand};
mod auth;
use log::debug;
use pwcipher::{KdfParams, decrypt_with, encrypt_with};
use zeroize::Zeroizing;

#[derive(Debug, clap::Args)]
struct KdfArgs {
    /// PBKDF2 iteration count (default: 1000)
    #[arg(long, global = true, env = "PWCIPHER_ITERATIONS")]
    iterations: Option<u32>,

    /// PBKDF2 salt as UTF-8 text, at least 8 bytes (default: ATELIERS)
    #[arg(long, global = true, env = "PWCIPHER_SALT")]
    salt: Option<String>,
}

impl KdfArgs {
    fn to_kdf_params(&self) -> Result<KdfParams> {
        let default = KdfParams::default();

        let salt = self
            .salt
            .as_deref()
            .map(str::as_bytes)
            .unwrap_or(default.salt());
        let params = KdfParams::new(salt, self.iterations.unwrap_or(default.iterations()))?;
        Ok(params)
    }
}

#[derive(Debug, Parser)]
#[command(name = "pwcipher")]
#[command(
    version,
    about = "Encrypts and decrypts strings with a password (PBKDF2 + AES-256-CBC, Base64 output)."
)]
struct Cli {
    #[command(flatten)]
    kdf: KdfArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts TEXT (or stdin) and prints Base64 ciphertext
    Encrypt { text: Option<String> },

    /// Decrypts Base64 TEXT (or stdin) and prints the plaintext
    Decrypt { text: Option<String> },
}

/// Text from the command line, or stdin when none was given, plus the password.
fn read_input(text: Option<String>) -> Result<(Zeroizing<String>, Zeroizing<String>)> {
    match text {
        Some(text) => Ok((Zeroizing::new(text), auth::read_password(true)?)),
        None => {
            let text = auth::read_text()?;
            Ok((text, auth::read_password(false)?))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let kdf = args.kdf.to_kdf_params()?;
    debug!("using {} pbkdf2 iterations", kdf.iterations());

    match args.command {
        Commands::Encrypt { text } => {
            let (text, password) = read_input(text)?;
            let ciphertext = encrypt_with(&text, &password, &kdf)?;
            println!("{ciphertext}");
        }
        Commands::Decrypt { text } => {
            let (text, password) = read_input(text)?;
            let plaintext = Zeroizing::new(decrypt_with(text.trim(), &password, &kdf)?);
            println!("{}", *plaintext);
        }
    }

    Ok(())
}
