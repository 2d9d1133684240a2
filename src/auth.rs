use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal, Read};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "PWCIPHER_PASSWORD";

/// Reads the password from the environment, stdin or an interactive prompt.
///
/// `stdin_free` is false when stdin already carries the text to transform.
pub fn read_password(stdin_free: bool) -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  PWCIPHER_PASSWORD="supersecret" pwcipher encrypt "some text"
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  stdin (Pipeline)
    //  echo "supersecret" | pwcipher encrypt "some text"
    if stdin_free && !io::stdin().is_terminal() {
        let mut pw = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut pw)?;
        trim_newline(&mut pw);

        if !pw.is_empty() {
            return Ok(pw);
        }
    }

    //  Interactive, reads from the terminal even if stdin is piped
    let pw = rpassword::prompt_password("Password: ").context("No password provided")?;
    Ok(Zeroizing::new(pw))
}

/// Reads the whole of stdin as the text to transform, minus one trailing newline.
pub fn read_text() -> Result<Zeroizing<String>> {
    let mut text = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("failed to read input from stdin")?;
    trim_newline(&mut text);
    Ok(text)
}

fn trim_newline(s: &mut String) {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
}
