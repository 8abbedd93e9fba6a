pub mod config;
pub mod interactive;
pub mod password_gen;
pub mod testpass;

use std::io::{self, Write};
use rpassword::read_password;

/// 提示用户输入
pub fn prompt_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// 提示用户输入密码（不回显）
pub fn read_password_from_stdin(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    read_password()
}
