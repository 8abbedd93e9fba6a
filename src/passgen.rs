//  ____  ____     __        __    __  __      _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _ \ __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | |  __/ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\___|\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use rand::distributions::Uniform;
use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// All 32 ASCII punctuation characters. The strength evaluator recognizes
/// exactly this set as "special".
pub const SPECIAL_CHARACTERS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassgenError {
    #[error("Password length must be between {min} and {max}, got {0}", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength(usize),
}

// 随机密码生成选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    pub length: usize,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            length: 10,
            include_digits: true,
            include_special: true,
        }
    }
}

/// Letters first, then digits, then punctuation. Never empty.
pub fn build_alphabet(include_digits: bool, include_special: bool) -> Vec<char> {
    let mut pool = String::from(LETTERS);
    if include_digits {
        pool.push_str(DIGITS);
    }
    if include_special {
        pool.push_str(SPECIAL_CHARACTERS);
    }
    pool.chars().collect()
}

/// Generates passwords from a random source it owns.
///
/// `PasswordGenerator::new()` draws from the operating system's CSPRNG.
/// Any other source can be injected with [`PasswordGenerator::with_rng`],
/// e.g. a seeded `ChaCha20Rng` for reproducible output.
#[derive(Debug)]
pub struct PasswordGenerator<R: Rng = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Each character is drawn independently and uniformly, with replacement.
    /// No class is guaranteed to appear and nothing is shuffled afterwards.
    pub fn generate(&mut self, options: &GenOptions) -> Result<String, PassgenError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
            return Err(PassgenError::InvalidLength(options.length));
        }

        let alphabet = build_alphabet(options.include_digits, options.include_special);
        log::debug!(
            "Generating password: length={}, alphabet size={}",
            options.length,
            alphabet.len()
        );

        let index = Uniform::from(0..alphabet.len());
        let password = (0..options.length)
            .map(|_| alphabet[self.rng.sample(index)])
            .collect();
        Ok(password)
    }
}

/// 使用系统随机源生成密码
pub fn generate_password(options: &GenOptions) -> Result<String, PassgenError> {
    PasswordGenerator::new().generate(options)
}
