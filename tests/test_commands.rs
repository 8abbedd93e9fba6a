use rpawometer::commands::config::*;
use rpawometer::commands::interactive::*;
use rpawometer::commands::password_gen::*;
use rpawometer::commands::testpass::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use rpawometer::configtool::{Settings, CONFIG_FILE_NAME};
    use rpawometer::passgen::{GenOptions, PasswordGenerator};
    use tempfile::tempdir;

    fn seeded_session(defaults: GenOptions) -> Session<ChaCha20Rng> {
        Session::new(
            PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(5)),
            defaults,
        )
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_generate_random_with_seed_is_reproducible() {
        let options = GenOptions { length: 20, ..Default::default() };
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = generate_random(&options, Some(99), false, &mut first).unwrap();
        let b = generate_random(&options, Some(99), false, &mut second).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.chars().count(), 20);

        let text = output(first);
        assert!(text.starts_with(&format!("Generated password: {}\n", a)));
        assert!(text.contains("Password strength: "));
    }

    #[test]
    fn test_generate_random_json() {
        let options = GenOptions { length: 12, include_digits: false, include_special: false };
        let mut buf = Vec::new();
        let password = generate_random(&options, Some(1), true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(value["password"], password.as_str());
        assert!(value["score"].as_u64().unwrap() <= 3);
    }

    #[test]
    fn test_generate_random_rejects_zero_length() {
        let options = GenOptions { length: 0, ..Default::default() };
        let mut buf = Vec::new();
        assert!(generate_random(&options, None, false, &mut buf).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_report_strength_empty_input() {
        let mut buf = Vec::new();
        report_strength("", false, &mut buf).unwrap();
        assert_eq!(output(buf), format!("{}\n", EMPTY_PASSWORD_HINT));
    }

    #[test]
    fn test_report_strength_empty_input_json() {
        let mut buf = Vec::new();
        report_strength("", true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(value["message"], EMPTY_PASSWORD_HINT);
    }

    #[test]
    fn test_toggle_override() {
        assert_eq!(toggle_override(true, false), Some(true));
        assert_eq!(toggle_override(false, true), Some(false));
        assert_eq!(toggle_override(false, false), None);
        assert_eq!(toggle_override(true, true), Some(true));
    }

    #[test]
    fn test_resolve_options_overrides_settings() {
        let settings = Settings { length: 16, include_digits: true, include_special: false };

        let kept = resolve_options(&settings, &GenOverrides::default());
        assert_eq!(kept, GenOptions { length: 16, include_digits: true, include_special: false });

        let overrides = GenOverrides {
            length: Some(32),
            include_digits: toggle_override(false, true),
            include_special: toggle_override(true, false),
        };
        let resolved = resolve_options(&settings, &overrides);
        assert_eq!(resolved, GenOptions { length: 32, include_digits: false, include_special: true });
    }

    #[test]
    fn test_test_password_with_argument() {
        let mut buf = Vec::new();
        test_password(Some("Aa1!Aa1!".to_string()), false, &mut buf).unwrap();
        assert_eq!(output(buf), "Password strength: Medium (score: 2/4)\n[#####-----] 50%\n");
    }

    #[test]
    fn test_config_set_and_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut buf = Vec::new();

        let settings = set_config(&path, Some(18), None, Some(false), &mut buf).unwrap();
        assert_eq!(settings, Settings { length: 18, include_digits: true, include_special: false });
        assert_eq!(Settings::load_from(&path).unwrap(), settings);

        assert!(set_config(&path, Some(0), None, None, &mut buf).is_err());
        assert_eq!(Settings::load_from(&path).unwrap().length, 18);

        reset_config(&path, &mut buf).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());

        let mut shown = Vec::new();
        show_config(&path, &mut shown).unwrap();
        assert!(output(shown).contains("\"length\": 10"));
    }

    #[test]
    fn test_session_generate_with_defaults() {
        let defaults = GenOptions { length: 14, include_digits: false, include_special: false };
        let mut session = seeded_session(defaults);
        let mut prompter = ScriptedPrompter::new(["1", "", "", "", "q"]);
        let mut buf = Vec::new();
        session.run(&mut prompter, &mut buf).unwrap();

        let password = session.last_generated().unwrap();
        assert_eq!(password.chars().count(), 14);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(output(buf).contains(&format!("Generated password: {}", password)));
    }

    #[test]
    fn test_session_generate_with_answers() {
        let mut session = seeded_session(GenOptions::default());
        let mut prompter = ScriptedPrompter::new(["1", "8", "maybe", "n", "no", "3", "q"]);
        let mut buf = Vec::new();
        session.run(&mut prompter, &mut buf).unwrap();

        let password = session.last_generated().unwrap().to_string();
        assert_eq!(password.chars().count(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
        let text = output(buf);
        assert!(text.contains("Please answer y or n"));
        assert!(text.contains(&format!("Last generated password: {}", password)));
    }

    #[test]
    fn test_session_invalid_length_keeps_previous() {
        let mut session = seeded_session(GenOptions::default());
        let mut prompter = ScriptedPrompter::new(["1", "0", "y", "y", "1", "abc", "q"]);
        let mut buf = Vec::new();
        session.run(&mut prompter, &mut buf).unwrap();

        assert!(session.last_generated().is_none());
        let text = output(buf);
        assert!(text.contains("Password length must be between 1 and 4096, got 0"));
        assert!(text.contains("Invalid length: abc"));
    }

    #[test]
    fn test_session_huge_length_reports_error() {
        let mut session = seeded_session(GenOptions::default());
        let mut prompter = ScriptedPrompter::new(["1", "18446744073709551615", "", "", "q"]);
        let mut buf = Vec::new();
        session.run(&mut prompter, &mut buf).unwrap();

        assert!(session.last_generated().is_none());
        assert!(output(buf).contains("Password length must be between 1 and 4096, got 18446744073709551615"));
    }

    #[test]
    fn test_session_check_and_show() {
        let mut session = seeded_session(GenOptions::default());
        let mut prompter = ScriptedPrompter::new(["3", "2", "aaaaaaaaaaaa", "2", "", "bogus"]);
        let mut buf = Vec::new();
        // input runs out after "bogus"; the session ends on its own
        session.run(&mut prompter, &mut buf).unwrap();

        let text = output(buf);
        assert!(text.contains("No password generated yet"));
        assert!(text.contains("Password strength: Weak (score: 1/4)"));
        assert!(text.contains("  • Include uppercase letters"));
        assert!(text.contains(EMPTY_PASSWORD_HINT));
        assert!(text.contains("Unknown option: bogus"));
    }
}
