//! Property-based tests for the backup-name probe and the flag parser.

use playpen_cli::cli::{self, Parsed};
use playpen_cli::stage::first_available_name;
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    /// The probe never returns an existing path and always picks the next
    /// name in the `inventory.orig`, `inventory.orig.0`, ... sequence.
    #[test]
    fn prop_first_available_name_skips_existing(existing in 0usize..16) {
        let dir = TempDir::new().expect("tempdir");
        if existing > 0 {
            std::fs::write(dir.path().join("inventory.orig"), b"x").expect("write");
            for n in 0..existing - 1 {
                std::fs::write(dir.path().join(format!("inventory.orig.{n}")), b"x")
                    .expect("write");
            }
        }

        let name = first_available_name(dir.path());

        prop_assert!(!name.exists());
        let expected = match existing {
            0 => dir.path().join("inventory.orig"),
            n => dir.path().join(format!("inventory.orig.{}", n - 1)),
        };
        prop_assert_eq!(name, expected);
    }

    /// Any plain path token supplied to -d comes back verbatim, and the
    /// boolean flags never leak into each other.
    #[test]
    fn prop_parse_preserves_the_directory_token(
        dir in "[a-z0-9/_.]{1,24}",
        rebuild in any::<bool>(),
        copy_only in any::<bool>(),
    ) {
        let mut args = vec!["-d".to_string(), dir.clone()];
        if rebuild {
            args.push("-b".to_string());
        }
        if copy_only {
            args.push("-c".to_string());
        }

        let parsed = cli::parse(args).expect("parse");
        let Parsed::Run(config) = parsed else {
            panic!("unexpected help/version");
        };
        let playbook_dir = config.playbook_dir.to_string_lossy();
        prop_assert_eq!(playbook_dir.as_ref(), dir.as_str());
        prop_assert_eq!(config.rebuild, rebuild);
        prop_assert_eq!(config.copy_only, copy_only);
    }
}
