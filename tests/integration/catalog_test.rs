//! Integration tests for loading command catalogs from disk

use termfolio::{Catalog, CatalogError};

use crate::helpers::{write_temp_file, SMALL_CATALOG};

#[test]
fn load_reads_commands_in_order() {
    let (_dir, path) = write_temp_file("catalog.toml", SMALL_CATALOG);

    let catalog = Catalog::load(&path).unwrap();

    let triggers: Vec<&str> = catalog.iter().map(|c| c.trigger.as_str()).collect();
    assert_eq!(triggers, vec!["boot", "whoami"]);
    assert_eq!(catalog.intro().output, vec!["Booting...", "Done."]);
}

#[test]
fn load_or_builtin_without_path_is_builtin() {
    assert_eq!(Catalog::load_or_builtin(None).unwrap(), Catalog::builtin());
}

#[test]
fn load_rejects_malformed_toml() {
    let (_dir, path) = write_temp_file("bad.toml", "[[commands]\ntrigger = ");

    let result = Catalog::load(&path);

    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn load_rejects_empty_catalog() {
    let (_dir, path) = write_temp_file("empty.toml", "");

    assert!(matches!(Catalog::load(&path), Err(CatalogError::Empty)));
}

#[test]
fn help_lists_builtin_commands() {
    let catalog = Catalog::builtin();
    let help = catalog.resolve("help").unwrap();

    for trigger in ["about", "education", "skills"] {
        assert!(
            help.output.iter().any(|line| line.contains(trigger)),
            "help does not mention {trigger}"
        );
    }
}
