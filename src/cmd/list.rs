use populate::{ColumnKind, Locale};

pub fn run() -> anyhow::Result<()> {
    println!("Column kinds:");
    for kind in ColumnKind::ALL {
        let note = if !kind.is_implemented() {
            " (placeholder, produces no rows)"
        } else if kind.is_french_only() {
            " (always fr_FR)"
        } else {
            ""
        };
        println!("  {}{}", kind, note);
    }

    println!("\nLocales:");
    for locale in Locale::ALL {
        println!("  {}", locale);
    }

    Ok(())
}
