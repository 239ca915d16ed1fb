use std::path::Path;

use arbor::config::ConfigWarning;

use crate::ui::theme::{icons, icons_ascii, pick};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) {
    let icon = pick(supports_unicode, icons::WARNING, icons_ascii::WARNING);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{icon} Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("{icon} Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
