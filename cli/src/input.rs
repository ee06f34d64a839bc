use crate::error::{CliError, Result, ResultExt};
use dialoguer::Editor;
use std::io::Read;
use std::path::PathBuf;

/// Where the email content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
    Editor,
}

/// Pick the input source: `--text`, `--file`, piped stdin, then the editor
pub fn resolve_source(
    text: Option<String>,
    file: Option<String>,
    interactive: bool,
    stdin_is_tty: bool,
) -> InputSource {
    if interactive {
        return InputSource::Editor;
    }
    match (text, file) {
        (Some(text), _) => InputSource::Text(text),
        (None, Some(file)) => InputSource::File(PathBuf::from(file)),
        (None, None) if !stdin_is_tty => InputSource::Stdin,
        (None, None) => InputSource::Editor,
    }
}

/// Read the content of a non-interactive source
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read email from {}", path.display())),
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .with_context(|| "Failed to read email from stdin")?;
            Ok(content)
        }
        InputSource::Editor => Err(CliError::Other(
            "The editor is only available in interactive mode".to_string(),
        )),
    }
}

/// Open `$EDITOR` for the user to write or paste an email.
///
/// Returns an empty string when the editor is closed without saving, so the
/// controller reports the empty-input error like any other blank submission.
pub fn compose_in_editor() -> Result<String> {
    let content = Editor::new()
        .extension(".eml")
        .edit("")
        .with_context(|| "Failed to open the editor")?;
    Ok(content.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_source_precedence() {
        assert_eq!(
            resolve_source(Some("hi".into()), None, false, true),
            InputSource::Text("hi".into())
        );
        assert_eq!(
            resolve_source(None, Some("mail.txt".into()), false, false),
            InputSource::File(PathBuf::from("mail.txt"))
        );
        assert_eq!(resolve_source(None, None, false, false), InputSource::Stdin);
        assert_eq!(resolve_source(None, None, false, true), InputSource::Editor);
        assert_eq!(resolve_source(None, None, true, false), InputSource::Editor);
    }

    #[test]
    fn test_read_text_and_file() {
        assert_eq!(
            read_input(&InputSource::Text("  spaced  ".into())).unwrap(),
            "  spaced  "
        );

        let dir = tempdir().unwrap();
        let path = dir.path().join("mail.txt");
        fs::write(&path, "Subject: Invoice\n\nPlease find attached.").unwrap();

        let content = read_input(&InputSource::File(path)).unwrap();
        assert!(content.starts_with("Subject: Invoice"));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_input(&InputSource::File(path)).unwrap_err();
        let message = err.user_message();
        assert!(message.contains("Failed to read email from"));
        assert!(message.contains("missing.txt"));
    }
}
