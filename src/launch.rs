use std::ffi::OsString;
use std::path::PathBuf;

/// How the program was asked to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    /// Plot every event in a `.txt` file.
    File(PathBuf),
    /// Ask for one date on the terminal.
    Prompt,
}

impl LaunchMode {
    /// Pick the mode from the arguments after the program name. Only the first
    /// one matters, and only if it ends in `.txt` (any case).
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        match args.into_iter().next().map(Into::into) {
            Some(arg) if arg.to_string_lossy().to_lowercase().ends_with(".txt") => {
                Self::File(PathBuf::from(arg))
            }
            _ => Self::Prompt,
        }
    }

    pub fn window_title(&self) -> &'static str {
        match self {
            Self::File(_) => "Life Timeline (File)",
            Self::Prompt => "Life Timeline (Single Event)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_argument_selects_file_mode() {
        assert_eq!(
            LaunchMode::from_args(["events.txt"]),
            LaunchMode::File(PathBuf::from("events.txt"))
        );
        assert_eq!(
            LaunchMode::from_args(["LIFE.TXT", "ignored"]),
            LaunchMode::File(PathBuf::from("LIFE.TXT"))
        );
    }

    #[test]
    fn anything_else_prompts() {
        assert_eq!(LaunchMode::from_args(Vec::<String>::new()), LaunchMode::Prompt);
        assert_eq!(LaunchMode::from_args(["events.csv"]), LaunchMode::Prompt);
        assert_eq!(LaunchMode::from_args(["03/05/2020"]), LaunchMode::Prompt);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_txt_path_selects_file_mode() {
        use std::os::unix::ffi::OsStringExt;

        let arg = OsString::from_vec(b"ev\xff.txt".to_vec());
        assert_eq!(
            LaunchMode::from_args([arg.clone()]),
            LaunchMode::File(PathBuf::from(arg))
        );
    }
}
