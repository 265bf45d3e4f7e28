//! Extension registry: what activating a file means.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Exec,
    Media,
    Unregistered,
}

/// Extensions include the leading dot and are matched case-insensitively.
static FILE_TYPES: &[(&str, FileKind)] = &[
    (".txt", FileKind::Text),
    (".md", FileKind::Text),
    (".log", FileKind::Text),
    (".cfg", FileKind::Text),
    (".ini", FileKind::Text),
    (".toml", FileKind::Text),
    (".json", FileKind::Text),
    (".yaml", FileKind::Text),
    (".yml", FileKind::Text),
    (".rs", FileKind::Text),
    (".c", FileKind::Text),
    (".h", FileKind::Text),
    (".cpp", FileKind::Text),
    (".hpp", FileKind::Text),
    (".py", FileKind::Text),
    (".exe", FileKind::Exec),
    (".bat", FileKind::Exec),
    (".cmd", FileKind::Exec),
    (".com", FileKind::Exec),
    (".sh", FileKind::Exec),
    (".run", FileKind::Exec),
    (".appimage", FileKind::Exec),
    (".png", FileKind::Media),
    (".jpg", FileKind::Media),
    (".jpeg", FileKind::Media),
    (".gif", FileKind::Media),
    (".bmp", FileKind::Media),
    (".webp", FileKind::Media),
    (".mp3", FileKind::Media),
    (".wav", FileKind::Media),
    (".ogg", FileKind::Media),
    (".flac", FileKind::Media),
    (".mp4", FileKind::Media),
    (".mkv", FileKind::Media),
    (".webm", FileKind::Media),
    (".avi", FileKind::Media),
];

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        FILE_TYPES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|&(_, kind)| kind)
            .unwrap_or(FileKind::Unregistered)
    }

    pub fn from_path(path: &Path) -> Self {
        match extension_of(path) {
            Some(ext) => Self::from_extension(&ext),
            None => FileKind::Unregistered,
        }
    }
}

/// `Some(".ext")` for the last extension of `path`; dotfiles like `.bashrc`
/// have none.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{ext}"))
}
