use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "gif", "webm"];
pub const SUGGESTED_FILES: &[&str] = &["killchain.mp4", "ransom_note.gif", "network_scan.mp4"];

pub fn is_media(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_lowercase();
            MEDIA_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Media files in the assets directory, sorted. The directory is created
/// when missing.
pub fn list_media(assets_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir).with_context(|| {
            format!("Failed to create assets directory: {}", assets_dir.display())
        })?;
        log::info!("Created assets directory {}", assets_dir.display());
    }

    let mut media = Vec::new();
    for entry in fs::read_dir(assets_dir)
        .with_context(|| format!("Failed to read assets directory: {}", assets_dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && is_media(&path) {
            media.push(path);
        }
    }
    media.sort();
    Ok(media)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_extensions() {
        assert!(is_media(Path::new("assets/killchain.MP4")));
        assert!(is_media(Path::new("demo.gif")));
        assert!(!is_media(Path::new("notes.txt")));
        assert!(!is_media(Path::new("no_extension")));
    }

    #[test]
    fn test_list_media_creates_and_filters() {
        let dir = std::env::temp_dir().join(format!("ransomshield-lab-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        assert!(list_media(&dir).unwrap().is_empty());
        assert!(dir.is_dir());

        fs::write(dir.join("b.webm"), b"").unwrap();
        fs::write(dir.join("a.gif"), b"").unwrap();
        fs::write(dir.join("readme.txt"), b"").unwrap();

        let names: Vec<String> = list_media(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.gif", "b.webm"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
