// src/models/uploaded_file.rs
use std::path::{Path, PathBuf};

/// URL prefix under which stored uploads are reachable.
pub const UPLOADS_URL_PREFIX: &str = "/public/uploads";

const DEFAULT_EXTENSION: &str = ".jpg";

/// One image written to the uploads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
}

impl UploadedFile {
    /// Name a new upload: `profile_<millis><ext>`, where the extension is taken
    /// from the client's filename or defaults to `.jpg`.
    pub fn generate(original_name: &str, timestamp_millis: i64) -> Self {
        let ext = extension_of(original_name).unwrap_or(DEFAULT_EXTENSION);
        Self {
            file_name: format!("profile_{timestamp_millis}{ext}"),
        }
    }

    /// Client-facing path, e.g. `/public/uploads/profile_1700000000000.png`.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", UPLOADS_URL_PREFIX, self.file_name)
    }

    pub fn disk_path(&self, uploads_dir: &Path) -> PathBuf {
        uploads_dir.join(&self.file_name)
    }
}

/// Extension of a client-supplied filename including the leading dot.
///
/// Only the last path segment counts (both `/` and `\` separate). A dot at the
/// start of that segment does not begin an extension, so `.bashrc` has none.
pub fn extension_of(original_name: &str) -> Option<&str> {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    match base.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&base[idx..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("photo.png", Some(".png"))]
    #[case("archive.tar.gz", Some(".gz"))]
    #[case("photo", None)]
    #[case(".bashrc", None)]
    #[case("", None)]
    #[case("dir.d/photo", None)]
    #[case("C:\\Users\\me\\selfie.JPEG", Some(".JPEG"))]
    #[case("../../etc/passwd.png", Some(".png"))]
    #[case("photo.", Some("."))]
    fn extension_follows_last_segment(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(extension_of(name), expected);
    }

    #[test]
    fn png_upload_keeps_its_extension() {
        let file = UploadedFile::generate("photo.png", 1_700_000_000_123);
        assert_eq!(file.file_name, "profile_1700000000123.png");
        assert_eq!(file.relative_path(), "/public/uploads/profile_1700000000123.png");
    }

    #[test]
    fn extensionless_upload_defaults_to_jpg() {
        let file = UploadedFile::generate("photo", 42);
        assert_eq!(file.file_name, "profile_42.jpg");
    }

    #[test]
    fn generated_name_never_leaves_uploads_dir() {
        let file = UploadedFile::generate("../../evil/x.sh", 1);
        let dir = Path::new("/data/uploads");
        assert_eq!(file.disk_path(dir), PathBuf::from("/data/uploads/profile_1.sh"));
    }
}
