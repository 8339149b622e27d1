use serde::{Deserialize, Serialize};

use crate::error::UploadError;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// How an image reached the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intake {
    Picked,
    Dropped,
    Pasted,
}

/// Metadata of a user-selected image. The bytes stay with the browser file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl ImageInfo {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Checks the MIME type first, then the size limit.
    pub fn validate(&self, max_bytes: u64, intake: Intake) -> Result<(), UploadError> {
        if !self.is_image() {
            return Err(match intake {
                Intake::Dropped => UploadError::NotAnImageDropped,
                Intake::Picked | Intake::Pasted => UploadError::NotAnImage,
            });
        }
        if self.size > max_bytes {
            return Err(UploadError::TooLarge {
                limit: format_limit(max_bytes),
            });
        }
        Ok(())
    }
}

/// Renders a byte limit as whole MB, or KB when it is not a MiB multiple.
pub fn format_limit(bytes: u64) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Whether an analysis finished for `arrived` still belongs on screen.
pub fn accepts_result(current: Option<u64>, arrived: u64) -> bool {
    current == Some(arrived)
}

/// Shortens long file names for button captions.
pub fn display_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let kept: String = name.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 5 * 1024 * 1024;

    #[test]
    fn accepts_images_within_limit() {
        let info = ImageInfo::new("banana.jpg", "image/jpeg", LIMIT);
        assert!(info.validate(LIMIT, Intake::Picked).is_ok());
    }

    #[test]
    fn rejects_non_images() {
        let info = ImageInfo::new("notes.txt", "text/plain", 12);
        assert_eq!(info.validate(LIMIT, Intake::Picked), Err(UploadError::NotAnImage));
        assert_eq!(info.validate(LIMIT, Intake::Pasted), Err(UploadError::NotAnImage));
        assert_eq!(
            UploadError::NotAnImage.to_string(),
            "Please select an image file"
        );
    }

    #[test]
    fn dropped_non_image_asks_for_a_drop() {
        let info = ImageInfo::new("notes.txt", "text/plain", 12);
        let err = info.validate(LIMIT, Intake::Dropped).unwrap_err();
        assert_eq!(err, UploadError::NotAnImageDropped);
        assert_eq!(err.to_string(), "Please drop an image file");
    }

    #[test]
    fn rejects_oversized_images() {
        let info = ImageInfo::new("huge.png", "image/png", LIMIT + 1);
        let err = info.validate(LIMIT, Intake::Dropped).unwrap_err();
        assert_eq!(err.to_string(), "Image size should be less than 5MB");
    }

    #[test]
    fn sub_megabyte_limit_is_reported_in_kilobytes() {
        let info = ImageInfo::new("a.png", "image/png", 600_000);
        let err = info.validate(512 * 1024, Intake::Picked).unwrap_err();
        assert_eq!(err.to_string(), "Image size should be less than 512KB");
    }

    #[test]
    fn limit_formatting() {
        assert_eq!(format_limit(LIMIT), "5MB");
        assert_eq!(format_limit(1536 * 1024), "1536KB");
        assert_eq!(format_limit(300), "300 bytes");
    }

    #[test]
    fn stale_results_are_dropped() {
        assert!(accepts_result(Some(7), 7));
        assert!(!accepts_result(Some(8), 7));
        assert!(!accepts_result(None, 7));
    }

    #[test]
    fn shortens_long_names() {
        assert_eq!(display_name("short.png", 20), "short.png");
        assert_eq!(
            display_name("a_really_long_file_name.jpeg", 20),
            "a_really_long_fil..."
        );
    }
}
