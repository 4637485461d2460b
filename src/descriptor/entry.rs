//! Sample entry representation.

use serde::Serialize;

/// One sample reference extracted from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleEntry {
    /// Sample path as written in the descriptor, usually relative to it.
    pub path: String,

    /// MIDI root note the sample is mapped to, when the descriptor gives one.
    pub root_note: Option<i32>,
}

impl SampleEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            root_note: None,
        }
    }

    /// Last path segment of the sample path.
    ///
    /// Both `/` and `\` count as separators since presets are authored on
    /// either platform.
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(SampleEntry::new("Samples/BD_01.wav").file_name(), "BD_01.wav");
        assert_eq!(SampleEntry::new("Samples\\SD_01.wav").file_name(), "SD_01.wav");
        assert_eq!(SampleEntry::new("HH.wav").file_name(), "HH.wav");
        assert_eq!(SampleEntry::new("Samples/").file_name(), "");
    }
}
