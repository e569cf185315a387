//! Media capture adapters feeding the visual audit.
//!
//! Two paths converge on the same ingestion contract: a picked file read
//! from disk, or a voice session whose buffered chunks are concatenated
//! into one `audio/webm` payload. Either way the bytes are base64-encoded
//! into a [`MediaCapture`] before they reach the orchestrator.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use thiserror::Error;

use kirana_agents::MediaCapture;

/// MIME type assumed when detection fails.
pub const DEFAULT_MIME: &str = "image/jpeg";

/// MIME type of a finished voice session.
pub const VOICE_MIME: &str = "audio/webm";

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read media file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("a recording session is already active")]
    SessionActive,

    #[error("no recording session is active")]
    NoSession,
}

/// Raw captured bytes plus their detected MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPayload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl MediaPayload {
    /// Base64-encode into the orchestrator's capture shape.
    pub fn encode(&self) -> MediaCapture {
        MediaCapture::new(BASE64.encode(&self.bytes), self.mime_type.clone())
    }
}

/// Best-effort MIME detection from the file extension.
pub fn sniff_mime(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let mime = match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        _ => DEFAULT_MIME,
    };
    mime.to_string()
}

/// Read a picked file into a payload.
pub fn read_media_file(path: &Path) -> Result<MediaPayload, MediaError> {
    let bytes = std::fs::read(path).map_err(|source| MediaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(MediaPayload {
        bytes,
        mime_type: sniff_mime(path),
    })
}

/// Single-session voice recorder.
///
/// Exclusively owned by the controller for the duration of a session;
/// starting a second session while one is active is rejected rather than
/// leaking the first.
#[derive(Debug, Default)]
pub struct VoiceRecorder {
    session: Option<Vec<Vec<u8>>>,
}

impl VoiceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn start(&mut self) -> Result<(), MediaError> {
        if self.session.is_some() {
            return Err(MediaError::SessionActive);
        }
        self.session = Some(Vec::new());
        Ok(())
    }

    pub fn push_chunk(&mut self, chunk: Vec<u8>) -> Result<(), MediaError> {
        match self.session.as_mut() {
            Some(chunks) => {
                chunks.push(chunk);
                Ok(())
            }
            None => Err(MediaError::NoSession),
        }
    }

    /// Stop the session and concatenate its chunks into one payload.
    pub fn stop(&mut self) -> Result<MediaPayload, MediaError> {
        let chunks = self.session.take().ok_or(MediaError::NoSession)?;
        Ok(MediaPayload {
            bytes: chunks.concat(),
            mime_type: VOICE_MIME.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_falls_back_to_jpeg() {
        assert_eq!(sniff_mime(Path::new("shelf.png")), "image/png");
        assert_eq!(sniff_mime(Path::new("clip.MP4")), "video/mp4");
        assert_eq!(sniff_mime(Path::new("note.webm")), "video/webm");
        assert_eq!(sniff_mime(Path::new("mystery.bin")), DEFAULT_MIME);
        assert_eq!(sniff_mime(Path::new("no_extension")), DEFAULT_MIME);
    }

    #[test]
    fn payload_encodes_to_base64() {
        let payload = MediaPayload {
            bytes: b"hello".to_vec(),
            mime_type: "image/png".into(),
        };
        let capture = payload.encode();
        assert_eq!(capture.data, "aGVsbG8=");
        assert_eq!(capture.mime_type, "image/png");
    }

    #[test]
    fn recorder_concatenates_chunks_in_order() {
        let mut recorder = VoiceRecorder::new();
        recorder.start().unwrap();
        recorder.push_chunk(vec![1, 2]).unwrap();
        recorder.push_chunk(vec![3]).unwrap();

        let payload = recorder.stop().unwrap();
        assert_eq!(payload.bytes, vec![1, 2, 3]);
        assert_eq!(payload.mime_type, VOICE_MIME);
        assert!(!recorder.is_active());
    }

    #[test]
    fn second_start_is_rejected_while_active() {
        let mut recorder = VoiceRecorder::new();
        recorder.start().unwrap();
        assert!(matches!(recorder.start(), Err(MediaError::SessionActive)));
    }

    #[test]
    fn stop_without_session_is_rejected() {
        let mut recorder = VoiceRecorder::new();
        assert!(matches!(recorder.stop(), Err(MediaError::NoSession)));
        assert!(matches!(
            recorder.push_chunk(vec![0]),
            Err(MediaError::NoSession)
        ));
    }

    #[test]
    fn read_media_file_reports_missing_files() {
        let err = read_media_file(Path::new("/definitely/not/here.jpg")).unwrap_err();
        assert!(matches!(err, MediaError::Read { .. }));
    }
}
