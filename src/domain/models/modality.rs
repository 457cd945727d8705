#[cfg(test)]
#[path = "modality_test.rs"]
mod tests;

/// Determines which upload endpoint is called and which multipart field
/// carries the file. One modality, one file field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Modality {
    Image,
    Document,
    Audio,
}

impl Modality {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Modality::Image => return "/generate-from-image",
            Modality::Document => return "/generate-from-document",
            Modality::Audio => return "/generate-from-audio",
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Modality::Image => return "image",
            Modality::Document => return "document",
            Modality::Audio => return "audio",
        }
    }
}
