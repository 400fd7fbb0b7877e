//! Embedded upload fixtures
//!
//! Stand-ins for the image files the scenarios upload. The service stores
//! whatever bytes it receives, so a minimal JFIF header is enough for the
//! happy paths.

use crate::models::pet::PetPhoto;

/// Smallest JPEG the service will take: JFIF header plus end-of-image marker
pub const CAT_PHOTO_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x48, 0x00, 0x48, 0x00, 0x00, 0xFF, 0xD9,
];

/// A PDF document, which the service docs say is not a valid photo format
pub const NOT_AN_IMAGE_PDF: &[u8] =
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n";

/// JPEG photo payload used by the happy-path scenarios
pub fn jpeg_photo() -> PetPhoto {
    PetPhoto::from_bytes("cat.jpg", CAT_PHOTO_JPEG.to_vec())
}

/// PDF payload used to probe the service's photo format validation
pub fn pdf_photo() -> PetPhoto {
    PetPhoto::from_bytes("cat.pdf", NOT_AN_IMAGE_PDF.to_vec())
}
