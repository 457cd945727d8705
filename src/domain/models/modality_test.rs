use super::Modality;

#[test]
fn it_maps_endpoints() {
    assert_eq!(Modality::Image.endpoint(), "/generate-from-image");
    assert_eq!(Modality::Document.endpoint(), "/generate-from-document");
    assert_eq!(Modality::Audio.endpoint(), "/generate-from-audio");
}

#[test]
fn it_maps_file_field_names() {
    assert_eq!(Modality::Image.field_name(), "image");
    assert_eq!(Modality::Document.field_name(), "document");
    assert_eq!(Modality::Audio.field_name(), "audio");
}
