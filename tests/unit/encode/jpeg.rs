use super::*;

fn checker(w: u32, h: u32) -> image::RgbImage {
    image::RgbImage::from_fn(w, h, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            image::Rgb([240, 240, 240])
        } else {
            image::Rgb([20, 40, 80])
        }
    })
}

#[test]
fn encoded_bytes_are_a_jpeg_of_same_size() {
    let bytes = encode_jpeg_to_vec(&checker(40, 20), 85).unwrap();
    assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);

    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (40, 20));
}

#[test]
fn quality_out_of_range_is_rejected() {
    assert!(encode_jpeg_to_vec(&checker(8, 8), 0).is_err());
    assert!(encode_jpeg_to_vec(&checker(8, 8), 101).is_err());
}

#[test]
fn write_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public").join("nested").join("pano.jpg");
    write_jpeg(&checker(16, 8), &path, 85).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 8));
}
