//! Test fixtures: images generated in memory.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;

pub fn encode_rgb(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("encode test image");
    buffer
}

/// Blank white PNG.
pub fn white_png(width: u32, height: u32) -> Vec<u8> {
    encode_rgb(
        &RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        ImageFormat::Png,
    )
}

/// High-contrast grayscale checkerboard PNG.
pub fn checkerboard_png(size: u32, cell: u32) -> Vec<u8> {
    let img = GrayImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Luma([0])
        } else {
            Luma([255])
        }
    });
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("encode test image");
    buffer
}

pub fn plain_jpeg() -> Vec<u8> {
    encode_rgb(
        &RgbImage::from_pixel(64, 48, Rgb([40, 110, 180])),
        ImageFormat::Jpeg,
    )
}

fn ascii(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

fn dms(tag: Tag, d: u32, m: u32, s: u32) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational::from((d, 1)),
            Rational::from((m, 1)),
            Rational::from((s, 1)),
        ]),
    }
}

/// JPEG carrying camera, editing-software, date and GPS tags. The position is
/// 48°51'29" N, 2°17'40" W.
pub fn tagged_jpeg() -> Vec<u8> {
    let fields = [
        ascii(Tag::Make, "Apple"),
        ascii(Tag::Model, "iPhone 14"),
        ascii(Tag::Software, "Adobe Photoshop 25.0"),
        ascii(Tag::DateTime, "2024:03:10 18:00:00"),
        ascii(Tag::DateTimeOriginal, "2024:03:09 12:30:00"),
        dms(Tag::GPSLatitude, 48, 51, 29),
        ascii(Tag::GPSLatitudeRef, "N"),
        dms(Tag::GPSLongitude, 2, 17, 40),
        ascii(Tag::GPSLongitudeRef, "W"),
    ];
    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("write exif");
    let tiff = tiff.into_inner();

    // APP1 segment spliced in right after SOI.
    let jpeg = plain_jpeg();
    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}
