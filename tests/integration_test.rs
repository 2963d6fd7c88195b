use std::io::Cursor;

use clap::Parser;
use image::{Rgb, RgbImage};
use qrclip_lib::clipboard::ClipboardSource;
use qrclip_lib::error::{ClipboardError, QrError, Unavailable};
use qrclip_lib::{Cli, Outcome, execute, exit_code};

struct StubClipboard(Result<&'static str, &'static str>);

impl ClipboardSource for StubClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.0.map(str::to_owned).map_err(|message| ClipboardError {
            stage: "init",
            message: message.to_owned(),
        })
    }
}

fn run_with(
    args: &[&str],
    clipboard: Result<&'static str, &'static str>,
    stdin: &str,
) -> (Result<Outcome, QrError>, String) {
    let cli = Cli::parse_from(std::iter::once("qrclip").chain(args.iter().copied()));
    let mut out = Vec::new();
    let result = execute(
        &cli,
        &mut StubClipboard(clipboard),
        Cursor::new(stdin.to_owned()),
        &mut out,
        false,
    );
    (result, String::from_utf8(out).expect("utf-8 output"))
}

/// Decode the QR code in the image at `path` with an independent reader.
///
/// The exported image is small (2 px per module), so it is scaled up and
/// given a wider quiet zone before detection.
fn decode_png(path: &std::path::Path) -> String {
    let img = image::open(path).expect("open png").to_luma8();
    let (scale, pad) = (4u32, 32u32);
    let side = img.width() * scale + 2 * pad;
    let rgb = RgbImage::from_fn(side, side, |x, y| {
        let inside = |v: u32| v >= pad && v < pad + img.width() * scale;
        if inside(x) && inside(y) {
            let l = img.get_pixel((x - pad) / scale, (y - pad) / scale)[0];
            Rgb([l, l, l])
        } else {
            Rgb([255, 255, 255])
        }
    });

    let mut result = qrism::reader::detect_qr(&image::DynamicImage::ImageRgb8(rgb));
    let symbols = result.symbols();
    let symbol = symbols.first_mut().expect("a QR symbol in the image");
    let (_, message) = symbol.decode().expect("decodable symbol");
    message.to_string()
}

#[test]
fn integration_save_and_decode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("foo.png");
    let path_arg = path.to_str().expect("utf-8 path");

    let (result, out) = run_with(
        &["--save", "--output", path_arg, "https://example.com"],
        Err("unused"),
        "",
    );

    assert_eq!(
        result.as_ref().expect("generated"),
        &Outcome::Generated {
            url: "https://example.com".into(),
            saved: Some(path.clone()),
        }
    );
    assert_eq!(exit_code(&result), 0);
    assert!(out.contains("Generating QR code for: https://example.com"));
    assert!(out.contains(&format!("QR code saved as: {}", path.display())));
    assert!(out.trim_end().ends_with("QR code generated successfully!"));
    assert_eq!(decode_png(&path), "https://example.com");
}

#[test]
fn integration_default_uses_clipboard_without_prompting() {
    let (result, out) = run_with(&[], Ok("  https://clip.example/page \n"), "https://typed.example\n");
    assert!(matches!(
        result,
        Ok(Outcome::Generated { ref url, saved: None }) if url == "https://clip.example/page"
    ));
    assert!(!out.contains("Enter URL:"));
}

#[test]
fn integration_default_falls_back_to_prompt() {
    let (result, out) = run_with(&[], Err("no clipboard utility"), "bad\nhttps://typed.example\n");
    assert!(matches!(
        result,
        Ok(Outcome::Generated { ref url, .. }) if url == "https://typed.example"
    ));
    assert_eq!(out.matches("Enter URL:").count(), 2);
    assert_eq!(
        out.matches("Please enter a valid URL (starting with http:// or https://)").count(),
        1
    );
    // the platform error detail is never shown
    assert!(!out.contains("no clipboard utility"));
}

#[test]
fn integration_clipboard_flag_without_url_is_graceful() {
    let (result, out) = run_with(&["--clipboard"], Ok("just some text"), "https://typed.example\n");
    assert_eq!(
        result.as_ref().expect("graceful"),
        &Outcome::NoUrl(Unavailable::ClipboardNotUrl)
    );
    assert_eq!(exit_code(&result), 0);
    assert_eq!(out, "No valid URL found in clipboard\n");
}

#[test]
fn integration_prompt_closed_is_graceful() {
    let (result, out) = run_with(&["-i"], Ok("https://clip.example"), "nope\n");
    assert_eq!(
        result.as_ref().expect("graceful"),
        &Outcome::NoUrl(Unavailable::NoInput)
    );
    assert_eq!(exit_code(&result), 0);
    assert!(out.ends_with("No URL provided\n"));
}

#[test]
fn integration_argument_skips_scheme_check() {
    let (result, out) = run_with(&["ftp://bad"], Err("unused"), "");
    assert!(matches!(
        result,
        Ok(Outcome::Generated { ref url, .. }) if url == "ftp://bad"
    ));
    assert!(out.contains("Generating QR code for: ftp://bad"));
}

#[test]
fn integration_oversized_payload_exits_one() {
    let long = format!("https://example.com/{}", "a".repeat(3000));
    let (result, _) = run_with(&[long.as_str()], Err("unused"), "");
    assert!(matches!(result, Err(QrError::Encoding(_))));
    assert_eq!(exit_code(&result), 1);
}

#[test]
fn integration_unwritable_output_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-dir").join("qr.png");
    let (result, out) = run_with(
        &["-s", "-o", path.to_str().expect("utf-8 path"), "https://example.com"],
        Err("unused"),
        "",
    );
    assert!(matches!(result, Err(QrError::Export { .. })));
    assert_eq!(exit_code(&result), 1);
    assert!(!out.contains("QR code generated successfully!"));
}
