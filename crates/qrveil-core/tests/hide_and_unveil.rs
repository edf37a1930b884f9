use qrveil_core::*;

const PASSWORD: &str = "pw123";

fn test_config() -> CipherConfig {
    CipherConfig::with_salt("integration_salt").with_rounds(64)
}

fn carrier() -> RasterBuffer {
    RasterBuffer::filled(64, 64, [200, 150, 100, 255])
}

#[test]
fn should_hide_and_unveil_a_token() {
    let secret = api::hide::prepare()
        .with_message("secret-auth-token")
        .with_password(PASSWORD)
        .with_cipher_config(test_config())
        .with_raster(carrier())
        .execute()
        .unwrap();

    let message = api::unveil::prepare()
        .from_raster(&secret)
        .using_password(PASSWORD)
        .with_cipher_config(test_config())
        .execute()
        .unwrap();

    assert_eq!(message, "secret-auth-token");
}

#[test]
fn should_embed_the_base64_blob_as_frame_payload() {
    let secret = api::hide::prepare()
        .with_message("secret-auth-token")
        .with_password(PASSWORD)
        .with_cipher_config(test_config())
        .with_raster(carrier())
        .execute()
        .unwrap();

    let blob = api::unveil_raw::prepare()
        .from_raster(&secret)
        .execute()
        .unwrap();
    let blob = String::from_utf8(blob).unwrap();

    let cipher = PasswordCipher::new(test_config());
    assert_eq!(cipher.decrypt(&blob, PASSWORD).unwrap(), "secret-auth-token");
    assert!(cipher.decrypt(&blob, "wrong").is_err());
}

#[test]
fn should_not_unveil_a_tampered_frame() {
    let mut secret = api::hide::prepare()
        .with_message("secret-auth-token")
        .with_password(PASSWORD)
        .with_cipher_config(test_config())
        .with_raster(carrier())
        .execute()
        .unwrap();

    // flip one bit deep inside the blob, the header stays intact
    let mut blob = extract(&secret, &Layout::default()).unwrap();
    blob[40] ^= 0x01;
    embed_in_place(&mut secret, &blob, &Layout::default()).unwrap();

    let result = api::unveil::prepare()
        .from_raster(&secret)
        .using_password(PASSWORD)
        .with_cipher_config(test_config())
        .execute();
    assert!(matches!(result, Err(QrveilError::DecryptionError(_))));
}

#[test]
fn should_report_frames_without_text_like_a_wrong_password() {
    let secret = embed(carrier(), &[0xff, 0xfe, 0xfd], &Layout::default()).unwrap();

    let result = api::unveil::prepare()
        .from_raster(&secret)
        .using_password(PASSWORD)
        .execute();
    match result {
        Err(e @ QrveilError::DecryptionError(CipherError::Malformed)) => {
            assert_eq!(e.to_string(), "Wrong password or corrupted data");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn should_hide_in_a_custom_layout() {
    let layout = Layout::new(StartPixel::Index(100), Channel::Red);

    let secret = api::hide::prepare()
        .with_message("over there")
        .with_password(PASSWORD)
        .with_cipher_config(test_config())
        .with_layout(layout)
        .with_raster(carrier())
        .execute()
        .unwrap();

    let result = api::unveil::prepare()
        .from_raster(&secret)
        .using_password(PASSWORD)
        .with_cipher_config(test_config())
        .with_options(CodecOptions::framed(layout))
        .execute();
    assert_eq!(result.unwrap(), "over there");
}
