use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_upload_url() {
    let cli = parse(&["upfile", "upload", "--url", "https://example.com/cam.jpg"]);
    match cli.command {
        CliCommand::Upload {
            url,
            data_base64,
            filename,
            path,
        } => {
            assert_eq!(url.as_deref(), Some("https://example.com/cam.jpg"));
            assert!(data_base64.is_none());
            assert!(filename.is_none());
            assert!(path.is_none());
        }
        _ => panic!("expected Upload"),
    }
}

#[test]
fn cli_parse_upload_inline_with_name_and_path() {
    let cli = parse(&[
        "upfile",
        "upload",
        "--data-base64",
        "aGVsbG8=",
        "--filename",
        "hello.txt",
        "--path",
        "notes",
    ]);
    match cli.command {
        CliCommand::Upload {
            data_base64,
            filename,
            path,
            ..
        } => {
            assert_eq!(data_base64.as_deref(), Some("aGVsbG8="));
            assert_eq!(filename.as_deref(), Some("hello.txt"));
            assert_eq!(path.as_deref(), Some("notes"));
        }
        _ => panic!("expected Upload"),
    }
}

#[test]
fn cli_parse_exists_local_url() {
    match parse(&["upfile", "exists", "--local-url", "/local/a.png"]).command {
        CliCommand::Exists { local_url, .. } => {
            assert_eq!(local_url.as_deref(), Some("/local/a.png"))
        }
        _ => panic!("expected Exists"),
    }
}

#[test]
fn cli_parse_call_defaults() {
    match parse(&["upfile", "call", "file_exists"]).command {
        CliCommand::Call {
            service,
            data,
            no_response,
        } => {
            assert_eq!(service, "file_exists");
            assert_eq!(data, "{}");
            assert!(!no_response);
        }
        _ => panic!("expected Call"),
    }
}

#[test]
fn cli_parse_call_no_response() {
    match parse(&["upfile", "call", "upload_file", "--data", "{\"url\":\"x\"}", "--no-response"]).command {
        CliCommand::Call { data, no_response, .. } => {
            assert_eq!(data, "{\"url\":\"x\"}");
            assert!(no_response);
        }
        _ => panic!("expected Call"),
    }
}

#[test]
fn cli_parse_global_config_dir() {
    let cli = parse(&["upfile", "services", "--config-dir", "/srv/config"]);
    assert_eq!(cli.config_dir, Some(PathBuf::from("/srv/config")));
    assert!(matches!(cli.command, CliCommand::Services));
}

#[test]
fn cli_rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["upfile"]).is_err());
}
