//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    ConfigPath(PathBuf),
    DeviceId(String),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("jellyadmin-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --conf <PATH>       Path of the configuration file
    --device <ID>       Identifier of the device to open
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--conf" => match iter.next() {
                Some(a) => res.push(Arg::ConfigPath(PathBuf::from(a))),
                None => return Err("missing arg to --conf".into()),
            },
            "--device" => match iter.next() {
                Some(a) => res.push(Arg::DeviceId(a.clone())),
                None => return Err("missing arg to --device".into()),
            },
            _ => return Err(format!("unknown argument {}", arg).into()),
        }
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse() {
        assert_eq!(parse_args(args(&["jellyadmin-gui"]), "0.1.0").unwrap(), vec![]);
        assert_eq!(
            parse_args(
                args(&["jellyadmin-gui", "--device", "8c9e1f2a", "--conf", "/tmp/j.toml"]),
                "0.1.0"
            )
            .unwrap(),
            vec![
                Arg::DeviceId("8c9e1f2a".to_string()),
                Arg::ConfigPath(PathBuf::from("/tmp/j.toml")),
            ]
        );
        assert!(parse_args(args(&["jellyadmin-gui", "--device"]), "0.1.0").is_err());
        assert!(parse_args(args(&["jellyadmin-gui", "--signet"]), "0.1.0").is_err());
    }
}
