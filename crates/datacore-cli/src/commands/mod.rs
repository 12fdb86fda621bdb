//! CLI command implementations.

pub mod nlp;
pub mod process;
pub mod report;
pub mod serve;

use std::io::Read;

use datacore::input::canonicalize;
use datacore::{DataCoreError, Input, Processor, ProcessorConfig};

use crate::cli::{InputArgs, ProcessorArgs};

/// Resolve the input from the text argument, a file, or stdin.
pub fn read_input(args: &InputArgs) -> Result<Input, Box<dyn std::error::Error>> {
    if let (Some(path), false) = (&args.file, args.json) {
        return Ok(Input::from_file(path)?);
    }

    let raw = read_raw(args)?;
    if args.json {
        Ok(Input::from_json_str(&raw)?)
    } else {
        Ok(Input::Text(raw))
    }
}

/// [`read_input`] reduced to canonical text, so `--json` input is decoded
/// the same way the processor would see it.
pub fn read_text(args: &InputArgs) -> Result<String, Box<dyn std::error::Error>> {
    Ok(canonicalize(&read_input(args)?))
}

fn read_raw(args: &InputArgs) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = args.file {
        let text = std::fs::read_to_string(path).map_err(|source| DataCoreError::Io {
            path: path.clone(),
            source,
        })?;
        return Ok(text);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Build a processor from an optional config file plus flag overrides.
pub fn build_processor(args: &ProcessorArgs) -> Result<Processor, Box<dyn std::error::Error>> {
    Ok(Processor::with_config(resolve_config(args)?))
}

fn resolve_config(args: &ProcessorArgs) -> Result<ProcessorConfig, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(ref path) => ProcessorConfig::load(path)?,
        None => ProcessorConfig::default(),
    };

    if let Some(threshold) = args.large_threshold {
        config.large_input_threshold = threshold;
    }
    if let Some(top_words) = args.top_words {
        config.top_words = top_words;
    }
    if args.no_timestamp {
        config.include_timestamp = false;
    }

    config.validate()?;
    Ok(config)
}

/// Serialize a JSON value for stdout.
pub fn render<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_input_from_text() {
        let args = InputArgs {
            text: Some("hello".to_string()),
            ..InputArgs::default()
        };
        assert_eq!(read_input(&args).unwrap(), Input::Text("hello".to_string()));
    }

    #[test]
    fn test_read_json_input_from_file() {
        let file = create_test_file(r#"{"a": [1, 2]}"#);
        let args = InputArgs {
            file: Some(file.path().to_path_buf()),
            json: true,
            ..InputArgs::default()
        };
        assert!(read_input(&args).unwrap().is_container());
    }

    #[test]
    fn test_invalid_json_input_is_an_error() {
        let args = InputArgs {
            text: Some("{oops".to_string()),
            json: true,
            ..InputArgs::default()
        };
        assert!(read_input(&args).is_err());
    }

    #[test]
    fn test_read_text_decodes_json() {
        let args = InputArgs {
            text: Some(r#""hola mundo""#.to_string()),
            json: true,
            ..InputArgs::default()
        };
        assert_eq!(read_text(&args).unwrap(), "hola mundo");

        let plain = InputArgs {
            text: Some(r#""hola mundo""#.to_string()),
            ..InputArgs::default()
        };
        assert_eq!(read_text(&plain).unwrap(), r#""hola mundo""#);
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = create_test_file(r#"{"top_words": 3, "large_input_threshold": 50}"#);
        let args = ProcessorArgs {
            config: Some(file.path().to_path_buf()),
            top_words: Some(7),
            no_timestamp: true,
            ..ProcessorArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.top_words, 7);
        assert_eq!(config.large_input_threshold, 50);
        assert!(!config.include_timestamp);
    }

    #[test]
    fn test_zero_top_words_rejected() {
        let args = ProcessorArgs {
            top_words: Some(0),
            ..ProcessorArgs::default()
        };
        assert!(build_processor(&args).is_err());
    }
}
