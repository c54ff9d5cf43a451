use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use svgts_options::{ConfigFile, ConversionOptions, Delimiter, RawOptions};

use crate::{
    ops,
    reports::{ConvertReport, Report, TerminalOutput},
};

#[derive(Args, Debug, Default)]
pub struct ConvertCommand {
    /// Name of the generated union type
    #[arg(short = 't', long, alias = "typeName", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Name of the generated interface
    #[arg(short = 'i', long, alias = "interfaceName", value_name = "NAME")]
    pub interface_name: Option<String>,

    /// Prefix of every generated constant
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Casing of the union type literals (camel, kebab or snake)
    #[arg(short, long, value_name = "DELIMITER")]
    pub delimiter: Option<Delimiter>,

    /// Name of the generated file, without extension
    #[arg(short, long, alias = "fileName", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Directory or glob pattern of SVG files (repeatable)
    #[arg(short, long = "src-files", alias = "srcFiles", value_name = "PATH")]
    pub src_files: Vec<String>,

    /// Directory the generated files are written to
    #[arg(short, long, alias = "outputDirectory", value_name = "DIR")]
    pub output_directory: Option<PathBuf>,

    /// Write one module per icon plus a model module and an index
    #[arg(
        long,
        alias = "optimizeForLazyLoading",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub optimize_for_lazy_loading: Option<bool>,

    /// Directory of the model module when lazy loading
    #[arg(long, alias = "modelOutputPath", value_name = "DIR")]
    pub model_output_path: Option<PathBuf>,

    /// Name of the model module when lazy loading, without extension
    #[arg(long, alias = "modelFileName", value_name = "NAME")]
    pub model_file_name: Option<String>,

    /// Read options from a TOML file; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ConvertCommand {
    /// Run the conversion.
    ///
    /// Failures are reported on the terminal; the process still exits
    /// successfully.
    pub fn run(&self) -> Result<()> {
        let report = match self.options() {
            Ok(options) => {
                tracing::debug!(?options, "resolved options");
                ops::convert(&options, self.dry_run)
            }
            Err(e) => ConvertReport::failed(e),
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Option values given as flags.
    fn raw_options(&self) -> RawOptions {
        RawOptions {
            delimiter: self.delimiter,
            type_name: self.type_name.clone(),
            interface_name: self.interface_name.clone(),
            prefix: self.prefix.clone(),
            file_name: self.file_name.clone(),
            src_files: self.src_files.clone(),
            output_directory: self.output_directory.clone(),
            optimize_for_lazy_loading: self.optimize_for_lazy_loading,
            model_output_path: self.model_output_path.clone(),
            model_file_name: self.model_file_name.clone(),
        }
    }

    /// Layer flags over the config file, then fill in defaults.
    pub fn options(&self) -> svgts_options::Result<ConversionOptions> {
        let flags = self.raw_options();
        let raw = match &self.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                flags.or(ConfigFile::open(path)?.into_options())
            }
            None => flags,
        };
        Ok(raw.resolve())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use svgts_options::{Error, OutputStrategy, defaults};
    use tempfile::TempDir;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        convert: ConvertCommand,
    }

    fn parse(args: &[&str]) -> ConvertCommand {
        let argv = std::iter::once("svg-to-ts").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().convert
    }

    #[test]
    fn test_defaults_without_flags() {
        let options = parse(&[]).options().unwrap();

        assert_eq!(options, ConversionOptions::default());
        assert_eq!(options.src_files, vec![defaults::SRC_FILES]);
        assert_eq!(options.prefix, defaults::PREFIX);
    }

    #[test]
    fn test_short_flags() {
        let cmd = parse(&[
            "-t", "Icons", "-i", "Icon", "-p", "ic", "-d", "kebab", "-f", "icons", "-s",
            "assets", "-o", "out",
        ]);

        let options = cmd.options().unwrap();
        assert_eq!(options.type_name, "Icons");
        assert_eq!(options.interface_name, "Icon");
        assert_eq!(options.prefix, "ic");
        assert_eq!(options.delimiter, Delimiter::Kebab);
        assert_eq!(options.file_name, "icons");
        assert_eq!(options.src_files, vec!["assets"]);
        assert_eq!(options.output_directory, Path::new("out"));
    }

    #[test]
    fn test_camel_case_aliases() {
        let cmd = parse(&[
            "--typeName",
            "Icons",
            "--interfaceName",
            "Icon",
            "--fileName",
            "icons",
            "--srcFiles",
            "assets",
            "--outputDirectory",
            "out",
            "--modelOutputPath",
            "models",
            "--modelFileName",
            "types",
        ]);

        assert_eq!(cmd.type_name.as_deref(), Some("Icons"));
        assert_eq!(cmd.interface_name.as_deref(), Some("Icon"));
        assert_eq!(cmd.file_name.as_deref(), Some("icons"));
        assert_eq!(cmd.src_files, vec!["assets"]);
        assert_eq!(cmd.output_directory, Some(PathBuf::from("out")));
        assert_eq!(cmd.model_output_path, Some(PathBuf::from("models")));
        assert_eq!(cmd.model_file_name.as_deref(), Some("types"));
    }

    #[test]
    fn test_src_files_accumulate() {
        let cmd = parse(&["-s", "a", "--src-files", "b", "--srcFiles", "c/*.svg"]);
        assert_eq!(cmd.src_files, vec!["a", "b", "c/*.svg"]);
    }

    #[test]
    fn test_lazy_loading_flag() {
        let bare = parse(&["--optimize-for-lazy-loading"]);
        assert_eq!(bare.optimize_for_lazy_loading, Some(true));
        assert_eq!(
            bare.options().unwrap().strategy,
            OutputStrategy::LazyLoading
        );

        let explicit = parse(&["--optimizeForLazyLoading", "false"]);
        assert_eq!(explicit.optimize_for_lazy_loading, Some(false));
        assert_eq!(
            explicit.options().unwrap().strategy,
            OutputStrategy::SingleFile
        );

        assert_eq!(parse(&[]).optimize_for_lazy_loading, None);
    }

    #[test]
    fn test_unknown_delimiter_is_rejected() {
        let result = TestCli::try_parse_from(["svg-to-ts", "-d", "pascal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("svg-to-ts.toml");
        fs::write(
            &config,
            r#"
prefix = "fromFile"
type-name = "FileIcons"
src-files = ["file-assets"]
"#,
        )
        .unwrap();
        let config_arg = config.display().to_string();

        let options = parse(&["-c", &config_arg, "-p", "fromFlag"])
            .options()
            .unwrap();

        assert_eq!(options.prefix, "fromFlag");
        assert_eq!(options.type_name, "FileIcons");
        assert_eq!(options.src_files, vec!["file-assets"]);
        assert_eq!(options.interface_name, defaults::INTERFACE_NAME);
    }

    #[test]
    fn test_flag_sources_replace_config_sources() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("svg-to-ts.toml");
        fs::write(&config, "src-files = [\"file-assets\"]\n").unwrap();
        let config_arg = config.display().to_string();

        let options = parse(&["-c", &config_arg, "-s", "flag-assets"])
            .options()
            .unwrap();

        assert_eq!(options.src_files, vec!["flag-assets"]);
    }

    #[test]
    fn test_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml").display().to_string();

        let err = parse(&["-c", &missing]).options().unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_run_succeeds_when_source_directory_is_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing").display().to_string();
        let out = temp.path().join("dist");
        let out_arg = out.display().to_string();

        let result = parse(&["-s", &missing, "-o", &out_arg]).run();

        assert!(result.is_ok());
        assert!(!out.exists());
    }

    #[test]
    fn test_run_succeeds_when_config_file_is_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml").display().to_string();
        let out = temp.path().join("dist");
        let out_arg = out.display().to_string();

        let result = parse(&["-c", &missing, "-o", &out_arg]).run();

        assert!(result.is_ok());
        assert!(!out.exists());
    }

    #[test]
    fn test_run_succeeds_when_config_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("svg-to-ts.toml");
        fs::write(&config, "delimiter = \"dot\"\n").unwrap();
        let config_arg = config.display().to_string();
        let out = temp.path().join("dist");
        let out_arg = out.display().to_string();

        let result = parse(&["-c", &config_arg, "-o", &out_arg]).run();

        assert!(result.is_ok());
        assert!(!out.exists());
    }

    #[test]
    fn test_run_writes_output() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("assets");
        fs::create_dir(&src).unwrap();
        fs::write(
            src.join("home.svg"),
            r#"<svg viewBox="0 0 24 24"><path d="M0 0h24"/></svg>"#,
        )
        .unwrap();
        let src_arg = src.display().to_string();
        let out = temp.path().join("dist");
        let out_arg = out.display().to_string();

        let result = parse(&["-s", &src_arg, "-o", &out_arg, "-f", "icons"]).run();

        assert!(result.is_ok());
        assert!(out.join("icons.ts").exists());
    }
}
