pub mod defaults;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use noetbl::core::forcefield::intensity::IntensityTable;
use noetbl::engine::config::{GenerationConfig, GenerationConfigBuilder};
use noetbl::engine::error::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGenerationSection {
    #[serde(rename = "one-atom-max-limit")]
    one_atom_max_limit: Option<usize>,
    #[serde(rename = "intensity-table")]
    intensity_table: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputSection {
    directory: Option<PathBuf>,
    #[serde(rename = "file-name")]
    file_name: Option<String>,
    #[serde(rename = "max-files")]
    max_files: Option<u64>,
}

/// Configuration as read from a TOML file; every field may be absent.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialGenerateConfig {
    generation: Option<PartialGenerationSection>,
    output: Option<PartialOutputSection>,
}

/// Fully merged settings for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub generation: GenerationConfig,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub max_files: Option<u64>,
}

impl PartialGenerateConfig {
    /// A relative `intensity-table` path is taken relative to the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let (Some(base), Some(generation)) = (path.parent(), config.generation.as_mut()) {
            if let Some(table) = generation.intensity_table.as_mut() {
                if table.is_relative() {
                    *table = base.join(&*table);
                }
            }
        }
        Ok(config)
    }

    /// Precedence: explicit flags, then `--set` values, then the file, then defaults.
    pub fn merge_with_cli(mut self, args: &GenerateArgs) -> Result<GenerateSettings> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let generation = self.generation.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let intensities = match args
            .intensity_table
            .clone()
            .or(generation.intensity_table)
        {
            Some(path) => {
                info!("Loading intensity table from {:?}", path);
                IntensityTable::load(&path).map_err(|e| CliError::FileParsing {
                    path: path.clone(),
                    source: e.into(),
                })?
            }
            None => IntensityTable::default(),
        };

        let one_atom_max_limit = args
            .one_atom_max_limit
            .or(generation.one_atom_max_limit)
            .unwrap_or(defaults.one_atom_max_limit);

        let generation = GenerationConfigBuilder::new()
            .one_atom_max_limit(one_atom_max_limit)
            .intensities(intensities)
            .build()
            .map_err(EngineError::from)?;

        let file_name = args
            .file_name
            .clone()
            .or(output.file_name)
            .unwrap_or(defaults.file_name);
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(CliError::Config(format!(
                "`output.file-name` must be a bare file name, got '{}'",
                file_name
            )));
        }

        Ok(GenerateSettings {
            generation,
            output_dir: args
                .output_dir
                .clone()
                .or(output.directory)
                .unwrap_or(defaults.output_dir),
            file_name,
            max_files: args.max_files.or(output.max_files).or(defaults.max_files),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let invalid_integer = || {
                CliError::Config(format!(
                    "Invalid integer value for {}: {}",
                    key, value_str
                ))
            };

            match key {
                "generation.one-atom-max-limit" => {
                    self.generation
                        .get_or_insert_with(Default::default)
                        .one_atom_max_limit = Some(value_str.parse().map_err(|_| invalid_integer())?);
                }
                "generation.intensity-table" => {
                    self.generation
                        .get_or_insert_with(Default::default)
                        .intensity_table = Some(PathBuf::from(value_str));
                }
                "output.directory" => {
                    self.output.get_or_insert_with(Default::default).directory =
                        Some(PathBuf::from(value_str));
                }
                "output.file-name" => {
                    self.output.get_or_insert_with(Default::default).file_name =
                        Some(value_str.to_string());
                }
                "output.max-files" => {
                    self.output.get_or_insert_with(Default::default).max_files =
                        Some(value_str.parse().map_err(|_| invalid_integer())?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use noetbl::core::models::entry::Intensity;
    use noetbl::engine::config::ConfigError;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn generate_args(extra: &[&str]) -> GenerateArgs {
        let mut argv = vec!["noetbl", "generate", "-s", "seq.txt", "-a", "noe.csv"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Generate(args) => args,
            _ => panic!("Expected 'generate' subcommand"),
        }
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("noetbl.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let settings = PartialGenerateConfig::default()
            .merge_with_cli(&generate_args(&[]))
            .unwrap();

        assert_eq!(settings.generation.one_atom_max_limit, 1);
        assert_eq!(settings.generation.intensities, IntensityTable::default());
        assert_eq!(settings.output_dir, PathBuf::from("tblfiles"));
        assert_eq!(settings.file_name, "protein.tbl");
        assert_eq!(settings.max_files, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [generation]
            one-atom-max-limit = 10

            [output]
            directory = "restraints"
            file-name = "noe.tbl"
            max-files = 500
            "#,
        );

        let settings = PartialGenerateConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&generate_args(&[]))
            .unwrap();

        assert_eq!(settings.generation.one_atom_max_limit, 10);
        assert_eq!(settings.output_dir, PathBuf::from("restraints"));
        assert_eq!(settings.file_name, "noe.tbl");
        assert_eq!(settings.max_files, Some(500));
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [generation]
            one-atom-max-limit = 10 # Will be overridden

            [output]
            file-name = "from-file.tbl"
            "#,
        );

        let args = generate_args(&[
            "-m",
            "3",
            "-S",
            "generation.one-atom-max-limit=7",
            "-S",
            "output.file-name=from-set.tbl",
            "-o",
            "out",
        ]);
        let settings = PartialGenerateConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(settings.generation.one_atom_max_limit, 3);
        assert_eq!(settings.file_name, "from-set.tbl");
        assert_eq!(settings.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn intensity_table_path_is_relative_to_config_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("table.toml"),
            r#"
            [s]
            distance = 2.0
            lower-delta = 0.5
            upper-delta = 0.5
            [m]
            distance = 3.0
            lower-delta = 1.0
            upper-delta = 1.0
            [w]
            distance = 5.0
            lower-delta = 2.0
            upper-delta = 1.5
            "#,
        )
        .unwrap();
        let path = write_config(
            &dir,
            r#"
            [generation]
            intensity-table = "table.toml"
            "#,
        );

        let settings = PartialGenerateConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&generate_args(&[]))
            .unwrap();

        let weak = settings.generation.intensities.bounds(Intensity::Weak);
        assert_eq!(weak.distance, 5.0);
        assert_eq!(weak.upper_delta, 1.5);
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[generation]\nbudget = 3\n");

        let result = PartialGenerateConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let result =
            PartialGenerateConfig::default().merge_with_cli(&generate_args(&["-m", "0"]));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Config(ConfigError::InvalidLimit(0))))
        ));
    }

    #[test]
    fn file_name_with_separator_is_rejected() {
        let result = PartialGenerateConfig::default()
            .merge_with_cli(&generate_args(&["-n", "nested/protein.tbl"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["output.max-files", "output.max-files=many", "search.depth=2"] {
            let result =
                PartialGenerateConfig::default().merge_with_cli(&generate_args(&["-S", bad]));
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn missing_intensity_table_is_reported_with_its_path() {
        let result = PartialGenerateConfig::default()
            .merge_with_cli(&generate_args(&["--intensity-table", "does-not-exist.toml"]));
        match result {
            Err(CliError::FileParsing { path, .. }) => {
                assert_eq!(path, PathBuf::from("does-not-exist.toml"))
            }
            other => panic!("Expected FileParsing error, got {:?}", other),
        }
    }
}
