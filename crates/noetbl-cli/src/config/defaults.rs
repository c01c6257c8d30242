use noetbl::engine::config::DEFAULT_ONE_ATOM_MAX_LIMIT;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub one_atom_max_limit: usize,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub max_files: Option<u64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            one_atom_max_limit: DEFAULT_ONE_ATOM_MAX_LIMIT,
            output_dir: PathBuf::from("tblfiles"),
            file_name: "protein.tbl".to_string(),
            max_files: None,
        }
    }
}
