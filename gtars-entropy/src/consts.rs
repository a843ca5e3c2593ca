pub const FIVE_PRIME_LABEL: &str = "5p";
pub const THREE_PRIME_LABEL: &str = "3p";

pub const DELIMITER: char = '\t';
pub const FIELDS_PER_RECORD: usize = 3;

// report header
pub const NAME_COL_NAME: &str = "name";
pub const ENTROPY_5P_COL_NAME: &str = "pos_entropy5p";
pub const ENTROPY_3P_COL_NAME: &str = "pos_entropy3p";

pub const STDIN_PATH: &str = "-";
pub const GZIP_EXT: &str = "gz";
