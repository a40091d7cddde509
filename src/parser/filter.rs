use std::path::Path;

/// True for existing regular files with a (case-insensitive) `.json` extension
pub fn is_json_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
